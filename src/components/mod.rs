//! UI Components for Chatpane.

mod messages;

pub use messages::{ConversationList, ConversationThread};
