//! Page components for Chatpane.

mod chat;

pub use chat::ChatPage;
