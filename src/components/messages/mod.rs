//! Messaging components: conversation list, thread pane, bubbles

mod conversation_list;
mod conversation_thread;
mod message_bubble;

pub use conversation_list::ConversationList;
pub use conversation_thread::ConversationThread;
