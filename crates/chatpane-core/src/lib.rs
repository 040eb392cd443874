//! Chatpane Core Library
//!
//! Data model and view logic behind the two-pane chat mockup.
//!
//! ## Overview
//!
//! The app renders a conversation list and a message thread from three flat
//! in-memory collections: users, conversations and messages. This crate
//! owns those collections, checks that their cross references resolve, and
//! turns them into ready-to-render view structs.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chatpane_core::{conversation_previews, generate_snapshot, resolve_thread, SampleConfig, Selection};
//!
//! let snapshot = generate_snapshot(&SampleConfig::default(), now_ms)?;
//! let selection = Selection::first_of(&snapshot);
//!
//! for preview in conversation_previews(&snapshot)? {
//!     println!("{}: {}", preview.counterpart.name, preview.last_message.content);
//! }
//!
//! if let Some(id) = selection.current() {
//!     let thread = resolve_thread(&snapshot, id)?;
//!     println!("{} messages with {}", thread.len(), thread.counterpart.name);
//! }
//! ```

pub mod error;
pub mod sample;
pub mod selection;
pub mod snapshot;
pub mod thread;
pub mod time;
pub mod types;

// Re-exports
pub use error::{ChatError, ChatResult};
pub use sample::{generate_conversations, generate_snapshot, generate_users, SampleConfig};
pub use selection::Selection;
pub use snapshot::Snapshot;
pub use thread::{conversation_previews, resolve_thread, ConversationPreview, Thread};
pub use time::relative_time;
pub use types::*;
