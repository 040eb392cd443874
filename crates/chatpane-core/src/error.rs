//! Error types for Chatpane

use thiserror::Error;

use crate::types::{ConversationId, MessageId, UserId};

/// Main error type for Chatpane operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// A conversation points at a user that is not in the snapshot
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// A message or selection points at a conversation that is not in the snapshot
    #[error("Conversation not found: {0}")]
    ConversationNotFound(ConversationId),

    /// A conversation's last message is not in the snapshot
    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    /// A conversation's last message belongs to a different conversation
    #[error("Last message {message} of conversation {conversation} belongs to another conversation")]
    ForeignLastMessage {
        conversation: ConversationId,
        message: MessageId,
    },

    /// The same identifier appears twice in one collection
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// Sample data configuration cannot produce a usable snapshot
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using ChatError
pub type ChatResult<T> = Result<T, ChatError>;
