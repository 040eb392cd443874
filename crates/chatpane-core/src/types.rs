//! Core types for Chatpane
//!
//! The three flat collections the UI is rendered from. Cross references are
//! by id only; [`crate::Snapshot`] checks that every reference resolves.

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub String);

        impl $name {
            /// Create an id from any string-like value
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Unique identifier for a user
    UserId
);

string_id!(
    /// Unique identifier for a conversation
    ConversationId
);

string_id!(
    /// Unique identifier for a message
    MessageId
);

/// A person the local viewer can chat with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

/// A thread between the local viewer and one counterpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    /// Unique identifier
    pub id: ConversationId,
    /// The counterpart user
    pub with_user: UserId,
    /// Most recent message of this conversation
    pub last_message: MessageId,
    /// Whether the counterpart is currently active
    pub is_active: bool,
}

impl Conversation {
    pub fn new(
        id: impl Into<ConversationId>,
        with_user: impl Into<UserId>,
        last_message: impl Into<MessageId>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            with_user: with_user.into(),
            last_message: last_message.into(),
            is_active,
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Unique identifier
    pub id: MessageId,
    /// Owning conversation
    pub conversation_id: ConversationId,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Message text
    pub content: String,
    /// Whether the local viewer wrote this message
    pub written_by_me: bool,
}

impl Message {
    pub fn new(
        id: impl Into<MessageId>,
        conversation_id: impl Into<ConversationId>,
        timestamp: i64,
        content: impl Into<String>,
        written_by_me: bool,
    ) -> Self {
        Self {
            id: id.into(),
            conversation_id: conversation_id.into(),
            timestamp,
            content: content.into(),
            written_by_me,
        }
    }
}

/// The local viewer, shown above the conversation list and used as the
/// avatar for self-authored messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
}

/// Avatar used for every self-authored message
pub const SELF_AVATAR: &str = "https://i.imgur.com/IEHLKgL.png";

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Andréas Blin".to_string(),
            avatar: SELF_AVATAR.to_string(),
        }
    }
}
