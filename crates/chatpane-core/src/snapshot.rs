//! Validated, immutable view of users, conversations and messages.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{ChatError, ChatResult};
use crate::types::{Conversation, ConversationId, Message, MessageId, User, UserId};

/// The three collections the UI renders from, with every cross reference
/// checked once at construction.
///
/// Collections keep the order they were supplied in. The first conversation
/// is the default selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    users: Vec<User>,
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
    user_index: HashMap<UserId, usize>,
    conversation_index: HashMap<ConversationId, usize>,
    message_index: HashMap<MessageId, usize>,
}

impl Snapshot {
    /// Build a snapshot, rejecting duplicate ids and dangling references.
    pub fn new(
        users: Vec<User>,
        conversations: Vec<Conversation>,
        messages: Vec<Message>,
    ) -> ChatResult<Self> {
        let user_index = index_by(&users, |u| &u.id)?;
        let conversation_index = index_by(&conversations, |c| &c.id)?;
        let message_index = index_by(&messages, |m| &m.id)?;

        for message in &messages {
            if !conversation_index.contains_key(&message.conversation_id) {
                return Err(ChatError::ConversationNotFound(
                    message.conversation_id.clone(),
                ));
            }
        }

        for conversation in &conversations {
            if !user_index.contains_key(&conversation.with_user) {
                return Err(ChatError::UserNotFound(conversation.with_user.clone()));
            }

            let last = message_index
                .get(&conversation.last_message)
                .map(|&i| &messages[i])
                .ok_or_else(|| ChatError::MessageNotFound(conversation.last_message.clone()))?;

            if last.conversation_id != conversation.id {
                return Err(ChatError::ForeignLastMessage {
                    conversation: conversation.id.clone(),
                    message: last.id.clone(),
                });
            }
        }

        tracing::debug!(
            users = users.len(),
            conversations = conversations.len(),
            messages = messages.len(),
            "Snapshot validated"
        );

        Ok(Self {
            users,
            conversations,
            messages,
            user_index,
            conversation_index,
            message_index,
        })
    }

    /// An empty snapshot (no conversations, nothing selected).
    pub fn empty() -> Self {
        Self {
            users: Vec::new(),
            conversations: Vec::new(),
            messages: Vec::new(),
            user_index: HashMap::new(),
            conversation_index: HashMap::new(),
            message_index: HashMap::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Look up a user by id.
    pub fn user(&self, id: &UserId) -> ChatResult<&User> {
        self.user_index
            .get(id)
            .map(|&i| &self.users[i])
            .ok_or_else(|| ChatError::UserNotFound(id.clone()))
    }

    /// Look up a conversation by id.
    pub fn conversation(&self, id: &ConversationId) -> ChatResult<&Conversation> {
        self.conversation_index
            .get(id)
            .map(|&i| &self.conversations[i])
            .ok_or_else(|| ChatError::ConversationNotFound(id.clone()))
    }

    /// Look up a message by id.
    pub fn message(&self, id: &MessageId) -> ChatResult<&Message> {
        self.message_index
            .get(id)
            .map(|&i| &self.messages[i])
            .ok_or_else(|| ChatError::MessageNotFound(id.clone()))
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

fn index_by<T, K, F>(items: &[T], key: F) -> ChatResult<HashMap<K, usize>>
where
    K: Eq + Hash + Clone + std::fmt::Display,
    F: Fn(&T) -> &K,
{
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let k = key(item);
        if index.insert(k.clone(), i).is_some() {
            return Err(ChatError::DuplicateId(k.to_string()));
        }
    }
    Ok(index)
}
