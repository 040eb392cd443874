//! Conversation resolution shared by the list and the thread pane.
//!
//! Both panes need the same lookups: a conversation's counterpart, its
//! messages in order, and its last message. They are resolved here once,
//! against a validated [`Snapshot`], into owned view structs that UI
//! components can take as props.
//!
//! Ordering is oldest first everywhere: thread messages by their own
//! timestamp, list previews by their last message's timestamp. Sorts are
//! stable, so equal timestamps keep snapshot order.

use crate::error::ChatResult;
use crate::snapshot::Snapshot;
use crate::types::{Conversation, ConversationId, Message, Profile, User};

/// Everything needed to render one open conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    /// The conversation being shown
    pub conversation: Conversation,
    /// The counterpart user (header name and avatar)
    pub counterpart: User,
    /// Messages of this conversation, oldest first
    pub messages: Vec<Message>,
}

impl Thread {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Avatar shown next to `message`: the viewer's own for self-authored
    /// messages, the counterpart's otherwise.
    pub fn avatar_for<'a>(&'a self, message: &Message, me: &'a Profile) -> &'a str {
        if message.written_by_me {
            &me.avatar
        } else {
            &self.counterpart.avatar
        }
    }
}

/// One entry of the conversation list.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationPreview {
    /// The conversation this entry opens
    pub conversation: Conversation,
    /// The counterpart user
    pub counterpart: User,
    /// The conversation's most recent message
    pub last_message: Message,
}

/// Resolve a conversation's counterpart and its messages sorted by
/// timestamp ascending.
pub fn resolve_thread(snapshot: &Snapshot, id: &ConversationId) -> ChatResult<Thread> {
    let conversation = snapshot.conversation(id)?;
    let counterpart = snapshot.user(&conversation.with_user)?;

    let mut messages: Vec<Message> = snapshot
        .messages()
        .iter()
        .filter(|m| m.conversation_id == *id)
        .cloned()
        .collect();
    messages.sort_by_key(|m| m.timestamp);

    Ok(Thread {
        conversation: conversation.clone(),
        counterpart: counterpart.clone(),
        messages,
    })
}

/// Resolve every conversation into a list entry, ordered by last-message
/// timestamp ascending.
pub fn conversation_previews(snapshot: &Snapshot) -> ChatResult<Vec<ConversationPreview>> {
    let mut previews = snapshot
        .conversations()
        .iter()
        .map(|conversation| {
            Ok(ConversationPreview {
                conversation: conversation.clone(),
                counterpart: snapshot.user(&conversation.with_user)?.clone(),
                last_message: snapshot.message(&conversation.last_message)?.clone(),
            })
        })
        .collect::<ChatResult<Vec<_>>>()?;
    previews.sort_by_key(|p| p.last_message.timestamp);

    Ok(previews)
}
