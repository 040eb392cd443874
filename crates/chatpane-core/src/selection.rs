//! The one piece of mutable UI state: which conversation is open.

use crate::snapshot::Snapshot;
use crate::types::ConversationId;

/// Currently selected conversation.
///
/// Starts on the first conversation in snapshot order and only changes
/// through [`Selection::select`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<ConversationId>,
}

impl Selection {
    /// Select the first conversation of the snapshot, or nothing if it has none.
    pub fn first_of(snapshot: &Snapshot) -> Self {
        Self {
            current: snapshot.conversations().first().map(|c| c.id.clone()),
        }
    }

    /// Switch to another conversation.
    pub fn select(&mut self, id: ConversationId) {
        tracing::debug!(conversation = %id, "Conversation selected");
        self.current = Some(id);
    }

    pub fn current(&self) -> Option<&ConversationId> {
        self.current.as_ref()
    }

    pub fn is_selected(&self, id: &ConversationId) -> bool {
        self.current.as_ref() == Some(id)
    }
}
