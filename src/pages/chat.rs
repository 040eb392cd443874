//! Chat page - the two-pane main view.
//!
//! Owns the selection; everything else is read from the sample data context.

use chatpane_core::{conversation_previews, resolve_thread, ChatError, ConversationId, Selection};
use dioxus::prelude::*;

use crate::components::{ConversationList, ConversationThread};
use crate::context::{use_profile, use_snapshot};

/// Main application view component.
#[component]
pub fn ChatPage() -> Element {
    let snapshot = use_snapshot();
    let me = use_profile();

    // Defaults to the first conversation in supplied order
    let initial = Selection::first_of(&snapshot);
    let mut selection: Signal<Selection> = use_signal(move || initial);

    let select_conversation = move |id: ConversationId| {
        selection.write().select(id);
    };

    let now = chrono::Utc::now().timestamp_millis();
    let current = selection.read().current().cloned();

    let previews = match conversation_previews(&snapshot) {
        Ok(previews) => previews,
        Err(e) => return render_error(e),
    };

    let thread = match current.as_ref().map(|id| resolve_thread(&snapshot, id)) {
        Some(Ok(thread)) => Some(thread),
        Some(Err(e)) => return render_error(e),
        None => None,
    };

    rsx! {
        div { class: "chat-page",
            header { class: "chat-page-header",
                h1 { class: "page-title", "The Revolutionary Chat App" }
            }

            div { class: "chat-panes",
                ConversationList {
                    previews: previews,
                    selection: selection.read().clone(),
                    me: me.clone(),
                    now: now,
                    on_select: select_conversation,
                }

                if let Some(thread) = thread {
                    ConversationThread { thread: thread, me: me }
                } else {
                    section { class: "conversation-thread",
                        div { class: "thread-empty",
                            p { "No conversations yet" }
                        }
                    }
                }
            }
        }
    }
}

fn render_error(error: ChatError) -> Element {
    tracing::warn!(error = %error, "Failed to resolve conversation data");

    rsx! {
        div { class: "chat-page",
            div { class: "error-notice", "Could not load conversations: {error}" }
        }
    }
}
