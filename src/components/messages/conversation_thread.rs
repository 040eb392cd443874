//! Conversation Thread Component
//!
//! Right-hand pane: counterpart header above the conversation's messages,
//! oldest first.

use chatpane_core::{Profile, Thread};
use dioxus::prelude::*;

use super::message_bubble::MessageBubble;

/// Thread view for the selected conversation
#[component]
pub fn ConversationThread(
    /// Resolved conversation (messages already sorted)
    thread: Thread,
    /// Local viewer, for the avatar on our own messages
    me: Profile,
) -> Element {
    let counterpart = &thread.counterpart;

    rsx! {
        section { class: "conversation-thread",
            header { class: "thread-header",
                img { class: "thread-header-avatar", src: "{counterpart.avatar}", alt: "{counterpart.name}" }
                b { class: "user-name", "{counterpart.name}" }
            }

            div { class: "thread-messages",
                if thread.is_empty() {
                    div { class: "thread-empty",
                        p { "No messages yet" }
                    }
                } else {
                    for message in thread.messages.iter() {
                        MessageBubble {
                            key: "{message.id}",
                            message: message.clone(),
                            avatar: thread.avatar_for(message, &me).to_string(),
                        }
                    }
                }
            }
        }
    }
}
