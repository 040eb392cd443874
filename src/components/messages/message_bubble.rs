//! Message Bubble Component
//!
//! Chat-style message bubbles, right-aligned for our own messages and
//! left-aligned for the counterpart's.

use chatpane_core::Message;
use dioxus::prelude::*;

/// Row class; decides left or right alignment
fn row_class(written_by_me: bool) -> &'static str {
    if written_by_me {
        "message-row message-row-sent"
    } else {
        "message-row message-row-received"
    }
}

/// Bubble class; sent bubbles get the tinted background and put the avatar on the right
fn bubble_class(written_by_me: bool) -> &'static str {
    if written_by_me {
        "message-bubble message-bubble-sent"
    } else {
        "message-bubble message-bubble-received"
    }
}

/// Individual message bubble component
#[component]
pub fn MessageBubble(
    /// Message to show
    message: Message,
    /// Avatar next to the bubble
    avatar: String,
) -> Element {
    rsx! {
        div { class: "{row_class(message.written_by_me)}",
            div { class: "{bubble_class(message.written_by_me)}",
                img { class: "message-bubble-avatar", src: "{avatar}", alt: "" }
                div { class: "message-bubble-content", "{message.content}" }
            }
        }
    }
}
