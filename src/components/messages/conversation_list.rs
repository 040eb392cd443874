//! Conversation list sidebar component.
//!
//! Shows the viewer's own name and avatar, a chat count, then one entry per
//! conversation in the order the previews arrive (oldest last message first).

use chatpane_core::{relative_time, ConversationId, ConversationPreview, Profile, Selection};
use dioxus::prelude::*;

/// Props for the ConversationList component.
#[derive(Props, Clone, PartialEq)]
pub struct ConversationListProps {
    /// Resolved list entries, already ordered
    pub previews: Vec<ConversationPreview>,
    /// Which conversation is open; its entry gets the `selected` class
    pub selection: Selection,
    /// Local viewer shown at the top of the list
    pub me: Profile,
    /// Reference time for the "5 minutes ago" labels (Unix ms)
    pub now: i64,
    /// Handler called when a conversation is selected
    pub on_select: EventHandler<ConversationId>,
}

/// Conversation list sidebar.
///
/// # Example
///
/// ```ignore
/// ConversationList {
///     previews: previews,
///     selection: selection(),
///     me: profile,
///     now: chrono::Utc::now().timestamp_millis(),
///     on_select: move |id| selection.write().select(id),
/// }
/// ```
#[component]
pub fn ConversationList(props: ConversationListProps) -> Element {
    let count_label = chat_count_label(props.previews.len());

    rsx! {
        aside { class: "conversation-sidebar",
            div { class: "self-panel",
                img { class: "self-avatar", src: "{props.me.avatar}", alt: "{props.me.name}" }
                b { class: "self-name", "{props.me.name}" }
            }
            div { class: "chat-count", "{count_label}" }

            div { class: "conversation-list",
                for preview in props.previews.iter() {
                    {
                        let id = preview.conversation.id.clone();
                        let is_selected = props.selection.is_selected(&id);
                        let on_select = props.on_select; // Callback is Copy

                        rsx! {
                            ConversationItem {
                                key: "{id}",
                                preview: preview.clone(),
                                is_selected: is_selected,
                                now: props.now,
                                on_click: move |_| on_select.call(id.clone()),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Props for a single entry in the list.
#[derive(Props, Clone, PartialEq)]
struct ConversationItemProps {
    /// Counterpart and last message to show
    preview: ConversationPreview,
    /// Whether this conversation is currently open
    is_selected: bool,
    /// Reference time for the relative label
    now: i64,
    /// Handler for click events
    on_click: EventHandler<()>,
}

/// A single conversation entry.
#[component]
fn ConversationItem(props: ConversationItemProps) -> Element {
    let preview = &props.preview;
    let on_click = props.on_click;
    let when = relative_time(preview.last_message.timestamp, props.now);

    rsx! {
        div {
            class: "{item_class(props.is_selected)}",
            onclick: move |_| on_click.call(()),
            img { class: "conversation-avatar", src: "{preview.counterpart.avatar}", alt: "" }
            b { class: "user-name", "{preview.counterpart.name}" }
            span { class: "{presence_class(preview.conversation.is_active)}",
                " {presence_label(preview.conversation.is_active)}"
            }
            div { class: "conversation-last-message", "{preview.last_message.content}" }
            div { class: "conversation-time", "{when}" }
        }
    }
}

fn item_class(is_selected: bool) -> &'static str {
    if is_selected {
        "conversation-item selected"
    } else {
        "conversation-item"
    }
}

fn presence_label(is_active: bool) -> &'static str {
    if is_active {
        "on"
    } else {
        "off"
    }
}

fn presence_class(is_active: bool) -> &'static str {
    if is_active {
        "presence presence-on"
    } else {
        "presence presence-off"
    }
}

fn chat_count_label(count: usize) -> String {
    if count == 1 {
        "1 chat".to_string()
    } else {
        format!("{} chats", count)
    }
}
