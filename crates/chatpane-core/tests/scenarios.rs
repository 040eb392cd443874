//! End-to-end scenarios for the list and thread panes
//!
//! These drive the same calls the UI makes: build a snapshot, pick the
//! default selection, resolve previews and the open thread.

use chatpane_core::{
    conversation_previews, relative_time, resolve_thread, Conversation, ConversationId, Message, Profile,
    Selection, Snapshot, User, SELF_AVATAR,
};

// ============================================================================
// Fixtures
// ============================================================================

/// One counterpart U2, one conversation C1 with M1 (by U2, t=1) and M2 (self, t=2)
fn single_conversation() -> Snapshot {
    Snapshot::new(
        vec![User::new("U2", "Bob", "https://example.com/bob.png")],
        vec![Conversation::new("C1", "U2", "M2", true)],
        vec![
            Message::new("M2", "C1", 2, "hi Bob", true),
            Message::new("M1", "C1", 1, "hello", false),
        ],
    )
    .expect("valid snapshot")
}

/// C2 is supplied first but its last message is newer than C1's
fn two_conversations() -> Snapshot {
    Snapshot::new(
        vec![
            User::new("U2", "Bob", "https://example.com/bob.png"),
            User::new("U3", "Carol", "https://example.com/carol.png"),
        ],
        vec![
            Conversation::new("C2", "U3", "M10", false),
            Conversation::new("C1", "U2", "M5", true),
        ],
        vec![
            Message::new("M5", "C1", 5, "five", false),
            Message::new("M3", "C1", 3, "three", true),
            Message::new("M10", "C2", 10, "ten", true),
            Message::new("M7", "C2", 7, "seven", false),
        ],
    )
    .expect("valid snapshot")
}

// ============================================================================
// Thread
// ============================================================================

#[test]
fn test_thread_renders_counterpart_then_self() {
    let snapshot = single_conversation();
    let me = Profile::default();
    let thread = resolve_thread(&snapshot, &ConversationId::from("C1")).unwrap();

    assert_eq!(thread.counterpart.name, "Bob");
    assert_eq!(thread.len(), 2);

    let first = &thread.messages[0];
    assert_eq!(first.id.as_str(), "M1");
    assert!(!first.written_by_me, "M1 should be left-aligned");
    assert_eq!(thread.avatar_for(first, &me), "https://example.com/bob.png");

    let second = &thread.messages[1];
    assert_eq!(second.id.as_str(), "M2");
    assert!(second.written_by_me, "M2 should be right-aligned");
    assert_eq!(thread.avatar_for(second, &me), SELF_AVATAR);
}

#[test]
fn test_thread_contains_only_its_messages() {
    let snapshot = two_conversations();
    let thread = resolve_thread(&snapshot, &ConversationId::from("C2")).unwrap();

    assert!(thread
        .messages
        .iter()
        .all(|m| m.conversation_id.as_str() == "C2"));
    let ids: Vec<_> = thread.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["M7", "M10"]);
}

// ============================================================================
// List
// ============================================================================

#[test]
fn test_list_orders_by_last_message_ascending() {
    let previews = conversation_previews(&two_conversations()).unwrap();

    let order: Vec<_> = previews.iter().map(|p| p.conversation.id.as_str()).collect();
    assert_eq!(order, ["C1", "C2"]);
    assert_eq!(previews[0].last_message.timestamp, 5);
    assert_eq!(previews[1].last_message.timestamp, 10);
}

#[test]
fn test_extreme_timestamps_label_without_panicking() {
    let snapshot = Snapshot::new(
        vec![User::new("U2", "Bob", "https://example.com/bob.png")],
        vec![Conversation::new("C1", "U2", "M2", true)],
        vec![
            Message::new("M1", "C1", i64::MIN, "ancient", false),
            Message::new("M2", "C1", i64::MAX, "far future", true),
        ],
    )
    .expect("extreme timestamps are still valid");

    let previews = conversation_previews(&snapshot).unwrap();
    let now = 1_700_000_000_000;
    assert!(relative_time(previews[0].last_message.timestamp, now).starts_with("in "));

    let thread = resolve_thread(&snapshot, &ConversationId::from("C1")).unwrap();
    assert_eq!(thread.messages[0].id.as_str(), "M1");
    assert!(relative_time(thread.messages[0].timestamp, now).ends_with("years ago"));
}

#[test]
fn test_every_preview_resolves() {
    let snapshot = two_conversations();
    let previews = conversation_previews(&snapshot).unwrap();

    assert_eq!(previews.len(), snapshot.conversations().len());
    for preview in &previews {
        assert_eq!(preview.counterpart.id, preview.conversation.with_user);
        assert_eq!(preview.last_message.conversation_id, preview.conversation.id);
    }
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_default_selection_is_first_supplied_not_first_listed() {
    let snapshot = two_conversations();
    let selection = Selection::first_of(&snapshot);

    // C2 is first in the supplied sequence even though the list shows C1 first
    assert_eq!(selection.current().map(|id| id.as_str()), Some("C2"));
}

#[test]
fn test_selecting_switches_thread_and_marker() {
    let snapshot = two_conversations();
    let mut selection = Selection::first_of(&snapshot);

    selection.select(ConversationId::from("C1"));

    let previews = conversation_previews(&snapshot).unwrap();
    let selected: Vec<_> = previews
        .iter()
        .filter(|p| selection.is_selected(&p.conversation.id))
        .map(|p| p.conversation.id.as_str())
        .collect();
    assert_eq!(selected, ["C1"]);

    let current = selection.current().expect("something selected");
    let thread = resolve_thread(&snapshot, current).unwrap();
    let ids: Vec<_> = thread.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["M3", "M5"]);
}
