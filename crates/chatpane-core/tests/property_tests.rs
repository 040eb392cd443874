//! Property-based tests for snapshot resolution
//!
//! Uses proptest to check ordering and resolution invariants over generated
//! and arbitrary snapshots.

use proptest::prelude::*;
use chatpane_core::{
    conversation_previews, generate_snapshot, resolve_thread, Conversation, Message,
    SampleConfig, Selection, Snapshot, User,
};

const NOW: i64 = 1_700_000_000_000;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Sample sizes small enough to keep each case fast
fn sample_config_strategy() -> impl Strategy<Value = SampleConfig> {
    (any::<u64>(), 1..12usize, 1..20usize).prop_map(|(seed, users, max_messages)| SampleConfig {
        seed,
        users,
        max_messages,
    })
}

/// A well-formed snapshot built from per-conversation timestamp lists
///
/// Each inner vec is one conversation's message timestamps; the newest one
/// becomes the last message.
fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    prop::collection::vec(
        (prop::collection::vec(0i64..1_000, 1..8), any::<bool>()),
        0..6,
    )
    .prop_map(|threads| {
        let users = vec![User::new("u-1", "Bob", "bob.png")];
        let mut conversations = Vec::new();
        let mut messages = Vec::new();

        for (i, (timestamps, is_active)) in threads.into_iter().enumerate() {
            let conversation_id = format!("c-{}", i);
            let mut newest: Option<(i64, String)> = None;

            for (j, ts) in timestamps.into_iter().enumerate() {
                let message_id = format!("m-{}-{}", i, j);
                if newest.as_ref().map_or(true, |(best, _)| ts >= *best) {
                    newest = Some((ts, message_id.clone()));
                }
                messages.push(Message::new(
                    message_id,
                    conversation_id.as_str(),
                    ts,
                    "text",
                    j % 2 == 0,
                ));
            }

            let (_, last) = newest.expect("at least one message per conversation");
            conversations.push(Conversation::new(conversation_id, "u-1", last, is_active));
        }

        Snapshot::new(users, conversations, messages).expect("well-formed snapshot")
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any seed and size produces a snapshot that passes validation
    #[test]
    fn generated_snapshot_always_validates(config in sample_config_strategy()) {
        let snapshot = generate_snapshot(&config, NOW);
        prop_assert!(snapshot.is_ok(), "{:?}", snapshot.as_ref().err());
        let snapshot = snapshot.unwrap();
        prop_assert_eq!(snapshot.conversations().len(), config.users);
    }

    /// Every conversation resolves to a counterpart and a last message
    #[test]
    fn previews_resolve_for_every_conversation(snapshot in snapshot_strategy()) {
        let previews = conversation_previews(&snapshot).unwrap();
        prop_assert_eq!(previews.len(), snapshot.conversations().len());
        for preview in &previews {
            prop_assert_eq!(&preview.counterpart.id, &preview.conversation.with_user);
            prop_assert_eq!(&preview.last_message.id, &preview.conversation.last_message);
        }
    }

    /// List order is non-decreasing by last-message timestamp
    #[test]
    fn previews_non_decreasing(snapshot in snapshot_strategy()) {
        let previews = conversation_previews(&snapshot).unwrap();
        for pair in previews.windows(2) {
            prop_assert!(pair[0].last_message.timestamp <= pair[1].last_message.timestamp);
        }
    }

    /// Thread order is non-decreasing and holds exactly the conversation's messages
    #[test]
    fn thread_sorted_and_complete(snapshot in snapshot_strategy()) {
        for conversation in snapshot.conversations() {
            let thread = resolve_thread(&snapshot, &conversation.id).unwrap();

            for pair in thread.messages.windows(2) {
                prop_assert!(pair[0].timestamp <= pair[1].timestamp);
            }

            let expected = snapshot
                .messages()
                .iter()
                .filter(|m| m.conversation_id == conversation.id)
                .count();
            prop_assert_eq!(thread.len(), expected);
            prop_assert!(thread.messages.iter().all(|m| m.conversation_id == conversation.id));
        }
    }

    /// After selecting any conversation, exactly one list entry is selected
    #[test]
    fn selection_marks_exactly_one(snapshot in snapshot_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!snapshot.conversations().is_empty());

        let target = snapshot.conversations()[pick.index(snapshot.conversations().len())].id.clone();
        let mut selection = Selection::first_of(&snapshot);
        selection.select(target.clone());

        let previews = conversation_previews(&snapshot).unwrap();
        let marked = previews.iter().filter(|p| selection.is_selected(&p.conversation.id)).count();
        prop_assert_eq!(marked, 1);
        prop_assert_eq!(selection.current(), Some(&target));
    }
}
