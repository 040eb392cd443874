//! Sample data generators.
//!
//! The app has no backend; everything on screen comes from these generators,
//! run once at start-up with a seeded RNG so a seed always gives the same
//! sample.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::error::{ChatError, ChatResult};
use crate::snapshot::Snapshot;
use crate::types::{Conversation, ConversationId, Message, User};

const NAMES: &[&str] = &[
    "Camille Durand",
    "Hugo Martin",
    "Léa Bernard",
    "Nathan Petit",
    "Chloé Robert",
    "Lucas Richard",
    "Manon Moreau",
    "Jules Laurent",
    "Inès Simon",
    "Louis Michel",
    "Sarah Lefebvre",
    "Arthur Garcia",
];

const PHRASES: &[&str] = &[
    "Hey, how are you?",
    "Did you see the match last night?",
    "I'm running a bit late, sorry!",
    "Let's grab lunch tomorrow.",
    "Sounds good to me.",
    "Can you send me the slides?",
    "Haha, that's hilarious",
    "I'll call you later.",
    "Are we still on for Friday?",
    "Thanks a lot!",
    "No worries, take your time.",
    "What do you think about the new design?",
    "See you at the club.",
    "Just landed, talk soon.",
];

/// Oldest a generated message can be
const MAX_AGE_MS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Number of distinct avatars served by the placeholder avatar service
const AVATAR_COUNT: usize = 70;

/// Sizes and seed for the generated sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    /// RNG seed
    pub seed: u64,
    /// Number of counterpart users; each gets one conversation
    pub users: usize,
    /// Upper bound on messages per conversation (at least one is generated)
    pub max_messages: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            users: 8,
            max_messages: 12,
        }
    }
}

impl SampleConfig {
    /// Reject sizes that cannot produce a conversation with a last message.
    pub fn validate(&self) -> ChatResult<()> {
        if self.users == 0 {
            return Err(ChatError::InvalidConfig("users must be at least 1".into()));
        }
        if self.max_messages == 0 {
            return Err(ChatError::InvalidConfig(
                "max_messages must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// RNG seeded from this config.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

/// Generate the counterpart users.
///
/// Names are drawn from a shuffled pool without repeats. Once the pool runs
/// out it is reused with a round suffix ("Hugo Martin 2"), so names stay distinct.
pub fn generate_users<R: Rng>(rng: &mut R, config: &SampleConfig) -> Vec<User> {
    let mut names = NAMES.to_vec();
    names.shuffle(rng);

    (1..=config.users)
        .map(|n| {
            let base = names[(n - 1) % names.len()];
            let round = (n - 1) / names.len();
            let name = if round == 0 {
                base.to_string()
            } else {
                format!("{} {}", base, round + 1)
            };
            let avatar = rng.random_range(1..=AVATAR_COUNT);
            User::new(
                format!("u-{}", n),
                name,
                format!("https://i.pravatar.cc/150?img={}", avatar),
            )
        })
        .collect()
}

/// Generate one conversation per user plus its messages.
///
/// Messages are returned shuffled across conversations; each conversation's
/// `last_message` is its newest message. Timestamps fall within the thirty
/// days before `now`.
pub fn generate_conversations<R: Rng>(
    rng: &mut R,
    users: &[User],
    config: &SampleConfig,
    now: i64,
) -> (Vec<Conversation>, Vec<Message>) {
    let mut conversations = Vec::with_capacity(users.len());
    let mut messages = Vec::new();

    for (i, user) in users.iter().enumerate() {
        let conversation_id = ConversationId::new(format!("c-{}", i + 1));
        let count = rng.random_range(1..=config.max_messages.max(1));

        let thread: Vec<Message> = (1..=count)
            .map(|j| {
                let content = PHRASES.choose(rng).copied().unwrap_or("...");
                Message::new(
                    format!("m-{}-{}", i + 1, j),
                    conversation_id.clone(),
                    now - rng.random_range(0..MAX_AGE_MS),
                    content,
                    rng.random_bool(0.5),
                )
            })
            .collect();

        // `count` is at least one, so a newest message always exists.
        let Some(last) = thread.iter().max_by_key(|m| m.timestamp) else {
            continue;
        };

        conversations.push(Conversation::new(
            conversation_id.clone(),
            user.id.clone(),
            last.id.clone(),
            rng.random_bool(0.5),
        ));
        messages.extend(thread);
    }

    messages.shuffle(rng);
    (conversations, messages)
}

/// Run both generators for `config` and validate the result.
pub fn generate_snapshot(config: &SampleConfig, now: i64) -> ChatResult<Snapshot> {
    config.validate()?;

    let mut rng = config.rng();
    let users = generate_users(&mut rng, config);
    let (conversations, messages) = generate_conversations(&mut rng, &users, config, now);

    tracing::info!(
        seed = config.seed,
        users = users.len(),
        conversations = conversations.len(),
        messages = messages.len(),
        "Generated sample data"
    );

    Snapshot::new(users, conversations, messages)
}
