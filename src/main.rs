#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::Context as _;
use chatpane_core::{generate_snapshot, Profile, SampleConfig, Snapshot};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Sample data generated at start-up, read by the App component
static SNAPSHOT: OnceLock<Snapshot> = OnceLock::new();

/// Get the generated snapshot (empty if start-up has not run)
pub fn get_snapshot() -> Snapshot {
    SNAPSHOT.get().cloned().unwrap_or_default()
}

/// Get the local viewer's profile
pub fn get_profile() -> Profile {
    Profile::default()
}

/// Chatpane - two-pane chat mockup
#[derive(Parser, Debug)]
#[command(name = "chatpane-desktop")]
#[command(about = "Chatpane - conversation list and thread over generated sample data")]
struct Args {
    /// Seed for the sample data generator
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of counterpart users (one conversation each)
    #[arg(short, long, default_value_t = 8)]
    users: usize,

    /// Maximum number of messages per conversation
    #[arg(short, long, default_value_t = 12)]
    messages: usize,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

impl Args {
    fn sample_config(&self) -> SampleConfig {
        SampleConfig {
            seed: self.seed,
            users: self.users,
            max_messages: self.messages,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let sample = args.sample_config();

    let snapshot = generate_snapshot(&sample, chrono::Utc::now().timestamp_millis())
        .context("failed to generate sample data")?;

    tracing::info!(
        seed = sample.seed,
        conversations = snapshot.conversations().len(),
        "Starting Chatpane"
    );

    // Store snapshot globally
    let _ = SNAPSHOT.set(snapshot);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Chatpane")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
