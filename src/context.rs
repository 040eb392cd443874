//! Sample data context for Chatpane.
//!
//! The snapshot and the viewer's profile are generated once in `main` and
//! handed to every component through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_snapshot);
//!
//! // In child components
//! let snapshot = use_snapshot();
//! ```

use chatpane_core::{Profile, Snapshot};
use dioxus::prelude::*;

/// Get the snapshot generated at start-up.
pub fn get_snapshot() -> Snapshot {
    crate::get_snapshot()
}

/// Get the local viewer's profile.
pub fn get_profile() -> Profile {
    crate::get_profile()
}

/// Hook to access the sample data from context.
pub fn use_snapshot() -> Snapshot {
    use_context::<Snapshot>()
}

/// Hook to access the local viewer's profile from context.
pub fn use_profile() -> Profile {
    use_context::<Profile>()
}
