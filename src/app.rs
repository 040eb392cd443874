use dioxus::prelude::*;

use crate::context::{get_profile, get_snapshot};
use crate::pages::ChatPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the read-only sample data context.
#[component]
pub fn App() -> Element {
    // Snapshot and profile are fixed for the lifetime of the window
    use_context_provider(get_snapshot);
    use_context_provider(get_profile);

    rsx! {
        style { {GLOBAL_STYLES} }
        ChatPage {}
    }
}
