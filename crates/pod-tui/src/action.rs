//! Action enum — all user-initiated intents and internal events.

use pod_catalog::summary::ViewModel;

/// Name of the selection event a preview card emits on activation. The
/// event travels as [`Action::PodcastSelect`] through the dispatcher, which
/// broadcasts it to every component before the app handles it — any
/// ancestor in the tree can observe it.
pub const PODCAST_SELECT_EVENT: &str = "podcast-select";

/// Unique identifier for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    Header,
    PodcastGrid,
    DetailOverlay,
}

/// All actions that can flow through the system.
/// Components produce Actions; the App dispatches them.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Selection / dialog ───────────────────────────────────────────────────
    /// A preview card was activated; payload is its view model at the moment
    /// of activation.
    PodcastSelect(ViewModel),
    CloseDetail,

    // ── Filter ───────────────────────────────────────────────────────────────
    OpenFilter,
    CloseFilter,

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
    Resize(u16, u16),
}
