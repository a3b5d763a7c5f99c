//! AppState — shared read-only data passed to all components during render/event.
//!
//! Components read this for catalog data they don't own, but never mutate
//! it. The App event-loop is the only thing that writes to AppState.

use pod_catalog::genres::GenreResolver;
use pod_catalog::seasons::SeasonLookup;
use pod_catalog::summary::PodcastSummary;

use crate::widgets::status_bar::InputMode;

/// The full shared state of the application.
pub struct AppState {
    // ── Catalog ─────────────────────────────────────────────────────────────
    pub podcasts: Vec<PodcastSummary>,
    pub seasons: SeasonLookup,
    pub genres: GenreResolver,

    // ── UI mode ─────────────────────────────────────────────────────────────
    pub input_mode: InputMode,
}

impl AppState {
    pub fn new(podcasts: Vec<PodcastSummary>, seasons: SeasonLookup) -> Self {
        Self {
            podcasts,
            seasons,
            genres: GenreResolver::new(),
            input_mode: InputMode::Normal,
        }
    }
}
