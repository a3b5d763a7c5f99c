//! Season/episode lookup keyed by podcast id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One season of a show as listed in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonEntry {
    pub title: String,
    pub episode_count: u32,
}

/// Pure podcast-id → season-list mapping. Unknown ids map to the empty
/// list, never an error.
#[derive(Debug, Clone, Default)]
pub struct SeasonLookup {
    entries: HashMap<String, Vec<SeasonEntry>>,
}

impl SeasonLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, seasons: Vec<SeasonEntry>) {
        self.entries.insert(id.into(), seasons);
    }

    pub fn by_id(&self, id: &str) -> &[SeasonEntry] {
        self.entries.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_yields_empty_list() {
        let lookup = SeasonLookup::new();
        assert!(lookup.by_id("nope").is_empty());
    }

    #[test]
    fn known_id_yields_its_seasons_in_order() {
        let mut lookup = SeasonLookup::new();
        lookup.insert(
            "10716",
            vec![
                SeasonEntry {
                    title: "Sara".to_string(),
                    episode_count: 10,
                },
                SeasonEntry {
                    title: "Joleen".to_string(),
                    episode_count: 9,
                },
            ],
        );
        let seasons = lookup.by_id("10716");
        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].title, "Sara");
        assert_eq!(seasons[1].episode_count, 9);
    }
}
