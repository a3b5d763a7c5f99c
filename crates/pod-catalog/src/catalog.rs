//! Catalog loading — the `[[podcast]]` TOML file and the bundled fallback.

use std::path::Path;

use thiserror::Error;

use crate::seasons::{SeasonEntry, SeasonLookup};
use crate::summary::{GenreToken, PodcastSummary};

/// The catalog bundled into the binary, used when no user catalog exists.
const BUNDLED_CATALOG: &str = include_str!("../data/podcasts.toml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The loaded catalog: summaries for the grid plus the season lookup the
/// detail view reads.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub podcasts: Vec<PodcastSummary>,
    pub seasons: SeasonLookup,
}

// Intermediate structs matching the TOML `[[podcast]]` table. Kept separate
// from `PodcastSummary` so the file schema can diverge from the model
// without breaking either.
#[derive(Debug, serde::Deserialize)]
struct TomlCatalogFile {
    podcast: Vec<TomlPodcast>,
}

#[derive(Debug, serde::Deserialize)]
struct TomlPodcast {
    id: String,
    title: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    genres: Vec<GenreToken>,
    /// Omitted season count falls back to the number of `[[podcast.season]]`
    /// tables.
    #[serde(default)]
    seasons: Option<u32>,
    #[serde(default)]
    updated: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    season: Vec<TomlSeason>,
}

#[derive(Debug, serde::Deserialize)]
struct TomlSeason {
    title: String,
    #[serde(default)]
    episodes: u32,
}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    parse_catalog_str(&content)
}

pub fn parse_catalog_str(content: &str) -> Result<Catalog, CatalogError> {
    let file: TomlCatalogFile = toml::from_str(content)?;
    let mut podcasts = Vec::with_capacity(file.podcast.len());
    let mut seasons = SeasonLookup::new();

    for p in file.podcast {
        let season_entries: Vec<SeasonEntry> = p
            .season
            .into_iter()
            .map(|s| SeasonEntry {
                title: s.title,
                episode_count: s.episodes,
            })
            .collect();

        podcasts.push(PodcastSummary {
            id: p.id.clone(),
            title: p.title,
            image: p.image,
            genres: p.genres,
            seasons: p.seasons.unwrap_or(season_entries.len() as u32),
            updated: p.updated,
            description: p.description,
        });
        seasons.insert(p.id, season_entries);
    }

    tracing::debug!("parsed catalog with {} podcasts", podcasts.len());
    Ok(Catalog { podcasts, seasons })
}

/// The compile-time catalog shipped with the binary.
pub fn bundled_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog_str(BUNDLED_CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[podcast]]
id = "10716"
title = "Something Was Wrong"
image = "https://example.com/swr.png"
genres = [1, 2]
updated = "2022-11-03T07:00:00.000Z"
description = "An award-winning docuseries."

  [[podcast.season]]
  title = "Sara"
  episodes = 10

  [[podcast.season]]
  title = "Joleen"
  episodes = 9

[[podcast]]
id = "5675"
title = "Mystery Hour"
genres = ["History", "Education"]
seasons = 3
updated = "2024-06-01"
"#;

    #[test]
    fn parses_podcasts_and_seasons() {
        let catalog = parse_catalog_str(SAMPLE).unwrap();
        assert_eq!(catalog.podcasts.len(), 2);

        let first = &catalog.podcasts[0];
        assert_eq!(first.id, "10716");
        assert_eq!(first.genres, vec![GenreToken::Id(1), GenreToken::Id(2)]);
        // Season count derived from the season tables.
        assert_eq!(first.seasons, 2);

        let seasons = catalog.seasons.by_id("10716");
        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].title, "Sara");
        assert_eq!(seasons[0].episode_count, 10);
    }

    #[test]
    fn explicit_season_count_wins_over_table_length() {
        let catalog = parse_catalog_str(SAMPLE).unwrap();
        let second = &catalog.podcasts[1];
        assert_eq!(second.seasons, 3);
        assert!(catalog.seasons.by_id("5675").is_empty());
        assert_eq!(
            second.genres,
            vec![
                GenreToken::Name("History".to_string()),
                GenreToken::Name("Education".to_string())
            ]
        );
    }

    #[test]
    fn bundled_catalog_parses() {
        let catalog = bundled_catalog().unwrap();
        assert!(!catalog.podcasts.is_empty());
        // Every bundled podcast with seasons has matching lookup entries.
        for p in &catalog.podcasts {
            if p.seasons > 0 {
                assert!(
                    !catalog.seasons.by_id(&p.id).is_empty(),
                    "bundled podcast {} has no season entries",
                    p.id
                );
            }
        }
    }

    #[test]
    fn load_catalog_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("podcasts.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.podcasts.len(), 2);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse_catalog_str("[[podcast]]\ntitle = ").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
