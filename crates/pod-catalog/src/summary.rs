//! Podcast summary model and the derived view model.

use serde::{Deserialize, Serialize};

use crate::genres::GenreResolver;

/// One genre reference as it appears in catalog data and declared attributes:
/// either a numeric id into the genre table or a literal display name.
/// Catalogs may mix both forms in a single list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenreToken {
    Id(i64),
    Name(String),
}

impl GenreToken {
    /// The attribute-string form of this token, as written back into the
    /// declared `genres` value.
    pub fn as_attr(&self) -> String {
        match self {
            GenreToken::Id(id) => id.to_string(),
            GenreToken::Name(name) => name.clone(),
        }
    }
}

/// Parse a comma-separated genres attribute into tokens.
///
/// Tokens are trimmed and empty tokens dropped. A token that parses as a
/// decimal integer becomes an id; everything else stays a name string. This
/// is the one genre-parsing rule, used everywhere genres are read.
pub fn parse_genre_tokens(raw: &str) -> Vec<GenreToken> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| match t.parse::<i64>() {
            Ok(id) => GenreToken::Id(id),
            Err(_) => GenreToken::Name(t.to_string()),
        })
        .collect()
}

/// Join tokens back into the comma-separated attribute form.
pub fn join_genre_tokens(tokens: &[GenreToken]) -> String {
    tokens
        .iter()
        .map(GenreToken::as_attr)
        .collect::<Vec<_>>()
        .join(",")
}

/// One podcast as it arrives from the catalog. `description` travels only
/// through this structured form, never through declared attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub genres: Vec<GenreToken>,
    #[serde(default)]
    pub seasons: u32,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub description: String,
}

/// Derived read-only projection of a preview card's current state.
///
/// Recomputed from declared + structured state on every mutation; never
/// cached across mutations. Also the payload of the `podcast-select` event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub id: String,
    pub title: String,
    pub image: String,
    pub genres: Vec<GenreToken>,
    pub seasons: u32,
    pub updated: String,
    pub description: String,
}

impl ViewModel {
    /// Season count label: `""` for 0, `"1 season"`, `"N seasons"`.
    pub fn season_label(&self) -> String {
        match self.seasons {
            0 => String::new(),
            1 => "1 season".to_string(),
            n => format!("{} seasons", n),
        }
    }

    /// Accessible name: the title alone when there are no seasons, else
    /// `"<title> — N season(s)"`.
    pub fn accessible_label(&self) -> String {
        if self.seasons == 0 {
            self.title.clone()
        } else {
            format!("{} — {}", self.title, self.season_label())
        }
    }

    /// Genre display names under the first-token rule (see
    /// [`GenreResolver::display`]).
    pub fn genre_names(&self, resolver: &GenreResolver) -> Vec<String> {
        resolver.display(&self.genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_genre_list() {
        assert_eq!(
            parse_genre_tokens("1,3"),
            vec![GenreToken::Id(1), GenreToken::Id(3)]
        );
    }

    #[test]
    fn parses_name_genre_list() {
        assert_eq!(
            parse_genre_tokens("History,Education"),
            vec![
                GenreToken::Name("History".to_string()),
                GenreToken::Name("Education".to_string())
            ]
        );
    }

    #[test]
    fn parses_mixed_list_and_trims_whitespace() {
        assert_eq!(
            parse_genre_tokens(" 2 , True Crime ,, "),
            vec![
                GenreToken::Id(2),
                GenreToken::Name("True Crime".to_string())
            ]
        );
    }

    #[test]
    fn empty_attribute_yields_no_tokens() {
        assert!(parse_genre_tokens("").is_empty());
        assert!(parse_genre_tokens(" , ,").is_empty());
    }

    #[test]
    fn numeric_display_name_is_coerced_to_id() {
        // A genre literally named "1984" cannot be told apart from an id in
        // attribute form; it coerces to an id and resolves to the
        // unknown-genre placeholder downstream.
        assert_eq!(parse_genre_tokens("1984"), vec![GenreToken::Id(1984)]);
    }

    #[test]
    fn tokens_round_trip_through_attr_form() {
        let tokens = vec![
            GenreToken::Id(1),
            GenreToken::Name("History".to_string()),
            GenreToken::Id(9),
        ];
        assert_eq!(join_genre_tokens(&tokens), "1,History,9");
        assert_eq!(parse_genre_tokens(&join_genre_tokens(&tokens)), tokens);
    }

    #[test]
    fn season_label_pluralizes() {
        let mut vm = ViewModel::default();
        assert_eq!(vm.season_label(), "");
        vm.seasons = 1;
        assert_eq!(vm.season_label(), "1 season");
        vm.seasons = 2;
        assert_eq!(vm.season_label(), "2 seasons");
    }

    #[test]
    fn accessible_label_omits_season_part_at_zero() {
        let mut vm = ViewModel {
            title: "Truth Be Told".to_string(),
            ..ViewModel::default()
        };
        assert_eq!(vm.accessible_label(), "Truth Be Told");
        vm.seasons = 1;
        assert_eq!(vm.accessible_label(), "Truth Be Told — 1 season");
        vm.seasons = 14;
        assert_eq!(vm.accessible_label(), "Truth Be Told — 14 seasons");
    }
}
