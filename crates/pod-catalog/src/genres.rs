//! Genre id → display name resolution.

use crate::summary::GenreToken;

/// Display name for any id the table does not know. Stable: the same
/// unknown id always yields the same string.
pub const UNKNOWN_GENRE: &str = "Unknown genre";

/// The fixed genre table the catalog ids index into.
const GENRE_TABLE: &[(i64, &str)] = &[
    (1, "Personal Growth"),
    (2, "Investigative Journalism"),
    (3, "History"),
    (4, "Comedy"),
    (5, "Entertainment"),
    (6, "Business"),
    (7, "Fiction"),
    (8, "News"),
    (9, "Kids and Family"),
];

/// Pure id → display-name mapping. Total: unknown ids map to
/// [`UNKNOWN_GENRE`], never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreResolver;

impl GenreResolver {
    pub fn new() -> Self {
        Self
    }

    /// Display name for a single id.
    pub fn name(&self, id: i64) -> &'static str {
        GENRE_TABLE
            .iter()
            .find(|(gid, _)| *gid == id)
            .map(|(_, name)| *name)
            .unwrap_or(UNKNOWN_GENRE)
    }

    /// Display names for a list of ids, in order.
    pub fn names(&self, ids: &[i64]) -> Vec<String> {
        ids.iter().map(|&id| self.name(id).to_string()).collect()
    }

    /// Display names for a token list under the first-token rule: when the
    /// first token is numeric the entire list resolves through the table
    /// (name tokens inside such a list count as unknown ids); otherwise
    /// every token renders verbatim. Mixed lists are never partially
    /// resolved.
    pub fn display(&self, tokens: &[GenreToken]) -> Vec<String> {
        match tokens.first() {
            Some(GenreToken::Id(_)) => {
                let ids: Vec<i64> = tokens
                    .iter()
                    .map(|t| match t {
                        GenreToken::Id(id) => *id,
                        GenreToken::Name(name) => name.trim().parse().unwrap_or(-1),
                    })
                    .collect();
                self.names(&ids)
            }
            _ => tokens.iter().map(GenreToken::as_attr).collect(),
        }
    }
}
