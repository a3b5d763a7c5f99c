//! PreviewCard — one podcast summary with dual declared/structured state.
//!
//! The card keeps two synchronized representations:
//! - declared state: a string-keyed map of externally settable attributes
//!   (`pid`, `title`, `image`, `genres`, `seasons`, `updated`) — the durable
//!   representation, and the one reads consult first;
//! - structured state: an optional `PodcastSummary` assigned wholesale.
//!
//! Assigning structured state rewrites every declared key from the object's
//! fields, so declared state stays the single source of truth afterwards;
//! only `description` lives exclusively on the structured object. Every
//! mutation entry point runs the same state-changed hook, which recomputes
//! the view model and the accessible label.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use pod_catalog::genres::GenreResolver;
use pod_catalog::summary::{
    join_genre_tokens, parse_genre_tokens, PodcastSummary, ViewModel,
};
use std::collections::BTreeMap;

use crate::action::{Action, PODCAST_SELECT_EVENT};
use crate::theme::{
    C_COVER, C_MUTED, C_PANEL_BORDER, C_PRIMARY, C_SEASONS, C_SECONDARY, C_SELECTION_BG, C_TAG,
    C_UPDATED,
};

pub const ATTR_PID: &str = "pid";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_IMAGE: &str = "image";
pub const ATTR_GENRES: &str = "genres";
pub const ATTR_SEASONS: &str = "seasons";
pub const ATTR_UPDATED: &str = "updated";

/// The fixed declared-state keys, in mirror order.
pub const DECLARED_KEYS: &[&str] = &[
    ATTR_PID,
    ATTR_TITLE,
    ATTR_IMAGE,
    ATTR_GENRES,
    ATTR_SEASONS,
    ATTR_UPDATED,
];

/// Rows one card occupies in the grid, borders included.
pub const CARD_HEIGHT: u16 = 5;

pub struct PreviewCard {
    declared: BTreeMap<&'static str, String>,
    structured: Option<PodcastSummary>,
    /// Snapshot of the derived state, refreshed by `state_changed`.
    view: ViewModel,
    accessible_label: String,
}

impl PreviewCard {
    pub fn new() -> Self {
        let mut card = Self {
            declared: BTreeMap::new(),
            structured: None,
            view: ViewModel::default(),
            accessible_label: String::new(),
        };
        card.state_changed();
        card
    }

    pub fn from_summary(summary: PodcastSummary) -> Self {
        let mut card = Self::new();
        card.set_structured_data(Some(summary));
        card
    }

    fn canonical_key(key: &str) -> Option<&'static str> {
        DECLARED_KEYS.iter().copied().find(|k| *k == key)
    }

    /// Externally set one declared attribute. Unknown keys are ignored.
    pub fn set_attr(&mut self, key: &str, value: &str) {
        let Some(key) = Self::canonical_key(key) else {
            tracing::debug!(key, "ignoring unknown declared attribute");
            return;
        };
        self.declared.insert(key, value.to_string());
        self.state_changed();
    }

    /// Externally remove one declared attribute.
    pub fn remove_attr(&mut self, key: &str) {
        let Some(key) = Self::canonical_key(key) else {
            return;
        };
        self.declared.remove(key);
        self.state_changed();
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.declared.get(key).map(String::as_str)
    }

    /// Assign or clear the structured state.
    ///
    /// `Some` mirrors every field into declared state, making the two
    /// representations consistent; `None` drops the structured object (and
    /// with it the description). Malformed or empty fields never panic —
    /// they mirror as-is and degrade on read.
    pub fn set_structured_data(&mut self, data: Option<PodcastSummary>) {
        match data {
            Some(summary) => {
                self.declared.insert(ATTR_PID, summary.id.clone());
                self.declared.insert(ATTR_TITLE, summary.title.clone());
                self.declared.insert(ATTR_IMAGE, summary.image.clone());
                self.declared
                    .insert(ATTR_GENRES, join_genre_tokens(&summary.genres));
                self.declared
                    .insert(ATTR_SEASONS, summary.seasons.to_string());
                self.declared.insert(ATTR_UPDATED, summary.updated.clone());
                self.structured = Some(summary);
            }
            None => {
                self.structured = None;
            }
        }
        self.state_changed();
    }

    /// Derive the current view model. Declared state wins; keys that are
    /// absent fall back to the structured field, then to an empty default.
    /// Pure: reading never mutates the card.
    pub fn value(&self) -> ViewModel {
        let declared = |key| self.declared.get(key).map(String::as_str);
        let s = self.structured.as_ref();

        let id = declared(ATTR_PID)
            .map(str::to_string)
            .or_else(|| s.map(|s| s.id.clone()))
            .unwrap_or_default();
        let title = declared(ATTR_TITLE)
            .map(str::to_string)
            .or_else(|| s.map(|s| s.title.clone()))
            .unwrap_or_default();
        let image = declared(ATTR_IMAGE)
            .map(str::to_string)
            .or_else(|| s.map(|s| s.image.clone()))
            .unwrap_or_default();
        let genres = match declared(ATTR_GENRES) {
            Some(raw) => parse_genre_tokens(raw),
            None => s.map(|s| s.genres.clone()).unwrap_or_default(),
        };
        // A present-but-malformed season count recovers to 0; only an absent
        // key falls back to the structured field.
        let seasons = match declared(ATTR_SEASONS) {
            Some(raw) => raw.trim().parse().unwrap_or(0),
            None => s.map(|s| s.seasons).unwrap_or(0),
        };
        let updated = declared(ATTR_UPDATED)
            .map(str::to_string)
            .or_else(|| s.map(|s| s.updated.clone()))
            .unwrap_or_default();
        let description = s.map(|s| s.description.clone()).unwrap_or_default();

        ViewModel {
            id,
            title,
            image,
            genres,
            seasons,
            updated,
            description,
        }
    }

    /// The accessible name currently applied to the card.
    pub fn accessible_label(&self) -> &str {
        &self.accessible_label
    }

    /// Runs on every mutation entry point: recompute the view model and
    /// reapply the accessible label.
    fn state_changed(&mut self) {
        self.view = self.value();
        self.accessible_label = self.view.accessible_label();
    }

    /// Emit the selection event with the view model as of right now.
    pub fn activate(&self) -> Action {
        let view = self.value();
        tracing::debug!(event = PODCAST_SELECT_EVENT, id = %view.id, "card activated");
        Action::PodcastSelect(view)
    }

    /// Key handling for the card under the grid cursor. Enter and Space
    /// both activate; a non-empty return means the key was consumed, which
    /// is how Space's default page-scroll in the grid gets suppressed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => vec![self.activate()],
            _ => vec![],
        }
    }

    /// Render the card into its own cell. Idempotent; touches nothing
    /// outside `area`.
    pub fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        selected: bool,
        pane_focused: bool,
        resolver: &GenreResolver,
    ) {
        let border_style = if selected && pane_focused {
            Style::default().fg(crate::theme::C_PANEL_BORDER_FOCUSED)
        } else if selected {
            Style::default().fg(C_SECONDARY)
        } else {
            Style::default().fg(C_PANEL_BORDER)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width < 4 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let title_style = if selected {
            Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(C_PRIMARY)
        };

        let mut lines = Vec::with_capacity(3);
        lines.push(Line::from(vec![
            Span::styled(monogram(&self.view.title), Style::default().fg(C_COVER)),
            Span::raw(" "),
            Span::styled(
                truncate_to_width(&self.view.title, width.saturating_sub(4)),
                title_style,
            ),
        ]));

        let mut meta = Vec::new();
        let season_label = self.view.season_label();
        if !season_label.is_empty() {
            meta.push(Span::styled(season_label, Style::default().fg(C_SEASONS)));
        }
        let updated_label = pod_catalog::dates::format_updated(&self.view.updated);
        if !updated_label.is_empty() {
            if !meta.is_empty() {
                meta.push(Span::styled(" · ", Style::default().fg(C_MUTED)));
            }
            meta.push(Span::styled(updated_label, Style::default().fg(C_UPDATED)));
        }
        lines.push(Line::from(meta));

        let tags = self.view.genre_names(resolver).join(" · ");
        lines.push(Line::from(Span::styled(
            truncate_to_width(&tags, width),
            Style::default().fg(C_TAG),
        )));

        let body = if selected {
            Paragraph::new(lines).style(Style::default().bg(C_SELECTION_BG))
        } else {
            Paragraph::new(lines)
        };
        frame.render_widget(body, inner);
    }
}

impl Default for PreviewCard {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-letter stand-in for the cover image, derived from the title (the
/// same source the alt text would use).
fn monogram(title: &str) -> String {
    let initials: String = title
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() {
        "··".to_string()
    } else {
        initials
    }
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pod_catalog::summary::GenreToken;
    use ratatui::crossterm::event::KeyModifiers;

    fn sample_summary() -> PodcastSummary {
        PodcastSummary {
            id: "10716".to_string(),
            title: "Something Was Wrong".to_string(),
            image: "https://example.com/swr.png".to_string(),
            genres: vec![GenreToken::Id(1), GenreToken::Id(2)],
            seasons: 14,
            updated: "2022-11-03T07:00:00.000Z".to_string(),
            description: "An award-winning docuseries.".to_string(),
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn structured_assignment_mirrors_every_declared_key() {
        let card = PreviewCard::from_summary(sample_summary());
        assert_eq!(card.attr(ATTR_PID), Some("10716"));
        assert_eq!(card.attr(ATTR_TITLE), Some("Something Was Wrong"));
        assert_eq!(card.attr(ATTR_IMAGE), Some("https://example.com/swr.png"));
        assert_eq!(card.attr(ATTR_GENRES), Some("1,2"));
        assert_eq!(card.attr(ATTR_SEASONS), Some("14"));
        assert_eq!(card.attr(ATTR_UPDATED), Some("2022-11-03T07:00:00.000Z"));
    }

    #[test]
    fn value_reproduces_structured_fields_including_description() {
        let card = PreviewCard::from_summary(sample_summary());
        let vm = card.value();
        assert_eq!(vm.id, "10716");
        assert_eq!(vm.title, "Something Was Wrong");
        assert_eq!(vm.genres, vec![GenreToken::Id(1), GenreToken::Id(2)]);
        assert_eq!(vm.seasons, 14);
        assert_eq!(vm.description, "An award-winning docuseries.");
    }

    #[test]
    fn description_is_gone_once_structured_state_is_cleared() {
        let mut card = PreviewCard::from_summary(sample_summary());
        card.set_structured_data(None);
        let vm = card.value();
        // Declared state survives as the source of truth...
        assert_eq!(vm.title, "Something Was Wrong");
        assert_eq!(vm.seasons, 14);
        // ...but the description travelled only with the structured object.
        assert_eq!(vm.description, "");
    }

    #[test]
    fn declared_state_wins_over_structured() {
        let mut card = PreviewCard::from_summary(sample_summary());
        card.set_attr(ATTR_TITLE, "Renamed Show");
        card.set_attr(ATTR_GENRES, "History,Education");
        let vm = card.value();
        assert_eq!(vm.title, "Renamed Show");
        assert_eq!(
            vm.genres,
            vec![
                GenreToken::Name("History".to_string()),
                GenreToken::Name("Education".to_string())
            ]
        );
    }

    #[test]
    fn absent_declared_key_falls_back_to_structured() {
        let mut card = PreviewCard::from_summary(sample_summary());
        card.remove_attr(ATTR_TITLE);
        assert_eq!(card.value().title, "Something Was Wrong");
        card.set_structured_data(None);
        card.remove_attr(ATTR_SEASONS);
        assert_eq!(card.value().seasons, 0);
    }

    #[test]
    fn malformed_season_count_recovers_to_zero() {
        let mut card = PreviewCard::from_summary(sample_summary());
        card.set_attr(ATTR_SEASONS, "fourteen");
        assert_eq!(card.value().seasons, 0);
        card.set_attr(ATTR_SEASONS, "-3");
        assert_eq!(card.value().seasons, 0);
    }

    #[test]
    fn empty_card_degrades_to_defaults() {
        let card = PreviewCard::new();
        let vm = card.value();
        assert_eq!(vm.id, "");
        assert!(vm.genres.is_empty());
        assert_eq!(vm.seasons, 0);
        assert_eq!(card.accessible_label(), "");
    }

    #[test]
    fn unknown_attribute_is_ignored() {
        let mut card = PreviewCard::from_summary(sample_summary());
        card.set_attr("bogus", "value");
        assert_eq!(card.attr("bogus"), None);
        assert_eq!(card.value().title, "Something Was Wrong");
    }

    #[test]
    fn enter_emits_exactly_one_selection_event() {
        let mut card = PreviewCard::from_summary(sample_summary());
        let actions = card.handle_key(press(KeyCode::Enter));
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            Action::PodcastSelect(vm) => assert_eq!(vm.id, "10716"),
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn space_emits_one_event_and_is_consumed() {
        let mut card = PreviewCard::from_summary(sample_summary());
        let actions = card.handle_key(press(KeyCode::Char(' ')));
        // Non-empty return = consumed; the grid skips its page-scroll default.
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::PodcastSelect(_)));
    }

    #[test]
    fn two_rapid_activations_emit_two_events() {
        let mut card = PreviewCard::from_summary(sample_summary());
        let first = card.handle_key(press(KeyCode::Enter));
        let second = card.handle_key(press(KeyCode::Enter));
        assert_eq!(first.len() + second.len(), 2);
    }

    #[test]
    fn key_release_does_not_activate() {
        let mut card = PreviewCard::from_summary(sample_summary());
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..press(KeyCode::Enter)
        };
        assert!(card.handle_key(release).is_empty());
    }

    #[test]
    fn other_keys_are_not_consumed() {
        let mut card = PreviewCard::from_summary(sample_summary());
        assert!(card.handle_key(press(KeyCode::Down)).is_empty());
    }

    #[test]
    fn accessible_label_tracks_every_state_change() {
        let mut card = PreviewCard::from_summary(sample_summary());
        assert_eq!(card.accessible_label(), "Something Was Wrong — 14 seasons");
        card.set_attr(ATTR_SEASONS, "1");
        assert_eq!(card.accessible_label(), "Something Was Wrong — 1 season");
        card.set_attr(ATTR_SEASONS, "0");
        assert_eq!(card.accessible_label(), "Something Was Wrong");
        let mut renamed = sample_summary();
        renamed.title = "Renamed".to_string();
        renamed.seasons = 2;
        card.set_structured_data(Some(renamed));
        assert_eq!(card.accessible_label(), "Renamed — 2 seasons");
    }

    #[test]
    fn monogram_uses_title_initials() {
        assert_eq!(monogram("Something Was Wrong"), "SW");
        assert_eq!(monogram("unsigned"), "U");
        assert_eq!(monogram(""), "··");
    }
}
