//! Filter bar for the podcast grid, backed by tui-input.
//!
//! Esc is two-stage: a first press clears the query (the bar stays up), a
//! second press on an empty query closes it. Enter keeps the current query
//! and hands focus back to the grid.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::theme::{C_FILTER_BG, C_FILTER_FG, C_MUTED, C_SECONDARY};

/// What a key press did to the filter.
pub enum FilterOutcome {
    Changed(String),
    Confirmed,
    Cancelled,
}

pub struct FilterInput {
    input: Input,
    active: bool,
    placeholder: String,
}

impl FilterInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            active: false,
            placeholder: placeholder.into(),
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn text(&self) -> &str {
        self.input.value()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FilterOutcome {
        match key.code {
            KeyCode::Esc if self.input.value().is_empty() => {
                self.deactivate();
                FilterOutcome::Cancelled
            }
            KeyCode::Esc => {
                self.input = Input::default();
                FilterOutcome::Changed(String::new())
            }
            KeyCode::Enter => {
                self.deactivate();
                FilterOutcome::Confirmed
            }
            _ => {
                self.input
                    .handle_event(&ratatui::crossterm::event::Event::Key(key));
                FilterOutcome::Changed(self.input.value().to_string())
            }
        }
    }

    /// Render the bar into `area`. `shown` is how many cards currently match
    /// the query; it is appended on the right so narrowing is visible while
    /// typing.
    pub fn draw(&self, frame: &mut Frame, area: Rect, shown: usize) {
        let scroll = self
            .input
            .visual_scroll(area.width.saturating_sub(4) as usize);
        let query = self.text();

        let mut spans = Vec::with_capacity(2);
        if query.is_empty() {
            spans.push(Span::styled(
                format!("/ {}", self.placeholder),
                Style::default().fg(C_MUTED),
            ));
        } else {
            spans.push(Span::styled(
                format!("/ {}", &query[scroll..]),
                Style::default().fg(C_FILTER_FG),
            ));
            spans.push(Span::styled(
                format!("  ({} shown)", shown),
                Style::default().fg(C_SECONDARY),
            ));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(C_FILTER_BG)),
            area,
        );

        if self.active && !query.is_empty() {
            let cursor_x = area.x + 2 + (self.input.visual_cursor() - scroll) as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width - 1), area.y));
        }
    }
}

impl Default for FilterInput {
    fn default() -> Self {
        Self::new("filter…")
    }
}
