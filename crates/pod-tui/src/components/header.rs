//! Header component — one-line strip with the app name and catalog info.

use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{C_ACCENT, C_MUTED, C_SECONDARY},
};

pub struct Header {
    /// Title of the most recently activated podcast. The header observes
    /// the selection event like any other ancestor of the card.
    last_selected: Option<String>,
}

impl Header {
    pub fn new() -> Self {
        Self {
            last_selected: None,
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Header {
    fn id(&self) -> ComponentId {
        ComponentId::Header
    }

    fn handle_key(&mut self, _key: KeyEvent, _state: &AppState) -> Vec<Action> {
        vec![]
    }

    fn handle_mouse(&mut self, _event: MouseEvent, _area: Rect, _state: &AppState) -> Vec<Action> {
        vec![]
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) -> Vec<Action> {
        if let Action::PodcastSelect(view) = action {
            self.last_selected = Some(view.title.clone());
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool, state: &AppState) {
        let mut spans = vec![
            Span::styled(
                " podshelf",
                Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} shows", state.podcasts.len()),
                Style::default().fg(C_SECONDARY),
            ),
        ];
        if let Some(title) = &self.last_selected {
            spans.push(Span::styled("  ·  ", Style::default().fg(C_MUTED)));
            spans.push(Span::styled(
                title.clone(),
                Style::default().fg(C_SECONDARY),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
