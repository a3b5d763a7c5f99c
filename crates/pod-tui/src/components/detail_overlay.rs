//! DetailOverlay — the modal podcast detail dialog.
//!
//! A single shared controller with a two-state machine:
//! `Closed --open--> Open`, `Open --Escape|close--> Closed`,
//! `Open --open--> Open` (content replaced, no duplicate Escape guard).
//! Opening captures the focus ring's current component; closing restores it
//! when the target is still part of the ring, and always clears the
//! remembered reference. While open, the overlay sees all input first and
//! consumes it (the capturing phase).

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use pod_catalog::summary::ViewModel;

use crate::{
    action::{Action, ComponentId},
    announce::LiveRegion,
    app_state::AppState,
    focus::FocusRing,
    theme::{
        C_ACCENT, C_MUTED, C_OVERLAY_BG, C_PANEL_BORDER, C_PRIMARY, C_SEASONS, C_SECONDARY, C_TAG,
        C_UPDATED,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalPhase {
    Closed,
    Open,
}

/// Accessibility attributes of the dialog surface. The role, modal flag
/// and label associations are applied exactly once for the process
/// lifetime; only `visible` toggles with each open/close.
#[derive(Debug, Default)]
struct DialogAttrs {
    visible: bool,
    role: Option<&'static str>,
    modal: bool,
    labelled_by: Option<&'static str>,
    described_by: Option<&'static str>,
    apply_count: u32,
}

impl DialogAttrs {
    fn apply_once(&mut self) {
        if self.role.is_some() {
            return;
        }
        self.role = Some("dialog");
        self.modal = true;
        self.labelled_by = Some("detail-title");
        self.described_by = Some("detail-body");
        self.apply_count += 1;
    }
}

pub struct DetailOverlay {
    phase: ModalPhase,
    current: Option<ViewModel>,
    /// Non-owning back-reference to the component that held focus before
    /// the dialog opened. Cleared on close.
    remembered_focus: Option<ComponentId>,
    /// Guard for the capturing Escape handler: armed on open, never
    /// duplicated by re-entrant opens, disarmed on close.
    escape_armed: bool,
    attrs: DialogAttrs,
    /// Detail lines, rebuilt on every open.
    content: Vec<Line<'static>>,
    /// Overlay-internal focus sits on the close control while open.
    close_focused: bool,
    scroll: u16,
    /// Popup rect of the last draw, for backdrop-click detection.
    last_area: Rect,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Closed,
            current: None,
            remembered_focus: None,
            escape_armed: false,
            attrs: DialogAttrs::default(),
            content: Vec::new(),
            close_focused: false,
            scroll: 0,
            last_area: Rect::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    pub fn current(&self) -> Option<&ViewModel> {
        self.current.as_ref()
    }

    /// Open the dialog for `view`, or replace its content when already open.
    /// Fully completes before returning: content rendered, focus moved,
    /// Escape guard armed, announcement made.
    pub fn open(&mut self, view: ViewModel, ring: &FocusRing, live: &mut LiveRegion, state: &AppState) {
        // Only the Closed→Open edge records the focus target; during a
        // re-entrant open, focus is already inside the dialog.
        if self.phase == ModalPhase::Closed {
            self.remembered_focus = ring.current();
        }

        self.content = build_content(&view, state);
        self.scroll = 0;

        self.attrs.apply_once();
        self.attrs.visible = true;

        self.close_focused = true;

        if !self.escape_armed {
            self.escape_armed = true;
        }

        live.announce(format!("Dialog opened: {}", view.title));
        tracing::debug!(id = %view.id, "detail dialog opened");

        self.current = Some(view);
        self.phase = ModalPhase::Open;
    }

    /// Hide the dialog, disarm the Escape guard, and restore focus to the
    /// remembered target when it is still attached to the ring.
    pub fn close(&mut self, ring: &mut FocusRing) {
        if self.phase == ModalPhase::Closed {
            return;
        }
        self.phase = ModalPhase::Closed;
        self.attrs.visible = false;
        self.escape_armed = false;
        self.close_focused = false;
        self.current = None;
        self.content.clear();

        if let Some(target) = self.remembered_focus.take() {
            if ring.contains(target) {
                ring.set(target);
            } else {
                tracing::debug!(?target, "focus target detached; skipping restore");
            }
        }
    }
}

impl Default for DetailOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::component::Component for DetailOverlay {
    fn id(&self) -> ComponentId {
        ComponentId::DetailOverlay
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release || !self.is_open() {
            return vec![];
        }
        match key.code {
            KeyCode::Esc if self.escape_armed => return vec![Action::CloseDetail],
            // Activating the close control.
            KeyCode::Enter | KeyCode::Char(' ') if self.close_focused => {
                return vec![Action::CloseDetail];
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            _ => {}
        }
        // All other keys are consumed while the dialog is open.
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, _area: Rect, _state: &AppState) -> Vec<Action> {
        if !self.is_open() {
            return vec![];
        }
        match event.kind {
            MouseEventKind::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            MouseEventKind::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            MouseEventKind::Down(MouseButton::Left) => {
                // A click on the backdrop closes, like Escape.
                let inside = event.column >= self.last_area.x
                    && event.column < self.last_area.x + self.last_area.width
                    && event.row >= self.last_area.y
                    && event.row < self.last_area.y + self.last_area.height;
                if !inside {
                    return vec![Action::CloseDetail];
                }
            }
            _ => {}
        }
        vec![]
    }

    fn on_action(&mut self, _action: &Action, _state: &AppState) -> Vec<Action> {
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool, _state: &AppState) {
        if !self.attrs.visible {
            return;
        }
        let title = self
            .current
            .as_ref()
            .map(|v| v.title.as_str())
            .unwrap_or("");

        let height = (self.content.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup = centered_rect(64, height.max(6), area);
        self.last_area = popup;

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(C_PANEL_BORDER))
            .style(Style::default().bg(C_OVERLAY_BG))
            .title(Line::from(Span::styled(
                format!(" {} ", title),
                Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD),
            )));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        frame.render_widget(
            Paragraph::new(self.content.clone())
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            inner,
        );
    }
}

/// Build the dialog body for `view`. Season entries come from the season
/// lookup keyed by the summary's id; genre tags follow the same resolution
/// rule as the cards.
fn build_content(view: &ViewModel, state: &AppState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // The close control; overlay-internal focus sits here while open.
    lines.push(Line::from(Span::styled(
        " [ esc ] close",
        Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    if !view.image.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" cover: {}", view.image),
            Style::default().fg(C_MUTED),
        )));
    }

    if !view.description.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" {}", view.description),
            Style::default().fg(C_SECONDARY),
        )));
        lines.push(Line::from(""));
    }

    let tags = view.genre_names(&state.genres).join(" · ");
    if !tags.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" {}", tags),
            Style::default().fg(C_TAG),
        )));
    }

    let updated = pod_catalog::dates::format_updated(&view.updated);
    if !updated.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" {}", updated),
            Style::default().fg(C_UPDATED),
        )));
    }
    lines.push(Line::from(""));

    let seasons = state.seasons.by_id(&view.id);
    if seasons.is_empty() {
        lines.push(Line::from(Span::styled(
            " no seasons listed",
            Style::default().fg(C_MUTED),
        )));
    } else {
        for (i, season) in seasons.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!(
                    " Season {}: {} — {} episodes",
                    i + 1,
                    season.title,
                    season.episode_count
                ),
                Style::default().fg(C_SEASONS),
            )));
        }
    }

    lines
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
