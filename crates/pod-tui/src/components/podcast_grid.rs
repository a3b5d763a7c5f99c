//! PodcastGrid component — instantiates one PreviewCard per catalog entry
//! and routes input to them.
//!
//! Keys go to the card under the cursor first; a consumed key (activation)
//! short-circuits the grid's own defaults, which is what keeps Space from
//! paging the grid when it activates a card.

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use pod_catalog::summary::PodcastSummary;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    components::preview_card::{PreviewCard, CARD_HEIGHT},
    theme::C_MUTED,
    widgets::{
        card_grid::CardGrid,
        filter_input::{FilterInput, FilterOutcome},
        pane_chrome::pane_chrome,
    },
};

/// Sort order for the grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SortOrder {
    #[default]
    Default,
    Title,
    Updated,
    Seasons,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            Self::Default => Self::Title,
            Self::Title => Self::Updated,
            Self::Updated => Self::Seasons,
            Self::Seasons => Self::Default,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Default => Self::Seasons,
            Self::Title => Self::Default,
            Self::Updated => Self::Title,
            Self::Seasons => Self::Updated,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "catalog",
            Self::Title => "title",
            Self::Updated => "updated",
            Self::Seasons => "seasons",
        }
    }
}

pub struct PodcastGrid {
    grid: CardGrid<PreviewCard>,
    filter_input: FilterInput,
    sort_order: SortOrder,
    columns: usize,
    /// Card region of the last draw, for mouse hit-testing.
    cards_area: Rect,
    cell_width: u16,
}

impl PodcastGrid {
    pub fn new(podcasts: &[PodcastSummary], columns: u16) -> Self {
        let mut grid = CardGrid::new(card_matches);
        grid.set_items(
            podcasts
                .iter()
                .cloned()
                .map(PreviewCard::from_summary)
                .collect(),
        );
        Self {
            grid,
            filter_input: FilterInput::new("title or genre…"),
            sort_order: SortOrder::Default,
            columns: columns.max(1) as usize,
            cards_area: Rect::default(),
            cell_width: 0,
        }
    }

    pub fn shown(&self) -> usize {
        self.grid.len()
    }

    /// Accessible label of the card under the cursor, for announcements.
    pub fn cursor_label(&self) -> Option<&str> {
        self.grid.cursor_item().map(PreviewCard::accessible_label)
    }

    fn apply_sort(&mut self) {
        match self.sort_order {
            SortOrder::Default => {
                // restore catalog order
                self.grid.rebuild_filter();
            }
            SortOrder::Title => {
                self.grid.sort_by(|a, b| {
                    a.value()
                        .title
                        .to_lowercase()
                        .cmp(&b.value().title.to_lowercase())
                });
            }
            SortOrder::Updated => {
                // ISO-8601 strings order chronologically as text; newest first.
                self.grid
                    .sort_by(|a, b| b.value().updated.cmp(&a.value().updated));
            }
            SortOrder::Seasons => {
                self.grid.sort_by(|a, b| {
                    b.value().seasons.cmp(&a.value().seasons).then(
                        a.value()
                            .title
                            .to_lowercase()
                            .cmp(&b.value().title.to_lowercase()),
                    )
                });
            }
        }
    }

    fn rows_per_page(&self) -> usize {
        (self.cards_area.height / CARD_HEIGHT).max(1) as usize
    }
}

/// Filter match over title and genre display names.
fn card_matches(card: &PreviewCard, q: &str) -> bool {
    if q.trim().is_empty() {
        return true;
    }
    let view = card.value();
    let resolver = pod_catalog::genres::GenreResolver::new();
    let text = format!(
        "{} {}",
        view.title.to_lowercase(),
        view.genre_names(&resolver).join(" ").to_lowercase()
    );
    q.to_lowercase()
        .split_whitespace()
        .all(|term| text.contains(term))
}

impl Component for PodcastGrid {
    fn id(&self) -> ComponentId {
        ComponentId::PodcastGrid
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }

        // Filter mode input
        if self.filter_input.is_active() {
            match key.code {
                KeyCode::Up => {
                    self.grid.move_up(self.columns);
                    return vec![];
                }
                KeyCode::Down => {
                    self.grid.move_down(self.columns);
                    return vec![];
                }
                KeyCode::Left => {
                    self.grid.move_left();
                    return vec![];
                }
                KeyCode::Right => {
                    self.grid.move_right();
                    return vec![];
                }
                _ => {}
            }
            return match self.filter_input.handle_key(key) {
                FilterOutcome::Changed(q) => {
                    self.grid.set_filter(&q);
                    self.apply_sort();
                    vec![]
                }
                FilterOutcome::Confirmed => vec![Action::CloseFilter],
                FilterOutcome::Cancelled => {
                    self.grid.set_filter("");
                    self.apply_sort();
                    vec![Action::CloseFilter]
                }
            };
        }

        // The card under the cursor sees the key first; a consumed key
        // suppresses the grid defaults below (Space would otherwise page).
        if let Some(card) = self.grid.cursor_item_mut() {
            let events = card.handle_key(key);
            if !events.is_empty() {
                return events;
            }
        }

        let page = self.columns * self.rows_per_page();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.grid.move_left(),
            KeyCode::Right | KeyCode::Char('l') => self.grid.move_right(),
            KeyCode::Up | KeyCode::Char('k') => self.grid.move_up(self.columns),
            KeyCode::Down | KeyCode::Char('j') => self.grid.move_down(self.columns),
            KeyCode::PageUp => self.grid.move_up(page),
            KeyCode::PageDown | KeyCode::Char(' ') => self.grid.move_down(page),
            KeyCode::Home | KeyCode::Char('g') => self.grid.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.grid.select_last(),

            KeyCode::Char('/') => {
                self.filter_input.activate();
                return vec![Action::OpenFilter];
            }

            KeyCode::Char('s') => {
                self.sort_order = self.sort_order.next();
                self.apply_sort();
            }
            KeyCode::Char('S') => {
                self.sort_order = self.sort_order.prev();
                self.apply_sort();
            }

            _ => {}
        }

        tracing::trace!(
            cursor = ?self.grid.cursor_original_index(),
            card = ?self.cursor_label(),
            "grid cursor"
        );
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, _area: Rect, _state: &AppState) -> Vec<Action> {
        match event.kind {
            MouseEventKind::ScrollUp => {
                self.grid.move_up(self.columns);
            }
            MouseEventKind::ScrollDown => {
                self.grid.move_down(self.columns);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.cell_width == 0 || !point_in(self.cards_area, event.column, event.row) {
                    return vec![];
                }
                let cell_col = ((event.column - self.cards_area.x) / self.cell_width) as usize;
                let cell_row = ((event.row - self.cards_area.y) / CARD_HEIGHT) as usize;
                if self.grid.hit(self.columns, cell_row, cell_col) {
                    // A primary pointer action both selects and activates.
                    if let Some(card) = self.grid.cursor_item() {
                        return vec![card.activate()];
                    }
                }
            }
            _ => {}
        }
        vec![]
    }

    fn on_action(&mut self, _action: &Action, _state: &AppState) -> Vec<Action> {
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let subtitle = format!(
            "{}/{} · {}",
            self.shown(),
            self.grid.total_len(),
            self.sort_order.label()
        );
        let block = pane_chrome("podcasts", Some(subtitle.as_str()), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let filter_h = if self.filter_input.is_active() { 1 } else { 0 };
        let cards_area = Rect {
            height: inner.height.saturating_sub(filter_h),
            ..inner
        };
        self.cards_area = cards_area;

        if self.grid.total_len() == 0 {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "  catalog is empty",
                    Style::default().fg(C_MUTED),
                )),
                cards_area,
            );
        } else if self.grid.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "  no podcasts match filter",
                    Style::default().fg(C_MUTED),
                )),
                cards_area,
            );
        } else {
            let rows = (cards_area.height / CARD_HEIGHT).max(1) as usize;
            let cell_width = (cards_area.width / self.columns as u16).max(8);
            self.cell_width = cell_width;
            self.grid.ensure_visible(self.columns, rows);

            for (pos, orig) in self.grid.window(self.columns, rows) {
                let row = pos / self.columns - self.grid.scroll_row;
                let col = pos % self.columns;
                let cell = Rect {
                    x: cards_area.x + col as u16 * cell_width,
                    y: cards_area.y + row as u16 * CARD_HEIGHT,
                    width: cell_width,
                    height: CARD_HEIGHT,
                };
                let selected = pos == self.grid.cursor;
                self.grid.items[orig].draw(frame, cell, selected, focused, &state.genres);
            }
        }

        if self.filter_input.is_active() {
            let filter_area = Rect {
                y: inner.y + inner.height.saturating_sub(1),
                height: 1,
                ..inner
            };
            self.filter_input.draw(frame, filter_area, self.shown());
        }
    }
}

fn point_in(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
