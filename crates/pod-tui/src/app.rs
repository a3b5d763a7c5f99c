//! App — owns the components, the focus ring, and the event loop.
//!
//! Everything is synchronous: one input event is read, dispatched, and run
//! to completion before the next one. Components hand back `Action`s;
//! `dispatch` broadcasts each action to every component (the bubbling
//! phase) and then applies it at the app level.

use std::io;

use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Terminal,
};
use tracing::debug;

use pod_catalog::catalog::Catalog;
use pod_catalog::config::Config;

use crate::action::{Action, ComponentId};
use crate::announce::LiveRegion;
use crate::app_state::AppState;
use crate::component::Component;
use crate::components::detail_overlay::DetailOverlay;
use crate::components::header::Header;
use crate::components::podcast_grid::PodcastGrid;
use crate::focus::FocusRing;
use crate::theme::C_BG;
use crate::widgets::status_bar::{self, InputMode};

pub struct App {
    state: AppState,
    focus: FocusRing,
    live: LiveRegion,

    header: Header,
    grid: PodcastGrid,
    overlay: DetailOverlay,

    show_keys_bar: bool,
    grid_area: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, catalog: Catalog) -> Self {
        let grid = PodcastGrid::new(&catalog.podcasts, config.ui.grid_columns);
        let state = AppState::new(catalog.podcasts, catalog.seasons);
        Self {
            state,
            focus: FocusRing::new(vec![ComponentId::PodcastGrid]),
            live: LiveRegion::new(),
            header: Header::new(),
            grid,
            overlay: DetailOverlay::new(),
            show_keys_bar: config.ui.show_keys_bar,
            grid_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        debug!("run(): enabling raw mode");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        debug!("run(): terminal created, size={:?}", terminal.size());

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            // Blocking read: each event runs to completion before the next.
            match event::read()? {
                Event::Key(key) => self.handle_key_event(key),
                Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                Event::Resize(w, h) => self.dispatch(Action::Resize(w, h)),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.dispatch(Action::Quit);
            return;
        }

        // Capturing phase: an open dialog sees every key first and consumes
        // whatever it does not act on.
        if self.overlay.is_open() {
            let actions = self.overlay.handle_key(key, &self.state);
            for action in actions {
                self.dispatch(action);
            }
            return;
        }

        if self.state.input_mode == InputMode::Normal && key.code == KeyCode::Char('q') {
            self.dispatch(Action::Quit);
            return;
        }

        let actions = self.grid.handle_key(key, &self.state);
        for action in actions {
            self.dispatch(action);
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let actions = if self.overlay.is_open() {
            self.overlay.handle_mouse(mouse, self.grid_area, &self.state)
        } else {
            self.grid.handle_mouse(mouse, self.grid_area, &self.state)
        };
        for action in actions {
            self.dispatch(action);
        }
    }

    // ── Action dispatcher ─────────────────────────────────────────────────────

    fn dispatch(&mut self, action: Action) {
        // Broadcast to all components first so any of them can observe the
        // action (this is what lets the selection event cross component
        // boundaries).
        let secondary: Vec<Action> = {
            let s = &self.state;
            let mut out = Vec::new();
            out.extend(self.header.on_action(&action, s));
            out.extend(self.grid.on_action(&action, s));
            out.extend(self.overlay.on_action(&action, s));
            out
        };

        self.apply_action(action);

        // Dispatch any secondary actions (depth-limited to 1 level)
        for a in secondary {
            self.apply_action(a);
        }
    }

    fn apply_action(&mut self, action: Action) {
        match &action {
            Action::Resize(..) => {}
            _ => debug!("apply_action: {:?}", action),
        }
        match action {
            Action::PodcastSelect(view) => {
                self.overlay
                    .open(view, &self.focus, &mut self.live, &self.state);
            }
            Action::CloseDetail => {
                self.overlay.close(&mut self.focus);
            }
            Action::OpenFilter => {
                self.state.input_mode = InputMode::Filter;
            }
            Action::CloseFilter => {
                self.state.input_mode = InputMode::Normal;
            }
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Resize(..) => {}
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();

        // Fill the terminal with the base background colour so unstyled
        // cells appear uniform rather than the terminal default.
        frame.render_widget(
            Block::default().style(ratatui::style::Style::default().bg(C_BG)),
            area,
        );

        let status_h = if self.show_keys_bar { 1u16 } else { 0 };
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(status_h),
            ])
            .split(area);

        self.header.draw(frame, outer[0], false, &self.state);

        let grid_focused =
            self.focus.is_focused(ComponentId::PodcastGrid) && !self.overlay.is_open();
        self.grid.draw(frame, outer[1], grid_focused, &self.state);
        self.grid_area = outer[1];

        if self.show_keys_bar {
            status_bar::draw_keys_bar(frame, outer[2], self.state.input_mode, self.live.text());
        }

        // Dialog on top of everything; its subtree is exclusively its own.
        self.overlay.draw(frame, area, true, &self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pod_catalog::catalog::bundled_catalog;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let catalog = bundled_catalog().expect("bundled catalog parses");
        App::new(&Config::default(), catalog)
    }

    #[test]
    fn enter_opens_the_detail_dialog_synchronously() {
        let mut app = app();
        app.handle_key_event(press(KeyCode::Enter));
        // open() completed before control returned: content, focus and
        // announcement are all in place.
        assert!(app.overlay.is_open());
        let title = app.overlay.current().map(|v| v.title.clone()).unwrap();
        assert_eq!(app.live.text(), format!("Dialog opened: {}", title));
    }

    #[test]
    fn escape_closes_and_restores_grid_focus() {
        let mut app = app();
        app.handle_key_event(press(KeyCode::Enter));
        assert!(app.overlay.is_open());
        app.handle_key_event(press(KeyCode::Esc));
        assert!(!app.overlay.is_open());
        assert!(app.focus.is_focused(ComponentId::PodcastGrid));
    }

    #[test]
    fn reentrant_select_replaces_content_with_one_escape_to_close() {
        let mut app = app();
        app.handle_key_event(press(KeyCode::Enter));
        let first = app.overlay.current().map(|v| v.id.clone());

        // A second selection event arrives while the dialog is open.
        let p = app.state.podcasts[1].clone();
        app.dispatch(Action::PodcastSelect(pod_catalog::summary::ViewModel {
            id: p.id,
            title: p.title,
            image: p.image,
            genres: p.genres,
            seasons: p.seasons,
            updated: p.updated,
            description: p.description,
        }));

        let second = app.overlay.current().map(|v| v.id.clone());
        assert!(app.overlay.is_open());
        assert_ne!(first, second);

        // One Escape press closes once; the dialog does not need two.
        app.handle_key_event(press(KeyCode::Esc));
        assert!(!app.overlay.is_open());
    }

    #[test]
    fn space_after_close_activates_the_new_cursor_card() {
        let mut app = app();
        app.handle_key_event(press(KeyCode::Enter));
        let first = app.overlay.current().map(|v| v.id.clone());
        app.handle_key_event(press(KeyCode::Esc));
        app.handle_key_event(press(KeyCode::Down));
        app.handle_key_event(press(KeyCode::Char(' ')));
        let second = app.overlay.current().map(|v| v.id.clone());
        assert!(app.overlay.is_open());
        assert_ne!(first, second);
    }

    #[test]
    fn keys_are_captured_by_the_open_dialog() {
        let mut app = app();
        app.handle_key_event(press(KeyCode::Enter));
        // 'q' would quit from the grid, but the dialog consumes it.
        app.handle_key_event(press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert!(app.overlay.is_open());
    }

    #[test]
    fn q_quits_from_the_grid() {
        let mut app = app();
        app.handle_key_event(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn filter_mode_changes_input_mode() {
        let mut app = app();
        app.handle_key_event(press(KeyCode::Char('/')));
        assert_eq!(app.state.input_mode, InputMode::Filter);
        // 'q' now types into the filter instead of quitting.
        app.handle_key_event(press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        app.handle_key_event(press(KeyCode::Esc)); // clear
        app.handle_key_event(press(KeyCode::Esc)); // close
        assert_eq!(app.state.input_mode, InputMode::Normal);
    }
}
