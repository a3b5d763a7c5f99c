//! The interface every UI panel implements.
//!
//! A component owns its state and its render area exclusively. It reads
//! shared data through `AppState` but never writes it; anything it wants
//! changed comes back as `Action`s for the app dispatcher to apply.

use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;

pub trait Component {
    fn id(&self) -> ComponentId;

    /// Handle a key event. Called when this component has focus, or when it
    /// captures input (an open overlay).
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action>;

    /// Handle a mouse event within `area`.
    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, state: &AppState) -> Vec<Action>;

    /// Observe an action the dispatcher is broadcasting. Runs for every
    /// component regardless of focus, which is what lets a selection event
    /// emitted deep in the grid be seen anywhere in the tree.
    fn on_action(&mut self, action: &Action, state: &AppState) -> Vec<Action>;

    /// Render into `area`. Must not touch anything outside it.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState);
}
