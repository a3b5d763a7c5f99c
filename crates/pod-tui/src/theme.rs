//! Color palette and style constants for the podshelf TUI.

use ratatui::style::{Color, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_BG: Color = Color::Rgb(16, 16, 20);
pub const C_ACCENT: Color = Color::Rgb(235, 120, 90);
pub const C_PRIMARY: Color = Color::Rgb(212, 212, 224);
pub const C_SECONDARY: Color = Color::Rgb(120, 120, 142);
pub const C_MUTED: Color = Color::Rgb(74, 74, 90);
pub const C_SELECTION_BG: Color = Color::Rgb(30, 30, 44);
pub const C_PANEL_BORDER: Color = Color::Rgb(42, 42, 54);
pub const C_PANEL_BORDER_FOCUSED: Color = Color::Rgb(130, 105, 205); // clear focus indicator
pub const C_TAG: Color = Color::Rgb(85, 145, 205);
pub const C_COVER: Color = Color::Rgb(95, 75, 160);
pub const C_SEASONS: Color = Color::Rgb(105, 165, 135);
pub const C_UPDATED: Color = Color::Rgb(160, 140, 90);
pub const C_FILTER_BG: Color = Color::Rgb(22, 22, 34);
pub const C_FILTER_FG: Color = Color::Rgb(255, 200, 80);
pub const C_MODE_NORMAL: Color = Color::Rgb(120, 120, 142);
pub const C_MODE_FILTER: Color = Color::Rgb(255, 200, 80);
pub const C_LIVE: Color = Color::Rgb(140, 180, 150);
pub const C_OVERLAY_BG: Color = Color::Rgb(20, 20, 28);

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_focused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER_FOCUSED)
}

pub fn style_unfocused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}
