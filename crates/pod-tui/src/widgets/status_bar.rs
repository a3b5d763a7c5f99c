//! Status bar — bottom line with mode, keybindings, and the live region.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{C_LIVE, C_MODE_FILTER, C_MODE_NORMAL, C_MUTED};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Filter,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "BROWSE",
            Self::Filter => "FILTER",
        }
    }

    pub fn color(self) -> ratatui::style::Color {
        match self {
            Self::Normal => C_MODE_NORMAL,
            Self::Filter => C_MODE_FILTER,
        }
    }
}

/// Draw the keybindings footer bar (one row). The right edge carries the
/// live-region text so announcements are visible on screen as well as to
/// assistive output.
pub fn draw_keys_bar(frame: &mut Frame, area: Rect, mode: InputMode, live_text: &str) {
    let keys = match mode {
        InputMode::Normal => {
            " ↑↓←→/hjkl move  Enter/Space open  / filter  s/S sort  g/G first/last  q quit"
        }
        InputMode::Filter => " type to filter  ↑↓←→ move  Enter keep  Esc clear, then close",
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", mode.label()),
            Style::default()
                .fg(mode.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(keys, Style::default().fg(C_MUTED)),
    ];

    if !live_text.is_empty() {
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let remaining = (area.width as usize).saturating_sub(used + live_text.width() + 2);
        spans.push(Span::raw(" ".repeat(remaining)));
        spans.push(Span::styled(
            format!("{} ", live_text),
            Style::default().fg(C_LIVE),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
