//! PaneChrome — standardized bordered pane with focus styling.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::{style_focused_border, style_unfocused_border, C_MUTED, C_PRIMARY, C_SECONDARY};

/// Renders a bordered pane with consistent focus styling and an optional
/// right-aligned subtitle (e.g. "8/8 · title").
pub fn pane_chrome<'a>(title: &'a str, subtitle: Option<&'a str>, focused: bool) -> Block<'a> {
    let border_style = if focused {
        style_focused_border()
    } else {
        style_unfocused_border()
    };

    let title_style = if focused {
        Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(C_MUTED)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(Span::styled(title, title_style)));

    if let Some(sub) = subtitle {
        block.title_top(
            Line::from(Span::styled(
                format!(" {} ", sub),
                Style::default().fg(C_SECONDARY),
            ))
            .right_aligned(),
        )
    } else {
        block
    }
}
