//! Explanation pane rendering

use super::{clamp_scroll, pane_block};
use crate::explain::Explanation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the explanation pane. `None` means nothing has been requested yet.
pub fn render_explain_pane(
    frame: &mut Frame,
    area: Rect,
    explanation: Option<&Explanation>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let (title, text, color) = match explanation {
        None => (
            " Explanation ",
            "Press e to explain this code.",
            DEFAULT_THEME.comment,
        ),
        Some(Explanation::Remote(text)) => (" Explanation ", text.as_str(), DEFAULT_THEME.fg),
        Some(Explanation::Fallback(text)) => {
            (" Explanation (offline) ", text.as_str(), DEFAULT_THEME.fg)
        }
    };

    // Approximate wrapped height; word wrapping can only add a few rows
    let width = area.width.saturating_sub(2).max(1) as usize;
    let wrapped_rows: usize = text
        .lines()
        .map(|line| line.chars().count().max(1).div_ceil(width))
        .sum();
    clamp_scroll(wrapped_rows, area, scroll_offset);
    let scroll = (*scroll_offset).min(u16::MAX as usize) as u16;

    let paragraph = Paragraph::new(text)
        .block(pane_block(title.to_string(), is_focused))
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
