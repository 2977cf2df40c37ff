//! Output pane rendering

use super::{clamp_scroll, pane_block};
use crate::engine::Visualization;
use crate::terminal::ConsoleOutput;
use crate::ui::text::NO_TRACE_MESSAGE;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Shown before the first run
pub const OUTPUT_PLACEHOLDER: &str = "Press v to visualize and see output...";

/// Render the output pane: simulated console output for pointers, the
/// execution narrative for recursion
pub fn render_terminal_pane(
    frame: &mut Frame,
    area: Rect,
    rendered: Option<&Visualization>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let (title, lines, notice) = match rendered {
        None => (" Output ", Vec::new(), Some((OUTPUT_PLACEHOLDER, DEFAULT_THEME.comment))),
        Some(Visualization::Pointers(p)) => match &p.output {
            ConsoleOutput::NoOutputDetected => (
                " Output ",
                Vec::new(),
                Some((ConsoleOutput::NO_OUTPUT_MESSAGE, DEFAULT_THEME.error)),
            ),
            output => (" Output ", output.display_lines(), None),
        },
        Some(Visualization::Recursion(r)) => match &r.narrative {
            Some(narrative) => (
                " Execution Trace ",
                narrative.lines().map(str::to_string).collect(),
                None,
            ),
            None => (
                " Execution Trace ",
                Vec::new(),
                Some((NO_TRACE_MESSAGE, DEFAULT_THEME.comment)),
            ),
        },
    };

    let block = pane_block(title.to_string(), is_focused);

    if let Some((message, color)) = notice {
        let paragraph = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(color));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = clamp_scroll(lines.len(), area, scroll_offset);

    let visible_items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| ListItem::new(line).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
