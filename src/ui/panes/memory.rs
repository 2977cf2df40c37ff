//! Memory pane rendering
//!
//! Shows what the last run synthesized:
//!
//! - **Pointers**: a stack diagram, highest address on top, followed by a
//!   per-variable analysis (type, initializer, size)
//! - **Recursion**: the call tree followed by the call frames, each with its
//!   parameter, base-case badge and return expression
//!
//! # Pointer arrows
//!
//! Pointer cells show their target address and, when a cell lives there, its
//! name. A pointer declared first points below the base address and is
//! marked as an unassigned slot.

use super::{clamp_scroll, pane_block};
use crate::engine::{PointerVisualization, RecursionVisualization, Visualization};
use crate::memory::format_address;
use crate::ui::text::{tree_lines, NO_TREE_MESSAGE};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the memory pane
pub fn render_memory_pane(
    frame: &mut Frame,
    area: Rect,
    rendered: Option<&Visualization>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let (title, all_items) = match rendered {
        None => (
            " Memory ",
            vec![ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment))],
        ),
        Some(Visualization::Pointers(p)) => (" Stack ", stack_items(p)),
        Some(Visualization::Recursion(r)) => (" Recursion Tree & Call Stack ", call_items(r)),
    };

    let block = pane_block(title.to_string(), is_focused);
    let visible_height = clamp_scroll(all_items.len(), area, scroll_offset);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

fn heading(text: &str) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    )))
}

fn muted(text: &str) -> ListItem<'static> {
    ListItem::new(text.to_string()).style(Style::default().fg(DEFAULT_THEME.comment))
}

fn stack_items(vis: &PointerVisualization) -> Vec<ListItem<'static>> {
    let layout = &vis.layout;
    let mut items = Vec::new();

    if layout.is_empty() {
        items.push(muted("(no declarations found)"));
        return items;
    }

    items.push(muted("Higher Memory ↑"));

    for cell in layout.cells().iter().rev() {
        let value_color = if cell.is_pointer {
            DEFAULT_THEME.pointer
        } else {
            DEFAULT_THEME.number
        };

        let mut spans = vec![
            Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(
                format!("{} ", format_address(cell.address)),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format!("{:<8} ", cell.name),
                Style::default().fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(cell.display_value.clone(), Style::default().fg(value_color)),
        ];

        if cell.is_pointer {
            let (note, color) = match layout.target_of(cell) {
                Some(target) => (format!("  ({})", target.name), DEFAULT_THEME.comment),
                None => ("  (unassigned slot)".to_string(), DEFAULT_THEME.error),
            };
            spans.push(Span::styled(note, Style::default().fg(color)));
        }

        items.push(ListItem::new(Line::from(spans)));
    }

    items.push(muted("Lower Memory ↓"));
    items.push(ListItem::new(""));
    items.push(heading("Variable Analysis"));

    for cell in layout.cells() {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("  {}", cell.name),
                Style::default().fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(": ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(cell.type_annotation(), Style::default().fg(DEFAULT_THEME.type_name)),
            Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                cell.initializer_text.clone(),
                Style::default().fg(DEFAULT_THEME.string),
            ),
            Span::styled(
                format!("  {} bytes", cell.size_bytes),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ])));
    }

    items
}

fn call_items(vis: &RecursionVisualization) -> Vec<ListItem<'static>> {
    let mut items = vec![heading("Function Call Tree")];

    match &vis.tree {
        Some(root) => {
            for line in tree_lines(root) {
                let color = if line.contains("Base") {
                    DEFAULT_THEME.success
                } else {
                    DEFAULT_THEME.function
                };
                items.push(ListItem::new(format!("  {}", line)).style(Style::default().fg(color)));
            }
        }
        None => items.push(muted(&format!("  {}", NO_TREE_MESSAGE))),
    }

    items.push(ListItem::new(""));
    items.push(heading("Call Stack (Down) & Return (Up)"));

    let count = vis.frames.len();
    for (i, call) in vis.frames.iter().enumerate() {
        let mut header = vec![
            Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(
                call.label.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.function)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  n = {}", call.parameter_value),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ];
        if call.is_base_case {
            header.push(Span::styled(
                " BASE CASE ",
                Style::default()
                    .bg(DEFAULT_THEME.success)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        items.push(ListItem::new(Line::from(header)));

        items.push(ListItem::new(Line::from(vec![
            Span::styled("     ↖ Returns: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                call.return_expression.to_string(),
                Style::default().fg(DEFAULT_THEME.return_value),
            ),
        ])));

        if i + 1 < count {
            items.push(muted("     ↓"));
        }
    }

    items
}
