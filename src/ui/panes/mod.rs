//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code display with syntax highlighting and markers on
//!   the lines the visualization was built from
//! - [`memory`]: Stack diagram (pointers) or call tree and frames (recursion)
//! - [`terminal`]: Simulated console output or recursion narrative
//! - [`explain`]: Explanation text, remote or fallback
//! - [`status`]: Status bar with keybindings and the active topic
//!
//! Each pane module exports a primary `render_*_pane()` function. Panes are
//! stateless apart from the scroll offset they are handed.

pub mod explain;
pub mod memory;
pub mod source;
pub mod status;
pub mod terminal;

pub use explain::render_explain_pane;
pub use memory::render_memory_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use terminal::render_terminal_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus highlight applied
pub(crate) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `offset` so a list of `total` rows fills `area` without running past
/// its end. Returns the number of visible rows.
pub(crate) fn clamp_scroll(total: usize, area: Rect, offset: &mut usize) -> usize {
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total > visible_height {
        *offset = (*offset).min(total - visible_height);
    } else {
        *offset = 0;
    }

    visible_height
}
