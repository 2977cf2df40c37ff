//! Plain-text rendering of a visualization
//!
//! Used by `--print` mode and by the call tree in the memory pane. Produces
//! the same information as the TUI panes without any styling.

use crate::engine::{PointerVisualization, RecursionVisualization, Visualization};
use crate::memory::format_address;
use crate::recursion::CallTreeNode;
use crate::terminal::ConsoleOutput;

/// Shown in the output pane when a recursion pattern has no narrative
pub const NO_TRACE_MESSAGE: &str = "No execution trace available for this recursion pattern.";

/// Shown in the memory pane when a recursion pattern has no tree template
pub const NO_TREE_MESSAGE: &str = "(no call tree for this pattern)";

/// Box-drawn tree lines, root first
pub fn tree_lines(root: &CallTreeNode) -> Vec<String> {
    let mut lines = vec![root.label.clone()];
    push_children(root, "", &mut lines);
    lines
}

fn push_children(node: &CallTreeNode, prefix: &str, lines: &mut Vec<String>) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let last = i + 1 == count;
        let branch = if last { "└─ " } else { "├─ " };
        lines.push(format!("{}{}{}", prefix, branch, child.label));

        let extension = if last { "   " } else { "│  " };
        push_children(child, &format!("{}{}", prefix, extension), lines);
    }
}

/// Stack diagram and variable details for the pointer topic
pub fn stack_lines(vis: &PointerVisualization) -> Vec<String> {
    let layout = &vis.layout;
    let mut lines = vec!["Higher Memory ↑".to_string()];

    // Highest address on top, like a real stack diagram
    for cell in layout.cells().iter().rev() {
        let mut line = format!(
            "  {}  {:<10} {}",
            format_address(cell.address),
            cell.name,
            cell.display_value
        );
        if cell.is_pointer {
            match layout.target_of(cell) {
                Some(target) => line.push_str(&format!("  (points to {})", target.name)),
                None => line.push_str("  (unassigned slot)"),
            }
        }
        lines.push(line);
    }
    lines.push("Lower Memory ↓".to_string());

    lines.push(String::new());
    lines.push("Variable Analysis".to_string());
    for cell in layout.cells() {
        lines.push(format!(
            "  {}: type {}, value {}, {} bytes",
            cell.name,
            cell.type_annotation(),
            cell.initializer_text,
            cell.size_bytes
        ));
    }
    lines
}

/// Call tree and frames for the recursion topic
pub fn call_lines(vis: &RecursionVisualization) -> Vec<String> {
    let mut lines = vec!["Function Call Tree".to_string()];
    match &vis.tree {
        Some(root) => lines.extend(tree_lines(root).into_iter().map(|l| format!("  {}", l))),
        None => lines.push(format!("  {}", NO_TREE_MESSAGE)),
    }

    lines.push(String::new());
    lines.push("Call Stack (Down) & Return (Up)".to_string());
    for frame in &vis.frames {
        let base = if frame.is_base_case { "  BASE CASE" } else { "" };
        lines.push(format!(
            "  {}  n = {}{}  Returns: {}",
            frame.label, frame.parameter_value, base, frame.return_expression
        ));
    }
    lines
}

/// Console output or narrative
pub fn output_text(vis: &Visualization) -> String {
    match vis {
        Visualization::Pointers(p) => match &p.output {
            ConsoleOutput::Lines(_) => p.output.text().unwrap_or_default(),
            ConsoleOutput::NoOutputDetected => ConsoleOutput::NO_OUTPUT_MESSAGE.to_string(),
        },
        Visualization::Recursion(r) => r
            .narrative
            .clone()
            .unwrap_or_else(|| NO_TRACE_MESSAGE.to_string()),
    }
}

/// Everything `--print` writes for one run
pub fn render_plain(vis: &Visualization) -> String {
    let (title, body) = match vis {
        Visualization::Pointers(p) => ("Stack", stack_lines(p)),
        Visualization::Recursion(r) => ("Recursion Tree & Call Stack", call_lines(r)),
    };

    let mut out = format!("== {} ==\n", title);
    for line in body {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("\n== Output ==\n");
    out.push_str(&output_text(vis));
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
