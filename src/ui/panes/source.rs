//! Source code pane rendering with syntax highlighting
//!
//! This module renders the working source with basic syntax highlighting.
//! Lines the last visualization was built from (declarations and `printf`
//! calls) are marked in the gutter.
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles; it is independent of the extractors' scanner.

use super::{clamp_scroll, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for C-like code
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (byte, c) = chars[i];

        // Comments and preprocessor lines run to the end of the line
        let is_comment = c == '/' && chars.get(i + 1).is_some_and(|&(_, n)| n == '/');
        let is_directive = c == '#' && line[..byte].trim().is_empty();
        if is_comment || is_directive {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let color = if is_comment {
                DEFAULT_THEME.comment
            } else {
                DEFAULT_THEME.keyword
            };
            spans.push(Span::styled(&line[byte..], Style::default().fg(color)));
            return Line::from(spans);
        }

        // Handle strings
        if c == '"' {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != '"' {
                end += if chars[end].1 == '\\' { 2 } else { 1 };
            }
            let end = (end + 1).min(chars.len());
            let end_byte = chars.get(end).map_or(line.len(), |&(b, _)| b);
            spans.push(Span::styled(
                &line[byte..end_byte],
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let style = get_keyword_style(&current_word, c == '(');
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                '*' | '&' => Style::default().fg(DEFAULT_THEME.pointer),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = get_keyword_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn get_keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "char" | "void" | "bool" | "float" | "double" | "long" | "short" | "unsigned"
        | "signed" => Style::default().fg(DEFAULT_THEME.type_name),
        "struct" | "return" | "if" | "else" | "while" | "for" | "do" | "switch" | "case"
        | "default" | "break" | "continue" | "goto" | "sizeof" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "NULL" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Width of the `▸1234 ` gutter
const GUTTER_WIDTH: usize = 6;

/// Render the source code pane.
///
/// `marked_lines` are 1-based line numbers to flag in the gutter. `cursor`
/// is the 0-based (row, column) of the edit cursor while editing; the pane
/// scrolls to keep it in view.
#[allow(clippy::too_many_arguments)]
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    source_code: &str,
    marked_lines: &[usize],
    cursor: Option<(usize, usize)>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = if cursor.is_some() {
        format!(" {} [editing] ", title)
    } else {
        format!(" {} ", title)
    };
    let block = pane_block(title, is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    // A trailing newline puts the cursor on a row `lines()` does not yield
    let total = cursor.map_or(lines.len(), |(row, _)| lines.len().max(row + 1));
    let visible_height = clamp_scroll(total, area, scroll_offset);

    if let Some((row, col)) = cursor {
        if row < *scroll_offset {
            *scroll_offset = row;
        } else if row >= *scroll_offset + visible_height {
            *scroll_offset = row + 1 - visible_height;
        }

        let x = area.x as usize + 1 + GUTTER_WIDTH + col;
        let y = area.y as usize + 1 + row - *scroll_offset;
        let max_x = (area.x + area.width).saturating_sub(2) as usize;
        frame.set_cursor_position((x.min(max_x) as u16, y as u16));
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_marked = marked_lines.contains(&line_num);

            let (marker, num_style) = if is_marked {
                (
                    "▸",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut content_line = highlight_source_code(line);
            if is_marked {
                for span in &mut content_line.spans {
                    span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                }
            }

            let mut final_spans = vec![Span::styled(format!("{}{:4} ", marker, line_num), num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
