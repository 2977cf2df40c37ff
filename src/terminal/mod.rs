//! Simulated console output for the pointer topic
//!
//! Nothing runs, so `printf` output is faked: every declared name that
//! appears as a whole word in a format string is replaced by that variable's
//! initializer text. `%d` and friends are left alone. The result reads like
//! what the program *talks about*, not what it would print.

use crate::parser::ast::{Declaration, PrintStatement};

/// What the console pane shows after a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOutput {
    /// One entry per extracted print statement, in order. Entries may be
    /// empty or contain embedded newlines.
    Lines(Vec<String>),
    /// The snippet contained no recognisable print statement
    NoOutputDetected,
}

impl ConsoleOutput {
    /// Message shown instead of output when nothing was found
    pub const NO_OUTPUT_MESSAGE: &'static str =
        "No printf output detected. Add printf statements to see execution output.";

    pub fn is_detected(&self) -> bool {
        matches!(self, ConsoleOutput::Lines(_))
    }

    /// Concatenated text block, one `\n`-terminated line per print.
    /// `None` when no output was detected.
    pub fn text(&self) -> Option<String> {
        match self {
            ConsoleOutput::Lines(lines) => Some(lines.iter().map(|l| format!("{}\n", l)).collect()),
            ConsoleOutput::NoOutputDetected => None,
        }
    }

    /// Lines as they appear on screen, with embedded newlines split out
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            ConsoleOutput::Lines(lines) => lines
                .iter()
                .flat_map(|line| line.split('\n').map(str::to_string))
                .collect(),
            ConsoleOutput::NoOutputDetected => Vec::new(),
        }
    }
}

/// Substitute declared names into each print's format text.
///
/// Declarations are applied in order, each replacing every whole-word
/// occurrence of its name; a later declaration therefore sees the text
/// produced by earlier ones. A single trailing newline in a format is taken
/// as the line break itself.
pub fn simulate_output(prints: &[PrintStatement], declarations: &[Declaration]) -> ConsoleOutput {
    if prints.is_empty() {
        tracing::debug!("no print statements to simulate");
        return ConsoleOutput::NoOutputDetected;
    }

    let lines = prints
        .iter()
        .map(|print| {
            let text = declarations.iter().fold(print.format_text.clone(), |text, decl| {
                replace_word(&text, &decl.name, &decl.initializer_text)
            });
            match text.strip_suffix('\n') {
                Some(stripped) => stripped.to_string(),
                None => text,
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(lines = lines.len(), "simulated console output");
    ConsoleOutput::Lines(lines)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace every occurrence of `word` in `text` that is not part of a longer
/// identifier.
pub fn replace_word(text: &str, word: &str, replacement: &str) -> String {
    if word.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut copied = 0;

    for (index, _) in text.match_indices(word) {
        let before = text[..index].chars().next_back();
        let after = text[index + word.len()..].chars().next();
        if before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
            continue;
        }

        result.push_str(&text[copied..index]);
        result.push_str(replacement);
        copied = index + word.len();
    }

    result.push_str(&text[copied..]);
    result
}
