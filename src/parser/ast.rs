//! Extracted statement shapes
//!
//! These are not a syntax tree: the extractors only recognise the two
//! statement shapes the teaching topics rely on and keep the raw text of
//! everything else they need.

use std::fmt;

/// Source location for highlighting the line a statement came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A `<type> <*?><name> = <expr>;` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub declared_type: String,
    pub is_pointer: bool,
    pub name: String,
    /// Raw initializer expression, trimmed. Never evaluated.
    pub initializer_text: String,
    pub location: SourceLocation,
}

impl Declaration {
    /// Type as written in the visualizer, e.g. `int*`
    pub fn type_annotation(&self) -> String {
        if self.is_pointer {
            format!("{}*", self.declared_type)
        } else {
            self.declared_type.clone()
        }
    }
}

/// A `printf("<format>", ...)` call; only the format survives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintStatement {
    /// Format string with `\n` and `\t` decoded
    pub format_text: String,
    pub location: SourceLocation,
}
