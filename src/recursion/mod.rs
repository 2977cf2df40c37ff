//! Canned recursion traces
//!
//! The recursion topic does not look at the numbers in the snippet. It only
//! asks which textbook function the snippet is about and replays a fixed
//! illustration for it:
//! - [`Classification`]: which template applies
//! - [`frames`]: the call stack, deepest call last
//! - [`tree`]: the call tree
//! - [`trace`]: the step-by-step narrative

pub mod frames;
pub mod trace;
pub mod tree;

pub use frames::{synthesize_frames, CallFrame, ReturnExpr};
pub use trace::render_trace;
pub use tree::{synthesize_tree, CallTreeNode};

use std::fmt;

/// Marker searched for to recognise a factorial snippet
pub const FACTORIAL_MARKER: &str = "factorial";
/// Marker searched for to recognise a Fibonacci snippet
pub const FIBONACCI_MARKER: &str = "fibonacci";

/// Recognised recursion pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Single recursion, linear call chain
    Factorial,
    /// Double recursion, branching call tree
    Fibonacci,
    /// Anything else; replayed with a generic double-recursion template
    Unknown,
}

impl Classification {
    /// Classify by plain substring search. Factorial wins when both markers
    /// are present.
    pub fn classify(source: &str) -> Self {
        let classification = if source.contains(FACTORIAL_MARKER) {
            Classification::Factorial
        } else if source.contains(FIBONACCI_MARKER) {
            Classification::Fibonacci
        } else {
            Classification::Unknown
        };
        tracing::debug!(%classification, "classified recursion snippet");
        classification
    }

    /// Name used for frame labels
    pub fn function_name(self) -> &'static str {
        match self {
            Classification::Factorial => "factorial",
            Classification::Fibonacci => "fibonacci",
            Classification::Unknown => "func",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Factorial => write!(f, "factorial"),
            Classification::Fibonacci => write!(f, "fibonacci"),
            Classification::Unknown => write!(f, "unknown"),
        }
    }
}
