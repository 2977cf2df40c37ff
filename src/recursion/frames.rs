//! Call frame synthesis

use super::Classification;
use std::fmt;

/// Depth of the canned factorial example, `factorial(5)`
pub const FACTORIAL_DEPTH: i64 = 5;

/// What a frame hands back to its caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnExpr {
    /// Base cases return a plain number
    Literal(i64),
    /// Recursive cases return an expression over deeper calls
    Symbolic(String),
}

impl fmt::Display for ReturnExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnExpr::Literal(n) => write!(f, "{}", n),
            ReturnExpr::Symbolic(expr) => f.write_str(expr),
        }
    }
}

/// One activation of the recursive function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// e.g. `factorial(3)`
    pub label: String,
    pub parameter_value: i64,
    pub is_base_case: bool,
    pub return_expression: ReturnExpr,
}

impl CallFrame {
    fn new(function: &str, n: i64, is_base_case: bool, return_expression: ReturnExpr) -> Self {
        CallFrame {
            label: format!("{}({})", function, n),
            parameter_value: n,
            is_base_case,
            return_expression,
        }
    }
}

/// Frames from the outermost call down to the base case(s).
///
/// The values are fixed per classification and do not depend on the
/// snippet's actual arguments.
pub fn synthesize_frames(classification: Classification) -> Vec<CallFrame> {
    let function = classification.function_name();

    let frames: Vec<CallFrame> = match classification {
        Classification::Factorial => (1..=FACTORIAL_DEPTH)
            .rev()
            .map(|n| {
                if n == 1 {
                    CallFrame::new(function, n, true, ReturnExpr::Literal(1))
                } else {
                    let expr = format!("{} × {}({})", n, function, n - 1);
                    CallFrame::new(function, n, false, ReturnExpr::Symbolic(expr))
                }
            })
            .collect(),
        Classification::Fibonacci => double_recursion_frames(function, 4),
        Classification::Unknown => double_recursion_frames(function, 5),
    };

    tracing::debug!(%classification, frames = frames.len(), "synthesized call frames");
    frames
}

/// `f(top)` down to `f(0)`, where `f(n) = f(n-1) + f(n-2)`, `f(1) = 1`, `f(0) = 0`
fn double_recursion_frames(function: &str, top: i64) -> Vec<CallFrame> {
    (0..=top)
        .rev()
        .map(|n| match n {
            0 | 1 => CallFrame::new(function, n, true, ReturnExpr::Literal(n)),
            _ => {
                let expr = format!("{f}({}) + {f}({})", n - 1, n - 2, f = function);
                CallFrame::new(function, n, false, ReturnExpr::Symbolic(expr))
            }
        })
        .collect()
}
