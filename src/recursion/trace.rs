//! Step-by-step recursion narrative
//!
//! Only single recursion has a narrative: the call phase walks down the
//! frames, the return phase walks back up multiplying as it goes. Branching
//! templates have no linear story to tell and render nothing.

use super::frames::{CallFrame, ReturnExpr};
use super::Classification;

const TRACE_TITLE: &str = "Recursion Execution Trace:";
const TRACE_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━";

/// Narrative for `frames`, or `None` when the classification has no
/// narrative template or there are no frames.
pub fn render_trace(classification: Classification, frames: &[CallFrame]) -> Option<String> {
    if classification != Classification::Factorial || frames.is_empty() {
        return None;
    }

    let mut lines = vec![
        TRACE_TITLE.to_string(),
        TRACE_RULE.to_string(),
        "Call Phase (Going Down):".to_string(),
    ];

    for (i, frame) in frames.iter().enumerate() {
        match frames.get(i + 1) {
            Some(next) if !frame.is_base_case => {
                lines.push(format!("  {} → {}", frame.label, next.label));
            }
            _ => lines.push(format!("  {} → BASE CASE", frame.label)),
        }
    }

    lines.push(String::new());
    lines.push("Return Phase (Coming Back Up):".to_string());

    let mut returned: i64 = 0;
    for frame in frames.iter().rev() {
        match &frame.return_expression {
            ReturnExpr::Literal(value) => {
                returned = *value;
                lines.push(format!("  {} = {}", frame.label, value));
            }
            ReturnExpr::Symbolic(_) => {
                let value = frame.parameter_value.saturating_mul(returned);
                lines.push(format!(
                    "  {} = {} × {} = {}",
                    frame.label, frame.parameter_value, returned, value
                ));
                returned = value;
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("Final Result: {}", returned));

    tracing::debug!(result = returned, "rendered recursion trace");
    Some(lines.join("\n"))
}
