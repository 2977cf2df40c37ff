//! Call tree synthesis

use super::frames::FACTORIAL_DEPTH;
use super::Classification;

/// A call in the call tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallTreeNode {
    pub label: String,
    pub children: Vec<CallTreeNode>,
}

impl CallTreeNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        CallTreeNode {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(label: impl Into<String>, children: Vec<CallTreeNode>) -> Self {
        CallTreeNode {
            label: label.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(CallTreeNode::depth).max().unwrap_or(0)
    }
}

/// Tree for the classification, or `None` when no template exists.
pub fn synthesize_tree(classification: Classification) -> Option<CallTreeNode> {
    match classification {
        Classification::Factorial => Some(factorial_chain()),
        Classification::Fibonacci => Some(CallTreeNode::with_children(
            "fib(5)",
            vec![CallTreeNode::leaf("fib(4)"), CallTreeNode::leaf("fib(3)")],
        )),
        Classification::Unknown => None,
    }
}

/// `factorial(5)` → ... → `factorial(1)` → base leaf, one child per node
fn factorial_chain() -> CallTreeNode {
    (1..=FACTORIAL_DEPTH).fold(CallTreeNode::leaf("Base: return 1"), |child, n| {
        CallTreeNode::with_children(format!("factorial({})", n), vec![child])
    })
}
