// Integration tests for the recursion topic pipeline

use stacklens::engine::{topics, visualize_recursion, TopicKey};
use stacklens::recursion::{
    render_trace, synthesize_frames, synthesize_tree, Classification, ReturnExpr,
};

const CANONICAL_FACTORIAL_TRACE: &str = "Recursion Execution Trace:
━━━━━━━━━━━━━━━━━━━━━━━━
Call Phase (Going Down):
  factorial(5) → factorial(4)
  factorial(4) → factorial(3)
  factorial(3) → factorial(2)
  factorial(2) → factorial(1)
  factorial(1) → BASE CASE

Return Phase (Coming Back Up):
  factorial(1) = 1
  factorial(2) = 2 × 1 = 2
  factorial(3) = 3 × 2 = 6
  factorial(4) = 4 × 6 = 24
  factorial(5) = 5 × 24 = 120

Final Result: 120";

#[test]
fn test_classifier_markers() {
    assert_eq!(Classification::classify("int factorial(int n)"), Classification::Factorial);
    assert_eq!(Classification::classify("int fibonacci(int n)"), Classification::Fibonacci);
    assert_eq!(Classification::classify("int power(int b, int e)"), Classification::Unknown);
    assert_eq!(Classification::classify(""), Classification::Unknown);
}

#[test]
fn test_classifier_prefers_factorial() {
    let source = "int fibonacci(int n); int factorial(int n);";
    assert_eq!(Classification::classify(source), Classification::Factorial);
}

#[test]
fn test_factorial_frames_for_default_topic() {
    let source = topics::lookup(TopicKey::Recursion).default_source;
    let classification = Classification::classify(source);
    let frames = synthesize_frames(classification);

    let params: Vec<i64> = frames.iter().map(|f| f.parameter_value).collect();
    assert_eq!(params, vec![5, 4, 3, 2, 1]);

    let base: Vec<bool> = frames.iter().map(|f| f.is_base_case).collect();
    assert_eq!(base, vec![false, false, false, false, true]);

    assert_eq!(frames[4].return_expression, ReturnExpr::Literal(1));
    assert_eq!(frames[0].label, "factorial(5)");
    assert_eq!(frames[0].return_expression.to_string(), "5 × factorial(4)");
}

#[test]
fn test_fibonacci_frames() {
    let frames = synthesize_frames(Classification::Fibonacci);

    let labels: Vec<&str> = frames.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["fibonacci(4)", "fibonacci(3)", "fibonacci(2)", "fibonacci(1)", "fibonacci(0)"]
    );
    assert_eq!(
        frames[0].return_expression,
        ReturnExpr::Symbolic("fibonacci(3) + fibonacci(2)".to_string())
    );
    assert_eq!(frames[3].return_expression, ReturnExpr::Literal(1));
    assert_eq!(frames[4].return_expression, ReturnExpr::Literal(0));
    assert!(frames[3].is_base_case && frames[4].is_base_case);
    assert!(!frames[2].is_base_case);
}

#[test]
fn test_unknown_frames_use_generic_label() {
    let frames = synthesize_frames(Classification::Unknown);

    assert_eq!(frames.len(), 6);
    assert_eq!(frames[0].label, "func(5)");
    assert_eq!(frames[0].return_expression.to_string(), "func(4) + func(3)");
    assert_eq!(frames[5].label, "func(0)");
    assert_eq!(frames[5].return_expression, ReturnExpr::Literal(0));
}

#[test]
fn test_factorial_tree_is_linear_chain() {
    let root = synthesize_tree(Classification::Factorial).expect("factorial has a tree");

    let mut labels = Vec::new();
    let mut node = &root;
    loop {
        labels.push(node.label.clone());
        match node.children.as_slice() {
            [] => break,
            [only] => node = only,
            _ => panic!("factorial tree must not branch"),
        }
    }

    assert_eq!(
        labels,
        vec![
            "factorial(5)",
            "factorial(4)",
            "factorial(3)",
            "factorial(2)",
            "factorial(1)",
            "Base: return 1",
        ]
    );
    assert_eq!(root.depth(), 6);
}

#[test]
fn test_fibonacci_tree_branches_once() {
    let root = synthesize_tree(Classification::Fibonacci).expect("fibonacci has a tree");

    assert_eq!(root.label, "fib(5)");
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].label, "fib(4)");
    assert_eq!(root.children[1].label, "fib(3)");
    assert!(root.children.iter().all(|c| c.is_leaf()));
}

#[test]
fn test_unknown_has_no_tree() {
    assert!(synthesize_tree(Classification::Unknown).is_none());
}

#[test]
fn test_factorial_trace_matches_canonical_text() {
    let frames = synthesize_frames(Classification::Factorial);
    let trace = render_trace(Classification::Factorial, &frames);

    assert_eq!(trace.as_deref(), Some(CANONICAL_FACTORIAL_TRACE));
}

#[test]
fn test_trace_only_for_factorial() {
    for classification in [Classification::Fibonacci, Classification::Unknown] {
        let frames = synthesize_frames(classification);
        assert_eq!(render_trace(classification, &frames), None);
    }
    assert_eq!(render_trace(Classification::Factorial, &[]), None);
}

#[test]
fn test_trace_ignores_snippet_numbers() {
    // The frames are canned; a different argument in the snippet changes nothing
    let vis = visualize_recursion("int factorial(int n) { ... } factorial(10);");

    assert_eq!(vis.frames.len(), 5);
    assert_eq!(vis.narrative.as_deref(), Some(CANONICAL_FACTORIAL_TRACE));
}
