// Session, topic registry and explain fallback tests

use std::cell::RefCell;

use stacklens::engine::{topics, Session, TopicKey, Visualization};
use stacklens::explain::{
    explain_or_fallback, fallback_explanation, ExplainError, ExplainRequest, ExplainResponse,
    ExplainService, Explanation, OfflineExplainService, GENERIC_FALLBACK, POINTERS_FALLBACK,
    RECURSION_FALLBACK,
};
use stacklens::terminal::ConsoleOutput;
use stacklens::ui::text::render_plain;

/// Answers every request with a fixed text and records what it was asked
struct EchoService {
    seen: RefCell<Vec<ExplainRequest>>,
}

impl ExplainService for EchoService {
    fn explain(&self, request: &ExplainRequest) -> Result<ExplainResponse, ExplainError> {
        self.seen.borrow_mut().push(request.clone());
        Ok(ExplainResponse {
            explanation: format!("explained {}", request.topic),
        })
    }
}

/// Fails like a server returning 500
struct BrokenService;

impl ExplainService for BrokenService {
    fn explain(&self, _request: &ExplainRequest) -> Result<ExplainResponse, ExplainError> {
        Err(ExplainError::Status(500))
    }
}

#[test]
fn test_new_session_uses_topic_default() {
    let session = Session::new(TopicKey::Recursion);

    assert_eq!(session.topic(), TopicKey::Recursion);
    assert_eq!(session.source(), topics::lookup(TopicKey::Recursion).default_source);
    assert!(session.rendered().is_none());
}

#[test]
fn test_reset_restores_default_and_clears_model() {
    let mut session = Session::new(TopicKey::Pointers);
    session.set_source("int y = 3;\nprintf(\"y=%d\", y);".to_string());

    match session.visualize() {
        Visualization::Pointers(p) => assert_eq!(p.layout.len(), 1),
        other => panic!("expected pointer visualization, got {:?}", other),
    }
    assert!(session.rendered().is_some());

    session.reset();

    assert_eq!(session.source(), topics::lookup(TopicKey::Pointers).default_source);
    assert!(session.rendered().is_none());
}

#[test]
fn test_load_topic_switches_source_and_clears() {
    let mut session = Session::default();
    session.visualize();

    session.load_topic(TopicKey::Recursion);

    assert_eq!(session.topic(), TopicKey::Recursion);
    assert!(session.source().contains("factorial"));
    assert!(session.rendered().is_none());

    let vis = session.visualize();
    assert_eq!(vis.topic(), TopicKey::Recursion);
}

#[test]
fn test_topic_definition_is_not_mutated() {
    let before = topics::lookup(TopicKey::Pointers).default_source;
    let mut session = Session::new(TopicKey::Pointers);
    session.set_source(String::from("edited"));

    assert_eq!(topics::lookup(TopicKey::Pointers).default_source, before);
}

#[test]
fn test_topic_key_parsing() {
    assert_eq!("pointers".parse::<TopicKey>().unwrap(), TopicKey::Pointers);
    assert_eq!(" Recursion ".parse::<TopicKey>().unwrap(), TopicKey::Recursion);
    assert!("graphs".parse::<TopicKey>().is_err());
    assert_eq!(topics::all().len(), 2);
    for key in TopicKey::ALL {
        assert_eq!(topics::lookup(key).key, key);
    }
}

#[test]
fn test_fallback_table() {
    assert_eq!(fallback_explanation("pointers"), POINTERS_FALLBACK);
    assert_eq!(fallback_explanation("recursion"), RECURSION_FALLBACK);
    assert_eq!(fallback_explanation("graphs"), GENERIC_FALLBACK);
    assert_eq!(
        GENERIC_FALLBACK,
        "Unable to generate explanation. Try modifying your code."
    );
}

#[test]
fn test_remote_explanation_passes_code_and_topic() {
    let service = EchoService {
        seen: RefCell::new(Vec::new()),
    };
    let session = Session::new(TopicKey::Recursion);

    let explanation = session.explain(&service);

    assert_eq!(explanation, Explanation::Remote("explained recursion".to_string()));
    let seen = service.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].topic, "recursion");
    assert_eq!(seen[0].code, session.source());
}

#[test]
fn test_failures_fall_back_by_topic() {
    let broken = explain_or_fallback(&BrokenService, "int x = 1;", "pointers");
    assert_eq!(broken, Explanation::Fallback(POINTERS_FALLBACK.to_string()));
    assert!(broken.is_fallback());

    let offline = explain_or_fallback(&OfflineExplainService, "", "anything");
    assert_eq!(offline.text(), GENERIC_FALLBACK);
}

#[test]
fn test_request_json_shape() {
    let request = ExplainRequest {
        code: "int x = 1;".to_string(),
        topic: "pointers".to_string(),
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json, serde_json::json!({"code": "int x = 1;", "topic": "pointers"}));

    let response: ExplainResponse =
        serde_json::from_str(r#"{"explanation": "a pointer holds an address"}"#).unwrap();
    assert_eq!(response.explanation, "a pointer holds an address");
    assert!(serde_json::from_str::<ExplainResponse>(r#"{"text": "nope"}"#).is_err());
}

#[test]
fn test_plain_rendering_of_default_topics() {
    let mut pointers = Session::new(TopicKey::Pointers);
    let text = render_plain(pointers.visualize());
    assert!(text.contains("0x7fff5fbff8c8  ptr        → 0x7fff5fbff8c0  (points to x)"));
    assert!(text.contains("x: type int, value 25, 4 bytes"));
    assert!(text.contains("Value of 25: %d"));

    let mut recursion = Session::new(TopicKey::Recursion);
    let text = render_plain(recursion.visualize());
    assert!(text.contains("└─ Base: return 1"));
    assert!(text.contains("factorial(1)  n = 1  BASE CASE  Returns: 1"));
    assert!(text.ends_with("Final Result: 120\n"));
}

#[test]
fn test_plain_rendering_reports_missing_output() {
    let mut session = Session::with_source(TopicKey::Pointers, "int x = 1;".to_string());
    let text = render_plain(session.visualize());

    assert!(text.contains(ConsoleOutput::NO_OUTPUT_MESSAGE));
}
