//! Natural-language explanations of a snippet
//!
//! Explanations come from a remote service when one is configured. Any
//! failure (unreachable host, non-2xx status, malformed body, or no service at
//! all) is recovered here by substituting a static text for the topic, so the
//! caller always gets something to show:
//! - [`Explanation::Remote`]: the service answered
//! - [`Explanation::Fallback`]: the static text was used
//!
//! There is no retry and no timeout beyond the HTTP client's own defaults.

pub mod http;

pub use http::HttpExplainService;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body posted to the explain endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub code: String,
    pub topic: String,
}

/// Response body expected from the explain endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("explain service returned status {0}")]
    Status(u16),
    #[error("malformed explain response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no explain service configured")]
    Offline,
}

/// Something that can explain a snippet
pub trait ExplainService {
    fn explain(&self, request: &ExplainRequest) -> Result<ExplainResponse, ExplainError>;
}

/// Service used when no endpoint is configured; every request falls back
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineExplainService;

impl ExplainService for OfflineExplainService {
    fn explain(&self, _request: &ExplainRequest) -> Result<ExplainResponse, ExplainError> {
        Err(ExplainError::Offline)
    }
}

/// Outcome of an explain request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explanation {
    Remote(String),
    Fallback(String),
}

impl Explanation {
    pub fn text(&self) -> &str {
        match self {
            Explanation::Remote(text) | Explanation::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Explanation::Fallback(_))
    }
}

pub const POINTERS_FALLBACK: &str = "This code demonstrates pointer basics. A pointer stores a memory address using the & operator to get an address and * to dereference it. Variables are stored at specific memory addresses in the stack, and pointers allow you to reference and manipulate them indirectly. This is fundamental to understanding dynamic memory allocation, function parameters, and data structures like linked lists.";

pub const RECURSION_FALLBACK: &str = "This code shows recursive function calls. Each call to factorial creates a new stack frame. The function calls itself with a smaller parameter until reaching the base case (n <= 1). Then each recursive call returns and passes the result back up the call stack. Understanding this call stack behavior is crucial for debugging recursion and avoiding stack overflow errors.";

pub const GENERIC_FALLBACK: &str = "Unable to generate explanation. Try modifying your code.";

/// Static explanation for a topic key
pub fn fallback_explanation(topic: &str) -> &'static str {
    match topic {
        "pointers" => POINTERS_FALLBACK,
        "recursion" => RECURSION_FALLBACK,
        _ => GENERIC_FALLBACK,
    }
}

/// Ask `service` to explain `code`, substituting the topic's static text on
/// any failure.
pub fn explain_or_fallback(service: &dyn ExplainService, code: &str, topic: &str) -> Explanation {
    let request = ExplainRequest {
        code: code.to_string(),
        topic: topic.to_string(),
    };

    match service.explain(&request) {
        Ok(response) => {
            tracing::debug!(topic, "explain service answered");
            Explanation::Remote(response.explanation)
        }
        Err(ExplainError::Offline) => {
            tracing::debug!(topic, "no explain service, using fallback");
            Explanation::Fallback(fallback_explanation(topic).to_string())
        }
        Err(e) => {
            tracing::warn!(topic, error = %e, "explain request failed, using fallback");
            Explanation::Fallback(fallback_explanation(topic).to_string())
        }
    }
}
