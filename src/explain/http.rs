//! Blocking HTTP client for the explain endpoint

use super::{ExplainError, ExplainRequest, ExplainResponse, ExplainService};
use reqwest::blocking::Client;

/// Path appended to the configured base URL
pub const EXPLAIN_PATH: &str = "/api/explain";

/// Posts `{code, topic}` as JSON and expects `{explanation}` back
#[derive(Debug, Clone)]
pub struct HttpExplainService {
    client: Client,
    endpoint: String,
}

impl HttpExplainService {
    pub fn new(base_url: &str) -> Result<Self, ExplainError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), EXPLAIN_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ExplainService for HttpExplainService {
    fn explain(&self, request: &ExplainRequest) -> Result<ExplainResponse, ExplainError> {
        tracing::debug!(endpoint = %self.endpoint, topic = %request.topic, "posting explain request");

        let response = self.client.post(&self.endpoint).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplainError::Status(status.as_u16()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_endpoint_joins_base_url() {
        let service = HttpExplainService::new("http://localhost:5000/").unwrap();
        assert_eq!(service.endpoint(), "http://localhost:5000/api/explain");
    }

    #[test]
    fn test_https_urls_reach_the_connect_stage() {
        // Nothing listens on the discard port; the request must fail while
        // connecting, not because the scheme is unsupported.
        let service = HttpExplainService::new("https://127.0.0.1:9").unwrap();
        let request = ExplainRequest {
            code: "int x = 1;".to_string(),
            topic: "pointers".to_string(),
        };

        let err = service.explain(&request).unwrap_err();
        let ExplainError::Http(http) = &err else {
            panic!("expected a transport error, got {:?}", err);
        };

        let mut chain = Vec::new();
        let mut source: Option<&dyn Error> = Some(http);
        while let Some(e) = source {
            chain.push(e.to_string());
            source = e.source();
        }
        assert!(
            chain.iter().all(|msg| !msg.contains("scheme is not http")),
            "https rejected: {:?}",
            chain
        );
    }
}
