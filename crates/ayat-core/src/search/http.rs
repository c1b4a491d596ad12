//! HTTP layer for the completion service: request shape and status mapping.
//!
//! This is the ONLY place for status code handling. search/mod.rs never
//! interprets status codes.

use reqwest::header::AUTHORIZATION;
use serde_json::json;
use tracing::debug;

use crate::auth::TokenProvider;
use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};

/// HTTP backend for completion requests (holds reqwest client, auth, config).
#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) config: SearchConfig,
    pub(crate) token_provider: TokenProvider,
}

impl HttpBackend {
    /// Issue one completion request and extract the generated text.
    ///
    /// Exactly one attempt; retry policy, if any, belongs to the caller.
    pub(crate) async fn complete(&self, system: &str, user: &str) -> SearchResult<String> {
        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        let mut request = self.client.post(&self.config.endpoint).json(&body);

        // Resolved per call; an absent key is only ever rejected remotely.
        if let Some(token) = self.token_provider.token() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        debug!(endpoint = %self.config.endpoint, model = %self.config.model, "completion request");

        let response = request.send().await?;
        let status = response.status();

        match status.as_u16() {
            200..=299 => {
                let json: serde_json::Value = response.json().await?;
                json.pointer("/choices/0/message/content")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
                    .ok_or_else(|| SearchError::UnexpectedResponse {
                        message: "completion response missing message content".to_string(),
                    })
            }

            401 | 403 => Err(SearchError::Unauthorized {
                message: "credential rejected by completion service".to_string(),
            }),

            429 => Err(SearchError::RateLimited),

            400 | 422 => {
                let message = response.text().await.unwrap_or_else(|_| status.to_string());
                Err(SearchError::BadRequest { message })
            }

            _ => {
                let message = response.text().await.unwrap_or_else(|_| status.to_string());
                Err(SearchError::UnexpectedResponse {
                    message: format!("HTTP {}: {}", status.as_u16(), message),
                })
            }
        }
    }
}
