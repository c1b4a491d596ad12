//! Free-text verse search against the completion service.
//!
//! Public API: no status code knowledge. All HTTP/status mapping in http.rs.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::auth::TokenProvider;
use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::model::VerseRecord;
use crate::parser;
use crate::prompt;

mod http;

use http::HttpBackend;

const USER_AGENT_VALUE: &str = concat!("ayat-core/", env!("CARGO_PKG_VERSION"));

/// Upper bound the prompt imposes on a single result batch.
pub const MAX_RESULTS: usize = 5;

/// Client for the remote completion service.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: HttpBackend,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> SearchResult<Self> {
        Self::with_token_provider(config, TokenProvider::default())
    }

    pub fn with_token_provider(
        config: SearchConfig,
        token_provider: TokenProvider,
    ) -> SearchResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| SearchError::Transport {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http: HttpBackend {
                client,
                config,
                token_provider,
            },
        })
    }

    pub fn from_env() -> SearchResult<Self> {
        Self::new(SearchConfig::from_env())
    }

    /// Send a query to the completion service and return the raw generated
    /// text. One attempt per call; errors propagate unchanged.
    pub async fn search(&self, query: &str) -> SearchResult<String> {
        let user_prompt = prompt::build_prompt(query);
        self.http.complete(prompt::SYSTEM_PROMPT, &user_prompt).await
    }

    /// Search and normalize: query in, ordered verse records out.
    ///
    /// The batch is capped at [`MAX_RESULTS`] even when the completion
    /// overshoots the prompt's bound. An empty list means "no relevant
    /// verses"; a malformed completion surfaces as [`SearchError::Parse`].
    pub async fn search_verses(&self, query: &str) -> SearchResult<Vec<VerseRecord>> {
        let raw = self.search(query).await?;
        let mut records = parser::parse(&raw)?;
        if records.len() > MAX_RESULTS {
            debug!(
                returned = records.len(),
                cap = MAX_RESULTS,
                "completion overshot the result cap, truncating"
            );
            records.truncate(MAX_RESULTS);
        }
        Ok(records)
    }
}
