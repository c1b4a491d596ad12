//! Configuration for the search and daily-verse clients.

use serde::{Deserialize, Serialize};

/// Configuration for the completion-backed search client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_completion_url")]
    pub endpoint: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Output-token ceiling.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_completion_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_timeout() -> u64 {
    30
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_completion_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
        }
    }
}

impl SearchConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `AYAT_COMPLETION_URL` | Chat-completions endpoint |
    /// | `AYAT_COMPLETION_MODEL` | Model identifier |
    /// | `AYAT_TIMEOUT` | Request timeout in seconds (default: 30) |
    ///
    /// The API key is not part of this config; see
    /// [`TokenProvider`](crate::auth::TokenProvider).
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("AYAT_COMPLETION_URL")
                .unwrap_or_else(|_| default_completion_url()),
            model: std::env::var("AYAT_COMPLETION_MODEL").unwrap_or_else(|_| default_model()),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: std::env::var("AYAT_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Configuration for the daily verse fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyConfig {
    /// Random-verse endpoint base URL. The per-call verse count is appended
    /// as a path segment.
    #[serde(default = "default_verse_url")]
    pub endpoint: String,

    /// Target batch size.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Attempts allowed per batch slot before the batch is abandoned.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Pacing delay between requests, in milliseconds.
    #[serde(default = "default_pace_ms")]
    pub pace_ms: u64,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_verse_url() -> String {
    "https://api.alquran.cloud/v1/ayah/random".to_string()
}

fn default_count() -> usize {
    6
}

fn default_max_attempts() -> u32 {
    5
}

fn default_pace_ms() -> u64 {
    500
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            endpoint: default_verse_url(),
            count: default_count(),
            max_attempts: default_max_attempts(),
            pace_ms: default_pace_ms(),
            timeout_secs: default_timeout(),
        }
    }
}

impl DailyConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `AYAT_VERSE_URL` | Random-verse endpoint base URL |
    /// | `AYAT_TIMEOUT` | Request timeout in seconds (default: 30) |
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("AYAT_VERSE_URL").unwrap_or_else(|_| default_verse_url()),
            count: default_count(),
            max_attempts: default_max_attempts(),
            pace_ms: default_pace_ms(),
            timeout_secs: std::env::var("AYAT_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Set the endpoint base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the pacing delay in milliseconds.
    pub fn with_pace_ms(mut self, pace_ms: u64) -> Self {
        self.pace_ms = pace_ms;
        self
    }

    /// Set the target batch size.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.endpoint, "https://api.openai.com/v1/chat/completions");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn daily_defaults() {
        let config = DailyConfig::default();
        assert_eq!(config.count, 6);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.pace_ms, 500);
    }

    #[test]
    fn builders_override_defaults() {
        let config = SearchConfig::default()
            .with_endpoint("http://localhost:9999/v1/chat")
            .with_model("test-model")
            .with_timeout_secs(5);
        assert_eq!(config.endpoint, "http://localhost:9999/v1/chat");
        assert_eq!(config.model, "test-model");
        assert_eq!(config.timeout_secs, 5);

        let daily = DailyConfig::default()
            .with_endpoint("http://localhost:9999/ayah")
            .with_pace_ms(0)
            .with_count(3);
        assert_eq!(daily.count, 3);
        assert_eq!(daily.pace_ms, 0);
    }
}
