//! Error types for the retrieval core.

/// Failures surfaced by the completion-backed search path.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Remote signals request-rate exhaustion (429).
    #[error("rate limited by completion service")]
    RateLimited,

    /// Remote rejects the credential (401/403).
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Remote rejects the request shape or content (400/422).
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// Network-level failure: unreachable host, timeout, dropped body.
    #[error("transport failure: {message}")]
    Transport { message: String },

    /// Any other non-success status, or a success body missing the
    /// completion content field.
    #[error("unexpected response: {message}")]
    UnexpectedResponse { message: String },

    /// Completion text that could not be normalized into verse records.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SearchError {
    /// Whether a caller-side retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Transport { .. })
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::UnexpectedResponse {
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// Failures raised while normalizing raw completion text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The text is not syntactically valid JSON.
    #[error("malformed JSON in completion text: {message}")]
    MalformedJson { message: String },

    /// Valid JSON, but the top-level `results` array is missing or not a
    /// sequence.
    #[error("invalid response shape: {message}")]
    InvalidShape { message: String },
}

/// Failures from the persisted daily store.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Underlying storage failed to read or write.
    #[error("store error: {message}")]
    Store { message: String },

    /// The persisted batch could not be serialized or deserialized.
    #[error("serialization error: {message}")]
    Serialize { message: String },
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Result type for daily-cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_and_transport_are_retryable() {
        assert!(SearchError::RateLimited.is_retryable());
        assert!(SearchError::Transport {
            message: "connection reset".to_string()
        }
        .is_retryable());
        assert!(!SearchError::Unauthorized {
            message: "bad token".to_string()
        }
        .is_retryable());
        assert!(!SearchError::Parse(ParseError::MalformedJson {
            message: "eof".to_string()
        })
        .is_retryable());
    }

    #[test]
    fn parse_error_converts_transparently() {
        let err: SearchError = ParseError::InvalidShape {
            message: "results missing".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            SearchError::Parse(ParseError::InvalidShape { .. })
        ));
    }
}
