//! Credential resolution for the completion service.
//!
//! The credential is resolved at call time, never cached across calls and
//! never validated locally; an absent or invalid key only surfaces as a
//! rejection from the remote service.

/// Source of the bearer credential for completion requests.
#[derive(Debug, Clone)]
pub enum TokenProvider {
    /// Fixed token supplied by the caller.
    Static(String),

    /// Read `AYAT_API_KEY` from the environment on every call.
    Env,
}

impl TokenProvider {
    /// Environment variable consulted by [`TokenProvider::Env`].
    pub const ENV_VAR: &'static str = "AYAT_API_KEY";

    /// Create a static token provider.
    pub fn static_token(token: impl Into<String>) -> Self {
        Self::Static(token.into())
    }

    /// Resolve the current token, if any.
    pub fn token(&self) -> Option<String> {
        match self {
            Self::Static(token) => Some(token.clone()),
            Self::Env => std::env::var(Self::ENV_VAR).ok().filter(|t| !t.is_empty()),
        }
    }
}

impl Default for TokenProvider {
    fn default() -> Self {
        Self::Env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_token_is_returned_verbatim() {
        let provider = TokenProvider::static_token("sk-test");
        assert_eq!(provider.token(), Some("sk-test".to_string()));
    }

    #[test]
    fn env_provider_rereads_on_each_call() {
        std::env::set_var(TokenProvider::ENV_VAR, "first");
        let provider = TokenProvider::Env;
        assert_eq!(provider.token(), Some("first".to_string()));

        std::env::set_var(TokenProvider::ENV_VAR, "second");
        assert_eq!(provider.token(), Some("second".to_string()));

        std::env::remove_var(TokenProvider::ENV_VAR);
        assert_eq!(provider.token(), None);
    }
}
