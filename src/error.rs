//! Error taxonomy for upstream calls.
//!
//! Every variant is terminal for the current request: callers surface it
//! (stderr line, JSON error body, inline banner) and never retry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure or timeout.
    #[error("network error while calling PokeAPI: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered 404, i.e. an unknown name or id.
    #[error("not found (404): {url}")]
    NotFound { url: String },

    /// Any other non-2xx status.
    #[error("PokeAPI returned HTTP {0}")]
    Upstream(u16),

    /// Body was not valid JSON (or did not match the expected shape).
    #[error("failed to parse PokeAPI response as JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("identifier must not be empty")]
    EmptyIdentifier,
}

impl FetchError {
    /// HTTP status the local proxy answers with for this failure.
    pub fn proxy_status(&self) -> u16 {
        match self {
            FetchError::NotFound { .. } => 404,
            FetchError::Upstream(status) => *status,
            FetchError::EmptyIdentifier => 400,
            FetchError::Network(_) | FetchError::Decode(_) => 502,
        }
    }
}
