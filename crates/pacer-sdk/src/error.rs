//! SDK error types.
//!
//! [`PacerError`] is the single error type returned by every fallible
//! operation in the SDK.  It wraps underlying transport, serialization
//! and authorization failures into a unified enum.

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum PacerError {
    /// Invalid or missing configuration (e.g. unresolved credentials).
    #[error("configuration error: {0}")]
    Config(String),

    /// No usable token after an authentication attempt.
    #[error("authorization failed: {0}")]
    Authorization(String),

    /// HTTP request failure, including non-2xx responses.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization / deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PacerError {
    /// Whether this error originated in the transport layer (the HTTP
    /// call itself or parsing its body), as opposed to configuration or
    /// authorization.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Serialization(_))
    }
}
