//! Transport-level error taxonomy.

use thiserror::Error;

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors the HTTP layer can surface to callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never reached the server or the connection dropped.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the JSON shape we expected.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Server rejected the bearer token.
    #[error("Session is no longer valid")]
    Unauthorized,

    /// Server answered, but with an unusable status or envelope.
    #[error("{0}")]
    Api(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
