//! Client error types.

use warranted_core::WarrantedError;

/// Errors that can occur when using the Warranted client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Core SDK error (missing credential, unsupported algorithm).
    #[error(transparent)]
    Core(#[from] WarrantedError),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
