//! Error types for the Warranted SDK.

/// Result type for Warranted operations.
pub type Result<T> = std::result::Result<T, WarrantedError>;

/// Errors that can occur in Warranted core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WarrantedError {
    /// The requested hash algorithm is not supported for webhook signatures.
    #[error("unsupported algorithm: {algorithm}")]
    UnsupportedAlgorithm {
        /// The algorithm identifier that was requested.
        algorithm: String,
    },

    /// A required credential was empty or absent at client construction.
    #[error("missing credential: {field}")]
    MissingCredential {
        /// The credential field that was missing (`account_id` or `auth_token`).
        field: &'static str,
    },
}
