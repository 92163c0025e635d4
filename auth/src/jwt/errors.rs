use thiserror::Error;

/// Error type for token signing and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token has no subject claim")]
    MissingSubject,

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
