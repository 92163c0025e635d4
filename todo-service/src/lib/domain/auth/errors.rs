use thiserror::Error;

/// Authentication failures.
///
/// `NotAuthorized` deliberately covers every reason a bearer token can be
/// rejected; the concrete reason only goes to the logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Could not validate credentials")]
    NotAuthorized,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Authentication backend error: {0}")]
    Internal(String),
}
