/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// A create payload is missing one or more required fields
    #[error("{0}")]
    Validation(String),

    /// No user record matches the given id
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Authorization header missing or not a well-formed bearer credential
    #[error("Unauthorized")]
    Unauthorized,

    /// The external token verifier rejected the credential.
    /// Carries the verifier's own message and nothing else.
    #[error("{0}")]
    Verification(String),
}

impl RosterError {
    /// Construct a validation error naming the offending fields
    pub fn validation(msg: impl Into<String>) -> Self {
        RosterError::Validation(msg.into())
    }
}
