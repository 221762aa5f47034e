//! Error types for identity and credential validation.

use thiserror::Error;

/// Errors returned while constructing identity and credential values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// The email address is not plausibly deliverable.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The password is empty after trimming.
    #[error("password must not be empty")]
    EmptyPassword,
}
