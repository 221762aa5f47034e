//! Domain model for viewer identity.
//!
//! Identity values are small, validated scalars: account and browser-session
//! identifiers plus the credentials accepted by the hosted authentication
//! service. No password hashing happens here; credential verification is the
//! external service's concern.

mod account;
mod error;
mod ids;

pub use account::{Credentials, EmailAddress, UserAccount};
pub use error::AuthDomainError;
pub use ids::{SessionId, UserId, ViewerIdentity};
