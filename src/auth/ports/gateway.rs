//! Gateway port mirroring the hosted authentication service.

use crate::auth::domain::{Credentials, EmailAddress, UserAccount};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

/// Result type for authentication gateway operations.
pub type AuthGatewayResult<T> = Result<T, AuthGatewayError>;

/// Authentication contract delegated to the external data service.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Returns the currently signed-in account, if any.
    async fn current_user(&self) -> AuthGatewayResult<Option<UserAccount>>;

    /// Registers a new account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::DuplicateAccount`] when the email is
    /// already registered.
    async fn sign_up(&self, credentials: Credentials) -> AuthGatewayResult<UserAccount>;

    /// Signs an existing account in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::InvalidCredentials`] when the email is
    /// unknown or the password does not match.
    async fn sign_in(&self, credentials: Credentials) -> AuthGatewayResult<UserAccount>;

    /// Ends the current session. Signing out while signed out is a no-op.
    async fn sign_out(&self) -> AuthGatewayResult<()>;

    /// Opens a subscription to sign-in state changes.
    ///
    /// Each event carries the account now signed in, or `None` after a sign
    /// out. Dropping the handle tears the subscription down.
    async fn subscribe_auth_state(&self) -> AuthGatewayResult<AuthStateSubscription>;
}

/// A live subscription to sign-in state changes.
///
/// Delivery is at-least-once; a consumer that falls behind skips overwritten
/// events and keeps receiving from the current position.
#[derive(Debug)]
pub struct AuthStateSubscription {
    receiver: broadcast::Receiver<Option<UserAccount>>,
}

impl AuthStateSubscription {
    /// Wraps a transport receiver.
    #[must_use]
    pub const fn new(receiver: broadcast::Receiver<Option<UserAccount>>) -> Self {
        Self { receiver }
    }

    /// Waits for the next sign-in state change.
    ///
    /// Returns `None` once the gateway has shut down and every pending event
    /// has been consumed.
    pub async fn next(&mut self) -> Option<Option<UserAccount>> {
        loop {
            match self.receiver.recv().await {
                Ok(state) => return Some(state),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Auth state subscription lagged, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

/// Errors returned by authentication gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum AuthGatewayError {
    /// The email is already registered.
    #[error("an account already exists for {0}")]
    DuplicateAccount(EmailAddress),

    /// The email/password pair was rejected.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Transport-layer failure reaching the hosted service.
    #[error("authentication transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthGatewayError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
