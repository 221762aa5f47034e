//! In-memory stand-in for the hosted authentication service.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

use crate::auth::{
    domain::{Credentials, UserAccount, UserId},
    ports::{AuthGateway, AuthGatewayError, AuthGatewayResult, AuthStateSubscription},
};

/// Buffered auth state events before slow consumers start lagging.
const CHANNEL_CAPACITY: usize = 16;

/// Thread-safe in-memory authentication gateway.
///
/// Stores plaintext passwords; only ever used as a test double for the
/// hosted service.
#[derive(Clone)]
pub struct InMemoryAuthGateway<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<GatewayState>>,
    auth_events: broadcast::Sender<Option<UserAccount>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct GatewayState {
    accounts: HashMap<String, RegisteredAccount>,
    signed_in: Option<UserAccount>,
}

#[derive(Debug, Clone)]
struct RegisteredAccount {
    account: UserAccount,
    password: String,
}

impl<C> InMemoryAuthGateway<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty in-memory gateway.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(GatewayState::default())),
            auth_events: broadcast::channel(CHANNEL_CAPACITY).0,
            clock,
        }
    }

    /// Pushes the new sign-in state to subscribers, if any are listening.
    fn notify(&self, state: Option<UserAccount>) {
        let _delivered = self.auth_events.send(state);
    }
}

fn lock_error(err: impl std::fmt::Display) -> AuthGatewayError {
    AuthGatewayError::transport(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> AuthGateway for InMemoryAuthGateway<C>
where
    C: Clock + Send + Sync,
{
    async fn current_user(&self) -> AuthGatewayResult<Option<UserAccount>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.signed_in.clone())
    }

    async fn sign_up(&self, credentials: Credentials) -> AuthGatewayResult<UserAccount> {
        let mut state = self.state.write().map_err(lock_error)?;
        let key = credentials.email().as_str().to_owned();
        if state.accounts.contains_key(&key) {
            return Err(AuthGatewayError::DuplicateAccount(
                credentials.email().clone(),
            ));
        }

        let account = UserAccount::new(UserId::new(), credentials.email().clone(), self.clock.utc());
        state.accounts.insert(
            key,
            RegisteredAccount {
                account: account.clone(),
                password: credentials.password().to_owned(),
            },
        );
        state.signed_in = Some(account.clone());
        drop(state);
        self.notify(Some(account.clone()));
        Ok(account)
    }

    async fn sign_in(&self, credentials: Credentials) -> AuthGatewayResult<UserAccount> {
        let mut state = self.state.write().map_err(lock_error)?;
        let registered = state
            .accounts
            .get(credentials.email().as_str())
            .ok_or(AuthGatewayError::InvalidCredentials)?;
        if registered.password != credentials.password() {
            return Err(AuthGatewayError::InvalidCredentials);
        }

        let account = registered.account.clone();
        state.signed_in = Some(account.clone());
        drop(state);
        self.notify(Some(account.clone()));
        Ok(account)
    }

    async fn sign_out(&self) -> AuthGatewayResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.signed_in = None;
        drop(state);
        self.notify(None);
        Ok(())
    }

    async fn subscribe_auth_state(&self) -> AuthGatewayResult<AuthStateSubscription> {
        Ok(AuthStateSubscription::new(self.auth_events.subscribe()))
    }
}
