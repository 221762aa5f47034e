//! Resolves the viewer identity once per UI session.

use std::sync::Arc;

use crate::auth::{
    domain::{SessionId, ViewerIdentity},
    ports::{AuthGateway, AuthGatewayResult},
};

/// Resolves the identity a UI session acts under.
///
/// Called once at session start; the resulting [`ViewerIdentity`] is passed
/// explicitly to every preference read and write rather than living in
/// ambient global state.
#[derive(Clone)]
pub struct ViewerResolver<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
}

impl<G> ViewerResolver<G>
where
    G: AuthGateway,
{
    /// Creates a resolver over the authentication gateway.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Resolves the current viewer: the signed-in user when one exists,
    /// otherwise the anonymous browser session.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; an unreachable authentication service is
    /// surfaced to the caller rather than silently treated as signed out.
    pub async fn resolve(&self, session_id: SessionId) -> AuthGatewayResult<ViewerIdentity> {
        let current = self.gateway.current_user().await?;
        Ok(ViewerIdentity::resolve(
            current.map(|account| account.id()),
            session_id,
        ))
    }
}
