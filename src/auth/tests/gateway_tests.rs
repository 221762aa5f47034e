//! Tests for the in-memory authentication gateway.

use std::sync::Arc;

use crate::auth::{
    adapters::memory::InMemoryAuthGateway,
    domain::Credentials,
    ports::{AuthGateway, AuthGatewayError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn gateway() -> InMemoryAuthGateway<DefaultClock> {
    InMemoryAuthGateway::new(Arc::new(DefaultClock))
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials::new(email, password).expect("valid credentials")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_up_registers_and_signs_in(gateway: InMemoryAuthGateway<DefaultClock>) {
    let account = gateway
        .sign_up(credentials("owner@example.com", "hunter2"))
        .await
        .expect("sign up should succeed");

    let current = gateway.current_user().await.expect("current user lookup");
    assert_eq!(current, Some(account));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_up_rejects_duplicate_email(gateway: InMemoryAuthGateway<DefaultClock>) {
    gateway
        .sign_up(credentials("owner@example.com", "hunter2"))
        .await
        .expect("first sign up should succeed");

    let result = gateway
        .sign_up(credentials("owner@example.com", "other"))
        .await;
    assert!(matches!(result, Err(AuthGatewayError::DuplicateAccount(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_in_rejects_wrong_password(gateway: InMemoryAuthGateway<DefaultClock>) {
    gateway
        .sign_up(credentials("owner@example.com", "hunter2"))
        .await
        .expect("sign up should succeed");
    gateway.sign_out().await.expect("sign out should succeed");

    let result = gateway
        .sign_in(credentials("owner@example.com", "wrong"))
        .await;
    assert!(matches!(result, Err(AuthGatewayError::InvalidCredentials)));
    let current = gateway.current_user().await.expect("current user lookup");
    assert!(current.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn auth_state_changes_reach_subscribers(gateway: InMemoryAuthGateway<DefaultClock>) {
    let mut subscription = gateway
        .subscribe_auth_state()
        .await
        .expect("subscribe should succeed");

    let account = gateway
        .sign_up(credentials("owner@example.com", "hunter2"))
        .await
        .expect("sign up should succeed");
    gateway.sign_out().await.expect("sign out should succeed");

    let signed_in = subscription.next().await.expect("event should arrive");
    let signed_out = subscription.next().await.expect("event should arrive");
    assert_eq!(signed_in, Some(account));
    assert_eq!(signed_out, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_out_clears_current_user(gateway: InMemoryAuthGateway<DefaultClock>) {
    gateway
        .sign_up(credentials("owner@example.com", "hunter2"))
        .await
        .expect("sign up should succeed");

    gateway.sign_out().await.expect("sign out should succeed");
    gateway
        .sign_out()
        .await
        .expect("repeated sign out stays a no-op");

    let current = gateway.current_user().await.expect("current user lookup");
    assert!(current.is_none());
}
