//! Port contracts for the hosted authentication boundary.

pub mod gateway;

pub use gateway::{AuthGateway, AuthGatewayError, AuthGatewayResult, AuthStateSubscription};
