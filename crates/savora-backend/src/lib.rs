//! Simulated backend for the Savora storefront.
//!
//! There is no server. Login, order placement and order tracking are
//! mocked behind async traits ([`AuthService`], [`OrderService`]) so the
//! UI layer is decoupled from the simulation and tests can inject
//! deterministic stand-ins. The canned catalog lives in [`data`].

pub mod auth;
pub mod data;
pub mod error;
pub mod orders;

pub use auth::{AuthService, Credentials, MockAuthService};
pub use error::BackendError;
pub use orders::{generate_order_id, MockOrderService, OrderService};

use std::time::Duration;

/// Simulated network round-trip time.
#[derive(Debug, Clone, Copy)]
pub struct Latency(Duration);

impl Latency {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// No delay, for tests.
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub(crate) async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
