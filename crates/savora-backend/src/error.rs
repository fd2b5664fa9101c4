//! Backend service errors.

use thiserror::Error;

/// Errors from the (simulated) backend services.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Login rejected.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Order lookup failed.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Order placement rejected.
    #[error("Order rejected: {0}")]
    OrderRejected(String),

    /// Domain-level failure while assembling a response.
    #[error(transparent)]
    Commerce(#[from] savora_commerce::CommerceError),
}
