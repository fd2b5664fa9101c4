//! Authentication service.
//!
//! The mock implementation accepts any well-formed credentials and
//! returns a demo user after a simulated round trip.

use crate::error::BackendError;
use crate::Latency;
use async_trait::async_trait;
use savora_commerce::account::User;
use tracing::info;

/// Login credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Shape checks applied before any backend call: the email must look
    /// like an address and the password must be at least 8 characters.
    pub fn validate(&self) -> Result<(), BackendError> {
        let email_ok = {
            let at = self.email.find('@');
            match at {
                Some(pos) => {
                    pos > 0
                        && self.email[pos + 1..].contains('.')
                        && !self.email.ends_with('.')
                        && !self.email.contains(' ')
                }
                None => false,
            }
        };
        if !email_ok {
            return Err(BackendError::InvalidCredentials(
                "please enter a valid email address".to_string(),
            ));
        }
        if self.password.chars().count() < 8 {
            return Err(BackendError::InvalidCredentials(
                "password must be at least 8 characters".to_string(),
            ));
        }
        Ok(())
    }
}

/// Authentication backend.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a user.
    async fn login(&self, credentials: &Credentials) -> Result<User, BackendError>;
}

/// Mock authentication: validates credential shape, waits out the
/// configured latency, then returns the demo account with the submitted
/// email substituted in.
pub struct MockAuthService {
    latency: Latency,
}

impl MockAuthService {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, credentials: &Credentials) -> Result<User, BackendError> {
        credentials.validate()?;
        self.latency.wait().await;

        let mut user = crate::data::demo_user();
        user.email = credentials.email.clone();
        info!(email = %user.email, "mock login succeeded");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_shape() {
        assert!(Credentials::new("jane@example.com", "password123").validate().is_ok());
        assert!(Credentials::new("not-an-email", "password123").validate().is_err());
        assert!(Credentials::new("jane@example.com", "short").validate().is_err());
        assert!(Credentials::new("@example.com", "password123").validate().is_err());
    }

    #[tokio::test]
    async fn test_mock_login() {
        let auth = MockAuthService::new(Latency::none());
        let user = auth
            .login(&Credentials::new("jane@example.com", "password123"))
            .await
            .unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert!(!user.addresses.is_empty());
    }

    #[tokio::test]
    async fn test_mock_login_rejects_bad_password() {
        let auth = MockAuthService::new(Latency::none());
        let err = auth
            .login(&Credentials::new("jane@example.com", "short"))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::InvalidCredentials(_)));
    }
}
