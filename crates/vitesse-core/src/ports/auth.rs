//! Account ports - login and registration.

use async_trait::async_trait;

use crate::domain::Authenticated;
use crate::error::ApiError;

/// Login against the API; on success the shared session holds the token.
#[async_trait]
pub trait AuthenticationService: Send + Sync {
    /// Fails with `InvalidCredentials` before any request when a field is empty.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Authenticated, ApiError>;
}

/// Account creation.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Fails with `InvalidCredentials` before any request when a field is empty.
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ApiError>;
}
