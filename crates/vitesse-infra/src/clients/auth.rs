//! Login client.

use std::sync::Arc;

use async_trait::async_trait;

use vitesse_core::ApiError;
use vitesse_core::domain::Authenticated;
use vitesse_core::ports::{AuthenticationService, HttpRequest};
use vitesse_shared::{AuthenticationRequest, AuthenticationResponse};

use super::encoding_failure;
use crate::config::ApiConfig;
use crate::session::Session;

/// `POST /user/auth` against the configured backend.
pub struct RemoteAuthenticationClient {
    config: ApiConfig,
    session: Arc<Session>,
}

impl RemoteAuthenticationClient {
    pub fn new(config: &ApiConfig, session: Arc<Session>) -> Self {
        Self {
            config: config.clone(),
            session,
        }
    }
}

#[async_trait]
impl AuthenticationService for RemoteAuthenticationClient {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Authenticated, ApiError> {
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::InvalidCredentials);
        }

        let body = AuthenticationRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = HttpRequest::post(self.config.endpoint("/user/auth"))
            .json(&body)
            .map_err(encoding_failure)?;

        let response = self.session.send(request, false).await?;
        let auth: AuthenticationResponse = serde_json::from_slice(&response.body)?;

        // The backend signals a failed login with 200 + a sentinel token.
        if auth.is_rejected() {
            tracing::warn!(email, "Login rejected by backend");
            return Err(ApiError::Unauthorized);
        }
        if auth.token.is_empty() {
            tracing::warn!(email, "Login succeeded without a token");
        }

        self.session.set_token(auth.token).await;
        tracing::info!(email, is_admin = auth.is_admin, "Authenticated");

        Ok(Authenticated {
            is_admin: auth.is_admin,
        })
    }
}
