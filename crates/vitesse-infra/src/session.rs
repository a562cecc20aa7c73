//! Session - owns the bearer token and is the single exit point for requests.

use std::sync::Arc;

use tokio::sync::RwLock;

use vitesse_core::ApiError;
use vitesse_core::ports::{HttpRequest, HttpResponse, HttpTransport};

const MAX_ERROR_MESSAGE_LEN: usize = 256;

/// Authenticated HTTP session.
///
/// One instance is created per application and shared (`Arc<Session>`) by
/// every client. The token is written on login and read on every
/// authenticated call; writes are serialized by the lock.
pub struct Session {
    transport: Arc<dyn HttpTransport>,
    token: RwLock<Option<String>>,
}

impl Session {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            token: RwLock::new(None),
        }
    }

    /// Store a token. An empty string is ignored.
    pub async fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        if token.is_empty() {
            tracing::debug!("Ignoring empty session token");
            return;
        }
        *self.token.write().await = Some(token);
        tracing::debug!("Session token stored");
    }

    /// Forget the current token.
    pub async fn clear(&self) {
        self.token.write().await.take();
        tracing::debug!("Session token cleared");
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Send a request, attaching the bearer token when `requires_auth`.
    ///
    /// Non-2xx statuses are turned into errors here so that clients only ever
    /// see successful responses.
    pub async fn send(
        &self,
        request: HttpRequest,
        requires_auth: bool,
    ) -> Result<HttpResponse, ApiError> {
        let request = if requires_auth {
            let token = self.token().await.ok_or_else(|| {
                tracing::warn!(url = %request.url, "Authenticated request without a session token");
                ApiError::MissingToken
            })?;
            request.bearer(&token)
        } else {
            request
        };

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            authenticated = requires_auth,
            "Sending request"
        );

        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.execute(request).await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "Transport failure");
            ApiError::Network(e)
        })?;

        tracing::debug!(%method, %url, status = response.status, "Received response");

        check_status(response)
    }
}

/// Map a status code onto the error taxonomy.
pub fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    match response.status {
        200..=299 => Ok(response),
        401 => Err(ApiError::Unauthorized),
        code @ 500..=599 => Err(ApiError::ServerError {
            code,
            message: server_message(&response),
        }),
        status => {
            tracing::warn!(status, "Unexpected response status");
            Err(ApiError::InvalidResponse { status })
        }
    }
}

fn server_message(response: &HttpResponse) -> String {
    let text = response.text();
    let text = text.trim();
    if text.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        text.chars().take(MAX_ERROR_MESSAGE_LEN).collect()
    }
}
