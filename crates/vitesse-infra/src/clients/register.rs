//! Account creation client.

use std::sync::Arc;

use async_trait::async_trait;

use vitesse_core::ApiError;
use vitesse_core::ports::{HttpRequest, RegistrationService};
use vitesse_shared::RegisterRequest;

use super::encoding_failure;
use crate::config::ApiConfig;
use crate::session::Session;

/// `POST /user/register` against the configured backend.
pub struct RemoteRegisterClient {
    config: ApiConfig,
    session: Arc<Session>,
}

impl RemoteRegisterClient {
    pub fn new(config: &ApiConfig, session: Arc<Session>) -> Self {
        Self {
            config: config.clone(),
            session,
        }
    }
}

#[async_trait]
impl RegistrationService for RemoteRegisterClient {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ApiError> {
        if [email, password, first_name, last_name]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(ApiError::InvalidCredentials);
        }

        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        let request = HttpRequest::post(self.config.endpoint("/user/register"))
            .json(&body)
            .map_err(encoding_failure)?;

        // Any 2xx is fine; the body is not inspected.
        self.session.send(request, false).await?;
        tracing::info!(email, "Account created");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::StubTransport;

    fn client(stub: StubTransport) -> (Arc<StubTransport>, RemoteRegisterClient) {
        let stub = Arc::new(stub);
        let session = Arc::new(Session::new(stub.clone()));
        (stub.clone(), RemoteRegisterClient::new(&ApiConfig::default(), session))
    }

    #[tokio::test]
    async fn test_any_empty_field_rejected_locally() {
        let full = ["jane@vitesse.com", "secret", "Jane", "Roe"];

        // Every non-full combination of empty fields.
        for mask in 0u8..15 {
            let fields: Vec<&str> = full
                .iter()
                .enumerate()
                .map(|(i, v)| if mask & (1 << i) != 0 { *v } else { "" })
                .collect();
            let (stub, client) = client(StubTransport::new());

            let result = client
                .create_account(fields[0], fields[1], fields[2], fields[3])
                .await;

            assert!(matches!(result, Err(ApiError::InvalidCredentials)), "mask {mask}");
            assert_eq!(stub.request_count().await, 0);
        }
    }

    #[tokio::test]
    async fn test_created_without_body_succeeds() {
        let (stub, client) = client(StubTransport::new().with_response(201, ""));

        client
            .create_account("jane@vitesse.com", "secret", "Jane", "Roe")
            .await
            .unwrap();

        let sent = stub.last_request().await.unwrap();
        assert_eq!(sent.url, "http://127.0.0.1:8080/user/register");
        assert_eq!(sent.header_value("Authorization"), None);
        let body: serde_json::Value = serde_json::from_slice(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["firstName"], "Jane");
        assert_eq!(body["lastName"], "Roe");
    }

    #[tokio::test]
    async fn test_ok_status_succeeds() {
        let (_, client) = client(StubTransport::new().with_response(200, "{}"));

        assert!(
            client
                .create_account("jane@vitesse.com", "secret", "Jane", "Roe")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_conflict_is_invalid_response() {
        let (_, client) = client(StubTransport::new().with_response(409, ""));

        let result = client
            .create_account("jane@vitesse.com", "secret", "Jane", "Roe")
            .await;

        assert!(matches!(result, Err(ApiError::InvalidResponse { status: 409 })));
    }

    #[tokio::test]
    async fn test_server_error() {
        let (_, client) = client(StubTransport::new().with_response(500, "boom"));

        let result = client
            .create_account("jane@vitesse.com", "secret", "Jane", "Roe")
            .await;

        assert!(matches!(
            result,
            Err(ApiError::ServerError { code: 500, .. })
        ));
    }
}
