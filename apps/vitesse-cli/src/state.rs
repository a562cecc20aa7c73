//! Application state - one session shared by every client.

use std::sync::Arc;

use vitesse_core::ports::{
    AuthenticationService, CandidateService, HttpTransport, RegistrationService,
};
use vitesse_core::TransportError;
use vitesse_infra::{
    ApiConfig, RemoteAuthenticationClient, RemoteCandidateClient, RemoteRegisterClient,
    ReqwestTransport, Session,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Session>,
    pub auth: Arc<dyn AuthenticationService>,
    pub register: Arc<dyn RegistrationService>,
    pub candidates: Arc<dyn CandidateService>,
}

impl AppState {
    /// Build the state over the real HTTP transport.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let transport = Arc::new(ReqwestTransport::new(config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Build the state over any transport.
    pub fn with_transport(config: &ApiConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let session = Arc::new(Session::new(transport));

        tracing::debug!(base_url = %config.base_url, "Application state initialized");

        Self {
            auth: Arc::new(RemoteAuthenticationClient::new(config, session.clone())),
            register: Arc::new(RemoteRegisterClient::new(config, session.clone())),
            candidates: Arc::new(RemoteCandidateClient::new(config, session.clone())),
            session,
        }
    }
}
