//! Candidate resource client.

use std::sync::Arc;

use async_trait::async_trait;

use vitesse_core::ApiError;
use vitesse_core::domain::{Candidate, NewCandidate};
use vitesse_core::ports::{CandidateService, HttpRequest};
use vitesse_shared::CandidateCreationRequest;

use super::encoding_failure;
use crate::config::ApiConfig;
use crate::session::Session;

/// `/candidate` endpoints. Every call is authenticated.
pub struct RemoteCandidateClient {
    config: ApiConfig,
    session: Arc<Session>,
}

impl RemoteCandidateClient {
    pub fn new(config: &ApiConfig, session: Arc<Session>) -> Self {
        Self {
            config: config.clone(),
            session,
        }
    }

    fn collection_url(&self) -> String {
        self.config.endpoint("/candidate")
    }

    fn item_url(&self, candidate: &Candidate) -> String {
        self.config.endpoint(&format!("/candidate/{}", candidate.id))
    }
}

fn creation_request(candidate: NewCandidate) -> CandidateCreationRequest {
    CandidateCreationRequest {
        email: candidate.email,
        note: candidate.note,
        linkedin_web_address: candidate.linkedin_web_address,
        first_name: candidate.first_name,
        last_name: candidate.last_name,
        phone: candidate.phone,
    }
}

#[async_trait]
impl CandidateService for RemoteCandidateClient {
    async fn list(&self) -> Result<Vec<Candidate>, ApiError> {
        let response = self
            .session
            .send(HttpRequest::get(self.collection_url()), true)
            .await?;

        let candidates: Vec<Candidate> = serde_json::from_slice(&response.body)?;
        tracing::debug!(count = candidates.len(), "Fetched candidates");
        Ok(candidates)
    }

    async fn create(&self, candidate: NewCandidate) -> Result<Vec<Candidate>, ApiError> {
        let request = HttpRequest::post(self.collection_url())
            .json(&creation_request(candidate))
            .map_err(encoding_failure)?;

        let response = self.session.send(request, true).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    async fn delete(&self, candidate: &Candidate) -> Result<(), ApiError> {
        self.session
            .send(HttpRequest::delete(self.item_url(candidate)), true)
            .await?;
        tracing::debug!(id = %candidate.id, "Candidate deleted");
        Ok(())
    }

    async fn toggle_favorite(&self, candidate: &Candidate) -> Result<(), ApiError> {
        let url = format!("{}/favorite", self.item_url(candidate));
        self.session.send(HttpRequest::post(url), true).await?;
        tracing::debug!(id = %candidate.id, "Favorite toggled");
        Ok(())
    }

    async fn update(&self, candidate: &Candidate) -> Result<(), ApiError> {
        let request = HttpRequest::put(self.item_url(candidate))
            .json(candidate)
            .map_err(encoding_failure)?;

        self.session.send(request, true).await?;
        tracing::debug!(id = %candidate.id, "Candidate updated");
        Ok(())
    }
}
