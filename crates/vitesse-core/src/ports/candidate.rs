use async_trait::async_trait;

use crate::domain::{Candidate, NewCandidate};
use crate::error::ApiError;

/// Candidate operations. All of them require a prior successful login.
#[async_trait]
pub trait CandidateService: Send + Sync {
    /// Fetch every candidate.
    async fn list(&self) -> Result<Vec<Candidate>, ApiError>;

    /// Create a candidate; the server answers with the updated full list.
    async fn create(&self, candidate: NewCandidate) -> Result<Vec<Candidate>, ApiError>;

    /// Delete a candidate by id.
    async fn delete(&self, candidate: &Candidate) -> Result<(), ApiError>;

    /// Ask the server to flip the favorite flag. The local copy is untouched;
    /// callers mirror the change only after this succeeds.
    async fn toggle_favorite(&self, candidate: &Candidate) -> Result<(), ApiError>;

    /// Replace the whole server-side record.
    async fn update(&self, candidate: &Candidate) -> Result<(), ApiError>;
}
