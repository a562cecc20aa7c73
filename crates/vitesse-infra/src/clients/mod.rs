//! Remote clients - one per REST resource family.

mod auth;
mod candidate;
mod register;

pub use auth::RemoteAuthenticationClient;
pub use candidate::RemoteCandidateClient;
pub use register::RemoteRegisterClient;

use vitesse_core::ApiError;

/// Request DTOs only fail to encode on a programming error.
fn encoding_failure(err: serde_json::Error) -> ApiError {
    tracing::error!(error = %err, "Failed to encode request body");
    ApiError::Unknown(format!("request encoding failed: {err}"))
}
