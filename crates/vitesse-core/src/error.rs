//! Error types shared by every API client.

use thiserror::Error;

/// Failures of a remote API operation.
///
/// Every client operation either succeeds or returns exactly one of these.
/// `InvalidCredentials` only ever comes from a local precondition check;
/// `Unknown` should never occur and is logged as a bug when it does.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unexpected response status {status}")]
    InvalidResponse { status: u16 },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("No session token; authenticate first")]
    MissingToken,

    #[error("Server error {code}: {message}")]
    ServerError { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] TransportError),

    #[error("Decoding error: {0}")]
    Decoding(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Transport-layer failures: nothing came back from the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Transport failure: {0}")]
    Other(String),
}

/// Domain errors - local rule violations detected before any request.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized access: {0}")]
    Unauthorized(String),
}
