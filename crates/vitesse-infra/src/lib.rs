//! # Vitesse Infrastructure
//!
//! Concrete implementations of the ports defined in `vitesse-core`:
//! the authenticated [`Session`], the HTTP transports, and the remote
//! clients for the login, registration and candidate endpoints.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network stack, stub transport only
//! - `http` - reqwest-backed transport

pub mod clients;
pub mod config;
pub mod session;
pub mod transport;

pub use clients::{RemoteAuthenticationClient, RemoteCandidateClient, RemoteRegisterClient};
pub use config::{ApiConfig, ConfigError};
pub use session::Session;
pub use transport::StubTransport;

#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
