//! # Vitesse Core
//!
//! The domain layer of the Vitesse recruitment client.
//! This crate contains the candidate model, the error taxonomy shared by every
//! API client, and the ports the infrastructure implements. It performs no I/O.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{ApiError, DomainError, TransportError};
