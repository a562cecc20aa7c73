//! # Vitesse Shared
//!
//! Request and response bodies exactly as they appear on the wire.
//! Domain types live in `vitesse-core`; these only mirror the JSON contract.

pub mod dto;

pub use dto::{
    AuthenticationRequest, AuthenticationResponse, CandidateCreationRequest, RegisterRequest,
};
