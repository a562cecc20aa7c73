//! Domain entities - the core business objects.

mod candidate;
mod filter;
pub mod validation;

pub use candidate::{Authenticated, Candidate, NewCandidate};
pub use filter::CandidateFilter;
