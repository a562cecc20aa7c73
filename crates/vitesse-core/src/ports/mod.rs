//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod candidate;
mod transport;

pub use auth::{AuthenticationService, RegistrationService};
pub use candidate::CandidateService;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method};
