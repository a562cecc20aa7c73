//! Transport implementations - reqwest over the network, and a scripted stub.

mod stub;

#[cfg(feature = "http")]
mod http;

pub use stub::StubTransport;

#[cfg(feature = "http")]
pub use http::ReqwestTransport;
