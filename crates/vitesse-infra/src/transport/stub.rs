//! Scripted in-memory transport - used in tests and offline demos.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use vitesse_core::TransportError;
use vitesse_core::ports::{HttpRequest, HttpResponse, HttpTransport};

/// Transport that replays queued outcomes and records every request.
///
/// Outcomes are consumed in order. When the queue is empty the exchange fails
/// with a transport error, so a test never silently hits the network.
pub struct StubTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response.
    pub fn with_response(mut self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.outcomes
            .get_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a transport failure.
    pub fn with_error(mut self, error: TransportError) -> Self {
        self.outcomes.get_mut().push_back(Err(error));
        self
    }

    /// Queue a response on a shared stub.
    pub async fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.outcomes
            .lock()
            .await
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().await.last().cloned()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().await.push(request);

        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".to_string())))
    }
}
