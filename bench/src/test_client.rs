use crate::client_factory::{ClientFactory, HammerClient, HttpResponse};
use crate::error::ThorError;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// In-memory endpoint with a fixed latency, counting every request it receives.
pub struct TestClientFactory {
    latency: Duration,
    body: String,
    failing_throw: Option<(u32, StatusCode)>,
    clients: Arc<AtomicU32>,
    requests: Arc<AtomicU32>,
}

impl TestClientFactory {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            body: "hello".to_owned(),
            failing_throw: None,
            clients: Arc::new(AtomicU32::new(0)),
            requests: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Every client answers its `throw`-th request (0-indexed) with `status`.
    pub fn failing_at(mut self, throw: u32, status: StatusCode) -> Self {
        self.failing_throw = Some((throw, status));
        self
    }

    pub fn clients(&self) -> u32 {
        self.clients.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> u32 {
        self.requests.load(Ordering::SeqCst)
    }
}

impl ClientFactory for TestClientFactory {
    fn create_client(&self) -> Result<Box<dyn HammerClient>, ThorError> {
        self.clients.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(TestClient {
            latency: self.latency,
            body: self.body.clone(),
            failing_throw: self.failing_throw,
            throws: AtomicU32::new(0),
            requests: self.requests.clone(),
        }))
    }
}

struct TestClient {
    latency: Duration,
    body: String,
    failing_throw: Option<(u32, StatusCode)>,
    throws: AtomicU32,
    requests: Arc<AtomicU32>,
}

#[async_trait]
impl HammerClient for TestClient {
    async fn get(&self, _url: &Url) -> Result<HttpResponse, ThorError> {
        let throw = self.throws.fetch_add(1, Ordering::SeqCst);
        self.requests.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;

        let status = match self.failing_throw {
            Some((failing, status)) if failing == throw => status,
            _ => StatusCode::OK,
        };
        Ok(HttpResponse {
            status,
            body: self.body.clone(),
        })
    }
}
