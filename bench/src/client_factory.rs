use crate::error::ThorError;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};

/// Response of a single GET request, with the body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// GET capability used by a single hammer.
#[async_trait]
pub trait HammerClient: Send + Sync {
    /// Fails with `ThorError::Transport` when no response could be obtained.
    /// Non-success statuses (>= 400) are returned as a regular response with an unread, empty body.
    async fn get(&self, url: &Url) -> Result<HttpResponse, ThorError>;
}

/// Creates one independent client per hammer, so hammers never share a connection pool.
pub trait ClientFactory: Sync + Send {
    fn create_client(&self) -> Result<Box<dyn HammerClient>, ThorError>;
}
