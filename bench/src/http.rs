use crate::client_factory::{ClientFactory, HammerClient, HttpResponse};
use crate::error::ThorError;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct HttpClientFactory {
    timeout: Option<Duration>,
}

impl HttpClientFactory {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl ClientFactory for HttpClientFactory {
    fn create_client(&self) -> Result<Box<dyn HammerClient>, ThorError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ThorError::CannotCreateClient)?;
        Ok(Box::new(HttpClient { client }))
    }
}

#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
}

#[async_trait]
impl HammerClient for HttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, ThorError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status.as_u16() >= 400 {
            // The status alone fails the throw, a broken error body must not hide it.
            return Ok(HttpResponse {
                status,
                body: String::new(),
            });
        }

        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
