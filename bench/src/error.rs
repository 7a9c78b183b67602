use reqwest::{StatusCode, Url};
use std::error::Error as _;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThorError {
    #[error("{0}")]
    Usage(#[source] clap::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Cannot create HTTP client")]
    CannotCreateClient(#[source] reqwest::Error),

    #[error("Request failed")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status} for url: {url}")]
    HttpStatus { status: StatusCode, url: Url },

    #[error("Hammer task did not complete")]
    HammerPanicked(#[from] tokio::task::JoinError),

    #[error("Cannot write benchmark report to '{path}'")]
    CannotWriteReport {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ThorError {
    /// Renders the error followed by every underlying cause, separated by colons.
    pub fn with_causes(&self) -> String {
        let mut message = self.to_string();
        if matches!(self, ThorError::Usage(_)) {
            return message;
        }

        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
