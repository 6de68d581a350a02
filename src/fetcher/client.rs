use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::constants::CLIENT_USER_AGENT;
use crate::model::{Action, BoardSnapshot, SubmitResponse};

/// Failure talking to the remote endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint answered with status {0}")]
    Status(StatusCode),
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The remote board endpoint.
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Fetch every post and comment.
    async fn fetch_board(&self) -> Result<BoardSnapshot, ApiError>;

    /// Send one write action.
    async fn submit(&self, action: &Action) -> Result<SubmitResponse, ApiError>;
}

/// `BoardApi` over HTTP: GET for reads, form-encoded POST for writes.
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    client: reqwest::Client,
    url: String,
}

impl HttpBoardApi {
    /// Build a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = build_client(config.request_timeout)?;
        Ok(Self::with_client(client, &config.api_url))
    }

    /// Use an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: reqwest::Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, ApiError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn fetch_board(&self) -> Result<BoardSnapshot, ApiError> {
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ApiError::Decode)
    }

    async fn submit(&self, action: &Action) -> Result<SubmitResponse, ApiError> {
        let payload = serde_json::to_string(action).map_err(ApiError::Encode)?;
        debug!(action_type = action.action_type(), "Submitting action");

        let response = self
            .client
            .post(&self.url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .form(&[("payload", payload.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ApiError::Decode)
    }
}
