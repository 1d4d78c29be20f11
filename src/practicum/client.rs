use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::PollError;
use crate::homework::Cursor;

/// Error-response bodies are cut to this many characters.
pub const MAX_ERROR_BODY_CHARS: usize = 500;

/// Source of homework status payloads.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches every status change since `from_date`. The payload is not validated.
    async fn fetch(&self, from_date: Cursor) -> Result<Value, PollError>;
}

pub struct PracticumApiClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumApiClient {
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl StatusSource for PracticumApiClient {
    async fn fetch(&self, from_date: Cursor) -> Result<Value, PollError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Homework API request failed");
                PollError::Connection(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(MAX_ERROR_BODY_CHARS)
                .collect();
            tracing::warn!(status = status.as_u16(), body = %body, "Homework API returned an error status");
            return Err(PollError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PollError::Connection(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(error = %e, "Homework API returned a body that is not JSON");
            PollError::Decode(e.to_string())
        })
    }
}
