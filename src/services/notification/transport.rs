//! HTTP transport backed by reqwest.

use async_trait::async_trait;

use super::{OutgoingRequest, Transport};
use crate::error::{AppError, AppResult, TransportError};

/// Posts notification requests with a shared reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh HTTP client
    pub fn new() -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wraps an existing client so connection pools can be shared
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, request: &OutgoingRequest) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(&request.url)
            .header("Content-Type", "application/json")
            .timeout(request.timeout)
            .body(request.body.clone())
            .send()
            .await?;

        Ok(response.status().as_u16())
    }
}
