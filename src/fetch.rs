//! Outbound HTTP for the GitHub API and package registries.
//!
//! One attempt per call, fixed timeout, no retries. The trait exists so tool
//! handlers can be tested with a mock fetcher, including asserting that no
//! outbound request was made at all.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::error::{GatewayError, GatewayResult};

#[cfg(test)]
use mockall::automock;

/// Per-call timeout applied to every outbound request.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Outbound JSON HTTP.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> GatewayResult<Value>;

    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: Value,
    ) -> GatewayResult<Value>;
}

/// Real implementation wrapping a reqwest client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Unexpected {
                detail: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// Split the response into JSON-on-success or a typed failure carrying
    /// the status and whatever body text the server returned.
    async fn handle_response(response: Response) -> GatewayResult<Value> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|e| GatewayError::Unexpected {
                detail: e.to_string(),
            })
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(GatewayError::ExternalCallFailed {
                detail: format!("status {}: {}", status.as_u16(), body),
            })
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> GatewayResult<Value> {
        let response = self.client.get(url).send().await.map_err(|e| {
            GatewayError::ExternalCallFailed {
                detail: e.to_string(),
            }
        })?;
        Self::handle_response(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: Value,
    ) -> GatewayResult<Value> {
        let mut request = self.client.post(url).json(&body);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::ExternalCallFailed {
                detail: e.to_string(),
            })?;
        Self::handle_response(response).await
    }
}
