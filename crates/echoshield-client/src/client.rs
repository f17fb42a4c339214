//! Claim store client implementation.

use crate::error::ClientError;
use crate::wire;
use async_trait::async_trait;
use chrono::Utc;
use echoshield_domain::traits::{ClaimSource, DashboardSink};
use echoshield_domain::{Claim, DashboardUpdate};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default timeout for store requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the claim store
///
/// Timeouts are enforced here, not by the pipeline.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    /// Create a client with the default request timeout
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::RequestError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL of the claim store
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current claim batch
    ///
    /// Malformed records are skipped (see [`wire::decode_claims`]).
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The store is unreachable
    /// - The store answers with a non-success status
    /// - The body is not a JSON array
    pub async fn fetch_claims(&self) -> Result<Vec<Claim>, ClientError> {
        let url = format!("{}/claims", self.base_url);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;

        let records: Vec<Value> = response.json().await?;
        Ok(wire::decode_claims(records, Utc::now()))
    }

    /// Push a dashboard update
    ///
    /// # Errors
    ///
    /// Returns error if the store is unreachable or rejects the update.
    pub async fn publish_dashboard_update(&self, update: &DashboardUpdate) -> Result<(), ClientError> {
        let url = format!("{}/dashboard-update", self.base_url);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(update).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ClaimSource for BackendClient {
    type Error = ClientError;

    async fn fetch_claims(&self) -> Result<Vec<Claim>, Self::Error> {
        BackendClient::fetch_claims(self).await
    }
}

#[async_trait]
impl DashboardSink for BackendClient {
    type Error = ClientError;

    async fn publish(&self, update: &DashboardUpdate) -> Result<(), Self::Error> {
        self.publish_dashboard_update(update).await
    }
}
