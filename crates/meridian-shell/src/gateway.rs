//! Gateway traits between the controllers and the network collaborator.
//!
//! The controllers speak a minimal request/response contract; anything
//! that can answer it can sit behind them: the real
//! `meridian-api-client` sub-clients in the application, stubs in tests.
//! Nothing above this seam touches `reqwest`.

use async_trait::async_trait;
use meridian_api_client::notifications::NotificationClient;
use meridian_api_client::search::SearchClient;
use meridian_core::{Notification, NotificationId, SearchResult};
use thiserror::Error;

/// The one failure kind the controllers handle.
///
/// Every transport, status, or decode problem collapses to this at the
/// gateway boundary; the controllers translate it into a dismissible
/// notice and return to a stable, non-loading state. A transport timeout
/// arrives here like any other failure.
#[derive(Debug, Clone, Error)]
#[error("request to {endpoint} failed: {detail}")]
pub struct GatewayError {
    /// The logical endpoint that failed, e.g. `GET /api/search`.
    pub endpoint: String,
    /// Human-readable diagnostic detail.
    pub detail: String,
}

impl From<meridian_api_client::ApiClientError> for GatewayError {
    fn from(err: meridian_api_client::ApiClientError) -> Self {
        use meridian_api_client::ApiClientError;
        let endpoint = match &err {
            ApiClientError::Http { endpoint, .. }
            | ApiClientError::Api { endpoint, .. }
            | ApiClientError::Deserialization { endpoint, .. } => endpoint.clone(),
            ApiClientError::Config(_) => "configuration".to_string(),
        };
        Self {
            endpoint,
            detail: err.to_string(),
        }
    }
}

/// Search collaborator contract.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Run a search for the given (non-blank) query.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, GatewayError>;
}

/// Notification collaborator contract.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Fetch the full notification set, in server order.
    async fn list(&self) -> Result<Vec<Notification>, GatewayError>;
    /// Mark the given notifications read.
    async fn mark_read(&self, ids: &[NotificationId]) -> Result<(), GatewayError>;
    /// Delete the given notifications.
    async fn delete(&self, ids: &[NotificationId]) -> Result<(), GatewayError>;
}

#[async_trait]
impl SearchGateway for SearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, GatewayError> {
        self.query(query).await.map_err(Into::into)
    }
}

#[async_trait]
impl NotificationGateway for NotificationClient {
    async fn list(&self) -> Result<Vec<Notification>, GatewayError> {
        NotificationClient::list(self).await.map_err(Into::into)
    }

    async fn mark_read(&self, ids: &[NotificationId]) -> Result<(), GatewayError> {
        NotificationClient::mark_read(self, ids).await.map_err(Into::into)
    }

    async fn delete(&self, ids: &[NotificationId]) -> Result<(), GatewayError> {
        NotificationClient::delete(self, ids).await.map_err(Into::into)
    }
}
