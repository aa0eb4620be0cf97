//! # Search Resource Client
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/search?q=<query>` | Cross-entity search |
//!
//! The endpoint searches products, customers, orders, and invoices in one
//! call and returns the matches in an `{ "results": [...] }` envelope.
//! Result ranking and per-kind limits are display concerns handled by the
//! caller; this client returns the list as received.

use meridian_core::SearchResult;
use serde::Deserialize;
use url::Url;

use crate::error::ApiClientError;

/// Envelope for `GET /api/search` responses.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// Client for the dashboard search endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SearchClient {
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Run a search query.
    ///
    /// Calls `GET {base}/api/search?q=<query>`. The query is sent verbatim
    /// (URL-encoded); blank-query suppression is the caller's contract,
    /// not this client's.
    pub async fn query(&self, q: &str) -> Result<Vec<SearchResult>, ApiClientError> {
        let endpoint = "GET /api/search";
        let url = format!("{}api/search", self.base_url);

        let resp = crate::retry::retry_send(|| self.http.get(&url).query(&[("q", q)]).send())
            .await
            .map_err(|e| ApiClientError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiClientError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let envelope: SearchResponse =
            resp.json().await.map_err(|e| ApiClientError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;
        Ok(envelope.results)
    }
}
