//! # Notifications Resource Client
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/notifications` | Fetch the full notification set |
//! | PATCH  | `/api/notifications` | Mark the given ids read |
//! | DELETE | `/api/notifications?ids=<comma-joined>` | Delete the given ids |
//!
//! The mutation endpoints define no response body beyond success/failure,
//! so both return `()` on success. Batch ids travel as a JSON array on
//! PATCH and comma-joined in the query string on DELETE; that asymmetry
//! is the server's contract, normalized away here.

use meridian_core::{Notification, NotificationId};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ApiClientError;

/// Envelope for `GET /api/notifications` responses.
#[derive(Debug, Deserialize)]
struct NotificationsResponse {
    #[serde(default)]
    notifications: Vec<Notification>,
}

/// Body for `PATCH /api/notifications`.
#[derive(Debug, Serialize)]
struct MarkReadRequest<'a> {
    ids: &'a [NotificationId],
}

/// Client for the dashboard notifications endpoint.
#[derive(Debug, Clone)]
pub struct NotificationClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NotificationClient {
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Fetch the full notification set, in server order.
    ///
    /// Calls `GET {base}/api/notifications`.
    pub async fn list(&self) -> Result<Vec<Notification>, ApiClientError> {
        let endpoint = "GET /api/notifications";
        let url = format!("{}api/notifications", self.base_url);

        let resp = crate::retry::retry_send(|| self.http.get(&url).send())
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

        let envelope: NotificationsResponse =
            resp.json().await.map_err(|e| ApiClientError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;
        Ok(envelope.notifications)
    }

    /// Mark the given notifications read.
    ///
    /// Calls `PATCH {base}/api/notifications` with body `{ "ids": [...] }`.
    pub async fn mark_read(&self, ids: &[NotificationId]) -> Result<(), ApiClientError> {
        let endpoint = "PATCH /api/notifications";
        let url = format!("{}api/notifications", self.base_url);
        let body = MarkReadRequest { ids };

        let resp = crate::retry::retry_send(|| self.http.patch(&url).json(&body).send())
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

        Ok(())
    }

    /// Delete the given notifications.
    ///
    /// Calls `DELETE {base}/api/notifications?ids=<comma-joined ids>`.
    pub async fn delete(&self, ids: &[NotificationId]) -> Result<(), ApiClientError> {
        let endpoint = "DELETE /api/notifications";
        let url = format!("{}api/notifications", self.base_url);
        let joined = ids
            .iter()
            .map(NotificationId::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let resp =
            crate::retry::retry_send(|| self.http.delete(&url).query(&[("ids", &joined)]).send())
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

        Ok(())
    }
}
