//! # meridian-api-client — Typed Rust client for the Meridian dashboard API
//!
//! Provides ergonomic, typed access to the dashboard's REST resources:
//! - **Search** via `GET /api/search`
//! - **Notifications** via `GET`/`PATCH`/`DELETE /api/notifications`
//! - **Auth** via `POST /api/auth/login`, `GET /api/auth/me`,
//!   `POST /api/auth/logout`
//!
//! ## Architecture
//!
//! One [`DashboardClient`] owns a single `reqwest::Client` (connection
//! pool, request timeout, cookie store) and hands shared handles to the
//! per-resource sub-clients. The dashboard session is a cookie set by the
//! login endpoint, so the cookie store is enabled; no bearer token is
//! involved.
//!
//! The interaction controllers in `meridian-shell` reach these sub-clients
//! through gateway traits; nothing above this crate touches `reqwest`.

pub mod auth;
pub mod config;
pub mod error;
pub mod notifications;
pub(crate) mod retry;
pub mod search;

pub use config::ApiConfig;
pub use error::ApiClientError;

use std::time::Duration;

/// Top-level dashboard API client. Holds sub-clients for each resource.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    search: search::SearchClient,
    notifications: notifications::NotificationClient,
    auth: auth::AuthClient,
}

impl DashboardClient {
    /// Create a new dashboard API client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(|e| ApiClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            search: search::SearchClient::new(http.clone(), config.base_url.clone()),
            notifications: notifications::NotificationClient::new(
                http.clone(),
                config.base_url.clone(),
            ),
            auth: auth::AuthClient::new(http, config.base_url),
        })
    }

    /// Access the search client.
    pub fn search(&self) -> &search::SearchClient {
        &self.search
    }

    /// Access the notifications client.
    pub fn notifications(&self) -> &notifications::NotificationClient {
        &self.notifications
    }

    /// Access the auth client.
    pub fn auth(&self) -> &auth::AuthClient {
        &self.auth
    }
}
