//! # Auth Resource Client
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/api/auth/login` | Authenticate, establishing the session cookie |
//! | GET    | `/api/auth/me` | The currently authenticated user, if any |
//! | POST   | `/api/auth/logout` | End the session |
//!
//! The session itself is a cookie the server sets on login; the shared
//! `reqwest::Client` cookie store carries it on every subsequent request,
//! so nothing else in this crate handles credentials.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ApiClientError;

/// Body for `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// The authenticated user, as returned by login and `me`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Server-minted user identifier.
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role string, e.g. `admin` or `staff`.
    pub role: String,
}

/// Envelope wrapping the user object on auth responses.
#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: SessionUser,
}

/// Client for the dashboard auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AuthClient {
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Authenticate with email and password.
    ///
    /// Calls `POST {base}/api/auth/login`. On success the server sets the
    /// session cookie on the shared client and returns the user. Invalid
    /// credentials surface as an API error with status 401.
    pub async fn login(&self, req: &LoginRequest) -> Result<SessionUser, ApiClientError> {
        let endpoint = "POST /api/auth/login";
        let url = format!("{}api/auth/login", self.base_url);

        let resp = crate::retry::retry_send(|| self.http.post(&url).json(req).send())
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

        let envelope: UserEnvelope =
            resp.json().await.map_err(|e| ApiClientError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;
        tracing::debug!(user_id = %envelope.user.id, "login succeeded");
        Ok(envelope.user)
    }

    /// The currently authenticated user, or `None` when the session is
    /// absent or expired.
    ///
    /// Calls `GET {base}/api/auth/me`; a 401 is the documented "not
    /// authenticated" answer, not a failure.
    pub async fn current_user(&self) -> Result<Option<SessionUser>, ApiClientError> {
        let endpoint = "GET /api/auth/me";
        let url = format!("{}api/auth/me", self.base_url);

        let resp = crate::retry::retry_send(|| self.http.get(&url).send())
            .await
            .map_err(|e| ApiClientError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if resp.status().as_u16() == 401 {
            return Ok(None);
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiClientError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let envelope: UserEnvelope =
            resp.json().await.map_err(|e| ApiClientError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;
        Ok(Some(envelope.user))
    }

    /// End the session.
    ///
    /// Calls `POST {base}/api/auth/logout`.
    pub async fn logout(&self) -> Result<(), ApiClientError> {
        let endpoint = "POST /api/auth/logout";
        let url = format!("{}api/auth/logout", self.base_url);

        let resp = crate::retry::retry_send(|| self.http.post(&url).send())
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
