//! Structured errors for dashboard API requests.
//!
//! Every variant carries the endpoint that failed so operators can
//! diagnose from the log line alone. Non-success statuses keep the
//! response body for the same reason.

use thiserror::Error;

/// Errors produced by the dashboard API client.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Configuration failure before any request was made.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The request could not complete at the transport level.
    #[error("HTTP request to {endpoint} failed: {source}")]
    Http {
        /// The logical endpoint, e.g. `GET /api/search`.
        endpoint: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("API error from {endpoint}: status {status}: {body}")]
    Api {
        /// The logical endpoint, e.g. `PATCH /api/notifications`.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, kept verbatim for diagnosis.
        body: String,
    },

    /// The response body did not decode into the expected shape.
    #[error("failed to decode response from {endpoint}: {source}")]
    Deserialization {
        /// The logical endpoint.
        endpoint: String,
        /// The underlying decode error.
        source: reqwest::Error,
    },
}
