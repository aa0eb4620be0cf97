//! Transient-failure retry for outbound requests.
//!
//! A connect-level failure (the server socket was briefly unavailable)
//! gets one retry after a short pause. Timeouts and HTTP-level errors are
//! surfaced immediately; the caller decides what they mean.

use std::future::Future;
use std::time::Duration;

const RETRY_DELAY: Duration = Duration::from_millis(200);

pub(crate) async fn retry_send<F, Fut>(mut send: F) -> Result<reqwest::Response, reqwest::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    match send().await {
        Ok(resp) => Ok(resp),
        Err(err) if err.is_connect() => {
            tracing::debug!(error = %err, "connect failure, retrying once");
            tokio::time::sleep(RETRY_DELAY).await;
            send().await
        }
        Err(err) => Err(err),
    }
}
