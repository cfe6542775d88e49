//! HTTP transport: authenticated GETs with cancellation support.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::errors::Error;

/// Connect timeout for new connections.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
/// TCP keep-alive interval on established connections.
const TCP_KEEPALIVE: Duration = Duration::from_secs(300);
/// How long an idle pooled connection is kept around.
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
/// Idle connections retained per host.
const POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Sends authenticated GET requests and reads whole response bodies.
///
/// Owns the swappable `reqwest::Client` and the API credential. Status
/// interpretation is left to the decoding layer.
pub(crate) struct Transport {
    http: reqwest::Client,
    api_key: String,
}

/// A fully-read response: final status plus the entire body.
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl Transport {
    pub fn new(api_key: String) -> Result<Self, Error> {
        Ok(Self {
            http: default_http_client()?,
            api_key,
        })
    }

    /// Replaces the underlying HTTP client, keeping the credential.
    pub fn set_http_client(&mut self, http: reqwest::Client) {
        self.http = http;
    }

    /// GETs `url` and reads the entire body, racing each await against
    /// `cancel`. A token cancelled before the call starts wins before any
    /// request is sent; dropping the in-flight future aborts the exchange.
    pub async fn fetch(&self, cancel: &CancellationToken, url: Url) -> Result<RawResponse, Error> {
        tracing::debug!(%url, "sending GET request");
        let request = self
            .http
            .get(url)
            .header("X-API-KEY", self.api_key.as_str())
            .header("Accept", "application/json");
        let response = abortable(cancel, request.send()).await?;
        let status = response.status();
        let body = abortable(cancel, response.text()).await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response read");
        Ok(RawResponse { status, body })
    }
}

/// Drives `future` to completion unless `cancel` fires first. Cancellation
/// is checked before the future is first polled.
async fn abortable<T>(
    cancel: &CancellationToken,
    future: impl Future<Output = reqwest::Result<T>>,
) -> Result<T, Error> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        result = future => Ok(result?),
    }
}

fn default_http_client() -> Result<reqwest::Client, Error> {
    let http = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .tcp_keepalive(TCP_KEEPALIVE)
        .pool_idle_timeout(POOL_IDLE_TIMEOUT)
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .build()?;
    Ok(http)
}
