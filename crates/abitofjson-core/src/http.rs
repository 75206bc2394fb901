//! URL creation and the HTTP request behind the fetch task
//!
//! [`JsonSource`] is the seam between the background task and the network. The
//! production implementation, [`HttpJsonSource`], issues a plain GET with fixed
//! connect and read timeouts and accepts nothing but a `200 OK`.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;

use crate::config::HttpConfig;
use crate::errors::{Error, Result};

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Source of the raw `somethingJSON` payload.
#[async_trait]
pub trait JsonSource: Send + Sync {
    /// Fetch the response body for `url` as text.
    async fn fetch_json(&self, url: &Url) -> Result<String>;
}

/// Returns a parsed URL, or `None` (after logging) when `string_url` is malformed.
pub fn create_url(string_url: &str) -> Option<Url> {
    match Url::parse(string_url) {
        Ok(url) => Some(url),
        Err(e) => {
            log::error!(
                "Error with creating URL: {}",
                Error::InvalidUrl {
                    url: string_url.to_string(),
                    message: e.to_string(),
                }
            );
            None
        }
    }
}

/// Make an HTTP request to `url` and return the response body.
///
/// A missing URL yields an empty string without touching the network. Failed
/// requests are logged and also yield an empty string.
pub async fn make_http_request(source: &dyn JsonSource, url: Option<&Url>) -> String {
    let Some(url) = url else {
        return String::new();
    };

    match source.fetch_json(url).await {
        Ok(json_response) => json_response,
        Err(Error::Status(code)) => {
            log::error!("Error response code: {}", code);
            String::new()
        }
        Err(e) => {
            log::error!("Problem retrieving the something JSON results: {}", e);
            String::new()
        }
    }
}

/// reqwest-backed [`JsonSource`].
pub struct HttpJsonSource {
    client: reqwest::Client,
}

impl HttpJsonSource {
    pub fn new() -> Result<Self> {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }

    pub fn with_timeouts(connect_timeout: Duration, read_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Self::with_timeouts(config.connect_timeout(), config.read_timeout())
    }
}

#[async_trait]
impl JsonSource for HttpJsonSource {
    async fn fetch_json(&self, url: &Url) -> Result<String> {
        log::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        log::debug!("Received {} bytes from {}", body.len(), url);
        Ok(read_from_body(&body))
    }
}

/// Decode the body as UTF-8 and join its lines without separators.
fn read_from_body(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect()
}
