use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, UPGRADE_INSECURE_REQUESTS};
use thiserror::Error;
use tracing::info;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Client setup failed: {0}")]
    Client(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => FetchError::Network(err.to_string()),
        }
    }
}

/// Where the investor listing document comes from.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Fetches the listing page over HTTP with browser-like headers.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let url = url.into();
        reqwest::Url::parse(&url).map_err(|e| FetchError::Client(format!("{}: {}", url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(HttpSource { client, url })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        info!("Fetching investor listing: {}", self.url);
        let html = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        info!("Fetched {} bytes", html.len());
        Ok(html)
    }
}
