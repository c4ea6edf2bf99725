//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper, including:
//! - Building the HTTP client with the browser identity header and timeouts
//! - Pacing every request through a [`RateLimiter`]
//! - Turning every transport failure into a logged `None`

use crate::config::ScraperConfig;
use crate::crawler::rate_limiter::{FixedDelay, RateLimiter};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Source of raw page bodies
///
/// Implementations never fail loudly: anything that keeps a page from being
/// read comes back as `None`, after the implementation has logged why.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Fetches `url` and returns the response body
    async fn fetch(&self, url: &str) -> Option<String>;
}

impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    async fn fetch(&self, url: &str) -> Option<String> {
        (**self).fetch(url).await
    }
}

/// Why a single request produced no page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("HTTP status {0}")]
    Status(StatusCode),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("{0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::Connect(e.to_string())
        } else if e.is_body() || e.is_decode() {
            FetchError::Body(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - Scraper settings supplying the user agent and timeouts
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use storefront_scraper::config::ScraperConfig;
/// use storefront_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&ScraperConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ScraperConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`PageFetcher`] backed by a `reqwest` client
///
/// The client is built once and reused for every request of a run.
#[derive(Debug, Clone)]
pub struct HttpFetcher<L = FixedDelay> {
    client: Client,
    limiter: L,
}

impl HttpFetcher<FixedDelay> {
    /// Builds a fetcher from scraper settings with a fixed politeness delay
    pub fn from_config(config: &ScraperConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;
        Ok(Self::new(client, FixedDelay::from_millis(config.delay_ms)))
    }
}

impl<L: RateLimiter> HttpFetcher<L> {
    pub fn new(client: Client, limiter: L) -> Self {
        Self { client, limiter }
    }

    pub fn limiter(&self) -> &L {
        &self.limiter
    }

    /// Performs one GET and requires a success status
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}

impl<L: RateLimiter> PageFetcher for HttpFetcher<L> {
    async fn fetch(&self, url: &str) -> Option<String> {
        self.limiter.wait().await;

        match self.get(url).await {
            Ok(body) => {
                tracing::debug!("Fetched {} ({} bytes)", url, body.len());
                Some(body)
            }
            Err(e) => {
                tracing::warn!("Error fetching {}: {}", url, e);
                None
            }
        }
    }
}
