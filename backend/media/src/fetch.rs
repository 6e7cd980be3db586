//! Scoped image download.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Url};
use tracing::debug;

use signsolve_core::{ImagePayload, SolveError};

use crate::sniff::sniff_image;

/// Parse and validate an image URL before any network activity.
pub fn parse_url(raw: &str) -> Result<Url, SolveError> {
    let url = Url::parse(raw)
        .map_err(|e| SolveError::InvalidRequest(format!("imageUrl is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SolveError::InvalidRequest(format!(
            "imageUrl scheme \"{other}\" is not supported"
        ))),
    }
}

/// Downloads captcha images over HTTP(S).
///
/// Each call re-downloads: there is no cache and no retry. The request
/// timeout and the body size cap bound a single fetch.
pub struct ImageFetcher {
    client: Client,
    max_bytes: usize,
}

impl ImageFetcher {
    pub fn new(timeout: Duration, max_bytes: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("signsolve/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build image HTTP client")?;
        Ok(Self { client, max_bytes })
    }

    /// Fetch `url` and return its body as a validated image payload.
    pub async fn fetch(&self, url: Url) -> Result<ImagePayload, SolveError> {
        debug!(url = %url, "Downloading captcha image");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SolveError::ImageFetch(format!("request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SolveError::ImageFetch(format!("{url} returned {status}")));
        }

        if let Some(len) = resp.content_length() {
            if len > self.max_bytes as u64 {
                return Err(SolveError::ImageFetch(format!(
                    "{url} body of {len} bytes exceeds the {} byte cap",
                    self.max_bytes
                )));
            }
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| SolveError::ImageFetch(format!("failed to read body from {url}: {e}")))?;

        if bytes.is_empty() {
            return Err(SolveError::ImageFetch(format!("{url} returned an empty body")));
        }
        if bytes.len() > self.max_bytes {
            return Err(SolveError::ImageFetch(format!(
                "{url} body of {} bytes exceeds the {} byte cap",
                bytes.len(),
                self.max_bytes
            )));
        }

        let mime_type = sniff_image(&bytes)
            .map_err(|e| SolveError::ImageFetch(format!("{url} body is not an image: {e:#}")))?;

        debug!(bytes = bytes.len(), mime_type, "Captcha image downloaded");
        Ok(ImagePayload { bytes, mime_type })
    }
}
