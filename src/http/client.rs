//! HTTP client for delivering JSON payloads.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Url};
use serde::Serialize;

use super::error::check_status;

/// Thin wrapper over reqwest that sends a request once and reports failures
/// with a classified error.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a POST request with a JSON body and returns the HTTP status.
    /// Fails on transport errors and non-success statuses; never retries.
    #[tracing::instrument(skip_all)]
    pub async fn post_json<B: Serialize + ?Sized>(&self, url: &Url, body: &B) -> Result<u16> {
        // The path may carry credentials; keep it out of logs and errors.
        debug!("POST JSON to {}...", url.host_str().unwrap_or_default());

        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| e.without_url())
            .context("Failed to send request")?;

        let response = check_status(response).await?;
        let status = response.status().as_u16();

        debug!("POST succeeded with HTTP {}", status);
        Ok(status)
    }
}
