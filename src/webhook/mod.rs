//! Chat webhook delivery.
//!
//! The destination is a Discord-style webhook: anyone holding the URL may post
//! to the channel, so the URL is treated as a secret and never logged in full.

mod message;

pub use message::{
    EMBED_COLOR, EMBED_TITLE, Embed, EmbedField, INSTALLATION_STEPS, WebhookMessage, build_message,
};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use log::info;
use reqwest::{Client, Url};

use crate::http::HttpClient;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SendWebhook: Send + Sync {
    async fn send(&self, message: &WebhookMessage) -> Result<()>;
}

pub struct DiscordWebhook {
    http: HttpClient,
    url: Url,
}

impl DiscordWebhook {
    /// Creates a sender for the given webhook URL.
    /// Fails if the URL is empty, malformed, or not http(s).
    #[tracing::instrument(skip_all)]
    pub fn new(client: Client, url: &str) -> Result<Self> {
        let url = parse_webhook_url(url)?;
        Ok(Self {
            http: HttpClient::new(client),
            url,
        })
    }
}

#[async_trait]
impl SendWebhook for DiscordWebhook {
    #[tracing::instrument(skip_all)]
    async fn send(&self, message: &WebhookMessage) -> Result<()> {
        self.http
            .post_json(&self.url, message)
            .await
            .with_context(|| format!("Failed to deliver message to webhook {}", redact(&self.url)))?;

        info!("Announcement delivered to {}", redact(&self.url));
        Ok(())
    }
}

/// Validates a webhook URL taken from configuration.
pub fn parse_webhook_url(url: &str) -> Result<Url> {
    let url = url.trim();
    if url.is_empty() {
        bail!("Webhook URL is empty");
    }

    let parsed = Url::parse(url).context("Webhook URL is not a valid URL")?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => bail!("Webhook URL must use http or https, got '{}'", other),
    }
    if parsed.host_str().is_none() {
        bail!("Webhook URL has no host");
    }

    Ok(parsed)
}

/// Renders a webhook URL without its path, which carries the token.
fn redact(url: &Url) -> String {
    match url.port() {
        Some(port) => format!("{}://{}:{}/...", url.scheme(), url.host_str().unwrap_or(""), port),
        None => format!("{}://{}/...", url.scheme(), url.host_str().unwrap_or("")),
    }
}
