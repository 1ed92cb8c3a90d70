//! Release announcement: release event in, one webhook message out.

use anyhow::{Context, Result};
use log::info;
use reqwest::Client;
use std::path::PathBuf;

use crate::asset::classify;
use crate::github::{ReleaseEvent, load_release_event};
use crate::runtime::Runtime;
use crate::webhook::{DiscordWebhook, SendWebhook, WebhookMessage, build_message};

/// Inputs of one announcer invocation
#[derive(Debug, Clone)]
pub struct AnnounceOptions {
    /// Event payload written by the CI platform
    pub event_path: PathBuf,
    /// Destination webhook; only optional for dry runs
    pub webhook_url: Option<String>,
    /// Print the message instead of sending it
    pub dry_run: bool,
}

/// Builds the announcement for a release without sending it.
pub fn prepare(release: &ReleaseEvent) -> WebhookMessage {
    let links = classify(&release.assets);
    build_message(release, &links)
}

/// Builds the announcement for a release and posts it through `sender`.
#[tracing::instrument(skip_all, fields(tag = %release.tag_name))]
pub async fn announce<S: SendWebhook + ?Sized>(
    release: &ReleaseEvent,
    sender: &S,
) -> Result<WebhookMessage> {
    let message = prepare(release);
    sender.send(&message).await?;
    info!("Announced release {}", release.tag_name);
    Ok(message)
}

/// Entry point used by the CLI.
///
/// The webhook URL is validated before the event file is read so that a
/// misconfigured job fails without touching the payload.
#[tracing::instrument(skip_all, fields(event_path = %options.event_path.display()))]
pub async fn run<R: Runtime + ?Sized>(runtime: &R, options: AnnounceOptions) -> Result<()> {
    if options.dry_run {
        let release = load_release_event(runtime, &options.event_path)?;
        let message = prepare(&release);
        let json =
            serde_json::to_string_pretty(&message).context("Failed to serialize message")?;
        println!("{}", json);
        return Ok(());
    }

    let url = options
        .webhook_url
        .as_deref()
        .context("No webhook URL configured; set DISCORD_BUILD_WEBHOOK")?;
    let webhook = DiscordWebhook::new(Client::new(), url)?;

    let release = load_release_event(runtime, &options.event_path)?;
    announce(&release, &webhook).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::ReleaseAsset;
    use crate::runtime::MockRuntime;
    use crate::webhook::MockSendWebhook;

    const EVENT_JSON: &str = r#"{
        "action": "published",
        "release": {
            "tag_name": "v1.7.3000",
            "html_url": "https://github.com/PCSX2/pcsx2/releases/tag/v1.7.3000",
            "body": "- Some fix",
            "assets": [
                {"name": "pcsx2-v1.7.3000-windows-x64-Qt.7z", "browser_download_url": "u1"},
                {"name": "pcsx2-v1.7.3000-linux-AppImage-x64.AppImage", "browser_download_url": "u2"},
                {"name": "pcsx2-v1.7.3000-windows-x64-symbols.7z", "browser_download_url": "u3"}
            ]
        }
    }"#;

    fn release() -> ReleaseEvent {
        ReleaseEvent {
            tag_name: "v1.0.0".to_string(),
            html_url: "https://example.com/v1.0.0".to_string(),
            body: "changes".to_string(),
            assets: vec![
                ReleaseAsset {
                    name: "pcsx2-windows-x64-Qt.7z".to_string(),
                    browser_download_url: "u1".to_string(),
                },
                ReleaseAsset {
                    name: "pcsx2-linux-x64.AppImage".to_string(),
                    browser_download_url: "u2".to_string(),
                },
                ReleaseAsset {
                    name: "pcsx2-windows-symbols.7z".to_string(),
                    browser_download_url: "u3".to_string(),
                },
            ],
        }
    }

    fn event_runtime() -> MockRuntime {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| true);
        runtime
            .expect_read_to_string()
            .returning(|_| Ok(EVENT_JSON.to_string()));
        runtime
    }

    #[test]
    fn test_prepare() {
        let message = prepare(&release());
        let embed = &message.embeds[0];

        assert_eq!(embed.field("Windows Downloads").unwrap().value, "- [x64 Qt](u1)\n");
        assert_eq!(embed.field("Linux Downloads").unwrap().value, "- [x64](u2)\n");
    }

    #[test]
    fn test_prepare_without_assets() {
        let mut release = release();
        release.assets.clear();

        let message = prepare(&release);

        assert_eq!(message.embeds[0].fields.len(), 4);
    }

    #[tokio::test]
    async fn test_announce_sends_once() {
        let mut sender = MockSendWebhook::new();
        sender
            .expect_send()
            .withf(|message| message.embeds[0].fields[0].value == "v1.0.0")
            .times(1)
            .returning(|_| Ok(()));

        let message = announce(&release(), &sender).await.unwrap();

        assert_eq!(message.embeds[0].fields.len(), 6);
    }

    #[tokio::test]
    async fn test_announce_propagates_send_failure() {
        let mut sender = MockSendWebhook::new();
        sender
            .expect_send()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("connection reset")));

        let result = announce(&release(), &sender).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_posts_to_webhook() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/webhooks/1/t")
            .match_body(mockito::Matcher::Regex(
                r#""value":"- \[x64 Qt\]\(u1\)\\n""#.to_string(),
            ))
            .with_status(204)
            .create_async()
            .await;

        let options = AnnounceOptions {
            event_path: PathBuf::from("/github/workflow/event.json"),
            webhook_url: Some(format!("{}/api/webhooks/1/t", server.url())),
            dry_run: false,
        };

        run(&event_runtime(), options).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_run_without_webhook_url_fails_before_reading_event() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().never();
        runtime.expect_read_to_string().never();

        let options = AnnounceOptions {
            event_path: PathBuf::from("/github/workflow/event.json"),
            webhook_url: None,
            dry_run: false,
        };

        let err = run(&runtime, options).await.unwrap_err();
        assert!(err.to_string().contains("DISCORD_BUILD_WEBHOOK"));
    }

    #[tokio::test]
    async fn test_run_with_invalid_webhook_url_fails() {
        let mut runtime = MockRuntime::new();
        runtime.expect_read_to_string().never();

        let options = AnnounceOptions {
            event_path: PathBuf::from("/github/workflow/event.json"),
            webhook_url: Some("not a url".to_string()),
            dry_run: false,
        };

        assert!(run(&runtime, options).await.is_err());
    }

    #[tokio::test]
    async fn test_run_dry_run_does_not_need_webhook() {
        let options = AnnounceOptions {
            event_path: PathBuf::from("/github/workflow/event.json"),
            webhook_url: None,
            dry_run: true,
        };

        run(&event_runtime(), options).await.unwrap();
    }
}
