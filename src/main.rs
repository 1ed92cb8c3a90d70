use anyhow::Result;
use announce_release::AnnounceOptions;
use clap::Parser;
use std::path::PathBuf;

/// announce-release - post a release summary to a chat webhook
///
/// Reads the release event that triggered the workflow, lists the Windows and
/// Linux downloads, and posts one embed message to the configured webhook.
///
/// Both inputs default to the environment provided by the CI job, so the
/// step normally runs without arguments.
#[derive(Parser, Debug)]
#[command(author, version = env!("ANNOUNCE_RELEASE_VERSION"), about)]
struct Cli {
    /// Release event payload (also via GITHUB_EVENT_PATH)
    #[arg(long = "event-path", env = "GITHUB_EVENT_PATH", value_name = "PATH")]
    event_path: PathBuf,

    /// Webhook to post to (also via DISCORD_BUILD_WEBHOOK)
    #[arg(
        long = "webhook-url",
        env = "DISCORD_BUILD_WEBHOOK",
        value_name = "URL",
        hide_env_values = true,
        required_unless_present = "dry_run"
    )]
    webhook_url: Option<String>,

    /// Print the message as JSON instead of sending it
    #[arg(long = "dry-run")]
    dry_run: bool,
}

impl From<Cli> for AnnounceOptions {
    fn from(cli: Cli) -> Self {
        AnnounceOptions {
            event_path: cli.event_path,
            webhook_url: cli.webhook_url,
            dry_run: cli.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = announce_release::runtime::RealRuntime;

    announce_release::run(&runtime, cli.into()).await
}
