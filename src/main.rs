use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use dotenvy::dotenv;

mod config;
mod digest;
mod error;
mod output;
mod telemetry;
mod youtube;

use config::YouTubeConfig;
use digest::{DigestCmd, Format};
use output::config::OutputConfig;
use youtube::YouTubeClient;

#[derive(Parser)]
#[command(name = "playlist-digest", about = "Markdown digest of recent videos in a YouTube playlist")]
struct Cli {
    /// Emit a single JSON envelope to stdout instead of the report; logs go to stderr
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(flatten)]
    digest: DigestCmd,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    // initialize logging/tracing (stderr). Respect RUST_LOG and DIGEST_LOG_FORMAT
    telemetry::config::init_tracing();

    let cfg = YouTubeConfig::from_env()?;
    let client = YouTubeClient::new(&cfg)?;

    let format = if cli.json { Format::Json(OutputConfig::from_env()) } else { Format::Report };
    let mut stdout = std::io::stdout().lock();
    digest::run(&client, &cli.digest, format, Utc::now(), &mut stdout)
        .await
        .with_context(|| format!("digest of playlist {} failed", cli.digest.playlist))?;

    Ok(())
}
