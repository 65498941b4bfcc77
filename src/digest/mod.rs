use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Duration, Utc};
use clap::Args;
use serde::Serialize;

use crate::error::DigestError;
use crate::output::{self, config::OutputConfig, types::{Envelope, Meta}};
use crate::telemetry;
use crate::telemetry::ops::digest::Phase as DigestPhase;
use crate::youtube::{PlaylistSource, PAGE_SIZE};

pub mod render;
pub mod transform;

use transform::{Boilerplate, ReportEntry};

pub const DEFAULT_PLAYLIST: &str = "PLgGXSWYM2FpNjXSFUQfFyXmFk3ENUZMGL";

#[derive(Args, Debug, Clone)]
pub struct DigestCmd {
    /// Number of days to look back for new videos
    #[arg(long, default_value_t = 30)]
    pub days: u32,
    /// Playlist to report on
    #[arg(long, default_value = DEFAULT_PLAYLIST)]
    pub playlist: String,
    /// Render with this template instead of the built-in Markdown one
    #[arg(long)]
    pub template: Option<PathBuf>,
    /// Extra boilerplate pattern (case-insensitive regex) to remove from descriptions; repeatable
    #[arg(long = "strip", value_name = "REGEX")]
    pub strip: Vec<String>,
}

impl Default for DigestCmd {
    fn default() -> Self {
        Self { days: 30, playlist: DEFAULT_PLAYLIST.to_string(), template: None, strip: Vec::new() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Report,
    Json(OutputConfig),
}

#[derive(Serialize)]
struct DigestResult<'a> {
    playlist_id: &'a str,
    playlist_title: &'a str,
    cutoff: DateTime<Utc>,
    entries: &'a [ReportEntry],
}

/// `now - days`, or a config error when that falls outside the representable range.
fn lookback_cutoff(now: DateTime<Utc>, days: u32) -> Result<DateTime<Utc>, DigestError> {
    Duration::try_days(i64::from(days))
        .and_then(|d| now.checked_sub_signed(d))
        .ok_or_else(|| DigestError::Config(format!("lookback window of {days} days is out of range")))
}

pub async fn run<S, W>(
    source: &S,
    args: &DigestCmd,
    format: Format,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<(), DigestError>
where
    S: PlaylistSource + ?Sized,
    W: Write,
{
    let log = telemetry::digest();
    let _g = log.root_span_kv([
        ("playlist", args.playlist.clone()),
        ("days", args.days.to_string()),
        ("template", format!("{:?}", args.template)),
        ("strip", args.strip.len().to_string()),
    ]).entered();
    let t0 = Instant::now();

    let template = render::load_template(args.template.as_deref())?;
    let boilerplate = Boilerplate::with_defaults(&args.strip)?;
    let cutoff = lookback_cutoff(now, args.days)?;

    let title = {
        let _s = log.span(&DigestPhase::FetchTitle).entered();
        source.playlist_title(&args.playlist).await?
    };
    let items = {
        let _s = log.span(&DigestPhase::FetchItems).entered();
        source.playlist_items(&args.playlist).await?
    };
    log.fetched(&title, items.len());
    if items.len() >= PAGE_SIZE as usize {
        log.warn(format!("⚠️ Only the first {} playlist items are considered", PAGE_SIZE));
    }

    let entries = {
        let _s = log.span(&DigestPhase::Transform).entered();
        transform::transform(&items, cutoff, &boilerplate)?
    };
    log.filtered(entries.len(), items.len() - entries.len());

    let text = {
        let _s = log.span(&DigestPhase::Render).entered();
        match format {
            Format::Report => render::render(&title, &entries, &template)?,
            Format::Json(cfg) => {
                let result = DigestResult { playlist_id: &args.playlist, playlist_title: &title, cutoff, entries: &entries };
                let meta = Meta { duration_ms: Some(t0.elapsed().as_millis()) };
                Envelope::result("digest", &result, Some(meta))
                    .and_then(|env| output::to_json(&env, cfg))
                    .map_err(DigestError::Serialize)?
            }
        }
    };

    let _s = log.span(&DigestPhase::Write).entered();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    log.info_kv("✅ Digest written", [("entries", entries.len().to_string()), ("bytes", text.len().to_string())]);
    Ok(())
}
