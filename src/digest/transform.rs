use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::DigestError;
use crate::youtube::PlaylistItemRaw;

/// Stock phrases appended to every upload's description.
pub const DEFAULT_BOILERPLATE: &[&str] = &[
    r"You can participate in our live stream to ask questions or catch the replay on your preferred podcast platform\.",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub video_id: String,
    pub description: String,
}

/// Ordered list of case-insensitive patterns removed from descriptions.
#[derive(Clone, Debug)]
pub struct Boilerplate {
    patterns: Vec<Regex>,
}

impl Boilerplate {
    pub fn new<I, S>(patterns: I) -> Result<Self, DigestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                RegexBuilder::new(p.as_ref())
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| DigestError::Config(format!("invalid boilerplate pattern {:?}: {e}", p.as_ref())))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Defaults followed by `extra`, in that order.
    pub fn with_defaults<S: AsRef<str>>(extra: &[S]) -> Result<Self, DigestError> {
        Self::new(DEFAULT_BOILERPLATE.iter().copied().chain(extra.iter().map(|s| s.as_ref())))
    }

    pub fn strip(&self, text: &str) -> String {
        let mut out = text.trim().to_string();
        for re in &self.patterns {
            out = re.replace_all(&out, "").into_owned();
        }
        out.trim().to_string()
    }
}

pub fn transform(
    items: &[PlaylistItemRaw],
    cutoff: DateTime<Utc>,
    boilerplate: &Boilerplate,
) -> Result<Vec<ReportEntry>, DigestError> {
    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        let published_at = DateTime::parse_from_rfc3339(&item.published_at)
            .map_err(|source| DigestError::Parse {
                video_id: item.video_id.clone(),
                value: item.published_at.clone(),
                source,
            })?
            .with_timezone(&Utc);

        if published_at <= cutoff { continue; }

        entries.push(ReportEntry {
            title: item.title.trim().to_string(),
            published_at,
            video_id: item.video_id.clone(),
            description: boilerplate.strip(&item.description),
        });
    }
    // sort_by is stable: equal instants keep playlist order
    entries.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    Ok(entries)
}
