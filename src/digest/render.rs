use std::borrow::Cow;
use std::path::Path;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use super::transform::ReportEntry;
use crate::error::DigestError;

pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/report.md");

const DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Serialize)]
struct ReportView<'a> {
    playlist_title: &'a str,
    entries: Vec<EntryView<'a>>,
}

#[derive(Serialize)]
struct EntryView<'a> {
    title: &'a str,
    /// Human-readable date, e.g. "May 2, 2024".
    published_at: String,
    published_at_rfc3339: String,
    video_id: &'a str,
    description: &'a str,
}

impl<'a> From<&'a ReportEntry> for EntryView<'a> {
    fn from(e: &'a ReportEntry) -> Self {
        EntryView {
            title: &e.title,
            published_at: e.published_at.format(DATE_FORMAT).to_string(),
            published_at_rfc3339: e.published_at.to_rfc3339(),
            video_id: &e.video_id,
            description: &e.description,
        }
    }
}

/// Embedded template unless a path is given.
pub fn load_template(path: Option<&Path>) -> Result<Cow<'static, str>, DigestError> {
    match path {
        None => Ok(Cow::Borrowed(DEFAULT_TEMPLATE)),
        Some(p) => std::fs::read_to_string(p)
            .map(Cow::Owned)
            .map_err(|e| DigestError::Config(format!("error reading template {}: {e}", p.display()))),
    }
}

pub fn render(playlist_title: &str, entries: &[ReportEntry], template_source: &str) -> Result<String, DigestError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    let tmpl = env.template_from_str(template_source)?;
    let view = ReportView {
        playlist_title,
        entries: entries.iter().map(EntryView::from).collect(),
    };
    Ok(tmpl.render(&view)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;

    fn entry(title: &str, video_id: &str, description: &str) -> ReportEntry {
        ReportEntry {
            title: title.into(),
            published_at: Utc.with_ymd_and_hms(2024, 5, 2, 14, 30, 0).unwrap(),
            video_id: video_id.into(),
            description: description.into(),
        }
    }

    #[test]
    fn default_template_links_each_video() {
        let out = render("Weekly", &[entry("Test Video 1", "123", "About things.")], DEFAULT_TEMPLATE).unwrap();
        assert!(out.starts_with("# Weekly"));
        assert!(out.contains("- **[Test Video 1](https://www.youtube.com/watch?v=123)**"));
        assert!(out.contains("May 2, 2024"));
        assert!(out.contains("About things."));
    }

    #[test]
    fn default_template_empty_playlist_keeps_title() {
        let out = render("Nothing New", &[], DEFAULT_TEMPLATE).unwrap();
        assert!(out.contains("# Nothing New"));
        assert!(!out.contains("youtube.com/watch"));
    }

    #[test]
    fn multiline_description_stays_in_list_item() {
        let out = render("P", &[entry("T", "v", "line one\nline two")], DEFAULT_TEMPLATE).unwrap();
        assert!(out.contains("  line one\n  line two"));
    }

    #[test]
    fn custom_template_sees_all_fields() {
        let tpl = "{{ playlist_title }}|{% for e in entries %}{{ e.title }},{{ e.video_id }},{{ e.published_at_rfc3339 }},{{ e.description }}{% endfor %}";
        let out = render("P", &[entry("T", "v1", "d")], tpl).unwrap();
        assert_eq!(out, "P|T,v1,2024-05-02T14:30:00+00:00,d");
    }

    #[test]
    fn malformed_template_is_template_error() {
        let err = render("P", &[], "{% for e in entries %}").unwrap_err();
        assert!(matches!(err, DigestError::Template(_)));
    }

    #[test]
    fn undefined_field_is_template_error() {
        let err = render("P", &[entry("T", "v", "")], "{% for e in entries %}{{ e.thumbnail }}{% endfor %}").unwrap_err();
        assert!(matches!(err, DigestError::Template(_)));
        let err = render("P", &[], "{{ channel }}").unwrap_err();
        assert!(matches!(err, DigestError::Template(_)));
    }

    #[test]
    fn load_template_defaults_to_embedded() {
        assert_eq!(load_template(None).unwrap(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn load_template_reads_custom_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{{ playlist_title }}:{% for e in entries %} {{ e.video_id }}{% endfor %}").unwrap();

        let source = load_template(Some(file.path())).unwrap();
        assert!(matches!(source, Cow::Owned(_)));
        let out = render("Mine", &[entry("T", "abc", "")], &source).unwrap();
        assert_eq!(out, "Mine: abc");
    }

    #[test]
    fn load_template_missing_file_is_config_error() {
        let err = load_template(Some(Path::new("/nonexistent/report.md"))).unwrap_err();
        assert!(matches!(err, DigestError::Config(_)));
    }
}
