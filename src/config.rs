use std::time::Duration;

use crate::error::DigestError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";
const TIMEOUT_VAR: &str = "YOUTUBE_TIMEOUT_SECS";

#[derive(Clone, Debug)]
pub struct YouTubeConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl YouTubeConfig {
    pub fn from_env() -> Result<Self, DigestError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    fn from_lookup<F>(get: F) -> Result<Self, DigestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        cfg.api_key = get(API_KEY_VAR).filter(|k| !k.is_empty());
        if let Some(base) = get("YOUTUBE_API_BASE_URL") {
            cfg.base_url = base;
        }
        if let Some(timeout) = get(TIMEOUT_VAR) {
            match timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => cfg.timeout = Duration::from_secs(secs),
                _ => {
                    return Err(DigestError::Config(format!(
                        "{TIMEOUT_VAR} must be a positive number of seconds, got {timeout:?}"
                    )));
                }
            }
        }
        Ok(cfg)
    }

    pub fn require_api_key(&self) -> Result<&str, DigestError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| DigestError::Config(format!("{API_KEY_VAR} environment variable not set")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = YouTubeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        let err = cfg.require_api_key().unwrap_err();
        assert_eq!(format!("{err}"), "YOUTUBE_API_KEY environment variable not set");
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let cfg = YouTubeConfig::from_lookup(lookup(&[("YOUTUBE_API_KEY", "")])).unwrap();
        assert!(matches!(cfg.require_api_key(), Err(DigestError::Config(_))));
    }

    #[test]
    fn env_overrides() {
        let cfg = YouTubeConfig::from_lookup(lookup(&[
            ("YOUTUBE_API_KEY", "k"),
            ("YOUTUBE_API_BASE_URL", "http://localhost:8080/v3"),
            ("YOUTUBE_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.require_api_key().unwrap(), "k");
        assert_eq!(cfg.base_url, "http://localhost:8080/v3");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn unparseable_timeout_is_config_error() {
        let err = YouTubeConfig::from_lookup(lookup(&[("YOUTUBE_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, DigestError::Config(ref m) if m.contains("YOUTUBE_TIMEOUT_SECS")));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = YouTubeConfig::from_lookup(lookup(&[("YOUTUBE_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, DigestError::Config(_)));
    }
}
