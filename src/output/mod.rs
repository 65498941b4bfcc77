pub mod config;
pub mod types;

use config::OutputConfig;
use types::Envelope;

/// Serialize an envelope to a single JSON document (newline-terminated).
pub fn to_json(env: &Envelope, cfg: OutputConfig) -> Result<String, serde_json::Error> {
    let mut s = if cfg.pretty { serde_json::to_string_pretty(env)? } else { serde_json::to_string(env)? };
    s.push('\n');
    Ok(s)
}
