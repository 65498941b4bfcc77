pub const LOG_FORMAT_VAR: &str = "DIGEST_LOG_FORMAT";

pub fn logs_are_json() -> bool {
    matches!(std::env::var(LOG_FORMAT_VAR).as_deref(), Ok("json"))
}

/// Initialize tracing according to RUST_LOG and DIGEST_LOG_FORMAT.
/// - Defaults to `info` if `RUST_LOG` is unset
/// - `DIGEST_LOG_FORMAT=json` switches to JSON lines
/// Logs always go to stderr; stdout carries only the report.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let builder = tracing_subscriber::registry().with(filter);

    if logs_are_json() {
        let _ = builder.with(fmt_layer.json().flatten_event(true)).try_init();
    } else {
        let _ = builder.with(fmt_layer.compact()).try_init();
    }
}
