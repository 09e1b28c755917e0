//! Tracing/logging setup shared by the client crates.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Compact human-readable output (this runs inside a client shell, not a
/// log-aggregated server), filter configurable via `RUST_LOG`. Safe to
/// call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}

/// Redact a bearer token for logging: first and last four characters,
/// everything else elided. Short tokens are fully elided.
pub fn redact(token: &str) -> String {
    if token.len() <= 8 || !token.is_ascii() {
        return "…".to_string();
    }
    format!("{}…{}", &token[..4], &token[token.len() - 4..])
}
