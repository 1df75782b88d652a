//! Tracing initialization.

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `BLOCKAUDIT_LOG=blockaudit_domain=debug`.
pub const LOG_ENV: &str = "BLOCKAUDIT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Stdout stays reserved for reports.
///
/// Idempotent.
pub fn init_tracing(level: Option<&str>) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(true),
            )
            .with(build_filter(level))
            .init();
    });
}

/// `level` (from `--log-level`) wins over `BLOCKAUDIT_LOG`; an invalid filter falls back to
/// the default.
fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => EnvFilter::try_from_env(LOG_ENV).ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
