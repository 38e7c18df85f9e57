//! Tracing setup for the CLI.
//!
//! All diagnostics go to stderr so that stdout stays clean for command
//! output (saved paths, config dumps, data URLs).

use merchforge_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wire up the global subscriber from the `[logging]` config section,
/// with CLI flags taking precedence.
///
/// `RUST_LOG` overrides everything when set.
pub fn init_from_config(config: &Config, verbose: bool, json_logs: bool) {
    let level = if verbose { "debug" } else { config.logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json_logs || config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}
