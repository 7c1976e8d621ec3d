//! Tracing setup for the CLI.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maps the `-v` count to a level name (0=error, 1=warn, 2=info, 3=debug, 4+=trace).
pub(crate) const fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "off";
    }
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub(crate) fn init_logging(verbosity: u8, quiet: bool) -> Result<()> {
    let level = level_for(verbosity, quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "betterrest={level},betterrest_estimate={level},betterrest_model={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity >= 3)
                .with_file(verbosity >= 4)
                .with_line_number(verbosity >= 4),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
