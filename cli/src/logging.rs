//! Logging initialization for the mission CLI.
//!
//! Engine events are emitted through `tracing`; this module installs the
//! subscriber. `RUST_LOG` overrides the verbosity chosen on the command line.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for a `-v` count
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Plain text to stderr by default; `json` switches to structured output
/// and `log_file` appends to a file instead of stderr.
pub fn init(verbosity: u8, json: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let writer = Mutex::new(file);
            if json {
                registry
                    .with(fmt::layer().json().with_target(true).with_writer(writer))
                    .try_init()?;
            } else {
                registry
                    .with(fmt::layer().with_ansi(false).with_target(true).with_writer(writer))
                    .try_init()?;
            }
        }
        None => {
            if json {
                registry
                    .with(
                        fmt::layer()
                            .json()
                            .with_target(true)
                            .with_writer(std::io::stderr),
                    )
                    .try_init()?;
            } else {
                registry
                    .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                    .try_init()?;
            }
        }
    }

    Ok(())
}
