use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Headless runs log next to their output.
    Stderr,
    /// The terminal UI owns stdout and stderr, so it logs to a file.
    File(&'a Path),
}

/// `RUST_LOG` wins; otherwise `debug` when asked for, `warn` by default.
pub fn env_filter(debug: bool) -> EnvFilter {
    let fallback = if debug {
        "conference_companion=debug,warn"
    } else {
        "warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(target: LogTarget<'_>, debug: bool) -> color_eyre::eyre::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(())
}
