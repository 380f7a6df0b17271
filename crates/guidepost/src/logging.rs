//! Tracing subscriber setup.

use crate::Settings;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for one-shot commands
    Stderr,
    /// The settings' log file, so full-screen output is not corrupted
    File,
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns the log file path
/// when logging to a file.
pub fn init_logging(settings: &Settings, target: LogTarget) -> anyhow::Result<Option<PathBuf>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level()));

    let path = match target {
        LogTarget::File => settings.log_path(),
        LogTarget::Stderr => None,
    };

    match &path {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if target == LogTarget::File => {
            // No cache directory: stay silent rather than draw over the UI
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .with_writer(std::io::sink)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(path)
}
