use crate::types::LogLevel;
use anyhow::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log records go for the current command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Used while the TUI owns the terminal
    File(PathBuf),
    Disabled,
}

/// Default directives for folio's own crates; `RUST_LOG` replaces them
pub fn default_directives(level: LogLevel) -> String {
    format!("folio={level},folio_engine={level}")
}

pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives(level))?,
    };

    let registry = tracing_subscriber::registry().with(filter);

    match target {
        LogTarget::Stderr => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?;
        }
        LogTarget::Disabled => {}
    }

    Ok(())
}
