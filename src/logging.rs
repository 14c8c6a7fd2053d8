use crate::config::{Config, LoggingConfig};
use color_eyre::Result;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "feedback-desk.log";

/// Sends tracing output to a log file; the terminal belongs to the UI.
/// `RUST_LOG` wins over the configured level.
pub fn init(config: &LoggingConfig) -> Result<PathBuf> {
    let dir = Config::data_dir()?;
    fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(&config.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| color_eyre::eyre::eyre!("Could not start logging: {}", error))?;

    Ok(path)
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
