use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;
use crate::error::Error;

/// Where log lines go when `logging.file` is unset.
pub fn default_log_path() -> PathBuf {
    env::temp_dir().join("radioshuffle.log")
}

/// Install the global subscriber. The terminal belongs to the UI, so output
/// is appended to a file. `RUST_LOG` overrides `logging.filter`.
pub fn init(settings: &LoggingSettings) -> Result<PathBuf, Error> {
    let path = settings.file.clone().unwrap_or_else(default_log_path);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.filter.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    Ok(path)
}
