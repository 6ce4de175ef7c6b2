use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::error::Error;

/// Longest accepted tick or refresh period: one day.
pub const MAX_PERIOD_MS: u64 = 24 * 60 * 60 * 1000;

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `RADIOSHUFFLE__`) over
/// an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, Error> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("RADIOSHUFFLE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject settings the scheduler cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        let s = &self.scheduler;
        if !(1..=MAX_PERIOD_MS).contains(&s.tick_ms) {
            return Err(Error::InvalidConfig(format!(
                "scheduler.tick_ms must be between 1 and {MAX_PERIOD_MS}"
            )));
        }
        if !(1..=MAX_PERIOD_MS).contains(&s.progress_refresh_ms) {
            return Err(Error::InvalidConfig(format!(
                "scheduler.progress_refresh_ms must be between 1 and {MAX_PERIOD_MS}"
            )));
        }
        if s.radio_ticks == 0 || s.playlist_ticks == 0 {
            return Err(Error::InvalidConfig(
                "scheduler.radio_ticks and scheduler.playlist_ticks must be >= 1".into(),
            ));
        }
        if self.station.stream_url.trim().is_empty() {
            return Err(Error::InvalidConfig("station.stream_url must not be empty".into()));
        }
        Ok(())
    }
}

/// Resolve the config path from `RADIOSHUFFLE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("RADIOSHUFFLE_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/radioshuffle/config.toml`
/// or `~/.config/radioshuffle/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("radioshuffle").join("config.toml"))
}
