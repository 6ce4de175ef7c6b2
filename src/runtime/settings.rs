use tracing::warn;

use crate::config;

/// Load settings, falling back to defaults. Runs before the log file is
/// open, so problems are reported again once logging is up.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(e) = s.validate() {
                eprintln!("radioshuffle: invalid config, using defaults: {e}");
                (
                    config::Settings::default(),
                    Some(format!("invalid config, using defaults: {e}")),
                )
            } else {
                (s, None)
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("radioshuffle: failed to load config, using defaults: {e}");
            (
                config::Settings::default(),
                Some(format!("failed to load config, using defaults: {e}")),
            )
        }
    }
}

pub fn report(problem: Option<String>) {
    if let Some(p) = problem {
        warn!("{p}");
    }
}
