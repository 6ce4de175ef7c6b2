use super::load::{MAX_PERIOD_MS, default_config_path, resolve_config_path};
use super::schema::*;
use crate::error::Error;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_explicit_env_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("RADIOSHUFFLE_CONFIG_PATH", "/tmp/radioshuffle-test.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/radioshuffle-test.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("radioshuffle")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("radioshuffle")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_accelerated_cadence() {
    let s = Settings::default();
    assert_eq!(s.scheduler.tick_ms, 1000);
    assert_eq!(s.scheduler.radio_ticks, 6);
    assert_eq!(s.scheduler.playlist_ticks, 3);
    assert_eq!(s.scheduler.progress_refresh_ms, 500);
    assert_eq!(s.ui.upcoming_len, 3);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert_eq!(s.station.mime, "audio/aac");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[scheduler]
tick_ms = 250
radio_ticks = 1800
playlist_ticks = 900

[station]
name = "Test FM"
stream_url = "http://localhost:8000/live.m3u8"

[speech]
enabled = false
command = "say"

[stream]
command = "ffplay"
args = ["-nodisp"]

[library]
folder = "/srv/requests"
extensions = ["mp3", "ogg"]
recursive = true

[ui]
upcoming_len = 5

[logging]
filter = "radioshuffle=debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("RADIOSHUFFLE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("RADIOSHUFFLE__SCHEDULER__TICK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.scheduler.tick_ms, 250);
    assert_eq!(s.scheduler.radio_ticks, 1800);
    assert_eq!(s.scheduler.playlist_ticks, 900);
    // Unset keys keep their defaults.
    assert_eq!(s.scheduler.progress_refresh_ms, 500);
    assert_eq!(s.station.name, "Test FM");
    assert_eq!(s.station.stream_url, "http://localhost:8000/live.m3u8");
    assert_eq!(s.station.mime, "audio/aac");
    assert!(!s.speech.enabled);
    assert_eq!(s.speech.command, "say");
    assert_eq!(s.stream.command, "ffplay");
    assert_eq!(s.stream.args, vec!["-nodisp".to_string()]);
    assert_eq!(
        s.library.folder.as_deref(),
        Some(std::path::Path::new("/srv/requests"))
    );
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "ogg".to_string()]);
    assert!(s.library.recursive);
    assert_eq!(s.ui.upcoming_len, 5);
    assert_eq!(s.logging.filter, "radioshuffle=debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[scheduler]
radio_ticks = 60
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("RADIOSHUFFLE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("RADIOSHUFFLE__SCHEDULER__RADIO_TICKS", "12");

    let s = Settings::load().unwrap();
    assert_eq!(s.scheduler.radio_ticks, 12);
}

#[test]
fn validate_rejects_zero_thresholds_and_periods() {
    let mut s = Settings::default();
    s.scheduler.playlist_ticks = 0;
    assert!(matches!(s.validate(), Err(Error::InvalidConfig(_))));

    let mut s = Settings::default();
    s.scheduler.tick_ms = 0;
    assert!(matches!(s.validate(), Err(Error::InvalidConfig(_))));

    let mut s = Settings::default();
    s.scheduler.progress_refresh_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.station.stream_url = "  ".into();
    assert!(s.validate().is_err());
}

#[test]
fn validate_rejects_periods_longer_than_a_day() {
    let mut s = Settings::default();
    s.scheduler.tick_ms = MAX_PERIOD_MS;
    assert!(s.validate().is_ok());

    s.scheduler.tick_ms = u64::MAX;
    assert!(matches!(s.validate(), Err(Error::InvalidConfig(_))));

    let mut s = Settings::default();
    s.scheduler.progress_refresh_ms = MAX_PERIOD_MS + 1;
    assert!(matches!(s.validate(), Err(Error::InvalidConfig(_))));
}
