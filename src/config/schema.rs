use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/radioshuffle/config.toml` or
/// `~/.config/radioshuffle/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RADIOSHUFFLE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scheduler: SchedulerSettings,
    pub station: StationSettings,
    pub speech: SpeechSettings,
    pub stream: StreamSettings,
    pub library: LibrarySettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

/// Mode-switch cadence.
///
/// The defaults are the accelerated cadence (six one-second ticks of radio,
/// three of playlist). Production setups raise the thresholds in the config
/// file rather than the tick period.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Scheduler tick period (milliseconds).
    pub tick_ms: u64,
    /// Ticks spent in radio mode before switching to the playlist.
    pub radio_ticks: u32,
    /// Ticks spent in playlist mode before switching back to radio.
    pub playlist_ticks: u32,
    /// How often elapsed/total time is copied into the player view (milliseconds).
    pub progress_refresh_ms: u64,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            radio_ticks: 6,
            playlist_ticks: 3,
            progress_refresh_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StationSettings {
    /// Spoken and displayed station name.
    pub name: String,
    /// Live feed endpoint.
    pub stream_url: String,
    /// MIME type checked against the output device's native support.
    pub mime: String,
}

impl Default for StationSettings {
    fn default() -> Self {
        Self {
            name: "East Coast Radio 94.0 FM".to_string(),
            stream_url: "https://edge.iono.fm:80/EC/ecrlow.aac".to_string(),
            mime: "audio/aac".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    /// When false, announcements are logged and complete immediately.
    pub enabled: bool,
    /// Text-to-speech program; the message is passed as the last argument.
    pub command: String,
    pub args: Vec<String>,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "espeak-ng".to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StreamSettings {
    /// Use an external player for the live stream when it is installed.
    pub enabled: bool,
    /// Stream player program; the stream URL is passed as the last argument.
    pub command: String,
    pub args: Vec<String>,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "mpv".to_string(),
            args: vec!["--no-video".to_string(), "--really-quiet".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Folder scanned when no folder is given on the command line.
    pub folder: Option<PathBuf>,
    /// File extensions to treat as tracks (case-insensitive, without dot).
    ///
    /// The same list is stripped from display names before announcing.
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            folder: None,
            extensions: vec!["mp3".into()],
            follow_links: true,
            include_hidden: false,
            recursive: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Number of upcoming playlist entries shown.
    pub upcoming_len: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ radio in between the requests ~ ".to_string(),
            upcoming_len: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file; defaults to `radioshuffle.log` in the temp directory.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "radioshuffle=info".to_string(),
        }
    }
}
