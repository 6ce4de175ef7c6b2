//! Error types for radioshuffle.
//!
//! `Error` covers startup and runtime failures that reach `main`.
//! `PlaybackError` is what output devices and stream attachments return; the
//! playback driver logs and swallows it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be read or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Configuration was read but failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The log subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),

    /// The audio output device could not be opened.
    #[error("Audio output error: {0}")]
    AudioOutput(String),

    /// The engine thread is gone and can no longer take commands.
    #[error("Playback engine stopped")]
    EngineStopped,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while binding or starting a media source.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// `play()` was requested before any source was bound.
    #[error("no source bound to the output device")]
    NoSource,

    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {0}")]
    Decode(String),

    /// The device cannot handle this kind of source at all.
    #[error("unsupported source: {0}")]
    Unsupported(String),

    /// The device or player process refused to start playback.
    #[error("playback rejected: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, Error>;
