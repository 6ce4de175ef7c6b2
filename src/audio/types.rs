//! Media source types shared by tracks, the output device and the driver.

use std::fmt;
use std::path::{Path, PathBuf};

/// What an output device is asked to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// A local file.
    File(PathBuf),
    /// A URI string: `file://` URIs and bare paths are local, anything else is remote.
    Uri(String),
}

impl MediaSource {
    /// Local filesystem path behind this source, if there is one.
    pub fn local_path(&self) -> Option<&Path> {
        match self {
            MediaSource::File(p) => Some(p.as_path()),
            MediaSource::Uri(u) => {
                if let Some(rest) = u.strip_prefix("file://") {
                    Some(Path::new(rest))
                } else if u.contains("://") {
                    None
                } else {
                    Some(Path::new(u.as_str()))
                }
            }
        }
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaSource::File(p) => write!(f, "{}", p.display()),
            MediaSource::Uri(u) => f.write_str(u),
        }
    }
}
