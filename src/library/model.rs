use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::audio::MediaSource;

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub source: MediaSource,
    /// File name, or the last path segment of a URI.
    pub name: String,
    pub duration: Option<Duration>,
}

impl Track {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = file_name(&path);
        Self {
            source: MediaSource::File(path),
            name,
            duration: None,
        }
    }

    #[cfg(test)]
    pub fn from_uri(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let name = uri.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            source: MediaSource::Uri(uri),
            name,
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: Option<Duration>) -> Self {
        self.duration = duration;
        self
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
