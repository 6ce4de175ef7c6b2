use std::path::Path;
use std::time::Duration;

use lofty::prelude::AudioFile;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn read_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()).filter(|d| !d.is_zero()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no duration from tags");
            None
        }
    }
}

/// Collect the track pool from `dir`, sorted by name.
///
/// Unreadable entries are skipped; an unreadable root yields an empty pool.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable library entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_audio_file(path, settings) {
            tracks.push(Track::from_path(path).with_duration(read_duration(path)));
        }
    }

    tracks.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    debug!(dir = %dir.display(), count = tracks.len(), "library scanned");
    tracks
}
