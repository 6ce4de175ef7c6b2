use std::time::Duration;

use crate::error::PlaybackError;

use super::types::MediaSource;

/// The audio output the playback driver binds sources to.
///
/// Binding a new source replaces whatever was bound before.
pub trait OutputDevice {
    /// Bind `source`, paused. Replaces and stops any previous source.
    fn set_source(&mut self, source: MediaSource) -> Result<(), PlaybackError>;
    /// Start playing the bound source.
    fn play(&mut self) -> Result<(), PlaybackError>;
    /// Stop output and drop the bound source.
    fn stop(&mut self);
    /// Whether the device can decode `mime` without outside help.
    fn can_play_type(&self, mime: &str) -> bool;
    /// Position in the bound source.
    fn current_time(&self) -> Duration;
    /// Length of the bound source, when known.
    fn duration(&self) -> Option<Duration>;
    /// Report (once) that a playing source ran out.
    fn take_ended(&mut self) -> bool;
}
