//! `rodio`-backed output device.
//!
//! Local sources are decoded into a paused `Sink`. There is no network reader,
//! so remote URIs are refused and no stream MIME type counts as playable.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::debug;

use crate::error::{Error, PlaybackError};

use super::device::OutputDevice;
use super::types::MediaSource;

/// Create a paused `Sink` for the file at `path`, plus its length when the decoder knows it.
fn create_sink(
    stream: &OutputStream,
    path: &Path,
) -> Result<(Sink, Option<Duration>), PlaybackError> {
    let file = File::open(path).map_err(|source| PlaybackError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| PlaybackError::Decode(format!("{}: {e}", path.display())))?;
    let total = source.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok((sink, total))
}

/// The file behind `source`; remote URIs need the stream attachment.
pub(super) fn local_source(source: &MediaSource) -> Result<&Path, PlaybackError> {
    source.local_path().ok_or_else(|| {
        PlaybackError::Unsupported(format!("remote source {source} needs a stream player"))
    })
}

pub struct RodioDevice {
    stream: OutputStream,
    sink: Option<Sink>,
    duration: Option<Duration>,
    // Set by `play`, cleared once the end has been reported.
    armed: bool,
}

impl RodioDevice {
    /// Open the default output stream.
    ///
    /// `OutputStream` is not `Send`; open it on the thread that drives it.
    pub fn open() -> Result<Self, Error> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| Error::AudioOutput(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped, which tears the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            duration: None,
            armed: false,
        })
    }
}

impl OutputDevice for RodioDevice {
    fn set_source(&mut self, source: MediaSource) -> Result<(), PlaybackError> {
        self.stop();

        let path = local_source(&source)?;
        let (sink, total) = create_sink(&self.stream, path)?;
        debug!(source = %source, duration = ?total, "source bound");
        self.sink = Some(sink);
        self.duration = total;
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        let sink = self.sink.as_ref().ok_or(PlaybackError::NoSource)?;
        sink.play();
        self.armed = true;
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.duration = None;
        self.armed = false;
    }

    /// Only local files are decoded here, so no stream type is playable.
    fn can_play_type(&self, _mime: &str) -> bool {
        false
    }

    fn current_time(&self) -> Duration {
        self.sink
            .as_ref()
            .map(|s| s.get_pos())
            .unwrap_or(Duration::ZERO)
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn take_ended(&mut self) -> bool {
        if self.armed && self.sink.as_ref().is_some_and(|s| s.empty()) {
            self.armed = false;
            return true;
        }
        false
    }
}
