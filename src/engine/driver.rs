//! Binds tracks and the live stream to the output.
//!
//! Every playlist track goes through two phases: announce, then bind. The
//! bind only happens when the announcement for the same ticket completes.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::audio::{MediaSource, OutputDevice, StreamAttachment};
use crate::config::StationSettings;
use crate::events::Ticket;
use crate::library::Track;
use crate::speech::Announcer;

use super::state::{Pending, PlaybackMode, SchedulerState};

pub struct PlaybackDriver<O, A> {
    device: O,
    stream: A,
    announcer: Announcer,
    stream_url: String,
    stream_mime: String,
}

impl<O: OutputDevice, A: StreamAttachment> PlaybackDriver<O, A> {
    pub fn new(device: O, stream: A, announcer: Announcer, station: &StationSettings) -> Self {
        Self {
            device,
            stream,
            announcer,
            stream_url: station.stream_url.clone(),
            stream_mime: station.mime.clone(),
        }
    }

    /// Rotate the queue and announce its head. Audio binds on `speech_ended`.
    ///
    /// No-op outside playlist mode or with an empty queue.
    pub fn play_next(&mut self, state: &mut SchedulerState) {
        if state.mode != PlaybackMode::Playlist {
            return;
        }
        let Some(index) = state.queue.rotate() else {
            return;
        };
        let Some(track) = state.pool.get(index).cloned() else {
            warn!(index, pool = state.pool.len(), "queue entry outside the track pool");
            return;
        };

        state.current = Some(track.clone());
        let ticket = state.next_ticket();
        let message = self.announcer.announce_track(&track, ticket);
        state.banner = format!("Voiceover: {message}");
        state.pending = Pending::Announcing { ticket, track };
    }

    /// Skip ahead; only meaningful in playlist mode.
    pub fn skip(&mut self, state: &mut SchedulerState) {
        if state.mode != PlaybackMode::Playlist {
            debug!("skip ignored in radio mode");
            return;
        }
        info!("skipping track");
        self.play_next(state);
    }

    /// Switch output to the live station.
    pub fn play_radio(&mut self, state: &mut SchedulerState) {
        state.skip_enabled = false;
        state.current = None;
        state.banner = format!("Playing {}", self.announcer.station());
        state.pending = Pending::Idle;
        let ticket = state.next_ticket();

        self.announcer.announce_radio();

        self.stream.detach();
        self.device.stop();

        if self.stream.is_supported() {
            match self.stream.load_source(&self.stream_url, ticket) {
                Ok(()) => {
                    self.stream.attach(&mut self.device);
                    state.pending = Pending::AwaitingStream { ticket };
                    debug!(%ticket, url = %self.stream_url, "waiting for stream manifest");
                }
                Err(e) => {
                    warn!(error = %e, url = %self.stream_url, "failed to load station stream")
                }
            }
        } else if self.device.can_play_type(&self.stream_mime) {
            let source = MediaSource::Uri(self.stream_url.clone());
            match self.device.set_source(source).and_then(|()| self.device.play()) {
                Ok(()) => info!(url = %self.stream_url, "radio playing on local output"),
                Err(e) => warn!(error = %e, "radio playback error"),
            }
            state.pending = Pending::Streaming { ticket };
        } else {
            warn!(
                url = %self.stream_url,
                mime = %self.stream_mime,
                "cannot play the station stream on this output"
            );
        }
    }

    /// The announcement under `ticket` finished: bind its track if it is still current.
    pub fn speech_ended(&mut self, state: &mut SchedulerState, ticket: Ticket) {
        let track = match std::mem::take(&mut state.pending) {
            Pending::Announcing { ticket: t, track } if t == ticket => track,
            other => {
                debug!(%ticket, "stale announcement completion");
                state.pending = other;
                return;
            }
        };
        self.bind(state, ticket, track);
    }

    /// The stream loaded under `ticket` is ready: start it if still current.
    pub fn manifest_ready(&mut self, state: &mut SchedulerState, ticket: Ticket) {
        if state.pending != (Pending::AwaitingStream { ticket }) {
            debug!(%ticket, "stale stream readiness");
            return;
        }
        match self.stream.play() {
            Ok(()) => info!(url = %self.stream_url, "radio stream playing"),
            Err(e) => warn!(error = %e, "radio playback error"),
        }
        state.pending = Pending::Streaming { ticket };
    }

    /// End of the bound track: advance when a playlist track was playing.
    pub fn playback_ended(&mut self, state: &mut SchedulerState) {
        if state.mode == PlaybackMode::Playlist
            && matches!(state.pending, Pending::Playing { .. })
        {
            self.play_next(state);
        } else {
            debug!(pending = ?state.pending, "ignoring end of playback");
        }
    }

    fn bind(&mut self, state: &mut SchedulerState, ticket: Ticket, track: Track) {
        self.stream.detach();
        // The queue has already rotated, so a failure leaves the track at the tail.
        match self
            .device
            .set_source(track.source.clone())
            .and_then(|()| self.device.play())
        {
            Ok(()) => info!(%ticket, track = %track.name, "track playing"),
            Err(e) => warn!(%ticket, track = %track.name, error = %e, "playlist playback error"),
        }
        state.pending = Pending::Playing { ticket };
    }

    /// Elapsed and total time of whatever the device has bound.
    pub fn progress(&self) -> (Duration, Option<Duration>) {
        (self.device.current_time(), self.device.duration())
    }

    pub fn take_ended(&mut self) -> bool {
        self.device.take_ended()
    }

    pub fn shutdown(&mut self) {
        self.stream.detach();
        self.device.stop();
    }
}
