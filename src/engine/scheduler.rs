//! Radio ↔ playlist state machine.
//!
//! Starts in radio. Each tick bumps a counter; at the radio threshold the
//! scheduler switches to a freshly shuffled playlist (only when there are
//! tracks to play), at the playlist threshold back to radio.

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::audio::{OutputDevice, StreamAttachment};
use crate::config::Settings;
use crate::events::Notice;
use crate::library::Track;

use super::driver::PlaybackDriver;
use super::queue::Queue;
use super::state::{Pending, PlaybackMode, PlayerView, SchedulerState};

pub type ViewHandle = Arc<Mutex<PlayerView>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Ticks spent in radio before switching to the playlist.
    pub radio_ticks: u32,
    /// Ticks spent in the playlist before switching back.
    pub playlist_ticks: u32,
    pub upcoming_len: usize,
}

impl SchedulerConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            radio_ticks: settings.scheduler.radio_ticks,
            playlist_ticks: settings.scheduler.playlist_ticks,
            upcoming_len: settings.ui.upcoming_len,
        }
    }
}

pub struct Scheduler<O, A> {
    state: SchedulerState,
    driver: PlaybackDriver<O, A>,
    config: SchedulerConfig,
    view: ViewHandle,
}

impl<O: OutputDevice, A: StreamAttachment> Scheduler<O, A> {
    pub fn new(
        config: SchedulerConfig,
        driver: PlaybackDriver<O, A>,
        tracks: Vec<Track>,
        view: ViewHandle,
    ) -> Self {
        let mut scheduler = Self {
            state: SchedulerState::default(),
            driver,
            config,
            view,
        };
        scheduler.replace_pool(tracks);
        scheduler
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    /// Enter the initial radio state.
    pub fn start(&mut self) {
        info!(
            radio_ticks = self.config.radio_ticks,
            playlist_ticks = self.config.playlist_ticks,
            tracks = self.state.pool.len(),
            "scheduler started"
        );
        self.driver.play_radio(&mut self.state);
        self.publish();
    }

    pub fn tick(&mut self) {
        self.state.ticks = self.state.ticks.saturating_add(1);
        debug!(mode = %self.state.mode, ticks = self.state.ticks, "tick");

        match self.state.mode {
            PlaybackMode::Radio if self.state.ticks >= self.config.radio_ticks => {
                // Without tracks the radio keeps playing; the counter keeps counting.
                if self.state.pool.is_empty() {
                    return;
                }
                self.enter_playlist();
            }
            PlaybackMode::Playlist if self.state.ticks >= self.config.playlist_ticks => {
                self.enter_radio();
            }
            _ => {}
        }
    }

    fn enter_playlist(&mut self) {
        info!(tracks = self.state.pool.len(), "switching to playlist");
        self.state.mode = PlaybackMode::Playlist;
        self.state.queue = Queue::shuffled(self.state.pool.len(), &mut rand::rng());
        self.state.skip_enabled = true;
        self.driver.play_next(&mut self.state);
        self.state.ticks = 0;
        self.publish();
    }

    fn enter_radio(&mut self) {
        info!("switching to radio");
        self.state.mode = PlaybackMode::Radio;
        self.driver.play_radio(&mut self.state);
        self.state.ticks = 0;
        self.publish();
    }

    pub fn skip(&mut self) {
        if self.state.mode != PlaybackMode::Playlist {
            return;
        }
        self.driver.skip(&mut self.state);
        self.publish();
    }

    /// Jump to the live station now. The tick counter carries on.
    pub fn play_radio(&mut self) {
        info!("radio requested");
        self.state.mode = PlaybackMode::Radio;
        self.driver.play_radio(&mut self.state);
        self.publish();
    }

    /// Replace the track pool and reshuffle the queue. The mode is unchanged.
    pub fn load_tracks(&mut self, tracks: Vec<Track>) {
        info!(tracks = tracks.len(), "track pool replaced");
        self.replace_pool(tracks);
        self.publish();
    }

    fn replace_pool(&mut self, tracks: Vec<Track>) {
        self.state.queue = Queue::shuffled(tracks.len(), &mut rand::rng());
        self.state.pool = tracks;
    }

    pub fn handle(&mut self, notice: Notice) {
        match notice {
            Notice::SpeechEnded(ticket) => self.driver.speech_ended(&mut self.state, ticket),
            Notice::ManifestReady(ticket) => self.driver.manifest_ready(&mut self.state, ticket),
            Notice::PlaybackEnded => self.driver.playback_ended(&mut self.state),
        }
        self.publish();
    }

    /// Turn a finished device source into `Notice::PlaybackEnded`.
    pub fn poll_device(&mut self) {
        if self.driver.take_ended() {
            self.handle(Notice::PlaybackEnded);
        }
    }

    /// Copy position and length from the device into the view.
    ///
    /// When the decoder cannot tell the length of a bound playlist track, the
    /// length read from its tags at scan time is shown instead.
    pub fn refresh_progress(&mut self) {
        let (elapsed, device_total) = self.driver.progress();
        let total = device_total.or_else(|| match self.state.pending {
            Pending::Playing { .. } => self.state.current.as_ref().and_then(|t| t.duration),
            _ => None,
        });
        if let Ok(mut view) = self.view.lock() {
            view.elapsed = elapsed;
            view.total = total;
        }
    }

    pub fn shutdown(&mut self) {
        info!("scheduler shutting down");
        self.driver.shutdown();
    }

    fn publish(&self) {
        let s = &self.state;
        if let Ok(mut view) = self.view.lock() {
            view.mode = s.mode;
            view.banner = s.banner.clone();
            view.current = s.current.as_ref().map(|t| t.name.clone());
            view.upcoming = s.upcoming_names(self.config.upcoming_len);
            view.skip_enabled = s.skip_enabled;
            view.pool_len = s.pool.len();
        }
    }
}
