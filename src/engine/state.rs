use std::fmt;
use std::time::Duration;

use crate::events::Ticket;
use crate::library::Track;

use super::queue::Queue;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// The live station is the source; skipping is disabled.
    #[default]
    Radio,
    /// The shuffled local queue is the source; skipping is enabled.
    Playlist,
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackMode::Radio => f.write_str("Radio"),
            PlaybackMode::Playlist => f.write_str("Playlist"),
        }
    }
}

/// The operation currently in flight, keyed by its ticket.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Pending {
    #[default]
    Idle,
    /// Speaking the credits of `track`; audio binds when speech ends.
    Announcing { ticket: Ticket, track: Track },
    /// A playlist track is bound and should be playing.
    Playing { ticket: Ticket },
    /// Waiting for the live stream to become playable.
    AwaitingStream { ticket: Ticket },
    /// The live stream is playing (or was asked to).
    Streaming { ticket: Ticket },
}

/// Everything the scheduler and playback driver share.
///
/// Owned by the `Scheduler`; the driver only ever borrows it.
#[derive(Debug, Default)]
pub struct SchedulerState {
    pub mode: PlaybackMode,
    /// Ticks elapsed in the current mode.
    pub ticks: u32,
    pub pool: Vec<Track>,
    pub queue: Queue,
    pub current: Option<Track>,
    pub skip_enabled: bool,
    /// Mode label shown above everything else.
    pub banner: String,
    pub pending: Pending,
    last_ticket: Ticket,
}

impl SchedulerState {
    /// Issue a fresh ticket, superseding whatever was in flight.
    pub fn next_ticket(&mut self) -> Ticket {
        self.last_ticket = self.last_ticket.next();
        self.last_ticket
    }

    /// Display names of the next `n` queued tracks.
    pub fn upcoming_names(&self, n: usize) -> Vec<String> {
        self.queue
            .upcoming(n)
            .filter_map(|i| self.pool.get(i))
            .map(|t| t.name.clone())
            .collect()
    }
}

/// Snapshot of engine state published for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerView {
    pub mode: PlaybackMode,
    pub banner: String,
    /// Display name of the current playlist track.
    pub current: Option<String>,
    pub upcoming: Vec<String>,
    pub skip_enabled: bool,
    pub pool_len: usize,
    pub elapsed: Duration,
    pub total: Option<Duration>,
}
