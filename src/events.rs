//! Messages flowing into the engine thread.
//!
//! User commands (`EngineCmd`) and collaborator completions (`Notice`) share a
//! single channel so the engine handles them strictly in arrival order.

use std::fmt;
use std::sync::mpsc::Sender;

use crate::library::Track;

/// Identifies one announce/bind or stream-attach operation.
///
/// Every new operation gets a fresh ticket; a completion whose ticket does not
/// match the operation in flight is stale and gets dropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(pub u64);

impl Ticket {
    pub fn next(self) -> Self {
        Ticket(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub enum EngineCmd {
    /// Skip to the next playlist track (ignored in radio mode).
    Skip,
    /// Switch to the live station right away.
    PlayRadio,
    /// Replace the track pool.
    LoadTracks(Vec<Track>),
    /// Stop all output and end the engine thread.
    Quit,
}

/// Completion signals posted by collaborators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The announcement spoken under this ticket has finished.
    SpeechEnded(Ticket),
    /// The live stream loaded under this ticket is ready to play.
    ManifestReady(Ticket),
    /// The bound local source ran out.
    PlaybackEnded,
}

#[derive(Debug)]
pub enum EngineMsg {
    Cmd(EngineCmd),
    Notice(Notice),
}

/// Cloneable handle collaborators use to post `Notice`s back to the engine.
#[derive(Clone)]
pub struct Notifier {
    tx: Sender<EngineMsg>,
}

impl Notifier {
    pub fn new(tx: Sender<EngineMsg>) -> Self {
        Self { tx }
    }

    /// Post a notice. A closed engine simply drops it.
    pub fn notify(&self, notice: Notice) {
        let _ = self.tx.send(EngineMsg::Notice(notice));
    }
}
