use tracing::info;

use crate::events::Ticket;
use crate::library::{Credits, Track, parse_credits};

use super::synth::{SpeechSynth, Utterance};

/// `"Now playing {title} requested by {requester}"`; a missing part leaves a gap.
pub fn track_message(credits: &Credits) -> String {
    format!(
        "Now playing {} requested by {}",
        credits.title.as_deref().unwrap_or_default(),
        credits.requester.as_deref().unwrap_or_default()
    )
}

pub fn radio_message(station: &str) -> String {
    format!("Now playing {station}")
}

/// Turns transitions into speech.
pub struct Announcer {
    synth: Box<dyn SpeechSynth>,
    station: String,
    extensions: Vec<String>,
}

impl Announcer {
    /// `extensions` are stripped from track names before their credits are read.
    pub fn new(synth: Box<dyn SpeechSynth>, station: String, extensions: Vec<String>) -> Self {
        Self {
            synth,
            station,
            extensions,
        }
    }

    /// Speak the credits of `track`; completion comes back as `SpeechEnded(ticket)`.
    ///
    /// Returns the message for display.
    pub fn announce_track(&mut self, track: &Track, ticket: Ticket) -> String {
        let credits = parse_credits(&track.name, &self.extensions);
        let message = track_message(&credits);
        info!(%ticket, track = %track.name, message = %message, "announcing track");
        self.synth.speak(Utterance::awaited(message.clone(), ticket));
        message
    }

    /// Speak the station name without waiting for it.
    pub fn announce_radio(&mut self) -> String {
        let message = radio_message(&self.station);
        info!(message = %message, "announcing radio");
        self.synth.speak(Utterance::fire_and_forget(message.clone()));
        message
    }

    pub fn station(&self) -> &str {
        &self.station
    }
}
