//! Voice announcements.
//!
//! `Announcer` builds the spoken text for a transition and hands it to a
//! `SpeechSynth`. Track announcements carry a ticket and report back when
//! spoken; radio announcements do not.

mod announce;
mod synth;

pub use announce::{Announcer, radio_message, track_message};
pub use synth::{CommandSynth, SilentSynth, SpeechSynth, Utterance};
