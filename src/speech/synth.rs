use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread;

use tracing::{debug, warn};

use crate::events::{Notice, Notifier, Ticket};

/// One piece of text to speak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    /// When set, `Notice::SpeechEnded(ticket)` is posted once speaking is over.
    pub ticket: Option<Ticket>,
}

impl Utterance {
    /// An utterance somebody waits on.
    pub fn awaited(text: impl Into<String>, ticket: Ticket) -> Self {
        Self {
            text: text.into(),
            ticket: Some(ticket),
        }
    }

    pub fn fire_and_forget(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ticket: None,
        }
    }
}

pub trait SpeechSynth {
    /// Queue `utterance`. Must not block the caller.
    fn speak(&mut self, utterance: Utterance);
}

/// Speaks through an external TTS command, one utterance at a time.
///
/// A failing command still reports completion so nothing waits forever.
///
/// The worker thread exits once the synth is dropped and its queue drains.
pub struct CommandSynth {
    tx: Sender<Utterance>,
}

impl CommandSynth {
    pub fn new(program: String, args: Vec<String>, notifier: Notifier) -> Self {
        let (tx, rx) = mpsc::channel::<Utterance>();

        thread::spawn(move || {
            for utterance in rx {
                let status = Command::new(&program)
                    .args(&args)
                    .arg(&utterance.text)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status();

                match status {
                    Ok(s) if s.success() => debug!(text = %utterance.text, "spoken"),
                    Ok(s) => warn!(program = %program, status = %s, "speech command failed"),
                    Err(e) => warn!(program = %program, error = %e, "speech command did not run"),
                }

                if let Some(ticket) = utterance.ticket {
                    notifier.notify(Notice::SpeechEnded(ticket));
                }
            }
        });

        Self { tx }
    }
}

impl SpeechSynth for CommandSynth {
    fn speak(&mut self, utterance: Utterance) {
        if let Err(e) = self.tx.send(utterance) {
            warn!(text = %e.0.text, "speech worker is gone, dropping utterance");
        }
    }
}

/// Used when speech is disabled: logs the text and completes at once.
pub struct SilentSynth {
    notifier: Notifier,
}

impl SilentSynth {
    pub fn new(notifier: Notifier) -> Self {
        Self { notifier }
    }
}

impl SpeechSynth for SilentSynth {
    fn speak(&mut self, utterance: Utterance) {
        debug!(text = %utterance.text, "announcement (speech disabled)");
        if let Some(ticket) = utterance.ticket {
            self.notifier.notify(Notice::SpeechEnded(ticket));
        }
    }
}
