//! Live-stream attachment.
//!
//! Adaptive streams (HLS and friends) are handed to an external player
//! process rather than decoded in-process. While attached, the local output
//! device is silenced.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use tracing::{debug, info, warn};

use crate::error::PlaybackError;
use crate::events::{Notice, Notifier, Ticket};

use super::device::OutputDevice;

pub trait StreamAttachment {
    /// Whether this runtime can attach adaptive streams at all.
    fn is_supported(&self) -> bool;
    /// Prepare `uri`. Readiness is posted as `Notice::ManifestReady(ticket)`.
    fn load_source(&mut self, uri: &str, ticket: Ticket) -> Result<(), PlaybackError>;
    /// Take over audio output from `device`.
    fn attach(&mut self, device: &mut dyn OutputDevice);
    /// Start playing the loaded stream.
    fn play(&mut self) -> Result<(), PlaybackError>;
    /// Stop the stream and release the output.
    fn detach(&mut self);
}

/// Locate `program` the way a shell would: as a path when it has a separator,
/// otherwise on `PATH`.
pub fn find_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|p| p.is_file())
}

/// Plays the stream through an external command (default `mpv`).
pub struct CommandStream {
    program: String,
    args: Vec<String>,
    enabled: bool,
    notifier: Notifier,
    uri: Option<String>,
    child: Option<Child>,
}

impl CommandStream {
    pub fn new(program: String, args: Vec<String>, enabled: bool, notifier: Notifier) -> Self {
        Self {
            program,
            args,
            enabled,
            notifier,
            uri: None,
            child: None,
        }
    }

    fn kill_child(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
            debug!(program = %self.program, "stream player stopped");
        }
    }
}

impl StreamAttachment for CommandStream {
    fn is_supported(&self) -> bool {
        self.enabled && find_program(&self.program).is_some()
    }

    fn load_source(&mut self, uri: &str, ticket: Ticket) -> Result<(), PlaybackError> {
        self.kill_child();
        self.uri = Some(uri.to_string());
        // The player process parses the manifest itself; once the URI is set
        // there is nothing left to wait for.
        self.notifier.notify(Notice::ManifestReady(ticket));
        Ok(())
    }

    fn attach(&mut self, device: &mut dyn OutputDevice) {
        device.stop();
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        let uri = self.uri.clone().ok_or(PlaybackError::NoSource)?;
        self.kill_child();

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(&uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PlaybackError::Rejected(format!("{}: {e}", self.program)))?;

        info!(program = %self.program, pid = child.id(), uri = %uri, "stream player started");
        self.child = Some(child);
        Ok(())
    }

    fn detach(&mut self) {
        self.kill_child();
        self.uri = None;
    }
}

impl Drop for CommandStream {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                warn!(error = %e, "failed to stop stream player");
            }
            let _ = child.wait();
        }
    }
}
