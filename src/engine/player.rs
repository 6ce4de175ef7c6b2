use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::events::{EngineCmd, EngineMsg};
use crate::library::Track;

use super::scheduler::ViewHandle;
use super::state::PlayerView;
use super::thread::spawn_engine_thread;

/// Handle to the running engine thread.
pub struct Engine {
    tx: Sender<EngineMsg>,
    view: ViewHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Engine {
    /// Start the engine with an initial track pool. Fails when no output
    /// device can be opened.
    pub fn start(settings: Settings, tracks: Vec<Track>) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<EngineMsg>();
        let (ready_tx, ready_rx) = mpsc::channel();
        let view: ViewHandle = Arc::new(Mutex::new(PlayerView::default()));

        let handle = spawn_engine_thread(settings, tracks, tx.clone(), rx, view.clone(), ready_tx);
        ready_rx.recv().map_err(|_| Error::EngineStopped)??;

        Ok(Self {
            tx,
            view,
            join: Mutex::new(Some(handle)),
        })
    }

    pub fn view_handle(&self) -> ViewHandle {
        self.view.clone()
    }

    pub fn send(&self, cmd: EngineCmd) -> Result<()> {
        self.tx
            .send(EngineMsg::Cmd(cmd))
            .map_err(|_| Error::EngineStopped)
    }

    /// Ask the engine to stop output and wait for its thread to finish.
    pub fn shutdown(&self) {
        let _ = self.send(EngineCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
