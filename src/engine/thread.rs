use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::audio::{CommandStream, RodioDevice};
use crate::config::Settings;
use crate::error::Error;
use crate::events::{EngineCmd, EngineMsg, Notifier};
use crate::library::Track;
use crate::speech::{Announcer, CommandSynth, SilentSynth, SpeechSynth};

use super::driver::PlaybackDriver;
use super::scheduler::{Scheduler, SchedulerConfig, ViewHandle};

/// Upper bound on how long the loop sleeps between checks of the device.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Spawn the engine thread.
///
/// The output device is opened on the engine thread; the outcome is sent
/// back on `ready` before the loop starts.
pub(super) fn spawn_engine_thread(
    settings: Settings,
    tracks: Vec<Track>,
    tx: Sender<EngineMsg>,
    rx: Receiver<EngineMsg>,
    view: ViewHandle,
    ready: Sender<Result<(), Error>>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let device = match RodioDevice::open() {
            Ok(device) => {
                let _ = ready.send(Ok(()));
                device
            }
            Err(e) => {
                error!(error = %e, "no audio output device");
                let _ = ready.send(Err(e));
                return;
            }
        };

        let notifier = Notifier::new(tx);
        let synth: Box<dyn SpeechSynth> = if settings.speech.enabled {
            Box::new(CommandSynth::new(
                settings.speech.command.clone(),
                settings.speech.args.clone(),
                notifier.clone(),
            ))
        } else {
            Box::new(SilentSynth::new(notifier.clone()))
        };
        let announcer = Announcer::new(
            synth,
            settings.station.name.clone(),
            settings.library.extensions.clone(),
        );
        let stream = CommandStream::new(
            settings.stream.command.clone(),
            settings.stream.args.clone(),
            settings.stream.enabled,
            notifier,
        );

        let driver = PlaybackDriver::new(device, stream, announcer, &settings.station);
        let mut scheduler = Scheduler::new(
            SchedulerConfig::from_settings(&settings),
            driver,
            tracks,
            view,
        );

        let tick_every = Duration::from_millis(settings.scheduler.tick_ms);
        let refresh_every = Duration::from_millis(settings.scheduler.progress_refresh_ms);
        let mut next_tick = Instant::now() + tick_every;
        let mut next_refresh = Instant::now() + refresh_every;

        scheduler.start();

        loop {
            let wait = next_tick
                .min(next_refresh)
                .saturating_duration_since(Instant::now())
                .min(POLL_INTERVAL);

            match rx.recv_timeout(wait) {
                Ok(EngineMsg::Cmd(cmd)) => match cmd {
                    EngineCmd::Skip => scheduler.skip(),
                    EngineCmd::PlayRadio => scheduler.play_radio(),
                    EngineCmd::LoadTracks(tracks) => scheduler.load_tracks(tracks),
                    EngineCmd::Quit => break,
                },
                Ok(EngineMsg::Notice(notice)) => scheduler.handle(notice),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            scheduler.poll_device();

            // Tick and progress timers run independently of each other.
            let now = Instant::now();
            if now >= next_tick {
                scheduler.tick();
                next_tick += tick_every;
                if next_tick < now {
                    next_tick = now + tick_every;
                }
            }
            if now >= next_refresh {
                scheduler.refresh_progress();
                next_refresh = now + refresh_every;
            }
        }

        scheduler.shutdown();
        info!("engine thread stopped");
    })
}
