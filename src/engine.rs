//! The playback-mode engine.
//!
//! `Scheduler` owns the `SchedulerState` and alternates between radio and
//! playlist; `PlaybackDriver` binds tracks or the live stream to the output.
//! Both run on a single engine thread fed by one channel of `EngineMsg`s.

mod driver;
mod player;
mod queue;
mod scheduler;
mod state;
mod thread;

pub use driver::PlaybackDriver;
pub use player::Engine;
pub use queue::Queue;
pub use scheduler::{Scheduler, SchedulerConfig, ViewHandle};
pub use state::{Pending, PlaybackMode, PlayerView, SchedulerState};
