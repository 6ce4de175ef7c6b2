//! Audio output: the device and stream-attachment seams the playback driver
//! talks to, and their concrete `rodio` / external-player implementations.

mod device;
mod sink;
mod stream;
mod types;

pub use device::OutputDevice;
pub use sink::RodioDevice;
pub use stream::{CommandStream, StreamAttachment, find_program};
pub use types::MediaSource;
