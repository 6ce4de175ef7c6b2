//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and wraps the engine's published
//! player view together with presentation-only state.

mod model;

pub use model::*;
