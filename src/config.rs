//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive the scheduler,
//! its collaborators and the UI, plus helpers to load it from disk.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
