//! Track library: the track model, requester/title credits parsed from
//! display names, and the folder scan that builds the track pool.

mod credits;
mod model;
mod scan;

pub use credits::{CREDITS_SEPARATOR, Credits, parse_credits};
pub use model::Track;
pub use scan::scan;

#[cfg(test)]
mod tests;
