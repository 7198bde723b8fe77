#![warn(clippy::unwrap_used)]

pub mod log;
pub mod version;
