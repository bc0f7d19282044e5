//! `timecheck` - check timer readings against legal reference times
//!
//! A reading in `HH:MM:SS.mmm` form is converted to seconds and matched
//! against the nearest entry of a configured list of legal times. It is
//! accepted when the deviation is within the configured tolerance.

pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod observability;
pub mod timecode;
