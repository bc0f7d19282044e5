//! Command-line interface
//!
//! Argument definitions and the check command that ties the config loader,
//! time parser and matcher together.

pub mod args;
pub mod commands;
