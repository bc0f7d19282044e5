//! Observability module
//!
//! Structured logging to stderr via `tracing`. Stdout is reserved for the
//! verdict.

pub mod logging;

pub use logging::{LogFormat, init_logging};
