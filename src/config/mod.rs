//! Configuration module
//!
//! Locating, loading and validating the JSON file that lists legal times
//! and the accepted tolerance.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigLimits, ConfigLoader, LoadResult, LoadWarning, resolve_config_path};
pub use schema::*;
pub use validation::{ValidationResult, Validator};
