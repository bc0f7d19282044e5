//! Configuration loader
//!
//! Loading pipeline:
//! 1. Size check and raw read
//! 2. BOM stripping and JSON parsing
//! 3. Validation of the raw document
//! 4. Deserialization to [`TimeCheckConfig`]

use crate::config::schema::{DEFAULT_CONFIG_FILE, TimeCheckConfig};
use crate::config::validation::Validator;
use crate::error::ConfigError;

use serde_json::Value;
use std::path::{Path, PathBuf};

// ============================================================================
// Public API
// ============================================================================

/// Limits on configuration size to keep a bad file from exhausting memory.
#[derive(Debug, Clone)]
pub struct ConfigLimits {
    /// Maximum configuration file size in bytes.
    pub max_config_size: usize,

    /// Maximum number of entries in `legal_times`.
    pub max_legal_times: usize,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            max_config_size: env_or("TIMECHECK_MAX_CONFIG_SIZE", 1024 * 1024),
            max_legal_times: env_or("TIMECHECK_MAX_LEGAL_TIMES", 100_000),
        }
    }
}

/// Result of loading a configuration file.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated configuration.
    pub config: TimeCheckConfig,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during configuration loading.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// JSON path of the field the warning is about.
    pub location: String,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.message, self.location)
    }
}

/// Configuration loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    limits: ConfigLimits,
}

impl ConfigLoader {
    /// Creates a new configuration loader with the given limits.
    #[must_use]
    pub const fn new(limits: ConfigLimits) -> Self {
        Self { limits }
    }

    /// Creates a new configuration loader with default limits.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ConfigLimits::default())
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or exceeds the size limit
    /// - The content is empty or not valid JSON
    /// - Validation fails
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        tracing::debug!(path = %path.display(), "loading configuration");

        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let file_size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if file_size > self.limits.max_config_size {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{file_size} bytes"),
                expected: format!("at most {} bytes", self.limits.max_config_size),
            });
        }

        let raw_bytes = std::fs::read(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;
        let raw_content = String::from_utf8(raw_bytes).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: None,
            message: format!("file is not valid UTF-8: {e}"),
        })?;

        self.load_document(&raw_content, path)
    }

    /// Loads and validates an in-memory configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is empty, not valid JSON, or fails
    /// validation.
    pub fn load_from_str(&self, content: &str) -> Result<LoadResult, ConfigError> {
        self.load_document(content, Path::new("<inline>"))
    }

    fn load_document(&self, raw_content: &str, path: &Path) -> Result<LoadResult, ConfigError> {
        let content = raw_content.strip_prefix('\u{feff}').unwrap_or(raw_content);

        if content.trim().is_empty() {
            return Err(ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: "Configuration file is empty".to_string(),
            });
        }

        let root: Value = serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: Some(e.line()),
            message: e.to_string(),
        })?;

        let mut validator = Validator::new();
        let validation_result = validator.validate(&root, &self.limits);

        if validation_result.has_errors() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                errors: validation_result.errors,
            });
        }

        let warnings: Vec<LoadWarning> = validation_result
            .warnings
            .into_iter()
            .map(|issue| LoadWarning {
                message: issue.message,
                location: issue.path,
            })
            .collect();

        let config = serde_json::from_value::<TimeCheckConfig>(root)
            .map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: format!("Failed to deserialize configuration: {e}"),
            })?
            .without_negative_zero();

        tracing::debug!(
            legal_times = config.legal_times.len(),
            tolerance = config.tolerance,
            warnings = warnings.len(),
            "configuration loaded"
        );

        Ok(LoadResult { config, warnings })
    }
}

// ============================================================================
// Path Resolution
// ============================================================================

/// Resolves which configuration file to load.
///
/// Order: the explicit path, then `time_config.json` in the working
/// directory, then `time_config.json` beside the executable. The last
/// candidate is returned even if it does not exist so that the loader can
/// report it.
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    let cwd = std::env::current_dir().ok();
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_from(explicit, cwd.as_deref(), exe_dir.as_deref())
}

fn resolve_from(explicit: Option<&Path>, cwd: Option<&Path>, exe_dir: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "using explicit configuration path");
        return path.to_path_buf();
    }

    if let Some(candidate) = cwd
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE))
        .filter(|candidate| candidate.exists())
    {
        tracing::debug!(path = %candidate.display(), "found configuration in working directory");
        return candidate;
    }

    let fallback = exe_dir.map_or_else(
        || PathBuf::from(DEFAULT_CONFIG_FILE),
        |dir| dir.join(DEFAULT_CONFIG_FILE),
    );
    tracing::debug!(path = %fallback.display(), "falling back to executable directory");
    fallback
}

// ============================================================================
// Helper Functions
// ============================================================================

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================
