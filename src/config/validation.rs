//! Configuration validation
//!
//! Validation runs on the raw JSON document, before deserialization, so
//! that every problem can be reported with the path of the offending field.
//! All issues are collected rather than stopping at the first one.

use crate::config::loader::ConfigLimits;
use crate::config::schema::{KNOWN_FIELDS, LEGAL_TIMES_FIELD, TOLERANCE_FIELD};
use crate::error::{Severity, ValidationIssue};

use serde_json::{Map, Value};

// ============================================================================
// Public API
// ============================================================================

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Configuration validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a parsed JSON document and returns every issue found.
    pub fn validate(&mut self, root: &Value, limits: &ConfigLimits) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        match root.as_object() {
            Some(object) => {
                self.validate_legal_times(object.get(LEGAL_TIMES_FIELD), limits);
                self.validate_tolerance(object.get(TOLERANCE_FIELD));
                self.check_unknown_fields(object);
            }
            None => self.add_error(
                "",
                &format!(
                    "configuration root must be a JSON object, got {}",
                    type_name(root)
                ),
            ),
        }

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Field Validation
    // ========================================================================

    fn validate_legal_times(&mut self, value: Option<&Value>, limits: &ConfigLimits) {
        let Some(value) = value else {
            self.add_error(LEGAL_TIMES_FIELD, "missing required field");
            return;
        };
        let Some(items) = value.as_array() else {
            self.add_error(
                LEGAL_TIMES_FIELD,
                &format!("must be an array of numbers, got {}", type_name(value)),
            );
            return;
        };

        if items.is_empty() {
            self.add_error(LEGAL_TIMES_FIELD, "must contain at least one legal time");
            return;
        }
        if items.len() > limits.max_legal_times {
            self.add_error(
                LEGAL_TIMES_FIELD,
                &format!(
                    "too many entries ({}, limit {})",
                    items.len(),
                    limits.max_legal_times
                ),
            );
        }

        for (index, item) in items.iter().enumerate() {
            self.validate_seconds(&format!("{LEGAL_TIMES_FIELD}[{index}]"), item);
        }
    }

    fn validate_tolerance(&mut self, value: Option<&Value>) {
        match value {
            Some(value) => self.validate_seconds(TOLERANCE_FIELD, value),
            None => self.add_error(TOLERANCE_FIELD, "missing required field"),
        }
    }

    /// Checks that a value is a non-negative JSON number.
    fn validate_seconds(&mut self, path: &str, value: &Value) {
        match value.as_f64() {
            Some(seconds) if seconds < 0.0 => {
                self.add_error(path, &format!("must not be negative, got {seconds}"));
            }
            Some(_) => {}
            None => self.add_error(path, &format!("must be a number, got {}", type_name(value))),
        }
    }

    fn check_unknown_fields(&mut self, object: &Map<String, Value>) {
        for key in object.keys() {
            if KNOWN_FIELDS.contains(&key.as_str()) {
                continue;
            }
            let message = suggest_field(key).map_or_else(
                || "unknown field is ignored".to_string(),
                |known| format!("unknown field is ignored (did you mean '{known}'?)"),
            );
            self.add_warning(key, &message);
        }
    }

    // ========================================================================
    // Issue Collection
    // ========================================================================

    /// Adds an error to the collection.
    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    /// Adds a warning to the collection.
    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Suggests a known field name for a likely typo.
///
/// Returns the closest known field if its Damerau-Levenshtein distance is ≤ 3.
#[must_use]
pub fn suggest_field(input: &str) -> Option<&'static str> {
    KNOWN_FIELDS
        .iter()
        .map(|&name| (name, strsim::damerau_levenshtein(input, name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name)
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Tests
// ============================================================================
