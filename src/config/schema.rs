//! Typed configuration document.

use serde::{Deserialize, Serialize};

/// Field name of the legal times array.
pub const LEGAL_TIMES_FIELD: &str = "legal_times";

/// Field name of the tolerance value.
pub const TOLERANCE_FIELD: &str = "tolerance";

/// Every top-level key the document may contain.
pub const KNOWN_FIELDS: [&str; 2] = [LEGAL_TIMES_FIELD, TOLERANCE_FIELD];

/// Default configuration file name looked up next to the working directory
/// and the executable.
pub const DEFAULT_CONFIG_FILE: &str = "time_config.json";

/// Validated timer configuration.
///
/// Only constructed by the loader after validation, so `legal_times` is
/// non-empty and every value is a non-negative number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeCheckConfig {
    /// Reference times in seconds, in document order.
    pub legal_times: Vec<f64>,

    /// Maximum accepted deviation in seconds.
    pub tolerance: f64,
}

impl TimeCheckConfig {
    /// Rewrites `-0` as `0` so that no value prints with a sign.
    #[must_use]
    pub fn without_negative_zero(mut self) -> Self {
        for seconds in &mut self.legal_times {
            *seconds += 0.0;
        }
        self.tolerance += 0.0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_integers_and_floats() {
        let config: TimeCheckConfig =
            serde_json::from_str(r#"{"legal_times": [5, 10.5], "tolerance": 1}"#).unwrap();
        assert_eq!(config.legal_times, vec![5.0, 10.5]);
        assert_eq!(config.tolerance, 1.0);
    }

    #[test]
    fn negative_zero_becomes_positive() {
        let config = TimeCheckConfig {
            legal_times: vec![-0.0, 5.0],
            tolerance: -0.0,
        }
        .without_negative_zero();
        assert!(config.legal_times[0].is_sign_positive());
        assert!(config.tolerance.is_sign_positive());
        assert_eq!(config.legal_times[1], 5.0);
    }

    #[test]
    fn known_fields_match_serde_names() {
        let value = serde_json::to_value(TimeCheckConfig {
            legal_times: vec![1.0],
            tolerance: 0.0,
        })
        .unwrap();
        let object = value.as_object().unwrap();
        for field in KNOWN_FIELDS {
            assert!(object.contains_key(field), "missing {field}");
        }
        assert_eq!(object.len(), KNOWN_FIELDS.len());
    }
}
