//! Engine configuration.
//!
//! Only two validators take options: the password policy and the URL scheme
//! requirement. Every key is optional; missing keys take their defaults.
//!
//! ```
//! use formcheck_validator::config::ValidationConfig;
//!
//! let config = ValidationConfig::from_json_str(
//!     r#"{"password": {"minLength": 12}, "url": {"requireScheme": false}}"#,
//! )
//! .unwrap();
//! assert_eq!(config.password.min_length, 12);
//! assert!(!config.url.require_scheme);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validators::{PasswordOptions, UrlOptions};

/// Errors raised while loading configuration or resolving validator names.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the expected shape.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A validator name does not match any registered validator.
    #[error("unknown validator `{0}`")]
    UnknownValidator(String),
}

/// Options shared by every predicate bound through a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Password policy.
    pub password: PasswordOptions,
    /// URL parsing options.
    pub url: UrlOptions,
}

impl ValidationConfig {
    /// Parses configuration from a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Builds configuration from an already-decoded JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_document_is_default() {
        let config = ValidationConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ValidationConfig::default());
        assert_eq!(config.password.min_length, 8);
        assert!(config.url.require_scheme);
    }

    #[test]
    fn test_partial_document() {
        let config = ValidationConfig::from_json_value(json!({"url": {"requireScheme": false}}))
            .unwrap();
        assert_eq!(config.password, PasswordOptions::default());
        assert_eq!(config.url, UrlOptions::scheme_optional());
    }

    #[test]
    fn test_invalid_document() {
        let err = ValidationConfig::from_json_str("{\"password\": 3}").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid configuration:"));
    }

    #[test]
    fn test_round_trip_serialization() {
        let config = ValidationConfig {
            password: PasswordOptions::new(10),
            url: UrlOptions::scheme_optional(),
        };
        let value = serde_json::to_value(config).unwrap();
        assert_eq!(
            value,
            json!({"password": {"minLength": 10}, "url": {"requireScheme": false}})
        );
    }
}
