//! Password strength validator.
//!
//! A password is accepted when it is long enough and contains at least one
//! character from each of four classes: ASCII uppercase, ASCII lowercase,
//! ASCII digit and a fixed set of special characters. Characters outside
//! those classes (including non-ASCII text) are allowed and never count
//! against the password.

use serde::{Deserialize, Deserializer, Serialize};

use crate::foundation::{Validate, ValidationError};

/// Characters that satisfy the "special character" requirement.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum length used when no (or a non-positive) length is configured.
pub const DEFAULT_MIN_LENGTH: usize = 8;

// ============================================================================
// OPTIONS
// ============================================================================

/// Password policy options.
///
/// Deserializes from camelCase keys, e.g. `{"minLength": 12}`. A zero or
/// negative `minLength` falls back to [`DEFAULT_MIN_LENGTH`].
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::PasswordOptions;
///
/// let options: PasswordOptions = serde_json::from_str(r#"{"minLength": -3}"#).unwrap();
/// assert_eq!(options.effective_min_length(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordOptions {
    /// Minimum number of characters (Unicode scalar values).
    #[serde(deserialize_with = "lenient_min_length")]
    pub min_length: usize,
}

impl PasswordOptions {
    /// Creates options with the given minimum length.
    #[must_use]
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Returns the minimum length actually enforced.
    #[must_use]
    pub fn effective_min_length(&self) -> usize {
        if self.min_length == 0 {
            DEFAULT_MIN_LENGTH
        } else {
            self.min_length
        }
    }
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

fn lenient_min_length<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(usize::try_from(raw)
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_MIN_LENGTH))
}

// ============================================================================
// PASSWORD VALIDATOR
// ============================================================================

/// Validates password strength.
///
/// Failures are reported in a fixed order: length, uppercase, lowercase,
/// digit, special.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::Password;
/// use formcheck_validator::foundation::Validate;
///
/// assert!(Password::new().validate("Abcdef1!").is_ok());
/// assert!(Password::new().validate("abcdefgh").is_err());
/// assert!(Password::new().min_length(4).validate("Ab1!").is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Password {
    options: PasswordOptions,
}

impl Password {
    /// Creates a validator with the default policy (8 characters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator from options.
    #[must_use]
    pub fn with_options(options: PasswordOptions) -> Self {
        Self { options }
    }

    /// Sets the minimum password length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, len: usize) -> Self {
        self.options.min_length = len;
        self
    }

    /// Returns the options in effect.
    #[must_use]
    pub fn options(&self) -> &PasswordOptions {
        &self.options
    }
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

impl Validate for Password {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let min = self.options.effective_min_length();
        let len = input.chars().count();
        if len < min {
            return Err(ValidationError::min_length(min, len));
        }

        if !input.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::new(
                "password_missing_uppercase",
                "Password must contain an uppercase letter",
            ));
        }

        if !input.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(ValidationError::new(
                "password_missing_lowercase",
                "Password must contain a lowercase letter",
            ));
        }

        if !input.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(
                "password_missing_digit",
                "Password must contain a digit",
            ));
        }

        if !input.chars().any(is_special) {
            return Err(ValidationError::new(
                "password_missing_special",
                "Password must contain a special character",
            )
            .with_param("allowed", SPECIAL_CHARS));
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
