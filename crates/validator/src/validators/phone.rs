//! Phone number validator.
//!
//! No country-specific rules: formatting characters are stripped and what
//! remains must be an optional leading `+` followed by 7 to 15 digits.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Validates phone numbers.
///
/// Whitespace, hyphens and parentheses are removed wherever they occur.
/// The remainder must match `^\+?[0-9]{min,max}$`, with 7 and 15 digits by
/// default.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::Phone;
/// use formcheck_validator::foundation::Validate;
///
/// let phone = Phone::new();
/// assert!(phone.validate("+1 (555) 123-4567").is_ok());
/// assert!(phone.validate("555.123.4567").is_err()); // dots are not stripped
/// assert!(phone.validate("12345").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phone {
    min_digits: u8,
    max_digits: u8,
}

impl Phone {
    /// Creates a phone validator accepting 7 to 15 digits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_digits: 7,
            max_digits: 15,
        }
    }

    /// Sets the minimum number of digits required.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_digits(mut self, min: u8) -> Self {
        self.min_digits = min;
        self
    }

    /// Sets the maximum number of digits allowed.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_digits(mut self, max: u8) -> Self {
        self.max_digits = max;
        self
    }

    fn is_formatting(c: char) -> bool {
        c.is_whitespace() || matches!(c, '-' | '(' | ')')
    }

    fn validate_digit_count(&self, count: usize) -> Result<(), ValidationError> {
        if count < usize::from(self.min_digits) {
            return Err(ValidationError::new(
                "phone_too_few_digits",
                format!(
                    "Phone number must have at least {} digits (found {})",
                    self.min_digits, count
                ),
            )
            .with_param("min", self.min_digits.to_string())
            .with_param("actual", count.to_string()));
        }

        if count > usize::from(self.max_digits) {
            return Err(ValidationError::new(
                "phone_too_many_digits",
                format!(
                    "Phone number must have at most {} digits (found {})",
                    self.max_digits, count
                ),
            )
            .with_param("max", self.max_digits.to_string())
            .with_param("actual", count.to_string()));
        }

        Ok(())
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let stripped: String = input.chars().filter(|&c| !Self::is_formatting(c)).collect();
        let digits = stripped.strip_prefix('+').unwrap_or(&stripped);

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(
                "phone_invalid_chars",
                "Phone number may only contain digits, an optional leading '+', spaces, hyphens and parentheses",
            ));
        }

        self.validate_digit_count(digits.len())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod formatting {
        use super::*;

        #[test]
        fn test_formatted_numbers() {
            let v = Phone::new();
            assert!(v.validate("+1 (555) 123-4567").is_ok());
            assert!(v.validate("+44 20 7123 4567").is_ok());
            assert!(v.validate("(415) 555-1234").is_ok());
            assert!(v.validate("415-555-1234").is_ok());
            assert!(v.validate("4155551234").is_ok());
            assert!(v.validate("+14155551234").is_ok());
        }

        #[test]
        fn test_separators_anywhere() {
            // Parentheses need not balance; they are simply removed.
            assert!(Phone::new().validate("(((5551234").is_ok());
            assert!(Phone::new().validate("5-5-5-1-2-3-4").is_ok());
            assert!(Phone::new().validate(" 555 1234 ").is_ok());
        }

        #[test]
        fn test_invalid_chars() {
            let v = Phone::new();
            assert_eq!(
                v.validate("415.555.1234").unwrap_err().code,
                "phone_invalid_chars"
            );
            assert!(v.validate("+1 415 555 1234 ext").is_err());
            assert!(v.validate("1+4155551234").is_err());
            assert!(v.validate("++4155551234").is_err());
            assert!(v.validate("+١٢٣٤٥٦٧").is_err()); // non-ASCII digits
        }
    }

    mod digit_count {
        use super::*;

        #[test]
        fn test_limits() {
            let v = Phone::new();
            assert!(v.validate("123456").is_err());
            assert!(v.validate("1234567").is_ok());
            assert!(v.validate("+123456789012345").is_ok());
            assert!(v.validate("1234567890123456").is_err());
        }

        #[test]
        fn test_error_codes() {
            let v = Phone::new();
            let err = v.validate("12345").unwrap_err();
            assert_eq!(err.code, "phone_too_few_digits");
            assert_eq!(err.param("actual"), Some("5"));
            assert_eq!(
                v.validate("1234567890123456").unwrap_err().code,
                "phone_too_many_digits"
            );
        }

        #[test]
        fn test_empty_and_plus_only() {
            assert!(Phone::new().validate("").is_err());
            assert!(Phone::new().validate("+").is_err());
            assert!(Phone::new().validate(" - ( ) ").is_err());
        }

        #[test]
        fn test_custom_limits() {
            let v = Phone::new().min_digits(10).max_digits(10);
            assert!(v.validate("1234567890").is_ok());
            assert!(v.validate("123456789").is_err());
            assert!(v.validate("12345678901").is_err());
        }
    }
}
