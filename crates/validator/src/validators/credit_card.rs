//! Payment card number validator with Luhn algorithm.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// LUHN CHECKSUM
// ============================================================================

/// Runs the Luhn (mod 10) checksum over a string of ASCII digits.
///
/// Digits are scanned right to left; every second digit, starting with the
/// second from the right, is doubled and reduced by 9 when it exceeds 9.
/// Returns `false` for an empty string or any non-digit character.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::luhn_checksum_valid;
///
/// assert!(luhn_checksum_valid("4532015112830366"));
/// assert!(!luhn_checksum_valid("4532015112830367"));
/// ```
#[must_use]
pub fn luhn_checksum_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;

    for c in digits.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };

        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        // Kept reduced mod 10 so long input cannot overflow.
        sum = (sum + digit) % 10;
        double = !double;
    }

    sum == 0
}

// ============================================================================
// CREDIT CARD VALIDATOR
// ============================================================================

/// Validates payment card numbers.
///
/// All whitespace is removed; the rest must be ASCII digits that pass the
/// Luhn checksum. No issuer prefix or length rules are applied.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::CreditCard;
/// use formcheck_validator::foundation::Validate;
///
/// assert!(CreditCard.validate("4532 0151 1283 0366").is_ok());
/// assert!(CreditCard.validate("4532-0151-1283-0366").is_err()); // hyphens are not stripped
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CreditCard;

impl CreditCard {
    /// Creates a new credit card validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validate for CreditCard {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        if digits.is_empty() {
            return Err(ValidationError::new(
                "cc_empty",
                "Card number must contain digits",
            ));
        }

        if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ValidationError::new(
                "cc_invalid_char",
                format!("Invalid character '{c}' in card number"),
            ));
        }

        if luhn_checksum_valid(&digits) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "cc_invalid_luhn",
                "Card number failed Luhn checksum",
            ))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
