//! Boolean predicates, one per field type.
//!
//! Each predicate accepts any raw input representation (`&str`, `String`,
//! `Option<String>`, `serde_json::Value`, ...) and returns a plain verdict.
//! Input that is not text is `false`, never an error or a panic. The verdict
//! is exactly `validator.validate_any(value).is_ok()` for the matching
//! validator in [`crate::validators`].
//!
//! ```
//! use formcheck_validator::{is_valid_email, is_valid_password_with};
//! use formcheck_validator::validators::PasswordOptions;
//! use serde_json::json;
//!
//! assert!(is_valid_email("user@example.com"));
//! assert!(!is_valid_email(&json!(42)));
//! assert!(is_valid_password_with("Ab1!", &PasswordOptions::new(4)));
//! ```

use crate::foundation::{AsValidatable, Validate};
use crate::validators::{
    CreditCard, Email, IsoDate, NonEmpty, Password, PasswordOptions, Phone, Url, UrlOptions,
};

/// Returns true if `value` is text with at least one non-whitespace character.
pub fn is_non_empty_string<S>(value: &S) -> bool
where
    S: AsValidatable<str> + ?Sized,
{
    NonEmpty.validate_any(value).is_ok()
}

/// Returns true if `value` is a syntactically valid email address.
pub fn is_valid_email<S>(value: &S) -> bool
where
    S: AsValidatable<str> + ?Sized,
{
    Email.validate_any(value).is_ok()
}

/// Returns true if `value` satisfies the default password policy
/// (8 characters, upper, lower, digit, special).
pub fn is_valid_password<S>(value: &S) -> bool
where
    S: AsValidatable<str> + ?Sized,
{
    is_valid_password_with(value, &PasswordOptions::default())
}

/// Returns true if `value` satisfies the password policy in `options`.
pub fn is_valid_password_with<S>(value: &S, options: &PasswordOptions) -> bool
where
    S: AsValidatable<str> + ?Sized,
{
    Password::with_options(*options).validate_any(value).is_ok()
}

/// Returns true if `value` is a phone number of 7 to 15 digits.
pub fn is_valid_phone_number<S>(value: &S) -> bool
where
    S: AsValidatable<str> + ?Sized,
{
    Phone::new().validate_any(value).is_ok()
}

/// Returns true if `value` parses as an absolute URL with a scheme.
pub fn is_valid_url<S>(value: &S) -> bool
where
    S: AsValidatable<str> + ?Sized,
{
    is_valid_url_with(value, &UrlOptions::default())
}

/// Returns true if `value` parses as a URL under `options`.
pub fn is_valid_url_with<S>(value: &S, options: &UrlOptions) -> bool
where
    S: AsValidatable<str> + ?Sized,
{
    Url::with_options(*options).validate_any(value).is_ok()
}

/// Returns true if `value` is a digit string (whitespace ignored) passing Luhn.
pub fn is_valid_credit_card_number<S>(value: &S) -> bool
where
    S: AsValidatable<str> + ?Sized,
{
    CreditCard.validate_any(value).is_ok()
}

/// Returns true if `value` is a real calendar date in `YYYY-MM-DD` form.
pub fn is_valid_iso_date<S>(value: &S) -> bool
where
    S: AsValidatable<str> + ?Sized,
{
    IsoDate.validate_any(value).is_ok()
}
