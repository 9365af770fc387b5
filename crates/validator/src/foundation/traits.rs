//! Core trait for the validation system
//!
//! This module defines the trait every validator implements.

use crate::foundation::validatable::AsValidatable;
use crate::foundation::ValidationError;
use std::borrow::Borrow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Generic over the input type, so a validator declares what it accepts at
/// compile time. All validators return `Result<(), ValidationError>`; a
/// validator never panics on malformed input, "malformed" is an `Err`.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::{Validate, ValidationError};
///
/// struct Lowercase;
///
/// impl Validate for Lowercase {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().all(|c| !c.is_uppercase()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("lowercase", "must be lowercase"))
///         }
///     }
/// }
///
/// assert!(Lowercase.validate("abc").is_ok());
/// assert!(Lowercase.validate("aBc").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Validates any raw input that can be narrowed to `Self::Input`.
    ///
    /// A single validator accepts `&str`, `String`, `Option<String>` or a
    /// `serde_json::Value` without explicit conversion by the caller. Input
    /// that cannot be narrowed (a JSON number, `None`) fails with the
    /// conversion's `type_mismatch` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::Validate;
    /// use formcheck_validator::validators::Email;
    /// use serde_json::json;
    ///
    /// assert!(Email.validate_any(&json!("user@example.com")).is_ok());
    /// assert!(Email.validate_any(&String::from("user@example.com")).is_ok());
    /// assert!(Email.validate_any(&json!(42)).is_err());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
    {
        let output = value.as_validatable()?;
        self.validate(Borrow::<Self::Input>::borrow(&output))
    }
}

// ============================================================================
// TESTS
// ============================================================================
