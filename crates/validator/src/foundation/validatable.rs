//! `AsValidatable` trait with GAT for input conversion
//!
//! Form input arrives as "some value": a Rust string, an optional string, or a
//! `serde_json::Value` decoded from a request body. Validators operate on
//! `&str`, so every raw input representation is first narrowed to text here.
//! A value that is not text fails the conversion with a `type_mismatch`
//! error; the boolean predicates turn that into `false`.

use crate::foundation::ValidationError;
use std::borrow::{Borrow, Cow};

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be converted for validation.
///
/// Uses GAT to allow returning either borrowed reference or owned value,
/// unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

// ============================================================================
// TEXT CONVERSIONS
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for Box<str> {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for Cow<'_, str> {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_ref())
    }
}

impl<T> AsValidatable<str> for &T
where
    T: AsValidatable<str> + ?Sized,
{
    type Output<'a>
        = T::Output<'a>
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError> {
        (**self).as_validatable()
    }
}

/// `None` is the absence of text and never validates.
impl<T> AsValidatable<str> for Option<T>
where
    T: AsValidatable<str>,
{
    type Output<'a>
        = T::Output<'a>
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError> {
        match self {
            Some(value) => value.as_validatable(),
            None => Err(ValidationError::type_mismatch("string", "none")),
        }
    }
}

// ============================================================================
// JSON CONVERSION
// ============================================================================

/// Returns the JSON type name of a value, as used in `type_mismatch` errors.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl AsValidatable<str> for serde_json::Value {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        match self {
            serde_json::Value::String(s) => Ok(s.as_str()),
            other => Err(ValidationError::type_mismatch(
                "string",
                json_type_name(other),
            )),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
