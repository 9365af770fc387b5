//! Error types for validation failures
//!
//! This module provides a structured error type that carries a stable
//! machine-readable code, a default English message, an optional field path
//! and ordered parameters.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// Every validator in this crate reports failures through this type. The
/// boolean predicates discard it; callers that want to tell the user *why*
/// a field was rejected use the structured validators instead.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Must be at least 8 characters")
///     .with_field("password")
///     .with_param("min", "8");
///
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("min"), Some("8"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "min_length", "invalid_format", "cc_invalid_luhn"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional field path, set by form-level validation.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template.
    ///
    /// Stored as ordered key-value pairs (typically 0-3 params).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON value for callers that report to a UI.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        Self::new(
            "type_mismatch",
            format!("Expected {expected}, got {actual}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the error reported for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|e| e.field.as_deref() == Some(field))
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.field.is_none());
        assert_eq!(error.to_string(), "test: Test error");
    }

    #[test]
    fn test_error_with_field_and_params() {
        let error = ValidationError::min_length(8, 3).with_field("password");
        assert_eq!(error.param("min"), Some("8"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("missing"), None);
        assert_eq!(
            error.to_string(),
            "[password] min_length: Must be at least 8 characters (params: [min=8, actual=3])"
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let error = ValidationError::type_mismatch("string", "number");
        assert_eq!(error.message, "Expected string, got number");
        assert_eq!(error.param("expected"), Some("string"));
        assert_eq!(error.param("actual"), Some("number"));
    }

    #[test]
    fn test_to_json_value() {
        let value = ValidationError::invalid_format("email")
            .with_field("contact")
            .to_json_value();
        assert_eq!(value["code"], "invalid_format");
        assert_eq!(value["field"], "contact");
        assert_eq!(value["params"]["expected"], "email");
        assert_eq!(value.as_object().map(serde_json::Map::len), Some(4));
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert!(errors.clone().into_result(()).is_ok());

        errors.add(ValidationError::required().with_field("email"));
        errors.add(ValidationError::invalid_format("phone").with_field("phone"));

        assert!(!errors.is_empty());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.for_field("phone").map(|e| &*e.code), Some("invalid_format"));
        assert!(errors.for_field("url").is_none());
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_collect_from_iterator() {
        let errors: ValidationErrors = ["email", "phone"]
            .into_iter()
            .map(|field| ValidationError::required().with_field(field))
            .collect();
        assert_eq!(errors.len(), 2);
        assert!(errors.to_string().starts_with("Validation failed with 2 error(s):"));
    }
}
