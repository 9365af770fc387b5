//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators are generic over their input type. Every built-in validator
//! takes `str`; raw input of unknown shape is narrowed to text by
//! [`AsValidatable`] before any format rule runs.
//!
//! ```
//! use formcheck_validator::foundation::Validate;
//! use formcheck_validator::validators::Phone;
//!
//! assert!(Phone::new().validate("+1 (555) 123-4567").is_ok());
//! assert!(Phone::new().validate("12345").is_err());
//! ```

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::{ValidationError, ValidationErrors};
pub use traits::Validate;
pub use validatable::AsValidatable;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
