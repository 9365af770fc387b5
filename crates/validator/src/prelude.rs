//! Prelude module for convenient imports.
//!
//! A single `use formcheck_validator::prelude::*;` brings in the traits,
//! error types, validators, predicates and the registry.
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! assert!(Phone::new().validate("+1 555 123 4567").is_ok());
//! assert!(is_valid_url_with("example.com", &UrlOptions::scheme_optional()));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    AsValidatable, Validate, ValidationError, ValidationErrors, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    CreditCard, Email, IsoDate, NonEmpty, Password, PasswordOptions, Phone, Url, UrlOptions,
    email, luhn_checksum_valid, non_empty,
};

// ============================================================================
// PREDICATES: Boolean field checks
// ============================================================================

pub use crate::predicates::{
    is_non_empty_string, is_valid_credit_card_number, is_valid_email, is_valid_iso_date,
    is_valid_password, is_valid_password_with, is_valid_phone_number, is_valid_url,
    is_valid_url_with,
};

// ============================================================================
// REGISTRY: Name lookup, configuration and form rules
// ============================================================================

pub use crate::config::{ConfigError, ValidationConfig};
pub use crate::form::{FieldRule, FormRules};
pub use crate::registry::{Predicate, ValidatorKind, ValidatorRegistry};
