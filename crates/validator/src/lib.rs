//! # formcheck-validator
//!
//! Field validation for form input: one boolean predicate per field type,
//! backed by structured validators that explain why a value was rejected.
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck_validator::{is_valid_email, is_valid_iso_date};
//! use serde_json::json;
//!
//! assert!(is_valid_email("user@example.com"));
//! assert!(!is_valid_iso_date("2023-02-29"));
//!
//! // Anything that is not text is rejected, never a panic.
//! assert!(!is_valid_email(&json!(null)));
//! ```
//!
//! ## Explaining Rejections
//!
//! Every predicate has a matching validator in [`validators`] implementing
//! [`Validate`](foundation::Validate):
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let err = Password::new().validate("abcdefgh").unwrap_err();
//! assert_eq!(err.code, "password_missing_uppercase");
//! ```
//!
//! ## Lookup by Name
//!
//! [`registry::ValidatorRegistry`] binds predicates to names (`"email"`,
//! `"isValidEmail"`, ...) under a [`config::ValidationConfig`], and
//! [`form::FormRules`] checks a whole JSON object field by field.
//!
//! ## Built-in Validators
//!
//! - **Text**: [`NonEmpty`](validators::NonEmpty), [`Email`](validators::Email)
//! - **Credentials**: [`Password`](validators::Password)
//! - **Contact**: [`Phone`](validators::Phone), [`Url`](validators::Url)
//! - **Payment**: [`CreditCard`](validators::CreditCard)
//! - **Dates**: [`IsoDate`](validators::IsoDate)

// ValidationError is returned by value from every validator; boxing it would
// add an allocation to each rejection.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod form;
pub mod foundation;
mod macros;
pub mod predicates;
pub mod prelude;
pub mod registry;
pub mod validators;

pub use predicates::{
    is_non_empty_string, is_valid_credit_card_number, is_valid_email, is_valid_iso_date,
    is_valid_password, is_valid_password_with, is_valid_phone_number, is_valid_url,
    is_valid_url_with,
};
