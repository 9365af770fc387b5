//! Validator registry for lookup by name.
//!
//! Form engines that pick a validator from a field-type string at runtime
//! use the registry instead of matching on names themselves. A registry is
//! built once, is immutable afterwards, and can be shared across threads
//! without locking.
//!
//! ```
//! use formcheck_validator::registry::ValidatorRegistry;
//!
//! let registry = ValidatorRegistry::new();
//! let email = registry.get("email").unwrap();
//! assert!(email.test("user@example.com"));
//! assert_eq!(registry.check("iso_date", "2024-13-01"), Some(false));
//! assert_eq!(registry.check("zip_code", "12345"), None);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ValidationConfig};
use crate::foundation::{AsValidatable, Validate, ValidationError};
use crate::predicates;
use crate::validators;

// ============================================================================
// VALIDATOR KIND
// ============================================================================

/// The field types the engine knows how to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    #[serde(alias = "isNonEmptyString")]
    NonEmptyString,
    #[serde(alias = "isValidEmail")]
    Email,
    #[serde(alias = "isValidPassword")]
    Password,
    #[serde(alias = "isValidPhoneNumber")]
    PhoneNumber,
    #[serde(alias = "isValidUrl")]
    Url,
    #[serde(alias = "isValidCreditCardNumber")]
    CreditCardNumber,
    #[serde(alias = "isValidIsoDate")]
    IsoDate,
}

impl ValidatorKind {
    /// Every kind, in registration order.
    pub const ALL: [Self; 7] = [
        Self::NonEmptyString,
        Self::Email,
        Self::Password,
        Self::PhoneNumber,
        Self::Url,
        Self::CreditCardNumber,
        Self::IsoDate,
    ];

    /// Registry name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonEmptyString => "non_empty_string",
            Self::Email => "email",
            Self::Password => "password",
            Self::PhoneNumber => "phone_number",
            Self::Url => "url",
            Self::CreditCardNumber => "credit_card_number",
            Self::IsoDate => "iso_date",
        }
    }

    /// Predicate-style alias, also accepted when parsing (`isValidEmail`).
    #[must_use]
    pub const fn predicate_name(self) -> &'static str {
        match self {
            Self::NonEmptyString => "isNonEmptyString",
            Self::Email => "isValidEmail",
            Self::Password => "isValidPassword",
            Self::PhoneNumber => "isValidPhoneNumber",
            Self::Url => "isValidUrl",
            Self::CreditCardNumber => "isValidCreditCardNumber",
            Self::IsoDate => "isValidIsoDate",
        }
    }

    /// The standalone predicate for this kind with default options, as a
    /// plain function pointer over JSON input.
    #[must_use]
    pub fn default_fn(self) -> fn(&serde_json::Value) -> bool {
        match self {
            Self::NonEmptyString => predicates::is_non_empty_string::<serde_json::Value>,
            Self::Email => predicates::is_valid_email::<serde_json::Value>,
            Self::Password => predicates::is_valid_password::<serde_json::Value>,
            Self::PhoneNumber => predicates::is_valid_phone_number::<serde_json::Value>,
            Self::Url => predicates::is_valid_url::<serde_json::Value>,
            Self::CreditCardNumber => predicates::is_valid_credit_card_number::<serde_json::Value>,
            Self::IsoDate => predicates::is_valid_iso_date::<serde_json::Value>,
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.predicate_name() == s)
            .ok_or_else(|| ConfigError::UnknownValidator(s.to_owned()))
    }
}

// ============================================================================
// PREDICATE HANDLE
// ============================================================================

/// A registered predicate: a validator kind with its options bound.
///
/// `test` returns exactly what the matching free function in
/// [`crate::predicates`] returns for the same options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Predicate {
    kind: ValidatorKind,
    config: ValidationConfig,
}

impl Predicate {
    /// Binds `kind` to `config`.
    #[must_use]
    pub fn new(kind: ValidatorKind, config: ValidationConfig) -> Self {
        Self { kind, config }
    }

    /// The kind this predicate validates.
    #[must_use]
    pub fn kind(&self) -> ValidatorKind {
        self.kind
    }

    /// The registry name of this predicate.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Returns the boolean verdict for `value`.
    pub fn test<S>(&self, value: &S) -> bool
    where
        S: AsValidatable<str> + ?Sized,
    {
        self.explain(value).is_ok()
    }

    /// Validates `value`, reporting why it was rejected.
    pub fn explain<S>(&self, value: &S) -> Result<(), ValidationError>
    where
        S: AsValidatable<str> + ?Sized,
    {
        match self.kind {
            ValidatorKind::NonEmptyString => validators::NonEmpty.validate_any(value),
            ValidatorKind::Email => validators::Email.validate_any(value),
            ValidatorKind::Password => {
                validators::Password::with_options(self.config.password).validate_any(value)
            }
            ValidatorKind::PhoneNumber => validators::Phone::new().validate_any(value),
            ValidatorKind::Url => {
                validators::Url::with_options(self.config.url).validate_any(value)
            }
            ValidatorKind::CreditCardNumber => validators::CreditCard.validate_any(value),
            ValidatorKind::IsoDate => validators::IsoDate.validate_any(value),
        }
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

static DEFAULT_REGISTRY: LazyLock<ValidatorRegistry> = LazyLock::new(ValidatorRegistry::new);

/// Immutable, ordered map from validator name to [`Predicate`].
///
/// Building a registry has no side effects besides a debug log event;
/// two registries built from equal configuration compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorRegistry {
    config: ValidationConfig,
    entries: IndexMap<&'static str, Predicate>,
}

impl ValidatorRegistry {
    /// Builds a registry with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&ValidationConfig::default())
    }

    /// Builds a registry whose predicates use `config`.
    #[must_use]
    pub fn with_config(config: &ValidationConfig) -> Self {
        let entries: IndexMap<&'static str, Predicate> = ValidatorKind::ALL
            .into_iter()
            .map(|kind| (kind.as_str(), Predicate::new(kind, *config)))
            .collect();

        tracing::debug!(
            validators = entries.len(),
            password_min_length = config.password.effective_min_length(),
            require_url_scheme = config.url.require_scheme,
            "built validator registry"
        );

        Self {
            config: *config,
            entries,
        }
    }

    /// The process-wide registry with default options, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &DEFAULT_REGISTRY
    }

    /// The configuration the predicates are bound to.
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Looks up a predicate by registry name or predicate alias.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Predicate> {
        if let Some(predicate) = self.entries.get(name) {
            return Some(*predicate);
        }

        match name.parse::<ValidatorKind>() {
            Ok(kind) => Some(self.get_kind(kind)),
            Err(_) => {
                tracing::trace!(name, "unknown validator name");
                None
            }
        }
    }

    /// Like [`get`](Self::get), but reports unknown names as an error.
    pub fn try_get(&self, name: &str) -> Result<Predicate, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::UnknownValidator(name.to_owned()))
    }

    /// Returns the predicate for `kind`. Every kind is always registered.
    #[must_use]
    pub fn get_kind(&self, kind: ValidatorKind) -> Predicate {
        Predicate::new(kind, self.config)
    }

    /// Runs the named predicate, or returns `None` for an unknown name.
    pub fn check<S>(&self, name: &str, value: &S) -> Option<bool>
    where
        S: AsValidatable<str> + ?Sized,
    {
        self.get(name).map(|predicate| predicate.test(value))
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Registered entries, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Predicate)> + '_ {
        self.entries.iter().map(|(name, predicate)| (*name, *predicate))
    }

    /// Number of registered predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
