//! Declarative field rules for JSON form payloads.
//!
//! A thin layer over the [registry](crate::registry): each rule names a field
//! and the kind of validator it needs. Checking never changes a predicate's
//! verdict; it only collects the structured errors of every failing field.
//!
//! ```
//! use formcheck_validator::form::FormRules;
//! use formcheck_validator::registry::ValidatorRegistry;
//! use serde_json::json;
//!
//! let rules = FormRules::from_json_str(r#"{
//!     "fields": [
//!         {"field": "email", "kind": "email", "required": true},
//!         {"field": "birthday", "kind": "iso_date"}
//!     ]
//! }"#).unwrap();
//!
//! let registry = ValidatorRegistry::new();
//! assert!(rules.check(&registry, &json!({"email": "user@example.com"})).is_ok());
//!
//! let errors = rules.check(&registry, &json!({"birthday": "2023-02-29"})).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ConfigError;
use crate::foundation::validatable::json_type_name;
use crate::foundation::{ValidationError, ValidationErrors};
use crate::registry::{ValidatorKind, ValidatorRegistry};

/// One field of a form and the validator it is checked with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRule {
    /// Key of the field in the JSON object.
    pub field: String,
    /// Validator applied to the field's value.
    pub kind: ValidatorKind,
    /// Whether an absent or `null` field is an error.
    #[serde(default)]
    pub required: bool,
}

impl FieldRule {
    /// Creates an optional field rule.
    pub fn new(field: impl Into<String>, kind: ValidatorKind) -> Self {
        Self {
            field: field.into(),
            kind,
            required: false,
        }
    }

    /// Marks the field as required.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// An ordered list of field rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRules {
    /// Rules, checked and reported in this order.
    #[serde(default)]
    pub fields: Vec<FieldRule>,
}

impl FormRules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    /// Parses rules from a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Checks every rule against `input`, which must be a JSON object.
    ///
    /// Absent and `null` fields fail with `required` when the rule is
    /// required and are skipped otherwise. Each error carries the field name.
    pub fn check(
        &self,
        registry: &ValidatorRegistry,
        input: &Value,
    ) -> Result<(), ValidationErrors> {
        let Some(object) = input.as_object() else {
            let error = ValidationError::type_mismatch("object", json_type_name(input));
            return Err(std::iter::once(error).collect());
        };

        let mut errors = ValidationErrors::new();

        for rule in &self.fields {
            let result = match object.get(&rule.field) {
                None | Some(Value::Null) if rule.required => Err(ValidationError::required()),
                None | Some(Value::Null) => Ok(()),
                Some(value) => registry.get_kind(rule.kind).explain(value),
            };

            if let Err(error) = result {
                tracing::debug!(
                    field = %rule.field,
                    kind = %rule.kind,
                    code = %error.code,
                    "form field rejected"
                );
                errors.add(error.with_field(rule.field.clone()));
            }
        }

        errors.into_result(())
    }
}
