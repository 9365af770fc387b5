//! Integration tests for the registry, form rules and error reporting.

use std::io;
use std::sync::{Arc, Mutex};

use formcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use tracing_subscriber::fmt::MakeWriter;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn shared_types_are_send_and_sync() {
    assert_send_sync::<ValidatorRegistry>();
    assert_send_sync::<Predicate>();
    assert_send_sync::<FormRules>();
    assert_send_sync::<ValidationConfig>();
    assert_send_sync::<ValidationError>();
    assert_send_sync::<NonEmpty>();
    assert_send_sync::<Email>();
    assert_send_sync::<Password>();
    assert_send_sync::<Phone>();
    assert_send_sync::<Url>();
    assert_send_sync::<CreditCard>();
    assert_send_sync::<IsoDate>();
}

// ============================================================================
// REGISTRY
// ============================================================================

#[test]
fn global_registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let registry = ValidatorRegistry::global();
                let card = if i % 2 == 0 {
                    "4532015112830366"
                } else {
                    "4532015112830367"
                };
                (
                    std::ptr::from_ref(registry) as usize,
                    registry.check("credit_card_number", card),
                )
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = results[0].0;
    assert!(results.iter().all(|(addr, _)| *addr == first));
    assert_eq!(
        results.iter().map(|(_, verdict)| *verdict).collect::<Vec<_>>(),
        vec![Some(true), Some(false), Some(true), Some(false)]
    );
}

#[test]
fn registry_from_json_config() {
    let config = ValidationConfig::from_json_str(
        r#"{"password": {"minLength": 12}, "url": {"requireScheme": false}}"#,
    )
    .unwrap();
    let registry = ValidatorRegistry::with_config(&config);

    assert_eq!(registry.check("password", "Abcdef1!"), Some(false));
    assert_eq!(registry.check("password", "Abcdefghij1!"), Some(true));
    assert_eq!(registry.check("isValidUrl", "example.com"), Some(true));
    assert_eq!(ValidatorRegistry::global().check("url", "example.com"), Some(false));
}

#[test]
fn unknown_names_are_reported() {
    let registry = ValidatorRegistry::new();
    assert_eq!(registry.check("postal_code", "12345"), None);

    let err = registry.try_get("postal_code").unwrap_err();
    assert_eq!(err.to_string(), "unknown validator `postal_code`");
}

#[test]
fn registry_order_is_stable() {
    let names: Vec<_> = ValidatorRegistry::global().names().collect();
    assert_eq!(
        names,
        vec![
            "non_empty_string",
            "email",
            "password",
            "phone_number",
            "url",
            "credit_card_number",
            "iso_date",
        ]
    );
}

// ============================================================================
// FORMS
// ============================================================================

#[test]
fn checkout_form() {
    let rules = FormRules::from_json_str(
        r#"{
            "fields": [
                {"field": "email", "kind": "isValidEmail", "required": true},
                {"field": "card", "kind": "credit_card_number", "required": true},
                {"field": "expires", "kind": "iso_date", "required": true},
                {"field": "phone", "kind": "phone_number"}
            ]
        }"#,
    )
    .unwrap();
    let registry = ValidatorRegistry::global();

    let ok = json!({
        "email": "buyer@example.com",
        "card": "4532 0151 1283 0366",
        "expires": "2027-08-31",
    });
    assert!(rules.check(registry, &ok).is_ok());

    let bad = json!({
        "email": "buyer@example",
        "card": "4532 0151 1283 0367",
        "expires": "2027-09-31",
        "phone": "555-CALL",
    });
    let errors = rules.check(registry, &bad).unwrap_err();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.for_field("card").map(|e| &*e.code), Some("cc_invalid_luhn"));
    assert_eq!(
        errors.for_field("expires").map(|e| &*e.code),
        Some("invalid_calendar_date")
    );
    assert_eq!(
        errors.for_field("phone").map(|e| &*e.code),
        Some("phone_invalid_chars")
    );
}

// ============================================================================
// ERROR REPORTING
// ============================================================================

#[test]
fn error_display() {
    let rules = FormRules::new()
        .field(FieldRule::new("email", ValidatorKind::Email).required())
        .field(FieldRule::new("password", ValidatorKind::Password).required());
    let errors = rules
        .check(
            ValidatorRegistry::global(),
            &json!({"email": "nobody", "password": "Ab1!"}),
        )
        .unwrap_err();

    insta::assert_snapshot!(errors.to_string(), @r"
    Validation failed with 2 error(s):
      1. [email] invalid_format: Invalid format (params: [expected=email])
      2. [password] min_length: Must be at least 8 characters (params: [min=8, actual=4])
    ");
}

#[test]
fn error_json() {
    let err = Password::new()
        .validate("Abcdefg1")
        .unwrap_err()
        .with_field("password");

    insta::assert_json_snapshot!(err.to_json_value(), @r#"
    {
      "code": "password_missing_special",
      "field": "password",
      "message": "Password must contain a special character",
      "params": {
        "allowed": "!@#$%^&*(),.?\":{}|<>"
      }
    }
    "#);
}

// ============================================================================
// LOGGING
// ============================================================================

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn rejections_are_logged() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let registry = ValidatorRegistry::with_config(&ValidationConfig::default());
        assert_eq!(registry.check("zip", "12345"), None);

        let rules = FormRules::new().field(FieldRule::new("name", ValidatorKind::NonEmptyString));
        assert!(rules.check(&registry, &json!({"name": " "})).is_err());
    });

    let output = logs.contents();
    assert!(output.contains("built validator registry"), "{output}");
    assert!(output.contains("unknown validator name"), "{output}");
    assert!(output.contains("zip"), "{output}");
    assert!(output.contains("form field rejected"), "{output}");
    assert!(output.contains("code=empty"), "{output}");
}
