//! Email address validator.
//!
//! Syntactic check only: no DNS lookup, no mailbox verification.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;
use crate::validators::text::trim_text;

// The local-part class admits a space, so `a b@example.com` passes.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~ -]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$").unwrap()
});

crate::validator! {
    /// Validates email address structure.
    ///
    /// The input is trimmed, then must consist of a local part, `@`, one or
    /// more dot-terminated domain labels and an alphabetic top-level label of
    /// at least two characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::validators::email;
    /// use formcheck_validator::foundation::Validate;
    ///
    /// assert!(email().validate("user@example.com").is_ok());
    /// assert!(email().validate("user@com").is_err());
    /// ```
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(trim_text(input)) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
}
