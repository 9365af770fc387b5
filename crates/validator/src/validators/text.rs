//! Non-empty text validator.

use crate::foundation::ValidationError;

/// Byte order mark; not Unicode `White_Space`, but stripped from form text.
const BOM: char = '\u{FEFF}';

/// Trims whitespace and byte order marks from both ends.
pub(crate) fn trim_text(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

crate::validator! {
    /// Validates that a string contains something other than whitespace.
    ///
    /// Leading and trailing whitespace (and U+FEFF) is ignored, so `"   "` is
    /// rejected and `"  a  "` is accepted.
    pub NonEmpty for str;
    rule(input) { !trim_text(input).is_empty() }
    error(input) { ValidationError::new("empty", "Value must not be empty") }
    fn non_empty();
}
