//! URL validator.
//!
//! Parsing follows the WHATWG URL standard via the `url` crate. Whether a
//! scheme is mandatory is an explicit option rather than something inferred
//! from the host environment.

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

/// Scheme assumed for scheme-less input when schemes are optional.
const FALLBACK_SCHEME: &str = "http";

// ============================================================================
// OPTIONS
// ============================================================================

/// URL validation options.
///
/// Deserializes from camelCase keys, e.g. `{"requireScheme": false}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlOptions {
    /// Reject input without a scheme (`example.com/path`). Defaults to `true`.
    pub require_scheme: bool,
}

impl UrlOptions {
    /// Options that accept scheme-less input.
    #[must_use]
    pub fn scheme_optional() -> Self {
        Self {
            require_scheme: false,
        }
    }
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            require_scheme: true,
        }
    }
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

/// Validates absolute URLs.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::{Url, UrlOptions};
/// use formcheck_validator::foundation::Validate;
///
/// assert!(Url::new().validate("https://example.com/path?q=1").is_ok());
/// assert!(Url::new().validate("example.com/path").is_err());
///
/// let lenient = Url::with_options(UrlOptions::scheme_optional());
/// assert!(lenient.validate("example.com/path").is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Url {
    options: UrlOptions,
}

impl Url {
    /// Creates a validator that requires a scheme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator from options.
    #[must_use]
    pub fn with_options(options: UrlOptions) -> Self {
        Self { options }
    }

    /// Sets whether a scheme is required.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_scheme(mut self, require: bool) -> Self {
        self.options.require_scheme = require;
        self
    }

    /// Returns the options in effect.
    #[must_use]
    pub fn options(&self) -> &UrlOptions {
        &self.options
    }
}

fn parse_error(err: ::url::ParseError) -> ValidationError {
    ValidationError::new("invalid_url", format!("Invalid URL: {err}"))
        .with_param("reason", err.to_string())
}

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match ::url::Url::parse(input) {
            Ok(_) => Ok(()),
            Err(::url::ParseError::RelativeUrlWithoutBase) if self.options.require_scheme => {
                Err(ValidationError::new(
                    "url_missing_scheme",
                    "URL must include a scheme such as https://",
                ))
            }
            Err(::url::ParseError::RelativeUrlWithoutBase) => {
                // Path, query or fragment alone has no authority to put after the scheme.
                if input.starts_with(['/', '\\', '?', '#']) {
                    return Err(parse_error(::url::ParseError::EmptyHost));
                }
                ::url::Url::parse(&format!("{FALLBACK_SCHEME}://{input}"))
                    .map(|_| ())
                    .map_err(parse_error)
            }
            Err(err) => Err(parse_error(err)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
