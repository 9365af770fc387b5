//! ISO 8601 calendar date validator (`YYYY-MM-DD`).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::foundation::{Validate, ValidationError, ValidationResult};

static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap());

/// Validates `YYYY-MM-DD` date strings.
///
/// Both the exact lexical shape and the calendar must agree: `2024-02-29`
/// is accepted, `2023-02-29`, `2024-13-01` and `2024-04-31` are not. Time
/// components, other separators and surrounding whitespace are rejected.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::IsoDate;
/// use formcheck_validator::foundation::Validate;
///
/// assert!(IsoDate.validate("2024-02-29").is_ok());
/// assert!(IsoDate.validate("2023-02-29").is_err());
/// assert!(IsoDate.validate("2024-02-29T00:00:00Z").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsoDate;

impl IsoDate {
    /// Creates a new ISO date validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses a validated string into a calendar date.
    ///
    /// Returns the same errors as [`Validate::validate`].
    pub fn parse(input: &str) -> ValidationResult<NaiveDate> {
        let format_error = || {
            ValidationError::new("invalid_date_format", "Date must be in YYYY-MM-DD format")
                .with_param("expected", "YYYY-MM-DD")
        };

        let captures = ISO_DATE_REGEX.captures(input).ok_or_else(format_error)?;
        let field = |i: usize| captures[i].parse::<u32>().map_err(|_| format_error());

        let year = i32::try_from(field(1)?).map_err(|_| format_error())?;
        let month = field(2)?;
        let day = field(3)?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ValidationError::new(
                "invalid_calendar_date",
                format!("{input} is not a real calendar date"),
            )
            .with_param("year", year.to_string())
            .with_param("month", month.to_string())
            .with_param("day", day.to_string())
        })
    }
}

impl Validate for IsoDate {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        Self::parse(input).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dates() {
        assert!(IsoDate.validate("2024-01-31").is_ok());
        assert!(IsoDate.validate("2024-02-29").is_ok());
        assert!(IsoDate.validate("2000-02-29").is_ok());
        assert!(IsoDate.validate("1999-12-31").is_ok());
        assert!(IsoDate.validate("0001-01-01").is_ok());
    }

    #[test]
    fn test_calendar_overflow() {
        for input in [
            "2023-02-29",
            "1900-02-29",
            "2024-13-01",
            "2024-00-10",
            "2024-04-31",
            "2024-01-32",
            "2024-01-00",
        ] {
            let err = IsoDate.validate(input).unwrap_err();
            assert_eq!(err.code, "invalid_calendar_date", "{input}");
        }
    }

    #[test]
    fn test_lexical_shape() {
        for input in [
            "",
            "2024-2-29",
            "24-02-29",
            "2024/02/29",
            "2024-02-29T10:00:00",
            " 2024-02-29",
            "2024-02-29 ",
            "20240229",
            "２０２４-02-29",
        ] {
            let err = IsoDate.validate(input).unwrap_err();
            assert_eq!(err.code, "invalid_date_format", "{input:?}");
        }
    }

    #[test]
    fn test_parse_returns_date() {
        let date = IsoDate::parse("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
