//! Built-in validators
//!
//! One structured validator per field type. Each implements
//! [`Validate<Input = str>`](crate::foundation::Validate) and explains a
//! rejection through a [`ValidationError`](crate::foundation::ValidationError)
//! code:
//!
//! | Validator      | Error codes |
//! |----------------|-------------|
//! | [`NonEmpty`]   | `empty` |
//! | [`Email`]      | `invalid_format` |
//! | [`Password`]   | `min_length`, `password_missing_uppercase`, `password_missing_lowercase`, `password_missing_digit`, `password_missing_special` |
//! | [`Phone`]      | `phone_invalid_chars`, `phone_too_few_digits`, `phone_too_many_digits` |
//! | [`Url`]        | `url_missing_scheme`, `invalid_url` |
//! | [`CreditCard`] | `cc_empty`, `cc_invalid_char`, `cc_invalid_luhn` |
//! | [`IsoDate`]    | `invalid_date_format`, `invalid_calendar_date` |

pub mod credit_card;
pub mod date;
pub mod email;
pub mod password;
pub mod phone;
pub mod text;
pub mod url;

pub use credit_card::{CreditCard, luhn_checksum_valid};
pub use date::IsoDate;
pub use email::{Email, email};
pub use password::{DEFAULT_MIN_LENGTH, Password, PasswordOptions, SPECIAL_CHARS};
pub use phone::Phone;
pub use text::{NonEmpty, non_empty};
pub use url::{Url, UrlOptions};
