//! Macros for creating validators with minimal boilerplate.
//!
//! ```rust,ignore
//! use formcheck_validator::validator;
//! use formcheck_validator::foundation::ValidationError;
//!
//! validator! {
//!     /// Rejects strings containing a NUL byte.
//!     pub NoNul for str;
//!     rule(input) { !input.contains('\0') }
//!     error(input) { ValidationError::new("nul", "must not contain NUL") }
//!     fn no_nul();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a zero-sized validator: struct definition, `Validate`
/// implementation and an optional `const` factory function.
///
/// `#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]` is always
/// applied. The `rule` block returns `true` for valid input; the `error`
/// block builds the [`ValidationError`](crate::foundation::ValidationError)
/// reported otherwise.
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &Self::Input,
            ) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    crate::validator! {
        /// Test-only validator.
        NoNul for str;
        rule(input) { !input.contains('\0') }
        error(input) { ValidationError::new("nul", format!("{} bytes with NUL", input.len())) }
        fn no_nul();
    }

    #[test]
    fn test_generated_validator() {
        assert!(no_nul().validate("abc").is_ok());
        let err = NoNul.validate("a\0").unwrap_err();
        assert_eq!(err.code, "nul");
        assert_eq!(err.message, "2 bytes with NUL");
    }

    #[test]
    fn test_generated_derives() {
        assert_eq!(NoNul::default(), no_nul());
    }
}
