//! Testing utilities for guard clauses
//!
//! Assertion macros for the `Result` returned by a terminal call, and
//! property-based testing support behind the `proptest` feature.
//!
//! # Example
//!
//! ```rust
//! use fluent_guard::{assert_guard_fails, assert_guard_kind, assert_guard_passes};
//! use fluent_guard::{ErrorKind, Validate};
//!
//! assert_guard_passes!(Validate::that("n", 5).is_positive().otherwise_throw_exception());
//! assert_guard_fails!(Validate::that("n", 5).is_negative().otherwise_throw_exception());
//! assert_guard_kind!(
//!     Validate::that("s", "").is_not_null_or_empty().otherwise_throw_exception(),
//!     ErrorKind::Argument
//! );
//! ```

/// Assert that a guard chain passed.
///
/// Panics with the failure if the result is `Err`.
///
/// # Example
///
/// ```rust
/// use fluent_guard::{assert_guard_passes, Validate};
///
/// assert_guard_passes!(Validate::that("n", 3).is_less_than(4).otherwise_throw_exception());
/// ```
#[macro_export]
macro_rules! assert_guard_passes {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(()) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected guard to pass, got failure: {}", e);
            }
        }
    };
}

/// Assert that a guard chain failed.
///
/// # Example
///
/// ```rust
/// use fluent_guard::{assert_guard_fails, Validate};
///
/// assert_guard_fails!(Validate::that("n", 3).is_less_than(2).otherwise_throw_exception());
/// ```
#[macro_export]
macro_rules! assert_guard_fails {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Err(_) => {}
            ::std::result::Result::Ok(()) => {
                panic!("Expected guard to fail, got success");
            }
        }
    };
}

/// Assert that a guard chain failed with a specific [`ErrorKind`](crate::ErrorKind).
///
/// # Example
///
/// ```rust
/// use fluent_guard::{assert_guard_kind, ErrorKind, Validate};
///
/// assert_guard_kind!(
///     Validate::that("n", None::<u8>).is_not_null().otherwise_throw_exception(),
///     ErrorKind::Null
/// );
/// ```
#[macro_export]
macro_rules! assert_guard_kind {
    ($result:expr, $kind:expr) => {
        match $result {
            ::std::result::Result::Err(e) => {
                assert_eq!($crate::GuardError::kind(&e), $kind, "unexpected failure: {}", e);
            }
            ::std::result::Result::Ok(()) => {
                panic!("Expected guard to fail with {:?}, got success", $kind);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{ErrorKind, GuardError, Mode};

#[cfg(feature = "proptest")]
impl Arbitrary for Mode {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(Mode::And), Just(Mode::Or)].boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for ErrorKind {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(ErrorKind::ALL.to_vec()).boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for GuardError {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (any::<ErrorKind>(), "[a-z_]{1,12}", "must [a-z ]{0,24}")
            .prop_map(|(kind, parameter, message)| match kind {
                ErrorKind::Null => GuardError::null(parameter, message),
                ErrorKind::Equality => GuardError::equality(parameter, message),
                ErrorKind::Type => GuardError::type_mismatch(parameter, message),
                ErrorKind::Range => GuardError::range(parameter, message),
                ErrorKind::Argument => GuardError::argument(parameter, message),
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, GuardError, Validate};

    #[test]
    fn assert_guard_passes_macro() {
        assert_guard_passes!(Validate::that("n", 1).is_positive().otherwise_throw_exception());
    }

    #[test]
    fn assert_guard_fails_macro() {
        assert_guard_fails!(Validate::that("n", 1).is_negative().otherwise_throw_exception());
    }

    #[test]
    fn assert_guard_kind_macro() {
        let result: Result<(), GuardError> = Err(GuardError::range("n", "must be small"));
        assert_guard_kind!(result, ErrorKind::Range);
    }

    #[test]
    #[should_panic(expected = "Expected guard to pass")]
    fn assert_guard_passes_panics_on_failure() {
        assert_guard_passes!(Validate::that("n", 1).is_negative().otherwise_throw_exception());
    }

    #[test]
    #[should_panic(expected = "Expected guard to fail")]
    fn assert_guard_fails_panics_on_success() {
        assert_guard_fails!(Validate::that("n", 1).is_positive().otherwise_throw_exception());
    }

    #[test]
    #[should_panic(expected = "unexpected failure")]
    fn assert_guard_kind_panics_on_other_kind() {
        let result: Result<(), GuardError> = Err(GuardError::null("n", "must not be null"));
        assert_guard_kind!(result, ErrorKind::Range);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{ErrorKind, GuardError, Mode};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn error_kind_arbitrary_is_listed(kind in any::<ErrorKind>()) {
                prop_assert!(ErrorKind::ALL.contains(&kind));
            }

            #[test]
            fn mode_arbitrary_is_valid(mode in any::<Mode>()) {
                prop_assert!(matches!(mode, Mode::And | Mode::Or));
            }

            #[test]
            fn guard_error_display_names_parameter(err in any::<GuardError>()) {
                let rendered = err.to_string();
                let prefix = format!("argument `{}` ", err.parameter());
                prop_assert!(rendered.starts_with(&prefix));
                prop_assert!(rendered.ends_with(err.message()));
            }
        }
    }
}
