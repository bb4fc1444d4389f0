//! Link between two checks, and the end of a chain

use super::{Mode, Validator};
use crate::error::GuardError;

/// Returned by every check.
///
/// `and()` / `or()` pick the mode for the next check and hand the validator
/// back. The `otherwise_*` calls end the chain and turn a pending failure
/// into an `Err`.
#[derive(Debug)]
#[must_use = "a failed check is only reported by an `otherwise_*` call"]
pub struct Linkage<'a, T> {
    validator: &'a mut Validator<T>,
}

impl<'a, T> Linkage<'a, T> {
    pub(crate) fn new(validator: &'a mut Validator<T>) -> Self {
        Self { validator }
    }

    /// The next check is skipped if a failure is already pending.
    pub fn and(self) -> &'a mut Validator<T> {
        self.validator.set_mode(Mode::And);
        self.validator
    }

    /// The next check clears the pending failure if it passes.
    pub fn or(self) -> &'a mut Validator<T> {
        self.validator.set_mode(Mode::Or);
        self.validator
    }

    /// The failure a terminal call would report, if any.
    pub fn pending(&self) -> Option<&GuardError> {
        self.validator.pending()
    }

    /// Return the pending failure as `Err`, or `Ok(())` when nothing failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_guard::{ErrorKind, Validate};
    ///
    /// let result = Validate::that("name", "")
    ///     .is_not_null_or_empty()
    ///     .otherwise_throw_exception();
    /// assert_eq!(result.unwrap_err().kind(), ErrorKind::Argument);
    /// ```
    pub fn otherwise_throw_exception(self) -> Result<(), GuardError> {
        match self.validator.take_pending() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Return `error` instead of the built-in failure, only if something failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_guard::Validate;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct TooYoung;
    ///
    /// let result = Validate::that("age", 15).is_greater_than_or_equal_to(18).otherwise_throw(TooYoung);
    /// assert_eq!(result, Err(TooYoung));
    ///
    /// let result = Validate::that("age", 21).is_greater_than_or_equal_to(18).otherwise_throw(TooYoung);
    /// assert_eq!(result, Ok(()));
    /// ```
    pub fn otherwise_throw<E>(self, error: E) -> Result<(), E> {
        match self.validator.take_pending() {
            Some(_) => Err(error),
            None => Ok(()),
        }
    }

    /// Map the pending failure into the caller's error type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_guard::Validate;
    ///
    /// let result: Result<(), String> = Validate::that("limit", 0u32)
    ///     .is_positive()
    ///     .otherwise_throw_with(|err| format!("bad request: {err}"));
    /// assert_eq!(result.unwrap_err(), "bad request: argument `limit` must be positive");
    /// ```
    pub fn otherwise_throw_with<E, F>(self, f: F) -> Result<(), E>
    where
        F: FnOnce(GuardError) -> E,
    {
        self.otherwise_throw_exception().map_err(f)
    }

    /// Panic with the pending failure.
    ///
    /// For preconditions whose violation is a bug in the caller.
    ///
    /// # Panics
    ///
    /// Panics if a failure is pending.
    #[track_caller]
    pub fn otherwise_panic(self) {
        if let Err(err) = self.otherwise_throw_exception() {
            panic!("{err}");
        }
    }
}
