//! The chaining validator
//!
//! A [`Validator`] holds one parameter (name and value), at most one pending
//! [`GuardError`], and the [`Mode`] that decides how the next check combines
//! with what came before. Each check returns a [`Linkage`]; the linkage either
//! sets the mode for the next check (`and()` / `or()`) or ends the chain.
//!
//! # Combination rules
//!
//! - Under [`Mode::And`], once a failure is pending every later check is
//!   skipped. The first failure is the one reported.
//! - Under [`Mode::Or`], a passing check clears the pending failure and a
//!   failing one leaves it as it is. The chain fails only if every branch
//!   fails, and then the first branch's failure is kept.
//! - Nothing is reported until a terminal call. A chain without one never
//!   fails.
//!
//! ```
//! use fluent_guard::{ErrorKind, Validate};
//!
//! // 5 is not > 10, and the `< 3` check is never evaluated
//! let err = Validate::that("n", 5)
//!     .is_greater_than(10)
//!     .and()
//!     .is_less_than(3)
//!     .otherwise_throw_exception()
//!     .unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Range);
//! assert_eq!(err.message(), "must be greater than 10");
//!
//! // 5 is not < 3, but 5 > 4 forgives it
//! assert!(Validate::that("n", 5)
//!     .is_less_than(3)
//!     .or()
//!     .is_greater_than(4)
//!     .otherwise_throw_exception()
//!     .is_ok());
//! ```

mod boolean;
mod linkage;
mod nullable;
mod ordering;
mod reference;
mod text;

use std::fmt;

use crate::error::GuardError;
use crate::strategy::Predicate;

pub use linkage::Linkage;

/// How the next check combines with the pending state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// A pending failure sticks and later checks are skipped.
    #[default]
    And,
    /// A passing check clears the pending failure.
    Or,
}

/// A guard over one named parameter.
///
/// Checks are only defined where the parameter type supports them; see
/// [`strategy`](crate::strategy) for the capability traits.
#[derive(Debug, Clone)]
#[must_use = "a guard reports nothing until a check ends in an `otherwise_*` call"]
pub struct Validator<T> {
    name: String,
    value: T,
    pending: Option<GuardError>,
    mode: Mode,
}

impl<T> Validator<T> {
    /// Create a validator for `value`, reported as `name`.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
            pending: None,
            mode: Mode::And,
        }
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mode applied to the next check.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The failure a terminal call would report, if any.
    pub fn pending(&self) -> Option<&GuardError> {
        self.pending.as_ref()
    }

    /// Returns true if a failure is pending.
    pub fn is_failing(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the validator and return the parameter value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Check the value against a caller-supplied predicate.
    ///
    /// `description` completes the sentence "argument `name` must ...".
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_guard::{ErrorKind, Validate};
    ///
    /// let err = Validate::that("port", 8080u16)
    ///     .satisfies(|p: &u16| p % 2 == 0, "be even")
    ///     .otherwise_throw_exception();
    /// assert!(err.is_ok());
    ///
    /// let err = Validate::that("port", 8081u16)
    ///     .satisfies(|p: &u16| *p < 1024, "be a privileged port")
    ///     .otherwise_throw_exception()
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Argument);
    /// assert_eq!(err.message(), "must be a privileged port");
    /// ```
    pub fn satisfies<P>(&mut self, predicate: P, description: &str) -> Linkage<'_, T>
    where
        P: Predicate<T>,
    {
        self.check(
            |value| predicate.check(value),
            |name, _| GuardError::argument(name, format!("must {description}")),
        )
    }

    /// Apply one check under the current mode.
    ///
    /// `passes` is skipped entirely when an AND failure is already pending;
    /// `failure` runs only when a new failure is recorded.
    pub(crate) fn check<P, F>(&mut self, passes: P, failure: F) -> Linkage<'_, T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&str, &T) -> GuardError,
    {
        if self.mode == Mode::And && self.pending.is_some() {
            return Linkage::new(self);
        }

        if passes(&self.value) {
            if self.mode == Mode::Or {
                self.pending = None;
            }
        } else if self.mode == Mode::And {
            // an OR branch can only keep an earlier failure, never start one
            self.pending = Some(failure(&self.name, &self.value));
        }

        Linkage::new(self)
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Take the pending failure and leave the validator ready for a new chain.
    pub(crate) fn take_pending(&mut self) -> Option<GuardError> {
        self.mode = Mode::And;
        let pending = self.pending.take();

        #[cfg(feature = "tracing")]
        if let Some(err) = &pending {
            tracing::trace!(parameter = %self.name, kind = %err.kind(), "guard failed");
        }

        pending
    }

    /// Point a recycled instance at a new parameter, keeping the name buffer.
    pub(crate) fn rebind(&mut self, name: &str, value: T) {
        self.name.clear();
        self.name.push_str(name);
        self.value = value;
        self.pending = None;
        self.mode = Mode::And;
    }
}

impl<T: Default> Validator<T> {
    /// An unbound instance, as held idle by a pool.
    pub(crate) fn vacant() -> Self {
        Self::new(String::new(), T::default())
    }

    /// Return to the unbound state: empty name, default value, no failure, `And`.
    pub(crate) fn reset(&mut self) {
        self.name.clear();
        self.value = T::default();
        self.pending = None;
        self.mode = Mode::And;
    }
}

impl<T: PartialEq + fmt::Debug> Validator<T> {
    /// Value must equal `other`. Two nulls are equal.
    pub fn is_equal_to(&mut self, other: T) -> Linkage<'_, T> {
        self.check(
            |value| *value == other,
            |name, _| GuardError::equality(name, format!("must be equal to {other:?}")),
        )
    }

    /// Value must differ from `other`.
    pub fn is_not_equal_to(&mut self, other: T) -> Linkage<'_, T> {
        self.check(
            |value| *value != other,
            |name, _| GuardError::equality(name, format!("must not be equal to {other:?}")),
        )
    }
}
