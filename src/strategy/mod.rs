//! Comparison strategies
//!
//! A value type opts into a family of checks by implementing the matching
//! capability trait. The [`Validator`](crate::Validator) methods for a family
//! are only defined when the parameter type carries the capability, so an
//! ordering check on a `String` or a sign check on a `bool` is a compile
//! error rather than a runtime surprise.
//!
//! | capability       | checks                                     | implemented for                     |
//! |------------------|--------------------------------------------|-------------------------------------|
//! | `PartialEq`      | equality, inequality                       | anything comparable                 |
//! | [`Orderable`]    | `<`, `<=`, `>`, `>=`, between              | numbers, durations, instants, dates |
//! | [`SignTestable`] | positive, negative, and their negations    | numbers                             |
//! | [`TextOperable`] | empty/whitespace, prefix, suffix, contains | strings                             |
//! | [`Truthy`]       | true, false                                | `bool`                              |
//! | [`Reference`]    | identity, runtime type, interface, base    | `&T`, `Box`, `Rc`, `Arc`            |
//!
//! `Option<T>` inherits each capability of `T` with null-aware semantics:
//! `None` is not ordered against anything, is neither positive nor negative,
//! has no text and no truth value, and is a null reference.
//!
//! Every strategy is a pure function of its inputs.

mod number;
pub(crate) mod reference;
mod text;
mod time;

use std::cmp::Ordering;

pub use reference::{Introspect, Reference};

/// Values with a natural order.
///
/// `compare` returns `None` when the two values cannot be ordered (a null
/// side, or a NaN). Every ordering check fails on `None`.
///
/// ```compile_fail
/// use fluent_guard::Validate;
///
/// // strings have no ordering checks
/// let _ = Validate::that("name", String::from("b")).is_greater_than(String::from("a"));
/// ```
///
/// ```compile_fail
/// use fluent_guard::Validate;
///
/// // neither do booleans
/// let _ = Validate::that("flag", true).is_less_than(false);
/// ```
pub trait Orderable {
    /// Compare `self` against `other`.
    fn compare(&self, other: &Self) -> Option<Ordering>;
}

impl<T: Orderable> Orderable for Option<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Some(a), Some(b)) => a.compare(b),
            _ => None,
        }
    }
}

impl<T: Orderable + ?Sized> Orderable for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Option<Ordering> {
        (**self).compare(*other)
    }
}

/// Values with a sign.
///
/// Zero is neither positive nor negative. So is a null value.
///
/// ```compile_fail
/// use fluent_guard::Validate;
///
/// let _ = Validate::that("flag", true).is_positive();
/// ```
pub trait SignTestable {
    /// Strictly greater than zero.
    fn is_positive(&self) -> bool;

    /// Strictly less than zero.
    fn is_negative(&self) -> bool;
}

impl<T: SignTestable> SignTestable for Option<T> {
    #[inline]
    fn is_positive(&self) -> bool {
        self.as_ref().is_some_and(SignTestable::is_positive)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.as_ref().is_some_and(SignTestable::is_negative)
    }
}

/// Values that expose text.
///
/// ```compile_fail
/// use fluent_guard::Validate;
///
/// let _ = Validate::that("count", 5).starts_with("5");
/// ```
pub trait TextOperable {
    /// The text, or `None` for a null value.
    fn text(&self) -> Option<&str>;
}

impl<T: TextOperable> TextOperable for Option<T> {
    #[inline]
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(TextOperable::text)
    }
}

/// Values with a truth value.
pub trait Truthy {
    /// The truth value, or `None` for a null value.
    fn truth(&self) -> Option<bool>;
}

impl Truthy for bool {
    #[inline]
    fn truth(&self) -> Option<bool> {
        Some(*self)
    }
}

impl Truthy for Option<bool> {
    #[inline]
    fn truth(&self) -> Option<bool> {
        *self
    }
}

/// A caller-supplied check over values of type `T`.
///
/// Closures `Fn(&T) -> bool` implement it, so ad hoc conditions can join a
/// chain through [`Validator::satisfies`](crate::Validator::satisfies).
///
/// # Example
///
/// ```rust
/// use fluent_guard::strategy::Predicate;
///
/// let even = |n: &i32| n % 2 == 0;
/// assert!(even.check(&4));
/// assert!(!even.check(&3));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}
