//! Ordering and sign checks

use std::cmp::Ordering;
use std::fmt;

use super::{Linkage, Validator};
use crate::error::GuardError;
use crate::strategy::{Orderable, SignTestable};

impl<T: Orderable + fmt::Debug> Validator<T> {
    /// Value must be strictly greater than `other`.
    pub fn is_greater_than(&mut self, other: T) -> Linkage<'_, T> {
        self.check(
            |value| value.compare(&other) == Some(Ordering::Greater),
            |name, _| GuardError::range(name, format!("must be greater than {other:?}")),
        )
    }

    /// Value must be greater than or equal to `other`.
    pub fn is_greater_than_or_equal_to(&mut self, other: T) -> Linkage<'_, T> {
        self.check(
            |value| matches!(value.compare(&other), Some(Ordering::Greater | Ordering::Equal)),
            |name, _| {
                GuardError::range(
                    name,
                    format!("must be greater than or equal to {other:?}"),
                )
            },
        )
    }

    /// Value must be strictly less than `other`.
    pub fn is_less_than(&mut self, other: T) -> Linkage<'_, T> {
        self.check(
            |value| value.compare(&other) == Some(Ordering::Less),
            |name, _| GuardError::range(name, format!("must be less than {other:?}")),
        )
    }

    /// Value must be less than or equal to `other`.
    pub fn is_less_than_or_equal_to(&mut self, other: T) -> Linkage<'_, T> {
        self.check(
            |value| matches!(value.compare(&other), Some(Ordering::Less | Ordering::Equal)),
            |name, _| {
                GuardError::range(name, format!("must be less than or equal to {other:?}"))
            },
        )
    }

    /// Value must lie in `min..=max`.
    pub fn is_between(&mut self, min: T, max: T) -> Linkage<'_, T> {
        self.check(
            |value| {
                matches!(value.compare(&min), Some(Ordering::Greater | Ordering::Equal))
                    && matches!(value.compare(&max), Some(Ordering::Less | Ordering::Equal))
            },
            |name, _| GuardError::range(name, format!("must be between {min:?} and {max:?}")),
        )
    }
}

impl<T: SignTestable> Validator<T> {
    /// Value must be greater than zero.
    pub fn is_positive(&mut self) -> Linkage<'_, T> {
        self.check(SignTestable::is_positive, |name, _| {
            GuardError::range(name, "must be positive")
        })
    }

    /// Value must be less than zero.
    pub fn is_negative(&mut self) -> Linkage<'_, T> {
        self.check(SignTestable::is_negative, |name, _| {
            GuardError::range(name, "must be negative")
        })
    }

    /// Value must not be greater than zero. A null value passes.
    pub fn is_not_positive(&mut self) -> Linkage<'_, T> {
        self.check(
            |value| !value.is_positive(),
            |name, _| GuardError::range(name, "must not be positive"),
        )
    }

    /// Value must not be less than zero. A null value passes.
    pub fn is_not_negative(&mut self) -> Linkage<'_, T> {
        self.check(
            |value| !value.is_negative(),
            |name, _| GuardError::range(name, "must not be negative"),
        )
    }
}
