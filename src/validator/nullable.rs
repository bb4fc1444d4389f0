//! Null checks
//!
//! `Option<T>` is the nullable form of any parameter type.

use super::{Linkage, Validator};
use crate::error::GuardError;

impl<T> Validator<Option<T>> {
    /// Value must be `None`.
    pub fn is_null(&mut self) -> Linkage<'_, Option<T>> {
        self.check(Option::is_none, |name, _| {
            GuardError::argument(name, "must be null")
        })
    }

    /// Value must be `Some`.
    pub fn is_not_null(&mut self) -> Linkage<'_, Option<T>> {
        self.check(Option::is_some, |name, _| {
            GuardError::null(name, "must not be null")
        })
    }
}
