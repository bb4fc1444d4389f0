//! Boolean checks

use super::{Linkage, Validator};
use crate::error::GuardError;
use crate::strategy::Truthy;

impl<T: Truthy> Validator<T> {
    /// Value must be `true`. A null value fails.
    pub fn is_true(&mut self) -> Linkage<'_, T> {
        self.check(
            |value| value.truth() == Some(true),
            |name, _| GuardError::argument(name, "must be true"),
        )
    }

    /// Value must be `false`. A null value fails.
    pub fn is_false(&mut self) -> Linkage<'_, T> {
        self.check(
            |value| value.truth() == Some(false),
            |name, _| GuardError::argument(name, "must be false"),
        )
    }
}
