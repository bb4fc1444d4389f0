//! Identity and runtime type checks
//!
//! The type checks need a value to inspect. Calling one on a null reference
//! is a misuse of the guard, so it returns `Err(GuardError::Null)` at once,
//! before the pending failure or the mode are looked at.

use std::any::{type_name, Any, TypeId};

use super::{Linkage, Validator};
use crate::error::GuardError;
use crate::strategy::reference::{inherits, same_instance};
use crate::strategy::{Introspect, Reference};

impl<R: Reference> Validator<R> {
    /// Value must point at the same instance as `other`. Two nulls match.
    ///
    /// Identity is by address, so two values of a zero-sized type always
    /// match.
    pub fn is_same_instance_as(&mut self, other: &R) -> Linkage<'_, R> {
        self.check(
            |value| same_instance(value, other),
            |name, _| GuardError::equality(name, "must be the same instance as the reference value"),
        )
    }

    /// Value's runtime type must be exactly `U`.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Null`] immediately if the value is null.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use fluent_guard::{strategy::Introspect, ErrorKind, Validate};
    ///
    /// struct Circle;
    /// struct Square;
    /// fluent_guard::introspect!(Circle);
    /// fluent_guard::introspect!(Square);
    ///
    /// let shape: Arc<dyn Introspect> = Arc::new(Circle);
    /// let err = Validate::that("shape", shape)
    ///     .is_of_type::<Square>()?
    ///     .otherwise_throw_exception()
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    ///
    /// let missing: Option<Arc<dyn Introspect>> = None;
    /// let err = Validate::that("shape", missing).is_of_type::<Circle>().err();
    /// assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Null));
    /// # Ok::<(), fluent_guard::GuardError>(())
    /// ```
    pub fn is_of_type<U: Any>(&mut self) -> Result<Linkage<'_, R>, GuardError> {
        self.require_target("is_of_type")?;
        Ok(self.check(
            |value| value.target().is_some_and(|t| t.as_any().is::<U>()),
            |name, _| GuardError::type_mismatch(name, format!("must be of type {}", type_name::<U>())),
        ))
    }

    /// Value's type must implement the interface `I`, given as `dyn Trait`.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Null`] immediately if the value is null.
    pub fn implements_interface<I: ?Sized + Any>(&mut self) -> Result<Linkage<'_, R>, GuardError> {
        self.require_target("implements_interface")?;
        Ok(self.check(
            |value| {
                value
                    .target()
                    .is_some_and(|t| t.implements(TypeId::of::<I>()))
            },
            |name, _| GuardError::type_mismatch(name, format!("must implement {}", type_name::<I>())),
        ))
    }

    /// Value's type must be `U` or declare `U` as a base type.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Null`] immediately if the value is null.
    pub fn inherits_type<U: Any>(&mut self) -> Result<Linkage<'_, R>, GuardError> {
        self.require_target("inherits_type")?;
        Ok(self.check(
            |value| value.target().is_some_and(inherits::<R::Target, U>),
            |name, _| GuardError::type_mismatch(name, format!("must inherit from {}", type_name::<U>())),
        ))
    }

    fn require_target(&self, operation: &str) -> Result<(), GuardError> {
        match self.value.target() {
            Some(_) => Ok(()),
            None => Err(GuardError::null(
                self.name.as_str(),
                format!("must not be null for `{operation}`"),
            )),
        }
    }
}
