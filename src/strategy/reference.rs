//! Reference strategies
//!
//! Identity and runtime-type checks need two things from a parameter: a way
//! to reach the referenced value (or learn that it is null), and a way to ask
//! that value about its type. [`Reference`] covers the first for the common
//! pointer types, [`Introspect`] the second.
//!
//! Rust has no class inheritance and no runtime trait lookup, so a type
//! declares the base types it stands in for and the interfaces it implements
//! through [`Introspect`], usually via the [`introspect!`](crate::introspect)
//! macro.

use std::any::{Any, TypeId};
use std::rc::Rc;
use std::sync::Arc;

/// Runtime type information for reference-typed parameters.
///
/// # Example
///
/// ```rust
/// use std::any::TypeId;
/// use fluent_guard::strategy::Introspect;
///
/// trait Speak {}
///
/// struct Animal;
/// struct Dog;
/// impl Speak for Dog {}
///
/// fluent_guard::introspect!(Dog, derives [Animal], implements [dyn Speak]);
///
/// let dog = Dog;
/// assert!(dog.derives_from(TypeId::of::<Animal>()));
/// assert!(dog.implements(TypeId::of::<dyn Speak>()));
/// assert!(dog.as_any().is::<Dog>());
/// ```
pub trait Introspect: Any {
    /// View the value as `dyn Any` for exact type tests.
    fn as_any(&self) -> &dyn Any;

    /// Whether the value's type stands in for `base` (excluding itself).
    fn derives_from(&self, base: TypeId) -> bool {
        let _ = base;
        false
    }

    /// Whether the value's type implements the interface `interface`,
    /// given as `TypeId::of::<dyn Trait>()`.
    fn implements(&self, interface: TypeId) -> bool {
        let _ = interface;
        false
    }
}

impl Introspect for dyn Any {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Introspect for dyn Any + Send + Sync {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Declare [`Introspect`] for a type, listing its base types and interfaces.
///
/// ```rust
/// struct Shape;
/// struct Circle;
/// trait Area {}
///
/// fluent_guard::introspect!(Shape);
/// fluent_guard::introspect!(Circle, derives [Shape], implements [dyn Area]);
/// ```
#[macro_export]
macro_rules! introspect {
    (
        $ty:ty
        $(, derives [$($base:ty),* $(,)?])?
        $(, implements [$($iface:ty),* $(,)?])?
        $(,)?
    ) => {
        impl $crate::strategy::Introspect for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn derives_from(&self, base: ::std::any::TypeId) -> bool {
                let _ = base;
                false $($(|| base == ::std::any::TypeId::of::<$base>())*)?
            }

            fn implements(&self, interface: ::std::any::TypeId) -> bool {
                let _ = interface;
                false $($(|| interface == ::std::any::TypeId::of::<$iface>())*)?
            }
        }
    };
}

/// Pointer-like parameters whose referent can be inspected.
///
/// `None` is the null reference.
pub trait Reference {
    /// The referenced value's type.
    type Target: Introspect + ?Sized;

    /// The referenced value, or `None` when null.
    fn target(&self) -> Option<&Self::Target>;
}

impl<T: Introspect + ?Sized> Reference for &T {
    type Target = T;

    #[inline]
    fn target(&self) -> Option<&T> {
        Some(*self)
    }
}

impl<T: Introspect + ?Sized> Reference for Box<T> {
    type Target = T;

    #[inline]
    fn target(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<T: Introspect + ?Sized> Reference for Rc<T> {
    type Target = T;

    #[inline]
    fn target(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<T: Introspect + ?Sized> Reference for Arc<T> {
    type Target = T;

    #[inline]
    fn target(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<R: Reference> Reference for Option<R> {
    type Target = R::Target;

    #[inline]
    fn target(&self) -> Option<&R::Target> {
        self.as_ref().and_then(Reference::target)
    }
}

/// Whether two references point at the same value. Two nulls are the same.
///
/// Identity is the referent's address. Values of a zero-sized type have no
/// distinct address, so any two of them compare as the same instance.
pub(crate) fn same_instance<R: Reference>(a: &R, b: &R) -> bool {
    match (a.target(), b.target()) {
        (Some(a), Some(b)) => std::ptr::addr_eq(a as *const R::Target, b as *const R::Target),
        (None, None) => true,
        _ => false,
    }
}

/// Exact type, or a declared base type.
pub(crate) fn inherits<T: Introspect + ?Sized, U: Any>(target: &T) -> bool {
    target.as_any().is::<U>() || target.derives_from(TypeId::of::<U>())
}
