//! Numeric strategies
//!
//! Ordering and sign tests for the integer and float primitives:
//! - signed integers: ordered, positive when `> 0`, negative when `< 0`
//! - unsigned integers: ordered, positive when `> 0`, never negative
//! - floats: partially ordered (NaN compares as unordered), NaN has no sign

use super::{Orderable, SignTestable};

// Macro to reduce repetition across the primitive widths
macro_rules! impl_orderable {
    ([$($ty:ty),+]) => {
        $(
            impl Orderable for $ty {
                #[inline]
                fn compare(&self, other: &Self) -> Option<std::cmp::Ordering> {
                    self.partial_cmp(other)
                }
            }
        )+
    };
}

macro_rules! impl_signed {
    ($zero:expr, [$($ty:ty),+]) => {
        $(
            impl SignTestable for $ty {
                #[inline]
                fn is_positive(&self) -> bool {
                    *self > $zero
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    *self < $zero
                }
            }
        )+
    };
}

macro_rules! impl_unsigned {
    ([$($ty:ty),+]) => {
        $(
            impl SignTestable for $ty {
                #[inline]
                fn is_positive(&self) -> bool {
                    *self > 0
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    false
                }
            }
        )+
    };
}

impl_orderable!([i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64]);

impl_signed!(0, [i8, i16, i32, i64, i128, isize]);
impl_signed!(0.0, [f32, f64]);

impl_unsigned!([u8, u16, u32, u64, u128, usize]);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_integer_ordering() {
        assert_eq!(5i32.compare(&10), Some(Ordering::Less));
        assert_eq!(10u64.compare(&10), Some(Ordering::Equal));
        assert_eq!((-1i8).compare(&-2), Some(Ordering::Greater));
    }

    #[test]
    fn test_nan_is_unordered() {
        assert_eq!(f64::NAN.compare(&1.0), None);
        assert_eq!(1.0f32.compare(&f32::NAN), None);
    }

    #[test]
    fn test_signed_sign() {
        assert!(SignTestable::is_positive(&1i32));
        assert!(!SignTestable::is_positive(&0i32));
        assert!(!SignTestable::is_negative(&0i32));
        assert!(SignTestable::is_negative(&-7i128));
    }

    #[test]
    fn test_unsigned_never_negative() {
        assert!(!SignTestable::is_negative(&0u16));
        assert!(!SignTestable::is_negative(&u64::MAX));
        assert!(SignTestable::is_positive(&3usize));
        assert!(!SignTestable::is_positive(&0u8));
    }

    #[test]
    fn test_float_sign() {
        assert!(SignTestable::is_positive(&0.5f64));
        assert!(SignTestable::is_negative(&-0.5f32));
        assert!(!SignTestable::is_negative(&-0.0f64));
        assert!(!SignTestable::is_positive(&-0.0f32));
        assert!(!SignTestable::is_positive(&f64::NAN));
        assert!(!SignTestable::is_negative(&f64::NAN));
    }
}
