//! Element capabilities for set members.
//!
//! Sets in this crate hold fixed scalar primitives only: signed and unsigned
//! integers of every width, `f32`, `f64`, and `String`. [`Element`] gives each
//! of them value equality plus a strict total order, and [`Numeric`] adds the
//! accumulator used by [`OrderedSet::sum`](crate::set::OrderedSet::sum).
//!
//! Both traits are sealed.
//!
//! # Ordering of floats
//!
//! Floats are ordered with `total_cmp`, so sorting never fails on `NaN`.
//! Equality stays `==`: `-0.0` and `0.0` are equal elements, and `NaN` is
//! never equal to anything.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use treje::element::Element;
//!
//! assert_eq!(3_i8.compare(&5), Ordering::Less);
//! assert_eq!(f64::NAN.compare(&1.0), Ordering::Greater);
//! assert_eq!("b".to_string().compare(&"a".to_string()), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::Add;

mod private {
    pub trait Sealed {}
}

/// A scalar value that can be stored in a set.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`,
/// `u64`, `usize`, `f32`, `f64` and `String`.
pub trait Element: Clone + PartialEq + Debug + Display + private::Sealed {
    /// Compares two elements under a strict total order.
    ///
    /// Integers compare by magnitude, strings lexicographically, and floats
    /// with `total_cmp`.
    fn compare(&self, other: &Self) -> Ordering;
}

/// A numeric element that can be summed.
pub trait Numeric: Element + Copy {
    /// The accumulator every element is widened into before adding.
    type Total: Copy + Default + Add<Output = Self::Total> + PartialEq + Debug;

    /// Widens the element into the accumulator type.
    fn widen(self) -> Self::Total;
}

macro_rules! impl_integer_element {
    ($($element:ty),* $(,)?) => {
        $(
            impl private::Sealed for $element {}

            impl Element for $element {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }

            impl Numeric for $element {
                type Total = i128;

                #[inline]
                fn widen(self) -> i128 {
                    i128::from(self)
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($element:ty),* $(,)?) => {
        $(
            impl private::Sealed for $element {}

            impl Element for $element {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }

            impl Numeric for $element {
                type Total = f64;

                #[inline]
                fn widen(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

impl_integer_element!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_float_element!(f32, f64);

// `i128` has no `From<isize>` or `From<usize>`; both casts are lossless on
// every supported target.
impl private::Sealed for isize {}

impl Element for isize {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Numeric for isize {
    type Total = i128;

    #[inline]
    fn widen(self) -> i128 {
        self as i128
    }
}

impl private::Sealed for usize {}

impl Element for usize {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Numeric for usize {
    type Total = i128;

    #[inline]
    fn widen(self) -> i128 {
        self as i128
    }
}

impl private::Sealed for String {}

impl Element for String {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::less(-3_i64, 7, Ordering::Less)]
    #[case::equal(7, 7, Ordering::Equal)]
    #[case::greater(i64::MAX, i64::MIN, Ordering::Greater)]
    fn test_integer_compare(#[case] left: i64, #[case] right: i64, #[case] expected: Ordering) {
        assert_eq!(left.compare(&right), expected);
    }

    #[rstest]
    fn test_float_compare_places_nan_last() {
        assert_eq!(f32::NAN.compare(&f32::INFINITY), Ordering::Greater);
        assert_eq!(1.5_f64.compare(&f64::NAN), Ordering::Less);
    }

    #[rstest]
    fn test_float_compare_orders_signed_zero() {
        assert_eq!((-0.0_f64).compare(&0.0), Ordering::Less);
        assert!(-0.0_f64 == 0.0);
    }

    #[rstest]
    fn test_string_compare_is_lexicographic() {
        let apple = "apple".to_string();
        let banana = "banana".to_string();
        assert_eq!(apple.compare(&banana), Ordering::Less);
        assert_eq!("Zebra".to_string().compare(&apple), Ordering::Less);
    }

    #[rstest]
    fn test_widen_integers() {
        assert_eq!(u64::MAX.widen(), i128::from(u64::MAX));
        assert_eq!((-128_i8).widen(), -128);
        assert_eq!(usize::MAX.widen(), usize::MAX as i128);
        assert_eq!(isize::MIN.widen(), isize::MIN as i128);
    }

    #[rstest]
    fn test_widen_floats() {
        assert_eq!(2.5_f32.widen(), 2.5_f64);
        assert_eq!((-0.25_f64).widen(), -0.25);
    }
}
