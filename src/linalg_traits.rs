// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::{Float, One, Zero};

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::ScalarOperand;

/// Elements that support linear algebra operations.
///
/// `'static` for type-based specialization, `Copy` so that they don't need move
/// semantics or destructors, and the rest are numerical traits.
pub trait LinalgScalar:
    'static
    + Copy
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl<T> LinalgScalar for T where
    T: 'static
        + Copy
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}

/// Floating-point element types `f32` and `f64`.
///
/// Trait `VecFloat` is only implemented for `f32` and `f64` but encompasses
/// the traits needed by the norms, by `all_finite`, and by *right hand side*
/// scalar operations (`ScalarOperand`).
///
/// This trait can only be implemented by `f32` and `f64`.
pub trait VecFloat:
    Float
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + fmt::Display
    + fmt::Debug
    + fmt::LowerExp
    + fmt::UpperExp
    + ScalarOperand
    + LinalgScalar
    + MaxMin
    + Default
    + Send
    + Sync
{
}

impl VecFloat for f32 {}
impl VecFloat for f64 {}

/// Elementwise maximum and minimum, as used by `cwise_max` / `cwise_min`
/// and `norm_inf`.
///
/// Floating point types use the IEEE 754 `maxNum` / `minNum` semantics of
/// [`f64::max`]: when exactly one operand is NaN, the other operand is
/// returned. All other types use their total order ([`Ord::max`]).
pub trait MaxMin: Sized {
    /// Return the larger of `self` and `other`.
    fn max_elem(self, other: Self) -> Self;
    /// Return the smaller of `self` and `other`.
    fn min_elem(self, other: Self) -> Self;
}

macro_rules! impl_max_min_float {
    ($($t:ty),*) => {$(
        impl MaxMin for $t {
            #[inline]
            fn max_elem(self, other: Self) -> Self {
                self.max(other)
            }
            #[inline]
            fn min_elem(self, other: Self) -> Self {
                self.min(other)
            }
        }
    )*};
}

macro_rules! impl_max_min_ord {
    ($($t:ty),*) => {$(
        impl MaxMin for $t {
            #[inline]
            fn max_elem(self, other: Self) -> Self {
                Ord::max(self, other)
            }
            #[inline]
            fn min_elem(self, other: Self) -> Self {
                Ord::min(self, other)
            }
        }
    )*};
}

impl_max_min_float!(f32, f64);
impl_max_min_ord!(bool, i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

#[cfg(test)]
mod tests {
    use super::MaxMin;

    #[test]
    fn float_nan_does_not_propagate() {
        assert_eq!(f64::NAN.max_elem(1.), 1.);
        assert_eq!(1f64.max_elem(f64::NAN), 1.);
        assert_eq!(f32::NAN.min_elem(-2.), -2.);
        assert!(f64::NAN.max_elem(f64::NAN).is_nan());
    }

    #[test]
    fn total_order() {
        assert_eq!(3i32.max_elem(-7), 3);
        assert_eq!(3u8.min_elem(7), 3);
        assert!(true.max_elem(false));
        assert!(!true.min_elem(false));
    }
}
