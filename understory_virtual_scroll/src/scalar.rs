// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric scalar abstraction for sizes, offsets, and scroll positions.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Sub};
use core::str::FromStr;

/// Floating-point scalar used for item sizes, container sizes, and scroll positions.
///
/// Implemented for `f32` and `f64`. All values live in a caller-chosen 1D
/// coordinate space (typically logical pixels).
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Convert a `usize` count into the scalar type.
    fn from_usize(n: usize) -> Self;

    /// Max of the two scalar values.
    fn max(self, other: Self) -> Self;

    /// Returns `true` if the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// `percent` percent of `whole`.
    #[inline]
    fn percent_of(percent: Self, whole: Self) -> Self {
        percent / Self::from_usize(100) * whole
    }
}

impl Scalar for f32 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn from_usize(n: usize) -> Self {
        n as Self
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn from_usize(n: usize) -> Self {
        n as Self
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn percent_of_scales_linearly() {
        assert_eq!(<f64 as Scalar>::percent_of(50.0, 300.0), 150.0);
        assert_eq!(<f32 as Scalar>::percent_of(10.0, 200.0), 20.0);
        assert_eq!(<f64 as Scalar>::percent_of(0.0, 300.0), 0.0);
    }

    #[test]
    fn max_and_finiteness_follow_float_semantics() {
        assert_eq!(Scalar::max(-1.0_f32, 0.0), 0.0);
        assert_eq!(Scalar::max(3.0_f64, 2.0), 3.0);
        assert!(Scalar::is_finite(-0.0_f64));
        assert!(!Scalar::is_finite(f32::NAN));
    }
}
