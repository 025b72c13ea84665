// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # By-Value Boundary Arithmetic
//!
//! Checked and saturating addition/subtraction traits for integer primitives.
//! Range boundaries live right next to the limits of their domain (a range
//! may end at `T::MAX`), so every `± 1` applied to a bound goes through one of
//! these traits instead of the raw operators.
//!
//! - Checked operations return `None` when the result would leave the domain.
//! - Saturating operations clamp to `T::MIN` / `T::MAX`.
//!
//! Both take their operands by value, which keeps generic call sites free of
//! the reference juggling that the `num_traits` equivalents require.

use core::ops::{Add, Sub};

/// Checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::num::ops::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(100), None);
/// assert_eq!(a.checked_add_val(55), Some(255));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition, returning `None` on overflow.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::num::ops::CheckedSubVal;
/// let a: i8 = -100;
/// assert_eq!(a.checked_sub_val(29), None);
/// assert_eq!(a.checked_sub_val(28), Some(-128));
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction, returning `None` on underflow.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Saturating addition by value.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::num::ops::SaturatingAddVal;
/// let a: i8 = 120;
/// assert_eq!(a.saturating_add_val(10), 127);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition, clamping at the upper bound of the type.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::num::ops::SaturatingSubVal;
/// let a: u16 = 3;
/// assert_eq!(a.saturating_sub_val(10), 0);
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction, clamping at the lower bound of the type.
    fn saturating_sub_val(self, v: Self) -> Self;
}

macro_rules! impl_boundary_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_sub(self, v)
                }
            }

            impl SaturatingAddVal for $t {
                #[inline(always)]
                fn saturating_add_val(self, v: $t) -> $t {
                    <$t>::saturating_add(self, v)
                }
            }

            impl SaturatingSubVal for $t {
                #[inline(always)]
                fn saturating_sub_val(self, v: $t) -> $t {
                    <$t>::saturating_sub(self, v)
                }
            }
        )*
    };
}

impl_boundary_ops!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);
