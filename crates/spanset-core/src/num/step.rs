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

//! The unit-steppable integer domain that ranges are built over.

use super::ops::{CheckedAddVal, CheckedSubVal, SaturatingAddVal, SaturatingSubVal};
use num_traits::PrimInt;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};

/// A totally ordered integer domain in which successive values differ by
/// exactly one unit.
///
/// Two ranges over such a domain are contiguous when nothing lies strictly
/// between them, which is what lets `[0, 4]` and `[5, 8]` coalesce.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::num::step::Step;
/// assert_eq!(4i32.successor(), Some(5));
/// assert_eq!(u8::MAX.successor(), None);
/// assert_eq!(0u16.predecessor(), None);
/// ```
pub trait Step:
    PrimInt
    + CheckedAddVal
    + CheckedSubVal
    + SaturatingAddVal
    + SaturatingSubVal
    + FromStr
    + Hash
    + Debug
    + Display
{
    /// The additive identity.
    const ZERO: Self;
    /// The distance between two neighbouring values.
    const UNIT: Self;

    /// The next value in the domain, or `None` at `Self::MAX`.
    #[inline]
    fn successor(self) -> Option<Self> {
        self.checked_add_val(Self::UNIT)
    }

    /// The previous value in the domain, or `None` at `Self::MIN`.
    #[inline]
    fn predecessor(self) -> Option<Self> {
        self.checked_sub_val(Self::UNIT)
    }
}

macro_rules! impl_step_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                const ZERO: Self = 0;
                const UNIT: Self = 1;
            }
        )*
    };
}

impl_step_for!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(<i64 as Step>::ZERO, 0);
        assert_eq!(<u8 as Step>::UNIT, 1);
    }

    #[test]
    fn test_successor_and_predecessor() {
        assert_eq!((-1i32).successor(), Some(0));
        assert_eq!(0i32.predecessor(), Some(-1));
        assert_eq!(i64::MAX.successor(), None);
        assert_eq!(i64::MIN.predecessor(), None);
        assert_eq!(usize::MIN.predecessor(), None);
    }
}
