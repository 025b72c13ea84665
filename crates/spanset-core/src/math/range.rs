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

use super::error::InvalidRangeError;
use crate::num::step::Step;
use smallvec::SmallVec;
use std::{
    cmp::{max, min},
    iter::FusedIterator,
    ops::{BitAnd, BitOr, RangeInclusive},
};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Bounds<T> {
    lower: T,
    upper: T,
}

/// A closed interval `[lower, upper]` over a unit-steppable integer domain,
/// or the empty range.
///
/// Emptiness is an explicit state rather than an encoding inside the bounds,
/// so every value of `T` (including `T::MIN` and `T::MAX`) can be a bound.
/// Values are immutable; every operation returns a new range.
///
/// # Invariants
///
/// A bounded range always satisfies `lower <= upper`.
///
/// # Ordering
///
/// The empty range sorts before every bounded range; bounded ranges are
/// ordered by `(lower, upper)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedRange<T>
where
    T: Step,
{
    bounds: Option<Bounds<T>>,
}

/// A closed range over `i32`.
pub type ClosedRange32 = ClosedRange<i32>;

/// A closed range over `i64`.
pub type ClosedRange64 = ClosedRange<i64>;

impl<T> ClosedRange<T>
where
    T: Step,
{
    /// Creates the range `[lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics if `upper < lower`. Use [`ClosedRange::try_new`] when the
    /// bounds come from untrusted input, or [`ClosedRange::empty`] for the
    /// empty range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::range::ClosedRange;
    /// let r = ClosedRange::new(0, 9);
    /// assert_eq!(r.size(), 10);
    /// ```
    #[inline]
    pub fn new(lower: T, upper: T) -> Self {
        assert!(
            lower <= upper,
            "Invalid range: upper bound {} is below lower bound {}",
            upper,
            lower
        );
        Self::new_unchecked(lower, upper)
    }

    /// Creates the range `[lower, upper]`, or returns an error if
    /// `upper < lower`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::range::ClosedRange;
    /// assert!(ClosedRange::try_new(3, 3).is_ok());
    /// assert!(ClosedRange::try_new(5, 2).is_err());
    /// ```
    #[inline]
    pub fn try_new(lower: T, upper: T) -> Result<Self, InvalidRangeError<T>> {
        if lower <= upper {
            Ok(Self::new_unchecked(lower, upper))
        } else {
            Err(InvalidRangeError { lower, upper })
        }
    }

    #[inline]
    pub(crate) fn new_unchecked(lower: T, upper: T) -> Self {
        debug_assert!(
            lower <= upper,
            "Invalid range: lower bound must be less than or equal to upper bound"
        );
        Self {
            bounds: Some(Bounds { lower, upper }),
        }
    }

    /// The empty range.
    #[inline]
    pub const fn empty() -> Self {
        Self { bounds: None }
    }

    /// The range holding exactly `value`.
    #[inline]
    pub fn singleton(value: T) -> Self {
        Self::new_unchecked(value, value)
    }

    /// The range covering every value of the domain.
    #[inline]
    pub fn full() -> Self {
        Self::new_unchecked(T::min_value(), T::max_value())
    }

    /// Returns the inclusive lower bound, or `None` for the empty range.
    #[inline]
    pub fn lower(&self) -> Option<T> {
        self.bounds.map(|b| b.lower)
    }

    /// Returns the inclusive upper bound, or `None` for the empty range.
    #[inline]
    pub fn upper(&self) -> Option<T> {
        self.bounds.map(|b| b.upper)
    }

    /// Returns `(lower, upper)`, or `None` for the empty range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::range::ClosedRange;
    /// assert_eq!(ClosedRange::new(2, 7).bounds(), Some((2, 7)));
    /// assert_eq!(ClosedRange::<i32>::empty().bounds(), None);
    /// ```
    #[inline]
    pub fn bounds(&self) -> Option<(T, T)> {
        self.bounds.map(|b| (b.lower, b.upper))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Returns the number of values in the range, clamped to `T::max_value()`.
    ///
    /// The full range of a domain holds one more value than the domain can
    /// count; use [`ClosedRange::checked_size`] to detect that case.
    #[inline]
    pub fn size(&self) -> T {
        match self.bounds {
            None => T::ZERO,
            Some(b) => b.upper.saturating_sub_val(b.lower).saturating_add_val(T::UNIT),
        }
    }

    /// Returns the number of values in the range, or `None` if that count is
    /// not representable in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::range::ClosedRange;
    /// assert_eq!(ClosedRange::new(1u8, 4).checked_size(), Some(4));
    /// assert_eq!(ClosedRange::<u8>::full().checked_size(), None);
    /// ```
    #[inline]
    pub fn checked_size(&self) -> Option<T> {
        match self.bounds {
            None => Some(T::ZERO),
            Some(b) => b.upper.checked_sub_val(b.lower)?.checked_add_val(T::UNIT),
        }
    }

    /// Returns `true` if `lower <= value <= upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::range::ClosedRange;
    /// let r = ClosedRange::new(0, 10);
    /// assert!(r.contains(0));
    /// assert!(r.contains(10));
    /// assert!(!r.contains(11));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        match self.bounds {
            None => false,
            Some(b) => b.lower <= value && value <= b.upper,
        }
    }

    /// Returns the values present in both ranges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::range::ClosedRange;
    /// let a = ClosedRange::new(1, 4);
    /// assert_eq!(a.intersection(ClosedRange::new(3, 3)), ClosedRange::new(3, 3));
    /// assert!(a.intersection(ClosedRange::new(5, 9)).is_empty());
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Self {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => {
                let lower = max(a.lower, b.lower);
                let upper = min(a.upper, b.upper);
                if lower <= upper {
                    Self::new_unchecked(lower, upper)
                } else {
                    Self::empty()
                }
            }
            _ => Self::empty(),
        }
    }

    /// Returns `true` if every value of `other` is also in `self`.
    ///
    /// The empty range is contained in every range.
    #[inline]
    pub fn fully_contains(&self, other: Self) -> bool {
        self.intersection(other) == other
    }

    /// Returns `true` if the two ranges share at least one value.
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Returns `true` if the two ranges overlap or have no value strictly
    /// between them, i.e. if [`ClosedRange::join`] would coalesce them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::range::ClosedRange;
    /// let a = ClosedRange::new(0, 4);
    /// assert!(a.touches(ClosedRange::new(5, 8)));
    /// assert!(!a.touches(ClosedRange::new(6, 8)));
    /// ```
    #[inline]
    pub fn touches(&self, other: Self) -> bool {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => {
                let (l, r) = if a.lower <= b.lower { (a, b) } else { (b, a) };
                // A range ending at the domain maximum touches everything after it.
                match l.upper.successor() {
                    Some(next) => r.lower <= next,
                    None => true,
                }
            }
            _ => false,
        }
    }

    /// Coalesces two ranges into one if they overlap or are contiguous.
    ///
    /// Returns the covering range `[min lower, max upper]` when there is no
    /// missing value between the operands, and the empty range otherwise.
    /// Joining with the empty range yields the other operand unchanged.
    /// The result does not depend on the operand order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::range::ClosedRange;
    /// let a = ClosedRange::new(0, 4);
    /// assert_eq!(a.join(ClosedRange::new(5, 8)), ClosedRange::new(0, 8));
    /// assert!(a.join(ClosedRange::new(6, 8)).is_empty());
    /// ```
    #[inline]
    pub fn join(&self, other: Self) -> Self {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => {
                if self.touches(other) {
                    Self::new_unchecked(min(a.lower, b.lower), max(a.upper, b.upper))
                } else {
                    Self::empty()
                }
            }
            (Some(_), None) => *self,
            (None, _) => other,
        }
    }

    /// Removes the values of `other` from `self`.
    ///
    /// # Returns
    ///
    /// * 0 ranges: if `other` covers `self` (or `self` is empty).
    /// * 1 range: if `other` is disjoint from `self` or trims one edge.
    /// * 2 ranges: if `other` lies strictly inside `self`, splitting it.
    ///
    /// Fragments are returned in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::range::ClosedRange;
    /// let diff = ClosedRange::new(0, 8).difference(ClosedRange::new(3, 4));
    /// assert_eq!(diff.as_slice(), &[ClosedRange::new(0, 2), ClosedRange::new(5, 8)]);
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<Self, 2> {
        let Some(m) = self.bounds else {
            return SmallVec::new();
        };
        let Some(section) = self.intersection(other).bounds else {
            return smallvec::smallvec![*self];
        };

        let mut fragments = SmallVec::new();
        if m.lower < section.lower {
            // `section.lower > m.lower >= T::MIN`, so the step back exists.
            if let Some(upper) = section.lower.predecessor() {
                fragments.push(Self::new_unchecked(m.lower, upper));
            }
        }
        if section.upper < m.upper {
            if let Some(lower) = section.upper.successor() {
                fragments.push(Self::new_unchecked(lower, m.upper));
            }
        }
        fragments
    }

    /// Creates an iterator over the values in the range, in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::range::ClosedRange;
    /// let values: Vec<_> = ClosedRange::new(1, 4).iter().collect();
    /// assert_eq!(values, vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> ClosedRangeIter<T> {
        ClosedRangeIter {
            remaining: self.bounds,
        }
    }

    /// Converts into a standard inclusive range, or `None` for the empty range.
    #[inline]
    pub fn to_inclusive(&self) -> Option<RangeInclusive<T>> {
        self.bounds.map(|b| b.lower..=b.upper)
    }
}

/// An iterator over the values contained in a [`ClosedRange`].
///
/// Stepping stops at the bounds themselves, so a range ending at
/// `T::max_value()` is iterated without overflow.
#[derive(Debug, Clone)]
pub struct ClosedRangeIter<T>
where
    T: Step,
{
    remaining: Option<Bounds<T>>,
}

impl<T> Iterator for ClosedRangeIter<T>
where
    T: Step,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let b = self.remaining?;
        self.remaining = if b.lower < b.upper {
            b.lower.successor().map(|lower| Bounds { lower, upper: b.upper })
        } else {
            None
        };
        Some(b.lower)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            None => (0, Some(0)),
            Some(b) => match b
                .upper
                .checked_sub_val(b.lower)
                .and_then(|d| d.to_usize())
                .and_then(|d| d.checked_add(1))
            {
                Some(n) => (n, Some(n)),
                None => (usize::MAX, None),
            },
        }
    }
}

impl<T> DoubleEndedIterator for ClosedRangeIter<T>
where
    T: Step,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let b = self.remaining?;
        self.remaining = if b.lower < b.upper {
            b.upper.predecessor().map(|upper| Bounds { lower: b.lower, upper })
        } else {
            None
        };
        Some(b.upper)
    }
}

impl<T> FusedIterator for ClosedRangeIter<T> where T: Step {}

impl<T> std::fmt::Debug for Bounds<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bounds")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<T> BitAnd for ClosedRange<T>
where
    T: Step,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for ClosedRange<T>
where
    T: Step,
{
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.join(rhs)
    }
}

impl<T> Default for ClosedRange<T>
where
    T: Step,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Debug for ClosedRange<T>
where
    T: Step,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bounds {
            None => f.write_str("ClosedRange(Empty)"),
            Some(b) => f
                .debug_struct("ClosedRange")
                .field("lower", &b.lower)
                .field("upper", &b.upper)
                .finish(),
        }
    }
}

impl<T> IntoIterator for ClosedRange<T>
where
    T: Step,
{
    type Item = T;
    type IntoIter = ClosedRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &ClosedRange<T>
where
    T: Step,
{
    type Item = T;
    type IntoIter = ClosedRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `5..=2` is an empty standard range and converts to the empty range.
impl<T> From<RangeInclusive<T>> for ClosedRange<T>
where
    T: Step,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (lower, upper) = range.into_inner();
        Self::try_new(lower, upper).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(lower: i32, upper: i32) -> ClosedRange<i32> {
        ClosedRange::new(lower, upper)
    }

    #[test]
    fn test_construction_valid() {
        let range = r(10, 20);
        assert_eq!(range.lower(), Some(10));
        assert_eq!(range.upper(), Some(20));
        assert_eq!(range.size(), 11);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_singleton() {
        let range = ClosedRange::singleton(7);
        assert_eq!(range, r(7, 7));
        assert_eq!(range.size(), 1);
    }

    #[test]
    fn test_empty() {
        let range = ClosedRange::<i32>::empty();
        assert!(range.is_empty());
        assert_eq!(range.lower(), None);
        assert_eq!(range.upper(), None);
        assert_eq!(range.size(), 0);
        assert_eq!(range.checked_size(), Some(0));
        assert_eq!(range, ClosedRange::default());
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedRange::try_new(5, 10).is_ok());
        assert!(ClosedRange::try_new(5, 5).is_ok());
        assert_eq!(
            ClosedRange::try_new(5, 2),
            Err(InvalidRangeError { lower: 5, upper: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "Invalid range")]
    fn test_new_panic() {
        ClosedRange::new(5, 2);
    }

    #[test]
    fn test_contains_bounds() {
        for range in [r(0, 0), r(-3, 4), r(i32::MIN, -1), r(1, i32::MAX)] {
            let (lower, upper) = range.bounds().unwrap();
            assert!(range.contains(lower));
            assert!(range.contains(upper));
            if let Some(before) = lower.predecessor() {
                assert!(!range.contains(before));
            }
            if let Some(after) = upper.successor() {
                assert!(!range.contains(after));
            }
        }
        assert!(!ClosedRange::<i32>::empty().contains(0));
    }

    #[test]
    fn test_size_at_domain_limits() {
        assert_eq!(ClosedRange::<u8>::full().size(), u8::MAX);
        assert_eq!(ClosedRange::<u8>::full().checked_size(), None);
        assert_eq!(ClosedRange::new(i8::MIN, i8::MAX).size(), i8::MAX);
        assert_eq!(ClosedRange::new(0u8, 254).checked_size(), Some(255));
    }

    #[test]
    fn test_intersection() {
        assert_eq!(r(1, 4).intersection(r(3, 3)), r(3, 3));
        assert_eq!(r(0, 10).intersection(r(5, 15)), r(5, 10));
        assert_eq!(r(0, 10).intersection(r(10, 20)), r(10, 10));
        assert!(r(0, 10).intersection(r(11, 20)).is_empty());
        assert!(r(0, 10).intersection(ClosedRange::empty()).is_empty());
        assert_eq!(r(0, 10) & r(2, 3), r(2, 3));
    }

    #[test]
    fn test_fully_contains_and_overlaps() {
        let main = r(0, 10);
        assert!(main.fully_contains(r(0, 10)));
        assert!(main.fully_contains(r(2, 8)));
        assert!(main.fully_contains(ClosedRange::empty()));
        assert!(!main.fully_contains(r(-1, 5)));
        assert!(!main.fully_contains(r(5, 11)));

        assert!(main.overlaps(r(10, 12)));
        assert!(!main.overlaps(r(11, 12)));
    }

    #[test]
    fn test_join() {
        // Gap of one missing value.
        assert!(r(0, 4).join(r(6, 8)).is_empty());
        // Touching.
        assert_eq!(r(0, 4).join(r(5, 8)), r(0, 8));
        // Overlapping.
        assert_eq!(r(0, 4).join(r(3, 8)), r(0, 8));
        // Containing.
        assert_eq!(r(0, 10).join(r(3, 8)), r(0, 10));
        assert_eq!(r(0, 4) | r(5, 5), r(0, 5));
    }

    #[test]
    fn test_join_is_order_independent() {
        let cases = [
            (r(0, 4), r(6, 8)),
            (r(0, 4), r(5, 8)),
            (r(0, 4), r(3, 8)),
            (r(0, 10), r(3, 8)),
            (r(-7, -7), r(-6, 2)),
        ];
        for (a, b) in cases {
            assert_eq!(a.join(b), b.join(a));
            assert_eq!(a.touches(b), b.touches(a));
        }
    }

    #[test]
    fn test_join_with_empty() {
        let e = ClosedRange::<i32>::empty();
        assert_eq!(r(1, 2).join(e), r(1, 2));
        assert_eq!(e.join(r(1, 2)), r(1, 2));
        assert!(e.join(e).is_empty());
        assert!(!e.touches(r(1, 2)));
    }

    #[test]
    fn test_join_at_domain_limits() {
        assert_eq!(
            ClosedRange::new(i32::MIN, i32::MAX - 1).join(ClosedRange::singleton(i32::MAX)),
            ClosedRange::full()
        );
        assert_eq!(
            ClosedRange::new(250u8, 255).join(ClosedRange::new(255, 255)),
            ClosedRange::new(250, 255)
        );
        assert!(
            ClosedRange::singleton(i64::MIN)
                .join(ClosedRange::singleton(i64::MAX))
                .is_empty()
        );
    }

    #[test]
    fn test_difference() {
        let base = r(0, 8);

        // Disjoint.
        assert_eq!(base.difference(r(10, 12)).as_slice(), &[base]);
        // Full cover.
        assert!(r(1, 4).difference(r(0, 5)).is_empty());
        // Trim right.
        assert_eq!(base.difference(r(8, 10)).as_slice(), &[r(0, 7)]);
        // Trim left.
        assert_eq!(r(4, 8).difference(r(0, 6)).as_slice(), &[r(7, 8)]);
        // Split.
        assert_eq!(base.difference(r(3, 4)).as_slice(), &[r(0, 2), r(5, 8)]);
        // Empty operands.
        assert_eq!(base.difference(ClosedRange::empty()).as_slice(), &[base]);
        assert!(ClosedRange::empty().difference(base).is_empty());
    }

    #[test]
    fn test_difference_at_domain_limits() {
        let full = ClosedRange::<i8>::full();
        assert_eq!(
            full.difference(ClosedRange::singleton(0)).as_slice(),
            &[ClosedRange::new(i8::MIN, -1), ClosedRange::new(1, i8::MAX)]
        );
        assert_eq!(
            full.difference(ClosedRange::singleton(i8::MAX)).as_slice(),
            &[ClosedRange::new(i8::MIN, i8::MAX - 1)]
        );
    }

    #[test]
    fn test_ordering() {
        let mut ranges = vec![r(3, 4), ClosedRange::empty(), r(1, 9), r(1, 2)];
        ranges.sort();
        assert_eq!(ranges, vec![ClosedRange::empty(), r(1, 2), r(1, 9), r(3, 4)]);
    }

    #[test]
    fn test_iterator() {
        assert_eq!(r(1, 4).iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(r(1, 4).iter().size_hint(), (4, Some(4)));
        assert_eq!(ClosedRange::<i32>::empty().iter().next(), None);
    }

    #[test]
    fn test_iterator_reaches_domain_max() {
        let values: Vec<u8> = ClosedRange::new(253u8, 255).into_iter().collect();
        assert_eq!(values, vec![253, 254, 255]);

        let back: Vec<i8> = ClosedRange::new(-128i8, -126).iter().rev().collect();
        assert_eq!(back, vec![-126, -127, -128]);
    }

    #[test]
    fn test_double_ended_iterator() {
        let mut iter = r(1, 4).iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_size_hint_overflowing_usize() {
        let iter = ClosedRange::<i128>::full().iter();
        assert_eq!(iter.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", r(1, 2)), "ClosedRange { lower: 1, upper: 2 }");
        assert_eq!(
            format!("{:?}", ClosedRange::<i32>::empty()),
            "ClosedRange(Empty)"
        );
    }

    #[test]
    fn test_inclusive_conversions() {
        assert_eq!(ClosedRange::from(2..=5), r(2, 5));
        assert!(ClosedRange::from(5..=2).is_empty());
        assert_eq!(r(2, 5).to_inclusive(), Some(2..=5));
        assert_eq!(ClosedRange::<i32>::empty().to_inclusive(), None);
    }
}
