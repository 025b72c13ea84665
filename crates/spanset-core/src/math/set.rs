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

use super::range::ClosedRange;
use crate::{algorithm, num::step::Step};
use std::ops::{BitAnd, BitOr, Sub};

/// A canonical, read-only set of closed ranges.
///
/// Members are non-empty, sorted ascending by lower bound and pairwise
/// neither overlapping nor touching, so `[0, 4]` and `[5, 8]` can never
/// both be members: they are always stored as `[0, 8]`.
///
/// The only way to build a `RangeSet` is through [`RangeSet::merge`] (or
/// one of the operations that merge their own output), and the backing list
/// is never handed out mutably. Every operation returns a new set.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::math::{range::ClosedRange, set::RangeSet};
/// let set = RangeSet::merge([ClosedRange::new(5, 8), ClosedRange::new(0, 4)]);
/// assert_eq!(set.as_slice(), &[ClosedRange::new(0, 8)]);
///
/// let split = set.except(ClosedRange::new(3, 4));
/// assert_eq!(split.to_string(), "{0..2}; {5..8}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeSet<T>
where
    T: Step,
{
    ranges: Vec<ClosedRange<T>>,
}

/// A range set over `i32`.
pub type RangeSet32 = RangeSet<i32>;

/// A range set over `i64`.
pub type RangeSet64 = RangeSet<i64>;

impl<T> RangeSet<T>
where
    T: Step,
{
    /// The set without members.
    #[inline]
    pub const fn empty() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Builds the canonical set covering exactly the values of `ranges`.
    ///
    /// The input may be unsorted, overlapping, touching or contain empty
    /// ranges.
    pub fn merge<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = ClosedRange<T>>,
    {
        Self {
            ranges: algorithm::merge(ranges),
        }
    }

    /// Returns the set without the values of `exclude`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::{range::ClosedRange, set::RangeSet};
    /// let set = RangeSet::merge([ClosedRange::new(0, 8)]);
    /// let trimmed = set.except(ClosedRange::new(8, 10));
    /// assert_eq!(trimmed.as_slice(), &[ClosedRange::new(0, 7)]);
    /// ```
    pub fn except(&self, exclude: ClosedRange<T>) -> Self {
        Self {
            ranges: algorithm::except(&self.ranges, exclude),
        }
    }

    /// Returns the set without the values of any range in `excludes`.
    ///
    /// Exclusions are applied one at a time, left to right, and the
    /// intermediate result is canonical after each step.
    pub fn except_all<I>(&self, excludes: I) -> Self
    where
        I: IntoIterator<Item = ClosedRange<T>>,
    {
        excludes
            .into_iter()
            .fold(self.clone(), |remaining, exclude| remaining.except(exclude))
    }

    /// Returns the values present both in this set and in any of `others`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::{range::ClosedRange, set::RangeSet};
    /// let set = RangeSet::merge([ClosedRange::new(0, 5), ClosedRange::new(10, 15)]);
    /// let both = set.intersection([ClosedRange::new(4, 11)]);
    /// assert_eq!(both.to_string(), "{4..5}; {10..11}");
    /// ```
    pub fn intersection<I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = ClosedRange<T>>,
    {
        Self {
            ranges: algorithm::intersection(&self.ranges, others),
        }
    }

    /// Returns the values present in either set.
    pub fn union(&self, other: &Self) -> Self {
        Self::merge(self.ranges.iter().chain(other.ranges.iter()).copied())
    }

    /// Returns `true` if some member contains `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::math::{range::ClosedRange, set::RangeSet};
    /// let set = RangeSet::merge([ClosedRange::new(0, 2), ClosedRange::new(6, 9)]);
    /// assert!(set.contains(7));
    /// assert!(!set.contains(4));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        let index = algorithm::lower_bound_upper(&self.ranges, value);
        self.ranges
            .get(index)
            .is_some_and(|member| member.contains(value))
    }

    /// Returns `true` if every value of `range` is in the set.
    ///
    /// Since members never touch, this holds only if a single member covers
    /// all of `range`.
    #[inline]
    pub fn fully_contains(&self, range: ClosedRange<T>) -> bool {
        let Some(lower) = range.lower() else {
            return true;
        };
        let index = algorithm::lower_bound_upper(&self.ranges, lower);
        self.ranges
            .get(index)
            .is_some_and(|member| member.fully_contains(range))
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the number of values in the set, clamped to `T::max_value()`.
    #[inline]
    pub fn size(&self) -> T {
        self.ranges
            .iter()
            .fold(T::ZERO, |total, member| total.saturating_add_val(member.size()))
    }

    /// Returns the number of values in the set, or `None` if that count is
    /// not representable in `T`.
    #[inline]
    pub fn checked_size(&self) -> Option<T> {
        self.ranges.iter().try_fold(T::ZERO, |total, member| {
            total.checked_add_val(member.checked_size()?)
        })
    }

    /// Returns the smallest range covering every member, or the empty range
    /// for the empty set.
    #[inline]
    pub fn span(&self) -> ClosedRange<T> {
        match (
            self.first().and_then(|r| r.lower()),
            self.last().and_then(|r| r.upper()),
        ) {
            (Some(lower), Some(upper)) => ClosedRange::new_unchecked(lower, upper),
            _ => ClosedRange::empty(),
        }
    }

    #[inline]
    pub fn first(&self) -> Option<ClosedRange<T>> {
        self.ranges.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<ClosedRange<T>> {
        self.ranges.last().copied()
    }

    /// Returns the members in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[ClosedRange<T>] {
        &self.ranges
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ClosedRange<T>> {
        self.ranges.iter()
    }
}

impl<T> Default for RangeSet<T>
where
    T: Step,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<ClosedRange<T>> for RangeSet<T>
where
    T: Step,
{
    #[inline]
    fn from(range: ClosedRange<T>) -> Self {
        Self::merge([range])
    }
}

impl<T> FromIterator<ClosedRange<T>> for RangeSet<T>
where
    T: Step,
{
    fn from_iter<I: IntoIterator<Item = ClosedRange<T>>>(iter: I) -> Self {
        Self::merge(iter)
    }
}

impl<T> IntoIterator for RangeSet<T>
where
    T: Step,
{
    type Item = ClosedRange<T>;
    type IntoIter = std::vec::IntoIter<ClosedRange<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RangeSet<T>
where
    T: Step,
{
    type Item = &'a ClosedRange<T>;
    type IntoIter = std::slice::Iter<'a, ClosedRange<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl<T> BitOr for &RangeSet<T>
where
    T: Step,
{
    type Output = RangeSet<T>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> BitAnd for &RangeSet<T>
where
    T: Step,
{
    type Output = RangeSet<T>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs.iter().copied())
    }
}

impl<T> Sub for &RangeSet<T>
where
    T: Step,
{
    type Output = RangeSet<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.except_all(rhs.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::is_canonical;

    fn r(lower: i32, upper: i32) -> ClosedRange<i32> {
        ClosedRange::new(lower, upper)
    }

    fn set(ranges: &[ClosedRange<i32>]) -> RangeSet32 {
        RangeSet::merge(ranges.iter().copied())
    }

    #[test]
    fn test_empty_and_default() {
        let s = RangeSet32::empty();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.size(), 0);
        assert!(s.span().is_empty());
        assert_eq!(s, RangeSet::default());
    }

    #[test]
    fn test_merge_canonicalizes() {
        let s = set(&[r(20, 25), r(1, 4), r(3, 7), r(8, 8), r(10, 12)]);
        assert_eq!(s.as_slice(), &[r(1, 8), r(10, 12), r(20, 25)]);
        assert!(is_canonical(s.as_slice()));
        assert_eq!(s.len(), 3);
        assert_eq!(s.size(), 8 + 3 + 6);
    }

    #[test]
    fn test_merge_with_itself_is_identity() {
        let s = set(&[r(0, 2), r(5, 9), r(11, 11)]);
        let doubled = RangeSet::merge(s.iter().chain(s.iter()).copied());
        assert_eq!(doubled, s);
        assert_eq!(RangeSet::merge(s.clone()), s);
    }

    #[test]
    fn test_except_scenarios() {
        assert!(set(&[r(1, 4)]).except(r(0, 5)).is_empty());
        assert_eq!(set(&[r(3, 7)]).except(r(0, 1)), set(&[r(3, 7)]));
        assert_eq!(set(&[r(0, 8)]).except(r(3, 4)).as_slice(), &[r(0, 2), r(5, 8)]);
        assert_eq!(set(&[r(0, 8)]).except(r(8, 10)).as_slice(), &[r(0, 7)]);
        assert_eq!(set(&[r(4, 8)]).except(r(0, 6)).as_slice(), &[r(7, 8)]);
    }

    #[test]
    fn test_except_all_folds_left_to_right() {
        let s = set(&[r(0, 20)]);
        let remaining = s.except_all([r(2, 3), r(10, 12), r(19, 30)]);
        assert_eq!(remaining.as_slice(), &[r(0, 1), r(4, 9), r(13, 18)]);
        assert_eq!(s.except_all([]), s);
    }

    #[test]
    fn test_intersection() {
        let s = set(&[r(0, 5), r(10, 15)]);
        assert_eq!(
            s.intersection([r(3, 11), r(14, 20)]).as_slice(),
            &[r(3, 5), r(10, 11), r(14, 15)]
        );
        assert!(s.intersection([r(6, 9)]).is_empty());
        assert_eq!(s.intersection([r(1, 4)]).as_slice(), &[r(1, 4)]);
    }

    #[test]
    fn test_union() {
        let a = set(&[r(0, 2), r(10, 12)]);
        let b = set(&[r(3, 5), r(20, 22)]);
        assert_eq!((&a | &b).as_slice(), &[r(0, 5), r(10, 12), r(20, 22)]);
        assert_eq!(a.union(&RangeSet::empty()), a);
    }

    #[test]
    fn test_operators() {
        let a = set(&[r(0, 10)]);
        let b = set(&[r(3, 4), r(8, 12)]);
        assert_eq!((&a & &b).as_slice(), &[r(3, 4), r(8, 10)]);
        assert_eq!((&a - &b).as_slice(), &[r(0, 2), r(5, 7)]);
    }

    #[test]
    fn test_contains() {
        let s = set(&[r(-5, -1), r(3, 3), r(7, 9)]);
        for v in [-5, -3, -1, 3, 7, 9] {
            assert!(s.contains(v), "{v} should be a member");
        }
        for v in [-6, 0, 2, 4, 6, 10] {
            assert!(!s.contains(v), "{v} should not be a member");
        }
        assert!(!RangeSet32::empty().contains(0));
    }

    #[test]
    fn test_fully_contains() {
        let s = set(&[r(0, 4), r(6, 9)]);
        assert!(s.fully_contains(r(1, 3)));
        assert!(s.fully_contains(r(6, 9)));
        assert!(s.fully_contains(ClosedRange::empty()));
        assert!(!s.fully_contains(r(3, 7)));
        assert!(!s.fully_contains(r(10, 11)));
    }

    #[test]
    fn test_size_at_domain_limits() {
        let s = RangeSet::merge([ClosedRange::new(i8::MIN, -1), ClosedRange::new(1, i8::MAX)]);
        assert_eq!(s.checked_size(), None);
        assert_eq!(s.size(), i8::MAX);

        let small = RangeSet::merge([ClosedRange::new(0u8, 9), ClosedRange::new(20, 29)]);
        assert_eq!(small.checked_size(), Some(20));
    }

    #[test]
    fn test_span_first_last() {
        let s = set(&[r(7, 9), r(-2, 0)]);
        assert_eq!(s.first(), Some(r(-2, 0)));
        assert_eq!(s.last(), Some(r(7, 9)));
        assert_eq!(s.span(), r(-2, 9));
    }

    #[test]
    fn test_collect_and_iterate() {
        let s: RangeSet32 = vec![r(4, 5), r(0, 1), r(2, 3)].into_iter().collect();
        assert_eq!(s, RangeSet::from(r(0, 5)));

        let members: Vec<_> = (&s).into_iter().copied().collect();
        assert_eq!(members, vec![r(0, 5)]);
        assert_eq!(s.into_iter().count(), 1);
    }
}
