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

//! The set algorithms behind [`RangeSet`](crate::math::set::RangeSet).
//!
//! Every function here is pure: it reads its operands and returns a freshly
//! allocated canonical list. A list is canonical when its members are
//! non-empty, sorted ascending and pairwise neither overlapping nor touching.

use crate::{math::range::ClosedRange, num::step::Step};
use tracing::trace;

/// Checks whether `ranges` is canonical.
///
/// Returns `true` if every member is non-empty, members are sorted by lower
/// bound, and no two neighbours could be joined into one.
#[inline]
pub fn is_canonical<T>(ranges: &[ClosedRange<T>]) -> bool
where
    T: Step,
{
    ranges.iter().all(|r| !r.is_empty())
        && ranges
            .windows(2)
            .all(|w| w[0].lower() < w[1].lower() && !w[0].touches(w[1]))
}

/// Folds an arbitrary sequence of ranges into canonical form.
///
/// Empty ranges are discarded. Input that is already ordered by lower bound
/// (such as the members of an existing set) skips the sort. Each incoming
/// range is joined into the first accumulated entry it touches, or appended;
/// a reconciliation pass then coalesces accumulated entries with each other
/// until no joinable pair remains.
pub fn merge<T, I>(ranges: I) -> Vec<ClosedRange<T>>
where
    T: Step,
    I: IntoIterator<Item = ClosedRange<T>>,
{
    let mut sorted: Vec<ClosedRange<T>> = ranges.into_iter().filter(|r| !r.is_empty()).collect();
    let input_len = sorted.len();
    if !sorted.is_sorted_by_key(|r| r.lower()) {
        sorted.sort_unstable_by_key(|r| r.lower());
    }

    let mut accumulator: Vec<ClosedRange<T>> = Vec::with_capacity(sorted.len());
    'incoming: for range in sorted {
        for entry in accumulator.iter_mut() {
            let joined = entry.join(range);
            if !joined.is_empty() {
                *entry = joined;
                continue 'incoming;
            }
        }
        accumulator.push(range);
    }

    let sweeps = reconcile(&mut accumulator);
    trace!(
        input = input_len,
        output = accumulator.len(),
        sweeps,
        "merged ranges"
    );
    debug_assert!(is_canonical(&accumulator));
    accumulator
}

/// Coalesces accumulated entries that became joinable with each other,
/// sweeping until a sweep changes nothing. Returns the number of sweeps.
fn reconcile<T>(accumulator: &mut Vec<ClosedRange<T>>) -> usize
where
    T: Step,
{
    let mut sweeps = 0;
    loop {
        sweeps += 1;
        let before = accumulator.len();
        accumulator.sort_unstable();
        accumulator.dedup_by(|next, kept| {
            let joined = kept.join(*next);
            if joined.is_empty() {
                false
            } else {
                *kept = joined;
                true
            }
        });
        if accumulator.len() == before {
            return sweeps;
        }
    }
}

/// Subtracts `exclude` from a canonical list.
///
/// Members disjoint from `exclude` are kept unchanged; the others are
/// replaced by the zero, one or two fragments left outside of it. The
/// fragments are merged again before returning.
pub fn except<T>(ranges: &[ClosedRange<T>], exclude: ClosedRange<T>) -> Vec<ClosedRange<T>>
where
    T: Step,
{
    merge(ranges.iter().flat_map(|member| member.difference(exclude)))
}

/// Intersects every member of `ranges` with every range of `others` and
/// merges the non-empty results.
///
/// Runs in `O(n * m)`; operand sets are expected to hold at most a few
/// hundred members.
pub fn intersection<T, I>(ranges: &[ClosedRange<T>], others: I) -> Vec<ClosedRange<T>>
where
    T: Step,
    I: IntoIterator<Item = ClosedRange<T>>,
{
    let mut sections = Vec::new();
    for other in others {
        for member in ranges {
            let section = member.intersection(other);
            if !section.is_empty() {
                sections.push(section);
            }
        }
    }
    merge(sections)
}

/// Binary search for the first member whose upper bound is `>= key`.
///
/// # Panics
///
/// In debug builds, panics if `ranges` is not canonical.
#[inline]
pub fn lower_bound_upper<T>(ranges: &[ClosedRange<T>], key: T) -> usize
where
    T: Step,
{
    debug_assert!(
        is_canonical(ranges),
        "called `lower_bound_upper` with ranges that are not canonical"
    );

    let mut lo: usize = 0;
    let mut hi: usize = ranges.len();
    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if ranges[mid].upper() < Some(key) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
