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

//! # Spanset Core
//!
//! A closed-interval algebra over integer domains. `ClosedRange<T>` models an
//! inclusive range `[lower, upper]` (or the empty range) over any primitive
//! integer, and `RangeSet<T>` keeps a canonical list of such ranges that is
//! closed under merge, exclusion and intersection.
//!
//! ## Modules
//!
//! - `math`: The range and range set types, their text literal format, and
//!   the errors raised at construction and parse time.
//! - `algorithm`: The pure merge/except/intersection routines over slices of
//!   ranges, plus the canonical-form check and binary search used by sets.
//! - `num`: The `Step` domain trait and the by-value checked and saturating
//!   arithmetic it relies on at the domain limits.
//!
//! ## Guarantees
//!
//! Every value is immutable. A `RangeSet` is always sorted ascending, with
//! no two members overlapping or touching, and bounds at `T::MIN` / `T::MAX`
//! never wrap.
//!
//! ```rust
//! use spanset_core::math::{range::ClosedRange, set::RangeSet};
//!
//! let set = RangeSet::merge([
//!     ClosedRange::new(1, 4),
//!     ClosedRange::new(3, 7),
//!     ClosedRange::new(9, 12),
//! ]);
//! assert_eq!(set.to_string(), "{1..7}; {9..12}");
//!
//! let rest = set.except(ClosedRange::new(5, 10));
//! assert_eq!(rest.to_string(), "{1..4}; {11..12}");
//! ```

pub mod algorithm;
pub mod math;
pub mod num;
