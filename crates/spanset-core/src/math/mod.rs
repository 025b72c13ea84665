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

//! # Range Algebra
//!
//! Closed intervals over unit-steppable integer domains and canonical sets
//! of them.
//!
//! ## Submodules
//!
//! - `range`: `ClosedRange<T>`, an inclusive `[lower, upper]` interval or the
//!   empty range, with containment, intersection, join (coalesce when
//!   overlapping or contiguous), difference and point iteration.
//! - `set`: `RangeSet<T>`, a sorted, disjoint, non-adjacent collection built
//!   by merge and closed under except, intersection and union.
//! - `text`: The `{lower..upper}` literal format (`Display` / `FromStr`).
//! - `error`: Construction and parse errors.
//!
//! Two ranges are contiguous when no value of the domain lies strictly
//! between them. `[0, 4]` and `[5, 8]` therefore join into `[0, 8]`, and a
//! `RangeSet` never holds both.

pub mod error;
pub mod range;
pub mod set;
pub mod text;
