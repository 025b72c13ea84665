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

//! Text literals for ranges and range sets.
//!
//! A bounded range renders as `{lower..upper}` and the empty range as `{}`.
//! A set renders as its members joined with `"; "`, so the empty set is the
//! empty string.
//!
//! Parsing accepts the rendered form as well as bare `lower..upper` and the
//! legacy `lower-upper`. The legacy separator is the first `-` that is not
//! the sign of the lower bound, so `-5--2` reads as `[-5, -2]`.
//!
//! ```rust
//! # use spanset_core::math::{range::ClosedRange, set::RangeSet};
//! let r: ClosedRange<i32> = "3-7".parse().unwrap();
//! assert_eq!(r.to_string(), "{3..7}");
//!
//! let s: RangeSet<i64> = "{5..8}; 0..4; 10-12".parse().unwrap();
//! assert_eq!(s.to_string(), "{0..8}; {10..12}");
//! ```

use super::{
    error::{ParseRangeError, ParseRangeErrorKind},
    range::ClosedRange,
    set::RangeSet,
};
use crate::num::step::Step;
use std::{fmt::Display, str::FromStr};
use tracing::debug;

const SEPARATOR: &str = "..";
const LEGACY_SEPARATOR: char = '-';
const MEMBER_SEPARATOR: char = ';';

impl<T> Display for ClosedRange<T>
where
    T: Step,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bounds() {
            None => f.write_str("{}"),
            Some((lower, upper)) => write!(f, "{{{lower}{SEPARATOR}{upper}}}"),
        }
    }
}

impl<T> Display for RangeSet<T>
where
    T: Step,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, member) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{member}")?;
        }
        Ok(())
    }
}

/// Splits `body` into its lower and upper text, preferring `..` over the
/// legacy hyphen.
fn split_bounds(body: &str) -> Option<(&str, &str)> {
    if let Some(pair) = body.split_once(SEPARATOR) {
        return Some(pair);
    }
    let (index, _) = body
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == LEGACY_SEPARATOR)?;
    Some((&body[..index], &body[index + LEGACY_SEPARATOR.len_utf8()..]))
}

fn parse_range<T>(literal: &str) -> Result<ClosedRange<T>, ParseRangeError>
where
    T: Step,
{
    let trimmed = literal.trim();
    let braced = trimmed
        .strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'));
    let body = braced.unwrap_or(trimmed).trim();
    if braced.is_some() && body.is_empty() {
        return Ok(ClosedRange::empty());
    }

    let fail = |kind| ParseRangeError::new::<T>(literal, kind);
    let (lower, upper) = split_bounds(body).ok_or_else(|| fail(ParseRangeErrorKind::MissingSeparator))?;
    let lower: T = lower
        .trim()
        .parse()
        .map_err(|_| fail(ParseRangeErrorKind::InvalidLower))?;
    let upper: T = upper
        .trim()
        .parse()
        .map_err(|_| fail(ParseRangeErrorKind::InvalidUpper))?;
    ClosedRange::try_new(lower, upper).map_err(|_| fail(ParseRangeErrorKind::InvalidOrder))
}

impl<T> FromStr for ClosedRange<T>
where
    T: Step,
{
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s).inspect_err(|e| {
            debug!(literal = s, kind = ?e.kind, "rejected range literal");
        })
    }
}

impl<T> FromStr for RangeSet<T>
where
    T: Step,
{
    type Err = ParseRangeError;

    /// Parses `;`-separated range literals and merges them. Blank pieces are
    /// skipped, so the empty string is the empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let members = s
            .split(MEMBER_SEPARATOR)
            .filter(|piece| !piece.trim().is_empty())
            .map(str::parse::<ClosedRange<T>>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RangeSet::merge(members))
    }
}
