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

use std::fmt::Display;

/// The error returned when a range is requested whose upper bound lies
/// below its lower bound.
///
/// This is a caller contract violation; the algebra never produces it on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError<T> {
    /// The requested lower bound.
    pub lower: T,
    /// The requested upper bound.
    pub upper: T,
}

impl<T> Display for InvalidRangeError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid range: upper bound {} is below lower bound {}",
            self.upper, self.lower
        )
    }
}

impl<T> std::error::Error for InvalidRangeError<T> where T: Display + std::fmt::Debug {}

/// What was wrong with a range literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseRangeErrorKind {
    /// Neither `..` nor `-` separates two bounds.
    MissingSeparator,
    /// The text left of the separator is not a number of the domain.
    InvalidLower,
    /// The text right of the separator is not a number of the domain.
    InvalidUpper,
    /// Both bounds parsed, but the upper one lies below the lower one.
    InvalidOrder,
}

/// The error returned when a range or range set literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRangeError {
    /// The literal that was rejected.
    pub literal: String,
    /// The name of the numeric domain we tried to parse into (e.g. "i64").
    pub type_name: &'static str,
    /// Why the literal was rejected.
    pub kind: ParseRangeErrorKind,
}

impl ParseRangeError {
    pub(crate) fn new<T>(literal: &str, kind: ParseRangeErrorKind) -> Self {
        Self {
            literal: literal.to_owned(),
            type_name: std::any::type_name::<T>(),
            kind,
        }
    }
}

impl Display for ParseRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self.kind {
            ParseRangeErrorKind::MissingSeparator => "expected `lower..upper` or `lower-upper`",
            ParseRangeErrorKind::InvalidLower => "lower bound is not a valid number",
            ParseRangeErrorKind::InvalidUpper => "upper bound is not a valid number",
            ParseRangeErrorKind::InvalidOrder => "upper bound is below lower bound",
        };
        write!(
            f,
            "Could not parse '{}' as a range of {}: {}",
            self.literal, self.type_name, reason
        )
    }
}

impl std::error::Error for ParseRangeError {}
