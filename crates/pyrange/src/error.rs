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

//! # Precondition Errors
//!
//! Typed errors returned by the fallible `try_` twins of the panicking
//! operations in this crate. Every precondition is checked: the panicking
//! variant (`Range::at`, `Robin::new`, `Robin::exclude`) asserts it, the
//! `try_` variant reports one of the errors below.
//!
//! Reversed range bounds are deliberately not an error; they are clamped.

use std::fmt::Display;

/// An index passed to `Range::try_at` was not below the range length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeIndexError {
    /// The requested offset from the start of the range.
    pub index: usize,
    /// The length of the range at the time of the request.
    pub len: usize,
}

impl Display for RangeIndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Range index {} is out of bounds for a range of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for RangeIndexError {}

/// Errors raised while building or querying a `Robin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobinError {
    /// A cycle must contain at least one part.
    NoParts,
    /// The requested part count is negative or does not fit in `usize`.
    InvalidPartCount,
    /// The part passed to `exclude` is not a member of the cycle.
    PartOutOfRange {
        /// The offending part, widened to `i128` for reporting. Parts above
        /// `i128::MAX` (only possible with `u128`) saturate to `i128::MAX`.
        part: i128,
        /// The number of parts in the cycle.
        num_parts: usize,
    },
}

impl Display for RobinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoParts => write!(f, "A round-robin cycle needs at least one part"),
            Self::InvalidPartCount => {
                write!(f, "Part count must be non-negative and fit in usize")
            }
            Self::PartOutOfRange { part, num_parts } => write!(
                f,
                "Part {} is out of range for a cycle of {} parts",
                part, num_parts
            ),
        }
    }
}

impl std::error::Error for RobinError {}
