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

//! # Half-Open Integer Ranges
//!
//! `Range<T>` is a lazy `[start, stop)` sequence of integers, modelled on
//! Python's built-in `range`. Construction never fails: when `stop < start`
//! the upper bound is clamped to `start`, producing an empty range.
//!
//! ## Usage
//!
//! ```rust
//! use pyrange::range::{Range, range};
//!
//! let r = range(5);
//! assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
//!
//! let reversed = Range::new(10, 3);
//! assert!(reversed.is_empty());
//! assert_eq!(reversed.stop(), 10);
//! ```

use crate::error::RangeIndexError;
use num_traits::PrimInt;
use std::iter::FusedIterator;
use tracing::debug;

/// A half-open range `[start, stop)` of primitive integers.
///
/// # Invariants
///
/// `start <= stop` always holds; [`Range::new`] clamps reversed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range<T>
where
    T: PrimInt,
{
    start: T,
    stop: T,
}

/// Creates the range `[0, stop)`.
///
/// A negative `stop` yields an empty range.
///
/// # Examples
///
/// ```rust
/// # use pyrange::range::range;
///
/// assert_eq!(range(3u8).len(), 3);
/// assert!(range(0).is_empty());
/// assert!(range(-4).is_empty());
/// ```
#[inline]
pub fn range<T>(stop: T) -> Range<T>
where
    T: PrimInt,
{
    Range::new(T::zero(), stop)
}

/// Number of integers in `[lo, hi)`, assuming `lo <= hi`, or `None` if it
/// does not fit in `usize`.
fn checked_span_len<T>(lo: T, hi: T) -> Option<usize>
where
    T: PrimInt,
{
    let width = match hi.checked_sub(&lo) {
        Some(diff) => diff.to_u128(),
        // Signed bounds straddling zero can overflow `T` itself.
        None => hi
            .to_i128()
            .zip(lo.to_i128())
            .map(|(h, l)| h.abs_diff(l)),
    };
    width.and_then(|w| usize::try_from(w).ok())
}

/// Number of integers in `[lo, hi)`, assuming `lo <= hi`.
fn span_len<T>(lo: T, hi: T) -> usize
where
    T: PrimInt,
{
    checked_span_len(lo, hi).expect("Range: length exceeds usize::MAX")
}

/// Returns `base + n`, or `None` if the result is not representable in `T`.
fn offset<T>(base: T, n: usize) -> Option<T>
where
    T: PrimInt,
{
    match num_traits::cast::<usize, T>(n) {
        Some(step) => base.checked_add(&step),
        None => {
            let wide = base.to_i128()?.checked_add(i128::try_from(n).ok()?)?;
            num_traits::cast(wide)
        }
    }
}

impl<T> Range<T>
where
    T: PrimInt,
{
    /// Creates the range `[start, stop)`.
    ///
    /// If `stop < start`, `stop` is clamped to `start` and the range is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::range::Range;
    ///
    /// let r = Range::new(2, 6);
    /// assert_eq!(r.len(), 4);
    ///
    /// let clamped = Range::new(6, 2);
    /// assert_eq!(clamped.start(), 6);
    /// assert_eq!(clamped.stop(), 6);
    /// ```
    #[inline]
    pub fn new(start: T, stop: T) -> Self {
        let stop = if stop < start { start } else { stop };
        Self { start, stop }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive upper bound.
    #[inline]
    pub const fn stop(&self) -> T {
        self.stop
    }

    /// Returns the number of values in the range (`stop - start`).
    ///
    /// # Panics
    ///
    /// Panics if the length does not fit in `usize` (only possible for
    /// 128-bit element types).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::range::Range;
    ///
    /// assert_eq!(Range::new(-3i8, 3).len(), 6);
    /// assert_eq!(Range::new(i8::MIN, i8::MAX).len(), 255);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        span_len(self.start, self.stop)
    }

    /// Returns `true` if `start == stop`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Returns `true` if `start <= value < stop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::range::Range;
    ///
    /// let r = Range::new(0, 10);
    /// assert!(r.contains(0));
    /// assert!(r.contains(9));
    /// assert!(!r.contains(10));
    /// assert!(!r.contains(-1));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value < self.stop
    }

    /// Returns the `n`-th value of the range, `start + n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= self.len()`. Use [`Range::try_at`] for a checked variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::range::Range;
    ///
    /// let r = Range::new(10, 20);
    /// assert_eq!(r.at(0), 10);
    /// assert_eq!(r.at(9), 19);
    /// ```
    #[inline]
    pub fn at(&self, n: usize) -> T {
        let len = checked_span_len(self.start, self.stop).unwrap_or(usize::MAX);
        assert!(
            n < len,
            "Range index out of bounds: the len is {} but the index is {}",
            len,
            n
        );
        match offset(self.start, n) {
            Some(value) => value,
            None => unreachable!("an in-bounds offset is always representable"),
        }
    }

    /// Returns the `n`-th value of the range, or an error if `n >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::range::Range;
    /// # use pyrange::error::RangeIndexError;
    ///
    /// let r = Range::new(10, 20);
    /// assert_eq!(r.try_at(3), Ok(13));
    /// assert_eq!(r.try_at(10), Err(RangeIndexError { index: 10, len: 10 }));
    /// ```
    pub fn try_at(&self, n: usize) -> Result<T, RangeIndexError> {
        // Lengths beyond `usize::MAX` admit every `usize` index.
        let len = checked_span_len(self.start, self.stop).unwrap_or(usize::MAX);
        if n >= len {
            debug!(index = n, len, "rejected out-of-bounds range index");
            return Err(RangeIndexError { index: n, len });
        }
        offset(self.start, n).ok_or(RangeIndexError { index: n, len })
    }

    /// Creates a fresh cursor over the range.
    ///
    /// Each call starts again from `start`; the range itself holds no
    /// iteration state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::range::Range;
    ///
    /// let r = Range::new(1, 4);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert_eq!(r.iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    #[inline]
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter {
            current: self.start,
            stop: self.stop,
        }
    }
}

/// A cursor over the values of a [`Range`].
///
/// Two cursors compare equal when they hold the same current value.
#[derive(Debug, Clone, Copy)]
pub struct RangeIter<T>
where
    T: PrimInt,
{
    current: T,
    stop: T,
}

impl<T> RangeIter<T>
where
    T: PrimInt,
{
    /// Returns the value the cursor will yield next, without advancing.
    #[inline]
    pub fn peek(&self) -> Option<T> {
        (self.current < self.stop).then_some(self.current)
    }
}

impl<T> PartialEq for RangeIter<T>
where
    T: PrimInt,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<T> Eq for RangeIter<T> where T: PrimInt {}

impl<T> Iterator for RangeIter<T>
where
    T: PrimInt,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.stop {
            let result = self.current;
            self.current = self.current + T::one();
            Some(result)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current >= self.stop {
            return (0, Some(0));
        }
        match checked_span_len(self.current, self.stop) {
            Some(len) => (len, Some(len)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for RangeIter<T>
where
    T: PrimInt,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.stop {
            self.stop = self.stop - T::one();
            Some(self.stop)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for RangeIter<T>
where
    T: PrimInt,
{
    #[inline]
    fn len(&self) -> usize {
        if self.current < self.stop {
            span_len(self.current, self.stop)
        } else {
            0
        }
    }
}

impl<T> FusedIterator for RangeIter<T> where T: PrimInt {}

impl<T> Default for Range<T>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self {
            start: T::zero(),
            stop: T::zero(),
        }
    }
}

impl<T> std::fmt::Display for Range<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "range({}, {})", self.start, self.stop)
    }
}

impl<T> std::ops::RangeBounds<T> for Range<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Excluded(&self.stop)
    }
}

impl<T> IntoIterator for Range<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Range<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::Range<T>> for Range<T>
where
    T: PrimInt,
{
    /// Converts a standard range, clamping reversed bounds like [`Range::new`].
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> From<Range<T>> for std::ops::Range<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: Range<T>) -> Self {
        range.start..range.stop
    }
}
