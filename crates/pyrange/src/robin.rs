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

//! # Round-Robin Cycles
//!
//! `Robin<T>` is a fixed cycle of `N` parts keyed `0..N`. Its one query,
//! [`Robin::exclude`], visits every part except a given one, starting right
//! after it and wrapping around:
//!
//! ```text
//!   Robin::new(6).exclude(2)
//!
//!        ┌──→ 3 ──→ 4 ──→ 5 ──┐
//!        │                    ↓
//!     (2)│                    0
//!        └───── 1 ←───────────┘
//!
//!   yields 3, 4, 5, 0, 1
//! ```
//!
//! The cycle is a flat key vector; the successor of slot `i` is
//! `(i + 1) mod N`. It is built once and never mutated, so any number of
//! views may traverse it at the same time.
//!
//! ## Usage
//!
//! ```rust
//! use pyrange::robin::Robin;
//!
//! let rr = Robin::new(6u8);
//! let order: Vec<u8> = rr.exclude(2).iter().collect();
//! assert_eq!(order, vec![3, 4, 5, 0, 1]);
//! ```

use crate::error::RobinError;
use num_traits::PrimInt;
use std::iter::FusedIterator;
use tracing::debug;

/// A read-only round-robin cycle over the parts `0..num_parts`.
///
/// # Invariants
///
/// - `keys.len() >= 1`.
/// - `keys[i] == i` for every slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Robin<T>
where
    T: PrimInt,
{
    keys: Vec<T>,
}

impl<T> Robin<T>
where
    T: PrimInt,
{
    /// Builds a cycle of `num_parts` parts.
    ///
    /// # Panics
    ///
    /// Panics if `num_parts` is zero, negative, or does not fit in `usize`.
    /// Use [`Robin::try_new`] for a checked variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::robin::Robin;
    ///
    /// let rr = Robin::new(4u32);
    /// assert_eq!(rr.num_parts(), 4);
    /// assert_eq!(rr.keys(), &[0, 1, 2, 3]);
    /// ```
    pub fn new(num_parts: T) -> Self {
        match num_parts.to_usize() {
            Some(0) => panic!("Invalid part count: a round-robin cycle needs at least one part"),
            Some(_) => Self::build(num_parts),
            None => panic!("Invalid part count: must be non-negative and fit in usize"),
        }
    }

    /// Builds a cycle of `num_parts` parts, or reports why it cannot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::robin::Robin;
    /// # use pyrange::error::RobinError;
    ///
    /// assert!(Robin::try_new(3).is_ok());
    /// assert_eq!(Robin::<i32>::try_new(0), Err(RobinError::NoParts));
    /// assert_eq!(Robin::<i32>::try_new(-2), Err(RobinError::InvalidPartCount));
    /// ```
    pub fn try_new(num_parts: T) -> Result<Self, RobinError> {
        match num_parts.to_usize() {
            Some(0) => {
                debug!("rejected round-robin cycle with zero parts");
                Err(RobinError::NoParts)
            }
            Some(_) => Ok(Self::build(num_parts)),
            None => {
                debug!(
                    num_parts = ?num_parts.to_i128(),
                    "rejected unrepresentable round-robin part count"
                );
                Err(RobinError::InvalidPartCount)
            }
        }
    }

    /// Lays out the keys `0..num_parts`; the caller has validated the count.
    fn build(num_parts: T) -> Self {
        let mut keys = Vec::with_capacity(num_parts.to_usize().unwrap_or(0));
        let mut key = T::zero();
        while key < num_parts {
            keys.push(key);
            key = key + T::one();
        }
        debug!(num_parts = keys.len(), "built round-robin cycle");
        Self { keys }
    }

    /// Returns the number of parts in the cycle. Always at least one.
    #[inline]
    pub fn num_parts(&self) -> usize {
        self.keys.len()
    }

    /// Returns all keys in slot order.
    #[inline]
    pub fn keys(&self) -> &[T] {
        &self.keys
    }

    /// Returns the part that follows `part` in the cycle.
    ///
    /// # Panics
    ///
    /// Panics if `part` is not a member of the cycle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::robin::Robin;
    ///
    /// let rr = Robin::new(3);
    /// assert_eq!(rr.successor(0), 1);
    /// assert_eq!(rr.successor(2), 0);
    /// ```
    #[inline]
    pub fn successor(&self, part: T) -> T {
        let slot = self.slot_of(part);
        self.keys[self.next_slot(slot)]
    }

    /// Returns a view over every part except `part`, starting just after it.
    ///
    /// # Panics
    ///
    /// Panics if `part` is not a member of the cycle. Use
    /// [`Robin::try_exclude`] for a checked variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::robin::Robin;
    ///
    /// let rr = Robin::new(5);
    /// let view = rr.exclude(4);
    /// assert_eq!(view.len(), 4);
    /// assert_eq!(view.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    /// ```
    #[inline]
    pub fn exclude(&self, part: T) -> Exclude<'_, T> {
        Exclude {
            keys: &self.keys,
            excluded: self.slot_of(part),
        }
    }

    /// Returns a view over every part except `part`, or an error if `part`
    /// is not a member of the cycle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::robin::Robin;
    /// # use pyrange::error::RobinError;
    ///
    /// let rr = Robin::new(6);
    /// assert!(rr.try_exclude(5).is_ok());
    /// assert_eq!(
    ///     rr.try_exclude(6).unwrap_err(),
    ///     RobinError::PartOutOfRange { part: 6, num_parts: 6 }
    /// );
    /// ```
    pub fn try_exclude(&self, part: T) -> Result<Exclude<'_, T>, RobinError> {
        match part.to_usize() {
            Some(slot) if slot < self.keys.len() => Ok(Exclude {
                keys: &self.keys,
                excluded: slot,
            }),
            _ => {
                // Parts above `i128::MAX` saturate.
                let err = RobinError::PartOutOfRange {
                    part: part.to_i128().unwrap_or(i128::MAX),
                    num_parts: self.keys.len(),
                };
                debug!(%err, "rejected round-robin exclusion");
                Err(err)
            }
        }
    }

    #[inline]
    fn slot_of(&self, part: T) -> usize {
        match part.to_usize() {
            Some(slot) if slot < self.keys.len() => slot,
            _ => panic!(
                "Part out of range: the cycle has {} parts",
                self.keys.len()
            ),
        }
    }

    #[inline]
    fn next_slot(&self, slot: usize) -> usize {
        (slot + 1) % self.keys.len()
    }
}

/// A restartable view over all parts of a [`Robin`] except one.
///
/// The view stores no cursor; every call to [`Exclude::iter`] starts again
/// at the part following the excluded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclude<'a, T> {
    keys: &'a [T],
    excluded: usize,
}

impl<'a, T> Exclude<'a, T>
where
    T: PrimInt,
{
    /// Returns the part this view skips.
    #[inline]
    pub fn excluded(&self) -> T {
        self.keys[self.excluded]
    }

    /// Returns the number of parts the view yields, `num_parts - 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len() - 1
    }

    /// Returns `true` for the single-part cycle, which has nothing to visit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a fresh cursor positioned just after the excluded part.
    #[inline]
    pub fn iter(&self) -> ExcludeIter<'a, T> {
        ExcludeIter {
            keys: self.keys,
            front: (self.excluded + 1) % self.keys.len(),
            back: self.excluded,
        }
    }
}

impl<'a, T> IntoIterator for Exclude<'a, T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ExcludeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &Exclude<'a, T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ExcludeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over an [`Exclude`] view.
///
/// `front` is the next slot to yield and `back` is one past the last; the
/// traversal ends when they meet. Initially `back` is the excluded slot.
#[derive(Debug, Clone)]
pub struct ExcludeIter<'a, T> {
    keys: &'a [T],
    front: usize,
    back: usize,
}

impl<T> Iterator for ExcludeIter<'_, T>
where
    T: PrimInt,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let key = self.keys[self.front];
        self.front = (self.front + 1) % self.keys.len();
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for ExcludeIter<'_, T>
where
    T: PrimInt,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let n = self.keys.len();
        self.back = (self.back + n - 1) % n;
        Some(self.keys[self.back])
    }
}

impl<T> ExactSizeIterator for ExcludeIter<'_, T>
where
    T: PrimInt,
{
    #[inline]
    fn len(&self) -> usize {
        let n = self.keys.len();
        (self.back + n - self.front) % n
    }
}

impl<T> FusedIterator for ExcludeIter<'_, T> where T: PrimInt {}
