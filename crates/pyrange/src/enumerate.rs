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

//! # Indexed Iteration
//!
//! `enumerate` pairs every element of an iterable with its zero-based
//! position, like Python's built-in of the same name. The wrapper borrows the
//! iterable rather than consuming it, so it can be traversed more than once.
//!
//! ## Element Access
//!
//! The kind of reference handed to [`enumerate`] selects the capability:
//!
//! - `enumerate(&v)` yields `(usize, &T)` and can be re-iterated through
//!   [`Enumerate::iter`] or `&Enumerate`.
//! - `enumerate(&mut v)` yields `(usize, &mut T)`; writes go straight to the
//!   container. It can be re-iterated through [`Enumerate::iter_mut`].
//!
//! ## Usage
//!
//! ```rust
//! use pyrange::enumerate::enumerate;
//!
//! let mut scores = vec![10usize, 20, 30];
//! for (i, score) in enumerate(&mut scores) {
//!     *score += i;
//! }
//! assert_eq!(scores, vec![10, 21, 32]);
//!
//! let pairs: Vec<_> = enumerate(&scores).iter().collect();
//! assert_eq!(pairs, vec![(0, &10), (1, &21), (2, &32)]);
//! ```

use std::iter::FusedIterator;

/// Wraps an iterable handle so it yields `(index, element)` pairs.
///
/// `R` is usually a shared or mutable reference to a container. Any other
/// `IntoIterator` (a [`crate::range::Range`], an owned iterator) works too.
#[derive(Debug, Clone, Copy)]
pub struct Enumerate<R> {
    iterable: R,
}

/// Wraps `iterable` so that it yields `(index, element)` pairs.
///
/// # Examples
///
/// ```rust
/// # use pyrange::enumerate::enumerate;
/// # use pyrange::range::range;
///
/// let pairs: Vec<(usize, i32)> = enumerate(range(3)).into_iter().collect();
/// assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 2)]);
/// ```
#[inline]
pub fn enumerate<R>(iterable: R) -> Enumerate<R>
where
    R: IntoIterator,
{
    Enumerate { iterable }
}

impl<R> Enumerate<R> {
    /// Returns a reference to the wrapped iterable.
    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.iterable
    }

    /// Unwraps the iterable.
    #[inline]
    pub fn into_inner(self) -> R {
        self.iterable
    }
}

impl<R> Enumerate<R>
where
    R: IntoIterator + Clone,
{
    /// Starts a fresh traversal at index 0.
    ///
    /// Available for any cloneable handle, which covers shared references.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::enumerate::enumerate;
    ///
    /// let letters = ['a', 'b'];
    /// let e = enumerate(&letters);
    /// assert_eq!(e.iter().collect::<Vec<_>>(), e.iter().collect::<Vec<_>>());
    /// ```
    #[inline]
    pub fn iter(&self) -> EnumerateIter<R::IntoIter> {
        EnumerateIter::new(self.iterable.clone().into_iter())
    }
}

impl<'a, C> Enumerate<&'a mut C>
where
    C: ?Sized,
{
    /// Starts a fresh mutable traversal at index 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pyrange::enumerate::enumerate;
    ///
    /// let mut v = vec![0; 3];
    /// let mut e = enumerate(&mut v);
    /// for (i, x) in e.iter_mut() {
    ///     *x = i * 2;
    /// }
    /// for (_, x) in e.iter_mut() {
    ///     *x += 1;
    /// }
    /// assert_eq!(v, vec![1, 3, 5]);
    /// ```
    #[inline]
    pub fn iter_mut<'s>(&'s mut self) -> EnumerateIter<<&'s mut C as IntoIterator>::IntoIter>
    where
        &'s mut C: IntoIterator,
    {
        EnumerateIter::new((&mut *self.iterable).into_iter())
    }
}

impl<R> IntoIterator for Enumerate<R>
where
    R: IntoIterator,
{
    type Item = (usize, R::Item);
    type IntoIter = EnumerateIter<R::IntoIter>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        EnumerateIter::new(self.iterable.into_iter())
    }
}

impl<R> IntoIterator for &Enumerate<R>
where
    R: IntoIterator + Clone,
{
    type Item = (usize, R::Item);
    type IntoIter = EnumerateIter<R::IntoIter>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The cursor produced by iterating an [`Enumerate`].
///
/// Holds the running index and the inner iterator. Termination depends only
/// on the inner iterator; the index never takes part in it.
#[derive(Debug, Clone)]
pub struct EnumerateIter<I> {
    index: usize,
    inner: I,
}

impl<I> EnumerateIter<I> {
    #[inline]
    fn new(inner: I) -> Self {
        Self { index: 0, inner }
    }

    /// The index the next yielded element will carry.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<I> Iterator for EnumerateIter<I>
where
    I: Iterator,
{
    type Item = (usize, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> DoubleEndedIterator for EnumerateIter<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        // After popping, `len()` counts the elements strictly before `item`.
        Some((self.index + self.inner.len(), item))
    }
}

impl<I> ExactSizeIterator for EnumerateIter<I>
where
    I: ExactSizeIterator,
{
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<I> FusedIterator for EnumerateIter<I> where I: FusedIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::range;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::LinkedList;

    #[test]
    fn test_enumerate_linked_list_read_only() {
        let lst: LinkedList<i32> = [1, 3, 4, 5, 3, 5].into_iter().collect();

        let mut count = 0;
        for (i, _) in enumerate(&lst) {
            assert_eq!(i, count);
            count += 1;
        }
        assert_eq!(count, lst.len());
    }

    #[test]
    fn test_enumerate_range() {
        let pairs: Vec<(usize, i32)> = enumerate(range(10)).into_iter().collect();
        let expected: Vec<(usize, i32)> = (0..10).map(|i| (i as usize, i)).collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_second_components_reconstruct_input() {
        let data = vec!["x", "y", "z", "w"];
        let e = enumerate(&data);

        let indices: Vec<usize> = e.iter().map(|(i, _)| i).collect();
        let values: Vec<&str> = e.iter().map(|(_, v)| *v).collect();

        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(values, data);
    }

    #[test]
    fn test_empty_iterable() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(enumerate(&empty).iter().next(), None);
    }

    #[test]
    fn test_mutable_enumerate_writes_through() {
        let mut v: Vec<usize> = vec![1; 4];
        for (i, x) in enumerate(&mut v) {
            *x *= i;
        }
        assert_eq!(v, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_iter_mut_is_restartable() {
        let mut v = vec![0u32; 3];
        let mut e = enumerate(&mut v);

        for (i, x) in e.iter_mut() {
            *x = i as u32;
        }
        let snapshot: Vec<(usize, u32)> = e.iter_mut().map(|(i, x)| (i, *x)).collect();
        assert_eq!(snapshot, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_shared_wrapper_is_restartable() {
        let data = [5, 6, 7];
        let e = enumerate(&data);

        let first: Vec<_> = (&e).into_iter().collect();
        let second: Vec<_> = e.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![(0, &5), (1, &6), (2, &7)]);
    }

    #[test]
    fn test_index_tracks_inner_cursor() {
        let data = [9, 8, 7];
        let mut iter = enumerate(&data).iter();
        assert_eq!(iter.index(), 0);
        iter.next();
        iter.next();
        assert_eq!(iter.index(), 2);
        assert_eq!(iter.next(), Some((2, &7)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_double_ended() {
        let data = ['a', 'b', 'c', 'd'];
        let mut iter = enumerate(&data).iter();

        assert_eq!(iter.next_back(), Some((3, &'d')));
        assert_eq!(iter.next(), Some((0, &'a')));
        assert_eq!(iter.next_back(), Some((2, &'c')));
        assert_eq!(iter.next(), Some((1, &'b')));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_exact_size() {
        let data = vec![1, 2, 3, 4, 5];
        let mut iter = enumerate(&data).iter();

        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.size_hint(), (4, Some(4)));
    }

    #[test]
    fn test_randomized_lengths_yield_one_pair_per_element() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for round in 0..200 {
            // Make sure the empty case is always covered
            let len: usize = if round == 0 { 0 } else { rng.random_range(0..64) };
            let data: Vec<u32> = (0..len).map(|_| rng.random()).collect();

            let pairs: Vec<(usize, &u32)> = enumerate(&data).iter().collect();
            assert_eq!(pairs.len(), len);

            let indices: Vec<usize> = pairs.iter().map(|&(i, _)| i).collect();
            assert_eq!(indices, (0..len).collect::<Vec<_>>());

            let values: Vec<u32> = pairs.iter().map(|&(_, &v)| v).collect();
            assert_eq!(values, data);
        }
    }

    #[test]
    fn test_get_ref_and_into_inner() {
        let data = vec![1, 2];
        let e = enumerate(&data);
        assert_eq!(e.get_ref().len(), 2);
        assert!(std::ptr::eq(e.into_inner(), &data));
    }
}
