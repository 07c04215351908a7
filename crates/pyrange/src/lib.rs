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

//! # pyrange
//!
//! Python-flavoured iteration utilities over primitive integers and borrowed
//! containers. Every type here is a lazy, restartable view: iterating it
//! twice yields the same sequence twice.
//!
//! ## Modules
//!
//! - `range`: Half-open integer ranges `[start, stop)` (`Range<T>`) with
//!   clamping construction, length, membership, indexed access, and a cursor
//!   implementing `Iterator`, `DoubleEndedIterator`, `ExactSizeIterator` and
//!   `FusedIterator`.
//! - `enumerate`: `(index, element)` pairing over any iterable. Shared
//!   references give read-only access, mutable references give write access.
//! - `robin`: Round-robin cycles (`Robin<T>`) whose `exclude(k)` view visits
//!   every part but `k`, starting just after it and wrapping around.
//! - `error`: Typed precondition errors returned by the `try_` operations.
//!
//! ## Preconditions
//!
//! Invalid input is never undefined behavior. Operations with a precondition
//! come in two forms:
//!
//! - `Range::at`, `Robin::new`, `Robin::exclude` assert it and panic.
//! - `Range::try_at`, `Robin::try_new`, `Robin::try_exclude` return a
//!   `RangeIndexError` or `RobinError` instead.
//!
//! Reversed range bounds are not a precondition failure; they are clamped to
//! an empty range.
//!
//! ## Example
//!
//! ```rust
//! use pyrange::prelude::*;
//!
//! let rr = Robin::new(4u32);
//! for (i, part) in enumerate(rr.exclude(1)) {
//!     assert_eq!(part, (i as u32 + 2) % 4);
//! }
//!
//! assert_eq!(range(3).iter().sum::<i32>(), 3);
//! ```

pub mod enumerate;
pub mod error;
pub mod range;
pub mod robin;

/// Re-exports of the types and constructors most callers need.
pub mod prelude {
    pub use crate::enumerate::{Enumerate, enumerate};
    pub use crate::error::{RangeIndexError, RobinError};
    pub use crate::range::{Range, range};
    pub use crate::robin::{Exclude, Robin};
}
