//!
//! A vector that keeps itself sorted.
//!
//! [`SortedVec`] owns a contiguous sequence of elements and a comparator
//! fixed at construction. Every value that enters the container is placed
//! at the index a binary search computes, so the contents are sorted at
//! every externally observable point: O(log n) comparisons to find the
//! position, O(n) for the physical shift, contiguous cache-friendly
//! storage. Operations that would reorder elements behind the comparator's
//! back are rejected, and absent values (`None` at the checked ingestion
//! boundaries) never make it into the container.
//!
//! # Examples
//!
//! Default sorting via [`Ord`]:
//!
//! ```
//! use sorted_vec::SortedVec;
//!
//! let mut vec = SortedVec::new();
//! vec.concat(['b', 'a', 'd', 'c']);
//! assert_eq!(vec, ['a', 'b', 'c', 'd']);
//! ```
//!
//! Custom sorting via a comparator closure:
//!
//! ```
//! use sorted_vec::{SortBy, SortedVec};
//!
//! let mut vec = SortedVec::with_comparator(SortBy(|a: &char, b: &char| b.cmp(a)));
//! vec.concat(['a', 'b']);
//! assert_eq!(vec, ['b', 'a']);
//! ```

mod cmp;
mod error;
mod search;
mod validate;
mod vec;

pub use cmp::{Comparator, NaturalOrder, SortBy};
pub use error::{Error, ErrorKind, Result};
pub use validate::require_present;
pub use vec::SortedVec;

#[cfg(test)]
mod tests;
