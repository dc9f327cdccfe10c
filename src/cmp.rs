//!
//! Comparison capabilities consumed by [`SortedVec`](crate::SortedVec).
//!

use std::cmp::Ordering;
use std::fmt::{self, Debug};

///
/// A three-way comparison rule over elements of type `T`.
///
/// A comparator is supplied once at construction and stays fixed for the
/// container's lifetime. It must produce a consistent ordering for any pair
/// of elements that enter the container. Since the result is the closed
/// [`Ordering`] enumeration, out-of-domain comparison results cannot be
/// expressed in the first place.
///
pub trait Comparator<T> {
    /// Compares `a` to `b`, returning [`Ordering::Less`] if `a` sorts
    /// before `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

///
/// The default comparison rule: the element type's own [`Ord`] instance.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

///
/// A comparison rule expressed as a plain closure.
///
/// # Examples
///
/// ```
/// use sorted_vec::{SortBy, SortedVec};
///
/// let mut vec = SortedVec::with_comparator(SortBy(|a: &char, b: &char| b.cmp(a)));
/// vec.concat(['a', 'b']);
/// assert_eq!(vec, ['b', 'a']);
/// ```
#[derive(Clone, Copy)]
pub struct SortBy<F>(pub F);

impl<T, F> Comparator<T> for SortBy<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> Debug for SortBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SortBy(..)")
    }
}
