//!
//! The self-sorting vector itself.
//!

use std::fmt::{self, Debug};
use std::mem;
use std::ops::Deref;
use std::slice;
use std::vec;

use crate::cmp::{Comparator, NaturalOrder};
use crate::error::{Error, Result};
use crate::{search, validate};

///
/// A vector that keeps its elements continuously sorted.
///
/// Every value entering the container is placed at the position a binary
/// search computes against the fixed comparator, so the contents are sorted
/// non-decreasingly at every externally observable point. Equal elements
/// keep their arrival order. Locating the position costs O(log n)
/// comparisons; the physical insert still shifts, so it stays O(n).
///
/// Operations that would reorder elements independent of the comparator
/// (index assignment, fill, positional insert, reverse, rotate, shuffle,
/// unconditional re-sort) are rejected with
/// [`ErrorKind::UnsupportedOperation`](crate::ErrorKind::UnsupportedOperation).
/// There is deliberately no `DerefMut` and no `IndexMut`: the only mutable
/// surface is the comparator-respecting one.
///
/// # Examples
///
/// ```
/// use sorted_vec::SortedVec;
///
/// let mut vec = SortedVec::new();
/// vec.concat(['b', 'a', 'd', 'c']);
/// assert_eq!(vec, ['a', 'b', 'c', 'd']);
/// ```
#[derive(Clone)]
pub struct SortedVec<T, C = NaturalOrder> {
    items: Vec<T>,
    cmp: C,
}

impl<T: Ord> SortedVec<T, NaturalOrder> {
    /// Creates an empty vec ordered by the element type's [`Ord`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cmp: NaturalOrder,
        }
    }

    /// Creates a vec from existing contents, sorting them once.
    ///
    /// This is the only sort that ever runs for this container: O(n log n)
    /// comparisons up front, every later insert goes through the
    /// binary search.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec::SortedVec;
    ///
    /// let vec = SortedVec::from_vec(vec!['b', 'a']);
    /// assert_eq!(vec, ['a', 'b']);
    /// ```
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_vec_with(NaturalOrder, items)
    }

    /// Creates a vec from a batch of possibly-absent contents.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NilElement`](crate::ErrorKind::NilElement) if
    /// any value of the batch is `None`; no container is constructed then.
    pub fn try_from_options<I>(batch: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self::try_from_options_with(NaturalOrder, batch)
    }

    /// Creates a vec of `len` elements produced by a generator over the
    /// index range `0..len`, sorted once.
    #[must_use]
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self::from_vec((0..len).map(f).collect())
    }

    /// Like [`SortedVec::from_fn`], for generators that may come up empty.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NilElement`](crate::ErrorKind::NilElement) if
    /// the generator returns `None` for any index.
    pub fn try_from_fn(len: usize, f: impl FnMut(usize) -> Option<T>) -> Result<Self> {
        Self::try_from_options((0..len).map(f))
    }
}

impl<T: Ord + Clone> SortedVec<T, NaturalOrder> {
    /// Creates a vec holding `len` copies of a fill value.
    #[must_use]
    pub fn filled(len: usize, value: T) -> Self {
        Self::from_vec(vec![value; len])
    }
}

impl<T, C> SortedVec<T, C>
where
    C: Comparator<T>,
{
    /// Creates an empty vec with a custom comparator. The comparator stays
    /// fixed for the container's lifetime.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec::{SortBy, SortedVec};
    ///
    /// let mut vec = SortedVec::with_comparator(SortBy(|a: &u32, b: &u32| b.cmp(a)));
    /// vec.concat([1, 3, 2]);
    /// assert_eq!(vec, [3, 2, 1]);
    /// ```
    #[must_use]
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            items: Vec::new(),
            cmp,
        }
    }

    /// Creates a vec from existing contents and a custom comparator,
    /// sorting the contents once.
    #[must_use]
    pub fn from_vec_with(cmp: C, mut items: Vec<T>) -> Self {
        items.sort_by(|a, b| cmp.compare(a, b));
        Self { items, cmp }
    }

    /// Creates a vec from possibly-absent contents and a custom comparator.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NilElement`](crate::ErrorKind::NilElement) if
    /// any value of the batch is `None`.
    pub fn try_from_options_with<I>(cmp: C, batch: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Ok(Self::from_vec_with(cmp, validate::require_present(batch)?))
    }

    /// Adds a value, placing it at the position the binary search computes.
    ///
    /// Equal elements land after the existing run of equals, so duplicates
    /// keep their arrival order.
    pub fn push(&mut self, value: T) {
        let position = search::insert_position(&self.items, &self.cmp, &value);
        tracing::trace!(position, len = self.items.len(), "inserting element");
        self.items.insert(position, value);
    }

    /// Adds a value. Alias of [`SortedVec::push`]: there is no append or
    /// prepend on a sorted vec, every spelling of "add" places the value
    /// where the comparator says.
    pub fn insert(&mut self, value: T) {
        self.push(value);
    }

    /// Adds every value of a sequence, one at a time in the order given.
    ///
    /// Each value is placed against the current state, including values
    /// added earlier in the same call.
    pub fn concat<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.push(value);
        }
    }

    /// Adds a possibly-absent value.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NilElement`](crate::ErrorKind::NilElement) on
    /// `None`, leaving the contents untouched.
    pub fn try_push(&mut self, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => {
                self.push(value);
                Ok(())
            }
            None => Err(Error::nil_element(0)),
        }
    }

    /// Adds a batch of possibly-absent values.
    ///
    /// The whole batch is validated before the first insert, so a failure
    /// leaves the contents untouched.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NilElement`](crate::ErrorKind::NilElement) if
    /// any value of the batch is `None`.
    pub fn try_concat<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let values = validate::require_present(values)?;
        self.concat(values);
        Ok(())
    }

    /// Replaces the entire contents, then runs one full sort pass.
    ///
    /// Arbitrary replacement content carries no sortedness guarantee, so
    /// this is a sort, not a merge.
    pub fn replace(&mut self, items: Vec<T>) {
        tracing::trace!(len = items.len(), "replacing contents");
        self.items = items;
        self.resort();
    }

    /// Replaces the entire contents with a batch of possibly-absent values.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NilElement`](crate::ErrorKind::NilElement) if
    /// any value is `None`; the prior contents stay untouched.
    pub fn try_replace<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let items = validate::require_present(items)?;
        self.replace(items);
        Ok(())
    }

    /// Transforms every element in place, then re-establishes the sort
    /// order through the full-sort replace path.
    pub fn map_in_place(&mut self, f: impl FnMut(T) -> T) {
        let items = mem::take(&mut self.items);
        self.replace(items.into_iter().map(f).collect());
    }

    /// Transforms every element through a fallible transform.
    ///
    /// The candidate sequence is produced and validated in full before the
    /// contents are swapped, so the operation is atomic.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NilElement`](crate::ErrorKind::NilElement) if
    /// the transform returns `None` for any element; the original contents
    /// stay untouched.
    pub fn try_map_in_place(&mut self, mut f: impl FnMut(&T) -> Option<T>) -> Result<()> {
        let mapped = validate::require_present(self.items.iter().map(|item| f(item)))?;
        self.replace(mapped);
        Ok(())
    }

    /// Flattens a vec of sequences into a vec of their elements, sorted by
    /// the element type's [`Ord`] instance.
    ///
    /// The element type changes, so flattening consumes the container and
    /// produces a fresh one.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec::SortedVec;
    ///
    /// let mut vec = SortedVec::new();
    /// vec.concat([vec![1, 2], vec![4, 3]]);
    /// assert_eq!(vec.flatten(), [1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn flatten(self) -> SortedVec<<T as IntoIterator>::Item, NaturalOrder>
    where
        T: IntoIterator,
        <T as IntoIterator>::Item: Ord,
    {
        SortedVec::from_vec(self.items.into_iter().flatten().collect())
    }

    /// Flattens a vec of sequences of possibly-absent values.
    ///
    /// Every inner element is validated before anything is produced; on
    /// failure the original container is untouched (it is only borrowed).
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NilElement`](crate::ErrorKind::NilElement) if
    /// any inner value is `None`.
    pub fn try_flatten<U>(&self) -> Result<SortedVec<U, NaturalOrder>>
    where
        T: AsRef<[Option<U>]>,
        U: Ord + Clone,
    {
        let mut flat = Vec::new();
        for row in &self.items {
            flat.append(&mut validate::require_present(row.as_ref().iter().cloned())?);
        }
        Ok(SortedVec::from_vec(flat))
    }

    /// Rejected: writing through an index would bypass the comparator.
    ///
    /// # Errors
    ///
    /// Always fails with
    /// [`ErrorKind::UnsupportedOperation`](crate::ErrorKind::UnsupportedOperation);
    /// the contents are never touched. The same holds for every other
    /// rejected operation below.
    pub fn set(&mut self, _index: usize, _value: T) -> Result<()> {
        self.reject("set")
    }

    /// Rejected: filling every slot with one value discards the sort order
    /// the existing elements arrived in.
    ///
    /// # Errors
    ///
    /// Always [`ErrorKind::UnsupportedOperation`](crate::ErrorKind::UnsupportedOperation).
    pub fn fill(&mut self, _value: T) -> Result<()> {
        self.reject("fill")
    }

    /// Rejected: the container picks insertion positions itself; see
    /// [`SortedVec::push`].
    ///
    /// # Errors
    ///
    /// Always [`ErrorKind::UnsupportedOperation`](crate::ErrorKind::UnsupportedOperation).
    pub fn insert_at(&mut self, _index: usize, _value: T) -> Result<()> {
        self.reject("insert_at")
    }

    /// Rejected: reversing contradicts the comparator.
    ///
    /// # Errors
    ///
    /// Always [`ErrorKind::UnsupportedOperation`](crate::ErrorKind::UnsupportedOperation).
    pub fn reverse(&mut self) -> Result<()> {
        self.reject("reverse")
    }

    /// Rejected: rotating contradicts the comparator.
    ///
    /// # Errors
    ///
    /// Always [`ErrorKind::UnsupportedOperation`](crate::ErrorKind::UnsupportedOperation).
    pub fn rotate(&mut self, _mid: usize) -> Result<()> {
        self.reject("rotate")
    }

    /// Rejected: shuffling contradicts the comparator.
    ///
    /// # Errors
    ///
    /// Always [`ErrorKind::UnsupportedOperation`](crate::ErrorKind::UnsupportedOperation).
    pub fn shuffle(&mut self) -> Result<()> {
        self.reject("shuffle")
    }

    /// Rejected: the contents are sorted at every observable point, an
    /// unconditional re-sort has nothing to do.
    ///
    /// # Errors
    ///
    /// Always [`ErrorKind::UnsupportedOperation`](crate::ErrorKind::UnsupportedOperation).
    pub fn sort(&mut self) -> Result<()> {
        self.reject("sort")
    }

    /// Returns the index at which [`SortedVec::push`] would place the
    /// candidate right now. Read-only.
    #[must_use]
    pub fn insert_position(&self, candidate: &T) -> usize {
        search::insert_position(&self.items, &self.cmp, candidate)
    }

    fn reject(&self, op: &'static str) -> Result<()> {
        tracing::trace!(op, "rejecting reordering operation");
        Err(Error::unsupported(op))
    }

    fn resort(&mut self) {
        let cmp = &self.cmp;
        self.items.sort_by(|a, b| cmp.compare(a, b));
    }
}

// Pass-through reads and order-preserving removals. Removing elements
// cannot unsort the remainder, so these forward to the backing storage.
impl<T, C> SortedVec<T, C> {
    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the vec holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The contents as a shared slice, in sort order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the vec, handing out the backing storage in sort order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// The comparator this vec was constructed with.
    #[must_use]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Removes and returns the greatest element (per the comparator), or
    /// `None` if the vec is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes and returns the element at `index`, shifting the rest.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like [`Vec::remove`].
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates the elements in sort order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T, C> Deref for SortedVec<T, C> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T: Debug, C> Debug for SortedVec<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T: Ord> Default for SortedVec<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedVec<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C> Extend<T> for SortedVec<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.concat(iter);
    }
}

impl<T, C> IntoIterator for SortedVec<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a SortedVec<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq, C, C2> PartialEq<SortedVec<T, C2>> for SortedVec<T, C> {
    fn eq(&self, other: &SortedVec<T, C2>) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, C> Eq for SortedVec<T, C> {}

impl<T: PartialEq, C> PartialEq<[T]> for SortedVec<T, C> {
    fn eq(&self, other: &[T]) -> bool {
        self.items.as_slice() == other
    }
}

impl<T: PartialEq, C, const N: usize> PartialEq<[T; N]> for SortedVec<T, C> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items == *other
    }
}

impl<T: PartialEq, C> PartialEq<Vec<T>> for SortedVec<T, C> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.items == other
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::SortedVec;
    use crate::cmp::NaturalOrder;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T: Serialize, C> Serialize for SortedVec<T, C> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.items.serialize(serializer)
        }
    }

    // Deserializing re-establishes the invariant through the single-sort
    // construction path, so tampered input cannot smuggle in unsorted state.
    impl<'de, T> Deserialize<'de> for SortedVec<T, NaturalOrder>
    where
        T: Deserialize<'de> + Ord,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Ok(SortedVec::from_vec(Vec::<T>::deserialize(deserializer)?))
        }
    }
}
