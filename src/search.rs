//!
//! Insertion-position search over an already sorted slice.
//!

use std::cmp::Ordering;

use crate::cmp::Comparator;
use crate::error::{Error, Result};

///
/// Returns the index in `[0, items.len()]` at which inserting `candidate`
/// keeps `items` sorted with respect to `cmp`.
///
/// Ties resolve to the upper bound: the returned index lies after the last
/// existing element that compares equal to the candidate, so equal elements
/// keep their arrival order among themselves.
///
/// For a fixed comparator and fixed contents the result is a pure function
/// of the candidate; the search itself never mutates anything.
///
pub(crate) fn insert_position<T, C>(items: &[T], cmp: &C, candidate: &T) -> usize
where
    C: Comparator<T>,
{
    if items.is_empty() {
        return 0;
    }
    match position_nonempty(items, cmp, candidate) {
        Ok(position) => position,
        // Boundary queries only fail on empty input, which was ruled
        // out above.
        Err(_) => unreachable!("boundary query failed on a nonempty sequence"),
    }
}

/// Iterative binary search over the window `[start, ending]`.
///
/// Window invariants: whenever `ending` has been narrowed it holds that
/// `candidate < items[ending]`, and whenever `start` has been advanced it
/// holds that `candidate > items[start]`. Each iteration either returns or
/// strictly shrinks the window, bounding the loop to O(log n) iterations
/// with one or two comparisons each.
fn position_nonempty<T, C>(items: &[T], cmp: &C, candidate: &T) -> Result<usize>
where
    C: Comparator<T>,
{
    let mut start = 0;
    let mut ending = items.len() - 1;

    loop {
        let middle = start + (ending - start) / 2;
        match cmp.compare(candidate, &items[middle]) {
            Ordering::Equal => return Ok(end_of_equal_run(items, cmp, candidate, middle)),
            Ordering::Less => {
                if is_first_index(items.len(), middle)? {
                    return Ok(0);
                }
                ending = middle;
            }
            Ordering::Greater => {
                if is_last_index(items.len(), middle)? {
                    return Ok(middle + 1);
                }
                match cmp.compare(candidate, &items[middle + 1]) {
                    Ordering::Less => return Ok(middle + 1),
                    Ordering::Equal => {
                        return Ok(end_of_equal_run(items, cmp, candidate, middle + 1))
                    }
                    Ordering::Greater => start = middle + 1,
                }
            }
        }
    }
}

/// Walks to the end of the contiguous run of elements equal to `candidate`
/// that starts at `from`, returning the index just past it. Equal runs are
/// contiguous in a sorted sequence, so this lands on the upper bound.
fn end_of_equal_run<T, C>(items: &[T], cmp: &C, candidate: &T, from: usize) -> usize
where
    C: Comparator<T>,
{
    let mut index = from;
    while index < items.len() && cmp.compare(candidate, &items[index]) == Ordering::Equal {
        index += 1;
    }
    index
}

/// Whether `index` is the first index of a sequence of length `len`.
///
/// # Errors
///
/// Asking this of an empty sequence is meaningless and fails with
/// [`ErrorKind::EmptyBoundary`](crate::ErrorKind::EmptyBoundary). The main
/// search never gets here on empty input since it short-circuits first.
pub(crate) fn is_first_index(len: usize, index: usize) -> Result<bool> {
    if len == 0 {
        return Err(Error::empty_boundary("first index"));
    }
    Ok(index == 0)
}

/// Whether `index` is the last index of a sequence of length `len`.
///
/// # Errors
///
/// Fails with [`ErrorKind::EmptyBoundary`](crate::ErrorKind::EmptyBoundary)
/// on an empty sequence, like [`is_first_index`].
pub(crate) fn is_last_index(len: usize, index: usize) -> Result<bool> {
    if len == 0 {
        return Err(Error::empty_boundary("last index"));
    }
    Ok(index == len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmp::{NaturalOrder, SortBy};
    use crate::error::ErrorKind;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn position(items: &[char], candidate: char) -> usize {
        insert_position(items, &NaturalOrder, &candidate)
    }

    #[test]
    fn empty_sequence_always_yields_zero() {
        assert_eq!(position(&[], 'a'), 0);
        assert_eq!(position(&[], 'z'), 0);
    }

    #[test]
    fn single_element_resolves_via_boundaries() {
        assert_eq!(position(&['a'], 'a'), 1);
        assert_eq!(position(&['a'], 'b'), 1);
        assert_eq!(position(&['b'], 'a'), 0);
    }

    #[test]
    fn candidate_lands_between_its_neighbors() {
        let items = ['b', 'd', 'f', 'h'];
        assert_eq!(position(&items, 'a'), 0);
        assert_eq!(position(&items, 'c'), 1);
        assert_eq!(position(&items, 'e'), 2);
        assert_eq!(position(&items, 'g'), 3);
        assert_eq!(position(&items, 'i'), 4);
    }

    #[test]
    fn equal_candidates_land_after_the_existing_run() {
        assert_eq!(position(&['a', 'a', 'a'], 'a'), 3);
        assert_eq!(position(&['a', 'b', 'b', 'c'], 'b'), 3);
        // The peek-ahead of the greater branch hits the run head.
        assert_eq!(position(&['a', 'b', 'b', 'b', 'b', 'b', 'b'], 'b'), 7);
    }

    #[test]
    fn reversed_comparator_searches_the_reversed_order() {
        let reversed = SortBy(|a: &char, b: &char| b.cmp(a));
        let items = ['d', 'c', 'b', 'a'];
        assert_eq!(insert_position(&items, &reversed, &'e'), 0);
        assert_eq!(insert_position(&items, &reversed, &'c'), 2);
        assert_eq!(insert_position(&items, &reversed, &'a'), 4);
    }

    #[test]
    fn matches_the_upper_bound_oracle_on_random_input() {
        let mut rng = SmallRng::seed_from_u64(0x5EED);
        for _ in 0..100 {
            let mut items: Vec<u16> = (0..rng.gen_range(0..64)).map(|_| rng.gen_range(0..32)).collect();
            items.sort_unstable();
            for _ in 0..32 {
                let candidate = rng.gen_range(0..34);
                let expected = items.partition_point(|el| *el <= candidate);
                assert_eq!(
                    insert_position(&items, &NaturalOrder, &candidate),
                    expected,
                    "candidate {candidate} in {items:?}"
                );
            }
        }
    }

    #[test]
    fn boundary_queries_fail_on_empty_sequences() {
        assert_eq!(
            is_first_index(0, 0).unwrap_err().kind(),
            ErrorKind::EmptyBoundary
        );
        assert_eq!(
            is_last_index(0, 0).unwrap_err().kind(),
            ErrorKind::EmptyBoundary
        );

        assert!(is_first_index(3, 0).unwrap());
        assert!(!is_first_index(3, 2).unwrap());
        assert!(is_last_index(3, 2).unwrap());
        assert!(!is_last_index(3, 0).unwrap());
    }
}
