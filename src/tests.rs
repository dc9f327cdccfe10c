use super::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

fn assert_sorted_by<T, C: Comparator<T>>(vec: &SortedVec<T, C>) {
    for pair in vec.windows(2) {
        assert_ne!(
            vec.comparator().compare(&pair[0], &pair[1]),
            Ordering::Greater,
            "sort invariant violated"
        );
    }
}

#[test]
fn pushed_values_come_out_sorted() {
    let mut vec = SortedVec::new();
    vec.concat(['b', 'a', 'd', 'c']);
    assert_eq!(vec, ['a', 'b', 'c', 'd']);
    assert_sorted_by(&vec);
}

#[test]
fn absent_value_leaves_an_empty_vec_empty() {
    let mut vec = SortedVec::<char>::new();
    let err = vec.try_push(None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NilElement);
    assert_eq!(vec, []);
}

#[test]
fn reversing_comparator_orders_descending() {
    let reversed = SortBy(|a: &char, b: &char| b.cmp(a));

    let mut vec = SortedVec::with_comparator(reversed);
    vec.concat(['a', 'b']);
    assert_eq!(vec, ['b', 'a']);

    let mut vec = SortedVec::with_comparator(reversed);
    vec.concat(['c', 'd']);
    vec.concat(['a', 'b']);
    assert_eq!(vec, ['d', 'c', 'b', 'a']);
    assert_sorted_by(&vec);
}

#[test]
fn flatten_produces_a_sorted_vec_of_inner_elements() {
    let mut vec = SortedVec::new();
    vec.concat([vec![1, 2], vec![4, 3]]);
    assert_eq!(vec.flatten(), [1, 2, 3, 4]);
}

#[test]
fn flatten_over_an_absent_value_changes_nothing() {
    let mut vec: SortedVec<Vec<Option<i32>>> = SortedVec::new();
    vec.push(vec![None, Some(1)]);

    let err = vec.try_flatten::<i32>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NilElement);
    assert_eq!(vec, [vec![None, Some(1)]]);
}

#[test]
fn duplicates_keep_their_arrival_order() {
    // Order by key only, so the payload shows which duplicate came first.
    let by_key = SortBy(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
    let mut vec = SortedVec::with_comparator(by_key);

    vec.push((1, "first"));
    vec.push((2, "between"));
    vec.push((1, "second"));
    vec.push((1, "third"));

    assert_eq!(
        vec.as_slice(),
        &[(1, "first"), (1, "second"), (1, "third"), (2, "between")]
    );
}

#[test]
fn every_mutation_path_upholds_the_sort_invariant() {
    let mut vec = SortedVec::from_vec(vec![9, 5, 7]);
    assert_sorted_by(&vec);

    vec.push(6);
    assert_sorted_by(&vec);

    vec.concat([12, 1, 8]);
    assert_sorted_by(&vec);

    vec.replace(vec![4, 2, 10]);
    assert_sorted_by(&vec);

    vec.map_in_place(|el| 100 - el);
    assert_sorted_by(&vec);
    assert_eq!(vec, [90, 96, 98]);

    vec.try_map_in_place(|el| Some(el / 2)).unwrap();
    assert_sorted_by(&vec);
}

#[test]
fn randomized_inserts_match_a_stable_sort_oracle() {
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
    for _ in 0..20 {
        let values: Vec<u32> = (0..rng.gen_range(0..256)).map(|_| rng.gen_range(0..64)).collect();

        let mut vec = SortedVec::new();
        vec.concat(values.iter().copied());
        assert_sorted_by(&vec);

        let mut oracle = values;
        oracle.sort();
        assert_eq!(vec, oracle);
    }
}

#[test]
fn randomized_inserts_with_a_custom_comparator() {
    let mut rng = SmallRng::seed_from_u64(0xDECADE);
    let descending = SortBy(|a: &u32, b: &u32| b.cmp(a));

    let mut vec = SortedVec::with_comparator(descending);
    let mut oracle = Vec::new();
    for _ in 0..512 {
        let value = rng.gen_range(0..128u32);
        vec.push(value);
        oracle.push(value);
        assert_eq!(vec.len(), oracle.len());
    }
    assert_sorted_by(&vec);

    oracle.sort_by(|a, b| b.cmp(a));
    assert_eq!(vec, oracle);
}

#[test]
fn failed_operations_never_leave_a_partial_state() {
    let mut vec = SortedVec::from_vec(vec![1, 2, 3]);

    assert!(vec.try_concat([Some(0), Some(4), None]).is_err());
    assert_eq!(vec, [1, 2, 3]);

    assert!(vec.try_replace([None::<i32>]).is_err());
    assert_eq!(vec, [1, 2, 3]);

    assert!(vec.try_map_in_place(|_| None).is_err());
    assert_eq!(vec, [1, 2, 3]);

    assert!(vec.reverse().is_err());
    assert!(vec.sort().is_err());
    assert_eq!(vec, [1, 2, 3]);
}
