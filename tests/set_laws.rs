//! Property-based tests for the laws a [`Set`] is expected to satisfy.

use proptest::prelude::*;
use uniset::{Set, difference, intersection, union};

fn items() -> impl Strategy<Value = Vec<i16>> {
    prop::collection::vec(-50_i16..50, 0..40)
}

proptest! {
    #[test]
    fn prop_of_collapses_duplicates(xs in items()) {
        let set = Set::of(xs.clone());
        let mut distinct = xs.clone();
        distinct.sort();
        distinct.dedup();

        prop_assert!(set.len() <= xs.len());
        prop_assert_eq!(set.len(), distinct.len());
        prop_assert_eq!(set.len() == xs.len(), distinct.len() == xs.len());
        prop_assert_eq!(set.is_empty(), set.len() == 0);
    }

    #[test]
    fn prop_add_then_contains(xs in items(), x: i16) {
        let mut set = Set::of(xs);
        set.add(x);
        let len = set.len();
        prop_assert!(set.contains(&x));

        set.add(x);
        prop_assert_eq!(set.len(), len);
    }

    #[test]
    fn prop_remove_then_not_contains(xs in items(), x: i16) {
        let mut set = Set::of(xs);
        set.remove(&x);
        let len = set.len();
        prop_assert!(!set.contains(&x));

        set.remove(&x);
        prop_assert_eq!(set.len(), len);
        prop_assert_eq!(set.is_empty(), set.len() == 0);
    }

    #[test]
    fn prop_contains_all_matches_contains(xs in items(), probe in items()) {
        let set = Set::of(xs);
        prop_assert_eq!(set.contains_all(&probe), probe.iter().all(|x| set.contains(x)));
    }

    #[test]
    fn prop_items_are_complete_and_distinct(xs in items()) {
        let set = Set::of(xs.clone());
        let mut listed = set.items();
        prop_assert_eq!(listed.len(), set.len());

        listed.sort();
        listed.dedup();
        prop_assert_eq!(listed.len(), set.len());
        prop_assert!(xs.iter().all(|x| listed.contains(x)));
    }

    #[test]
    fn prop_union_and_intersection_commute(a in items(), b in items()) {
        let a = Set::of(a);
        let b = Set::of(b);
        prop_assert_eq!(union(&a, &b), union(&b, &a));
        prop_assert_eq!(intersection(&a, &b), intersection(&b, &a));
    }

    #[test]
    fn prop_union_size(a in items(), b in items()) {
        let a = Set::of(a);
        let b = Set::of(b);
        prop_assert_eq!(union(&a, &b).len(), a.len() + b.len() - intersection(&a, &b).len());
    }

    #[test]
    fn prop_subset_relations(a in items(), b in items()) {
        let a = Set::of(a);
        let b = Set::of(b);
        let i = intersection(&a, &b);
        let u = union(&a, &b);

        prop_assert!(i.is_subset(&a));
        prop_assert!(i.is_subset(&b));
        prop_assert!(a.is_subset(&u));
        prop_assert!(b.is_subset(&u));
    }

    #[test]
    fn prop_difference_is_not_commutative(a in items(), b in items()) {
        let a = Set::of(a);
        let b = Set::of(b);
        let forward = difference(&a, &b);
        let backward = difference(&b, &a);

        prop_assert!(forward.is_disjoint(&b));
        prop_assert!(backward.is_disjoint(&a));
        if a != b {
            prop_assert_ne!(forward, backward);
        }
    }

    #[test]
    fn prop_operands_are_untouched(a in items(), b in items()) {
        let a = Set::of(a);
        let b = Set::of(b);
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = union(&a, &b);
        let _ = intersection(&a, &b);
        let _ = difference(&a, &b);

        prop_assert_eq!(a, a_before);
        prop_assert_eq!(b, b_before);
    }

    #[test]
    fn prop_remove_set_matches_difference(a in items(), b in items()) {
        let mut a = Set::of(a);
        let b = Set::of(b);
        let expected = difference(&a, &b);
        a.remove_set(&b);
        prop_assert_eq!(a, expected);
    }

    #[test]
    fn prop_export_import_round_trip(xs in items()) {
        let set = Set::of(xs);
        let mut copy = Set::new();
        copy.import(set.export());
        prop_assert_eq!(copy, set);
    }
}

#[cfg(feature = "json")]
proptest! {
    #[test]
    fn prop_json_round_trip(xs in items()) {
        let set = Set::of(xs);
        let json = set.to_json().unwrap();
        let decoded: Set<i16> = Set::from_json(&json).unwrap();
        prop_assert_eq!(decoded, set);
    }

    #[test]
    fn prop_json_merge_is_union(a in items(), b in items()) {
        let mut merged = Set::of(a.clone());
        merged.merge_json(&serde_json::to_string(&b).unwrap()).unwrap();
        prop_assert_eq!(merged, union(&Set::of(a), &Set::of(b)));
    }
}

#[test]
fn end_to_end() {
    let a = Set::of([1, 2, 3]);
    let b = Set::of([3, 4, 5]);

    let u = union(&a, &b);
    assert_eq!(u.len(), 5);
    assert!(u.contains_all(&[1, 2, 3, 4, 5]));

    let i = intersection(&a, &b);
    assert_eq!(i.len(), 1);
    assert!(i.contains(&3));

    let d = difference(&a, &b);
    assert_eq!(d.len(), 2);
    assert!(d.contains_all(&[1, 2]));
}
