//! Tests for equality, hashing and area ordering

use std::cmp::Ordering;
use std::collections::HashSet;

use proptest::prelude::*;

use super::test_utils::{any_envelope, ordinate};
use crate::envelope::Envelope;

#[test]
fn test_nulls_are_equal() {
    let mut collapsed = Envelope::new(0.0, 1.0, 0.0, 1.0);
    collapsed.expand_by(-2.0);
    assert_eq!(Envelope::empty(), collapsed);
    assert_eq!(Envelope::empty().hash_code(), collapsed.hash_code());
}

#[test]
fn test_null_never_equals_bounded() {
    let degenerate = Envelope::new(0.0, 0.0, 0.0, 0.0);
    assert_ne!(Envelope::empty(), degenerate);
    assert!(!degenerate.equals(&Envelope::empty()));
}

#[test]
fn test_equality_is_exact() {
    let a = Envelope::new(0.1 + 0.2, 1.0, 0.0, 1.0);
    let b = Envelope::new(0.3, 1.0, 0.0, 1.0);
    assert_ne!(a, b);
    assert_ne!(Envelope::new(-0.0, 1.0, 0.0, 1.0), Envelope::new(0.0, 1.0, 0.0, 1.0));
}

#[test]
fn test_hash_code_fold() {
    fn ordinate_hash(value: f64) -> i32 {
        let bits = value.to_bits();
        (bits ^ (bits >> 32)) as i32
    }

    let envelope = Envelope::new(1.5, 2.5, -3.0, 4.0);
    let mut expected: i32 = 17;
    for value in [1.5, 2.5, -3.0, 4.0] {
        expected = expected.wrapping_mul(37).wrapping_add(ordinate_hash(value));
    }
    assert_eq!(envelope.hash_code(), expected);
}

#[test]
fn test_usable_in_hash_set() {
    let mut set = HashSet::new();
    set.insert(Envelope::new(0.0, 1.0, 0.0, 1.0));
    set.insert(Envelope::new(1.0, 0.0, 1.0, 0.0));
    set.insert(Envelope::empty());
    set.insert(Envelope::empty());
    assert_eq!(set.len(), 2);
}

#[test]
fn test_compare_to_by_area() {
    let small = Envelope::new(0.0, 1.0, 0.0, 1.0);
    let large = Envelope::new(0.0, 3.0, 0.0, 3.0);
    let null = Envelope::empty();

    assert_eq!(small.compare_to(&large), Ordering::Less);
    assert_eq!(large.compare_to(&small), Ordering::Greater);
    assert_eq!(null.compare_to(&small), Ordering::Less);
    assert_eq!(small.compare_to(&null), Ordering::Greater);
    assert_eq!(null.compare_to(&Envelope::empty()), Ordering::Equal);
}

#[test]
fn test_equal_area_compares_equal_but_is_not_equal() {
    let a = Envelope::new(0.0, 10.0, 0.0, 10.0);
    let b = Envelope::new(0.0, 20.0, 0.0, 5.0);
    assert_eq!(a.compare_to(&b), Ordering::Equal);
    assert_ne!(a, b);
}

#[test]
fn test_sort_by_compare_to() {
    let mut envelopes = vec![
        Envelope::new(0.0, 3.0, 0.0, 3.0),
        Envelope::empty(),
        Envelope::new(0.0, 1.0, 0.0, 1.0),
    ];
    envelopes.sort_by(Envelope::compare_to);
    assert!(envelopes[0].is_null());
    assert_eq!(envelopes[1].area(), 1.0);
    assert_eq!(envelopes[2].area(), 9.0);
}

proptest! {
    #[test]
    fn compare_to_is_reflexive(e in any_envelope()) {
        prop_assert_eq!(e.compare_to(&e), Ordering::Equal);
        prop_assert_eq!(e, e);
    }

    #[test]
    fn equal_envelopes_share_hash(x1 in ordinate(), x2 in ordinate(), y1 in ordinate(), y2 in ordinate()) {
        let forward = Envelope::new(x1, x2, y1, y2);
        let swapped = Envelope::new(x2, x1, y2, y1);
        let mut grown = Envelope::from_point(&(x1, y1));
        grown.expand_to_include_xy(x2, y2);

        for other in [swapped, grown] {
            prop_assert_eq!(forward, other);
            prop_assert_eq!(forward.hash_code(), other.hash_code());
        }

        let bbox = forward.to_bbox_array().unwrap();
        let from_bbox = Envelope::from_bbox_array(&bbox).unwrap();
        prop_assert_eq!(forward.hash_code(), from_bbox.hash_code());
    }
}
