//! Tests for expanding and translating envelopes

use proptest::prelude::*;

use super::test_utils::{any_envelope, assert_extents, bounded_envelope};
use crate::coordinate::Point;
use crate::envelope::Envelope;

#[test]
fn test_expand_by_grows_symmetrically() {
    let mut envelope = Envelope::new(0.0, 10.0, 0.0, 10.0);
    envelope.expand_by(2.0);
    assert_extents(&envelope, -2.0, 12.0, -2.0, 12.0);

    envelope.expand_by_xy(-1.0, 3.0);
    assert_extents(&envelope, -1.0, 11.0, -5.0, 15.0);
}

#[test]
fn test_expand_by_collapses_to_null() {
    let mut envelope = Envelope::new(0.0, 2.0, 0.0, 10.0);
    envelope.expand_by_xy(-1.5, 0.0);
    assert!(envelope.is_null());

    let mut just_fits = Envelope::new(0.0, 2.0, 0.0, 2.0);
    just_fits.expand_by(-1.0);
    assert_extents(&just_fits, 1.0, 1.0, 1.0, 1.0);
}

#[test]
fn test_expand_by_on_null_is_noop() {
    let mut envelope = Envelope::empty();
    envelope.expand_by(5.0);
    assert!(envelope.is_null());
}

#[test]
fn test_expand_to_include_point() {
    let mut envelope = Envelope::empty();
    envelope.expand_to_include(&Point::new(3.0, 4.0));
    assert_extents(&envelope, 3.0, 3.0, 4.0, 4.0);

    envelope.expand_to_include_xy(-1.0, 6.0);
    assert_extents(&envelope, -1.0, 3.0, 4.0, 6.0);

    envelope.expand_to_include(&(0.0, 5.0));
    assert_extents(&envelope, -1.0, 3.0, 4.0, 6.0);
}

#[test]
fn test_expand_to_include_envelope() {
    let mut envelope = Envelope::empty();
    envelope.expand_to_include_envelope(&Envelope::empty());
    assert!(envelope.is_null());

    envelope.expand_to_include_envelope(&Envelope::new(0.0, 1.0, 0.0, 1.0));
    assert_extents(&envelope, 0.0, 1.0, 0.0, 1.0);

    envelope.expand_to_include_envelope(&Envelope::new(-2.0, 0.5, 0.5, 3.0));
    assert_extents(&envelope, -2.0, 1.0, 0.0, 3.0);

    envelope.expand_to_include_envelope(&Envelope::empty());
    assert_extents(&envelope, -2.0, 1.0, 0.0, 3.0);
}

#[test]
fn test_expanded_by_unions_without_mutating() {
    let a = Envelope::new(0.0, 1.0, 0.0, 1.0);
    let b = Envelope::new(2.0, 3.0, -1.0, 0.5);
    let union = a.expanded_by(b);

    assert_extents(&union, 0.0, 3.0, -1.0, 1.0);
    assert_extents(&a, 0.0, 1.0, 0.0, 1.0);
    assert_extents(&b, 2.0, 3.0, -1.0, 0.5);
}

#[test]
fn test_expanded_by_null_is_identity() {
    let e = Envelope::new(0.0, 1.0, 0.0, 1.0);
    let n = Envelope::empty();
    assert_eq!(e.expanded_by(n), e);
    assert_eq!(n.expanded_by(e), e);
    assert!(n.expanded_by(n).is_null());
}

#[test]
fn test_translate() {
    let mut envelope = Envelope::new(0.0, 1.0, 0.0, 2.0);
    envelope.translate(10.0, -5.0);
    assert_extents(&envelope, 10.0, 11.0, -5.0, -3.0);

    let mut null = Envelope::empty();
    null.translate(1.0, 1.0);
    assert!(null.is_null());
}

#[test]
fn test_extend_with_points() {
    let mut envelope = Envelope::new(0.0, 1.0, 0.0, 1.0);
    envelope.extend(vec![Point::new(5.0, 0.5), Point::new(0.5, -5.0)]);
    assert_extents(&envelope, 0.0, 5.0, -5.0, 1.0);
}

proptest! {
    #[test]
    fn include_covered_point_is_idempotent(e in bounded_envelope(), fx in 0.0..=1.0f64, fy in 0.0..=1.0f64) {
        let x = e.min_x() + (e.max_x() - e.min_x()) * fx;
        let y = e.min_y() + (e.max_y() - e.min_y()) * fy;
        prop_assume!(e.covers_xy(x, y));

        let mut expanded = e;
        expanded.expand_to_include_xy(x, y);
        prop_assert_eq!(expanded, e);
    }

    #[test]
    fn union_covers_both_operands(a in bounded_envelope(), b in bounded_envelope()) {
        let union = a.expanded_by(b);
        prop_assert!(union.covers(&a));
        prop_assert!(union.covers(&b));
    }

    #[test]
    fn null_absorbs_in_union(e in any_envelope()) {
        let n = Envelope::empty();
        prop_assert_eq!(e.expanded_by(n), e);
        prop_assert_eq!(n.expanded_by(e), e);
    }
}
