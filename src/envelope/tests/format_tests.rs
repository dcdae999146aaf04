//! Tests for the canonical text form

use proptest::prelude::*;

use super::test_utils::{assert_extents, bounded_envelope};
use crate::coordinate::Point;
use crate::envelope::{Envelope, EnvelopeError, Ordinate};

fn ordinate_error(text: &str) -> Ordinate {
    match Envelope::parse(text) {
        Err(EnvelopeError::InvalidOrdinate { ordinate, .. }) => ordinate,
        other => panic!("expected an ordinate error for '{}', got {:?}", text, other),
    }
}

#[test]
fn test_display() {
    assert_eq!(Envelope::new(5.0, 1.0, 5.0, 1.0).to_string(), "Env[1 : 5, 1 : 5]");
    assert_eq!(Envelope::new(-0.5, 1e-3, 2.25, 1e10).to_string(), "Env[-0.5 : 0.001, 2.25 : 10000000000]");
    assert_eq!(Envelope::empty().to_string(), "Env[Null]");
}

#[test]
fn test_parse_null() {
    assert!(Envelope::parse("Env[Null]").unwrap().is_null());
}

#[test]
fn test_parse_normalizes() {
    let envelope: Envelope = "Env[5 : 1, 5 : 1]".parse().unwrap();
    assert_extents(&envelope, 1.0, 5.0, 1.0, 5.0);
}

#[test]
fn test_parse_accepts_number_syntax() {
    let envelope = Envelope::parse("Env[-1.5e2:+2.,.5 :  7E-1 ]").unwrap();
    assert_extents(&envelope, -150.0, 2.0, 0.5, 0.7);
}

#[test]
fn test_parse_rejects_wrapper() {
    for text in ["", "Env[", "Env[1 : 2, 3 : 4", "env[1 : 2, 3 : 4]", "Box[1 : 2, 3 : 4]", " Env[Null]"] {
        match Envelope::parse(text) {
            Err(EnvelopeError::InvalidWrapper(input)) => assert_eq!(input, text),
            other => panic!("expected a wrapper error for '{}', got {:?}", text, other),
        }
    }
}

#[test]
fn test_parse_rejects_structure() {
    for text in ["Env[]", "Env[null]", "Env[1 : 2]", "Env[1 : 2, 3 : 4, 5 : 6]", "Env[1 : 2 : 3, 4 : 5]", "Env[1, 2]"] {
        let result = Envelope::parse(text);
        assert!(
            matches!(result, Err(EnvelopeError::InvalidStructure { .. })),
            "expected a structure error for '{}', got {:?}",
            text,
            result
        );
    }
}

#[test]
fn test_parse_names_failing_ordinate() {
    assert_eq!(ordinate_error("Env[a : 2, 3 : 4]"), Ordinate::MinX);
    assert_eq!(ordinate_error("Env[1 : , 3 : 4]"), Ordinate::MaxX);
    assert_eq!(ordinate_error("Env[1 : 2, NaN : 4]"), Ordinate::MinY);
    assert_eq!(ordinate_error("Env[1 : 2, 3 : inf]"), Ordinate::MaxY);
    assert_eq!(ordinate_error("Env[1 : 2, 3 : 1e400]"), Ordinate::MaxY);
}

#[test]
fn test_parse_rejects_grouping_separators() {
    let result = Envelope::parse("Env[1_000 : 2, 3 : 4]");
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert!(error.is_format_error());
    assert!(error.to_string().contains("x-min"));
}

#[test]
fn test_round_trip_extremes() {
    for envelope in [
        Envelope::new(f64::MIN, f64::MAX, -f64::MIN_POSITIVE, 5e-324),
        Envelope::new(0.1, 0.2, 0.3, 1.0 / 3.0),
        Envelope::new(-0.0, 1.0, -0.0, -0.0),
    ] {
        let text = envelope.to_string();
        assert_eq!(Envelope::parse(&text).unwrap(), envelope, "round trip of {}", text);
    }
}

#[test]
fn test_round_trip_signed_zero_bounds() {
    let mut envelope = Envelope::from_point(&Point::new(-0.0, -0.0));
    envelope.expand_by(0.0);
    assert_eq!(envelope.to_string(), "Env[-0 : 0, -0 : 0]");
    assert_eq!(Envelope::parse(&envelope.to_string()).unwrap(), envelope);

    let swapped = Envelope::new(0.0, -0.0, -0.0, 0.0);
    assert_eq!(Envelope::parse(&swapped.to_string()).unwrap(), swapped);
}

proptest! {
    #[test]
    fn canonical_text_round_trips(e in bounded_envelope()) {
        let parsed = Envelope::parse(&e.to_string()).unwrap();
        prop_assert_eq!(parsed, e);
    }

    #[test]
    fn arbitrary_finite_bits_round_trip(x1 in any::<f64>(), x2 in any::<f64>(), y1 in any::<f64>(), y2 in any::<f64>()) {
        prop_assume!(x1.is_finite() && x2.is_finite() && y1.is_finite() && y2.is_finite());
        let e = Envelope::new(x1, x2, y1, y2);
        prop_assert_eq!(Envelope::parse(&e.to_string()).unwrap(), e);
    }
}
