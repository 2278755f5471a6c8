//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - cabin per-axis comparison and equality at the limit
//! - hold sum comparison independent of axis distribution
//! - verdict flag consistency with findings
//! - measurement parsing never comparing against missing or non-finite values

use crate::engine::evaluate;
use crate::measurement::{MeasurementError, RawMeasurement, parse_measurement};
use crate::test_support::{measure, policy};
use bagcheck_types::{Axis, BaggageCategory, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Positive limit values, in whole and half units to keep sums exact.
fn arb_limit() -> impl Strategy<Value = f64> {
    (1u32..400).prop_map(|n| f64::from(n) / 2.0)
}

/// Fraction of a limit in (0, 1].
fn arb_fraction() -> impl Strategy<Value = f64> {
    (1u32..=100).prop_map(|n| f64::from(n) / 100.0)
}

fn arb_category() -> impl Strategy<Value = BaggageCategory> {
    prop_oneof![Just(BaggageCategory::Cabin), Just(BaggageCategory::Hold)]
}

fn arb_limits() -> impl Strategy<Value = ((f64, f64, f64, f64), (f64, f64))> {
    (
        (arb_limit(), arb_limit(), arb_limit(), arb_limit()),
        (arb_limit(), arb_limit()),
    )
}

fn arb_measurement() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (arb_limit(), arb_limit(), arb_limit(), arb_limit())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn cabin_within_every_limit_is_compliant(
        (c, h) in arb_limits(),
        (fl, fw, fh, fkg) in (arb_fraction(), arb_fraction(), arb_fraction(), arb_fraction()),
    ) {
        let p = policy(c, h);
        let m = measure(c.0 * fl, c.1 * fw, c.2 * fh, c.3 * fkg);
        let v = evaluate(&p, BaggageCategory::Cabin, &m);
        prop_assert!(v.compliant);
        prop_assert!(v.findings.is_empty());
    }

    #[test]
    fn cabin_exceeding_any_axis_fails_regardless_of_weight(
        (c, h) in arb_limits(),
        axis in prop_oneof![Just(Axis::Length), Just(Axis::Width), Just(Axis::Height)],
        over in arb_limit(),
        kg in arb_limit(),
    ) {
        let p = policy(c, h);
        let mut m = measure(c.0, c.1, c.2, kg);
        match axis {
            Axis::Length => m.length += over,
            Axis::Width => m.width += over,
            Axis::Height => m.height += over,
            Axis::Weight => unreachable!(),
        }
        let v = evaluate(&p, BaggageCategory::Cabin, &m);
        prop_assert!(!v.dimensions_ok);
        prop_assert!(!v.compliant);
        prop_assert!(v.findings.iter().any(|f| f.axis == Some(axis)));
    }

    #[test]
    fn hold_dimension_flag_matches_sum(
        (c, h) in arb_limits(),
        (l, w, ht, kg) in arb_measurement(),
    ) {
        let p = policy(c, h);
        let v = evaluate(&p, BaggageCategory::Hold, &measure(l, w, ht, kg));
        prop_assert_eq!(v.dimensions_ok, l + w + ht <= h.0);
        prop_assert_eq!(v.weight_ok, kg <= h.1);
    }

    #[test]
    fn hold_result_is_independent_of_axis_order(
        (c, h) in arb_limits(),
        (l, w, ht, kg) in arb_measurement(),
    ) {
        let p = policy(c, h);
        let a = evaluate(&p, BaggageCategory::Hold, &measure(l, w, ht, kg));
        let b = evaluate(&p, BaggageCategory::Hold, &measure(ht, l, w, kg));
        prop_assert_eq!(a.dimensions_ok, b.dimensions_ok);
    }

    #[test]
    fn exact_limits_are_compliant(
        (c, h) in arb_limits(),
    ) {
        let p = policy(c, h);
        let cabin = evaluate(&p, BaggageCategory::Cabin, &measure(c.0, c.1, c.2, c.3));
        prop_assert!(cabin.compliant);

        let hold = evaluate(&p, BaggageCategory::Hold, &measure(h.0 / 2.0, h.0 / 4.0, h.0 / 4.0, h.1));
        prop_assert!(hold.compliant);
    }

    #[test]
    fn overall_is_conjunction_and_findings_agree(
        (c, h) in arb_limits(),
        (l, w, ht, kg) in arb_measurement(),
        category in arb_category(),
    ) {
        let p = policy(c, h);
        let v = evaluate(&p, category, &measure(l, w, ht, kg));
        prop_assert_eq!(v.compliant, v.dimensions_ok && v.weight_ok);
        prop_assert_eq!(v.compliant, v.findings.is_empty());
        prop_assert_eq!(
            v.weight_ok,
            !v.findings.iter().any(|f| f.check_id == ids::CHECK_BAGGAGE_WEIGHT)
        );
        prop_assert!(v.findings.iter().all(|f| f.excess > 0.0));
    }

    #[test]
    fn dropping_any_field_yields_incomplete(
        (l, w, ht, kg) in arb_measurement(),
        drop in prop_oneof![
            Just(Axis::Length),
            Just(Axis::Width),
            Just(Axis::Height),
            Just(Axis::Weight)
        ],
    ) {
        let mut raw = RawMeasurement::new(l.to_string(), w.to_string(), ht.to_string(), kg.to_string());
        match drop {
            Axis::Length => raw.length = None,
            Axis::Width => raw.width = None,
            Axis::Height => raw.height = None,
            Axis::Weight => raw.weight = None,
        }
        let err = parse_measurement(&raw).unwrap_err();
        prop_assert_eq!(err, MeasurementError::Incomplete { missing: vec![drop] });
    }

    #[test]
    fn parsing_arbitrary_text_never_panics(
        l in ".{0,12}",
        w in ".{0,12}",
        ht in ".{0,12}",
        kg in ".{0,12}",
    ) {
        let raw = RawMeasurement::new(l, w, ht, kg);
        if let Ok(m) = parse_measurement(&raw) {
            for axis in Axis::ALL {
                let value = m.axis(axis);
                prop_assert!(value.is_finite() && value > 0.0);
            }
        }
    }

    #[test]
    fn displayed_numbers_round_trip(
        (l, w, ht, kg) in arb_measurement(),
    ) {
        let raw = RawMeasurement::new(l.to_string(), w.to_string(), ht.to_string(), kg.to_string());
        let m = parse_measurement(&raw).expect("display output of a positive f64 parses");
        prop_assert_eq!(m, measure(l, w, ht, kg));
    }
}
