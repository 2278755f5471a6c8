use super::{dimensions, run_all, weight};
use crate::test_support::{cabin, hold, measure};
use bagcheck_types::{AppliedLimits, Axis, ids};

#[test]
fn cabin_reports_each_exceeding_axis_in_order() {
    let limits = AppliedLimits::Cabin(cabin(55.0, 35.0, 25.0, 12.0));
    let mut out = Vec::new();
    dimensions::run(&limits, &measure(56.0, 35.0, 30.0, 1.0), &mut out);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].axis, Some(Axis::Length));
    assert_eq!(out[0].excess, 1.0);
    assert_eq!(out[1].axis, Some(Axis::Height));
    assert_eq!(out[1].excess, 5.0);
    assert!(out.iter().all(|f| f.code == ids::CODE_AXIS_EXCEEDED));
    assert_eq!(
        out[1].help.as_deref(),
        Some("Reduce the height of your bag by at least 5 cm.")
    );
}

#[test]
fn cabin_does_not_rotate_the_bag() {
    // 35 x 55 x 25 would fit if rotated; axes are compared as given.
    let limits = AppliedLimits::Cabin(cabin(55.0, 35.0, 25.0, 12.0));
    let mut out = Vec::new();
    dimensions::run(&limits, &measure(35.0, 55.0, 25.0, 1.0), &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].axis, Some(Axis::Width));
}

#[test]
fn hold_uses_sum_not_axes() {
    let limits = AppliedLimits::Hold(hold(60.0, 23.0));

    for (l, w, h) in [(20.0, 20.0, 20.0), (10.0, 10.0, 40.0), (58.0, 1.0, 1.0)] {
        let mut out = Vec::new();
        dimensions::run(&limits, &measure(l, w, h, 1.0), &mut out);
        assert!(out.is_empty(), "({l}, {w}, {h}) should fit a 60 cm sum");
    }

    let mut out = Vec::new();
    dimensions::run(&limits, &measure(25.0, 25.0, 25.0, 1.0), &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].axis, None);
    assert_eq!(out[0].measured, 75.0);
    assert_eq!(out[0].limit, 60.0);
    assert_eq!(
        out[0].message,
        "length + width + height = 75 cm exceeds the hold maximum of 60 cm"
    );
}

#[test]
fn weight_applies_to_both_categories() {
    for limits in [
        AppliedLimits::Cabin(cabin(55.0, 35.0, 25.0, 12.0)),
        AppliedLimits::Hold(hold(158.0, 12.0)),
    ] {
        let mut out = Vec::new();
        weight::run(&limits, &measure(1.0, 1.0, 1.0, 12.0), &mut out);
        assert!(out.is_empty());

        weight::run(&limits, &measure(1.0, 1.0, 1.0, 12.3), &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].check_id, ids::CHECK_BAGGAGE_WEIGHT);
        assert_eq!(
            out[0].help.as_deref(),
            Some("Reduce the weight of your bag by at least 0.3 kg.")
        );
    }
}

#[test]
fn run_all_orders_dimensions_before_weight() {
    let limits = AppliedLimits::Cabin(cabin(55.0, 35.0, 25.0, 12.0));
    let mut out = Vec::new();
    run_all(&limits, &measure(60.0, 40.0, 25.0, 15.0), &mut out);

    let codes: Vec<&str> = out.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            ids::CODE_AXIS_EXCEEDED,
            ids::CODE_AXIS_EXCEEDED,
            ids::CODE_WEIGHT_EXCEEDED
        ]
    );
}
