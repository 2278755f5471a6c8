//! Fuzz target for measurement parsing and evaluation.
//!
//! Goal: parsing never panics, and whatever parses evaluates to a verdict whose
//! flags agree with its findings.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_measurement_parser
//! ```

#![no_main]

use arbitrary::Arbitrary;
use bagcheck_domain::{AirlinePolicy, RawMeasurement, evaluate_raw};
use bagcheck_types::{AirlineId, BaggageCategory, CabinLimits, HoldLimits};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    length: Option<String>,
    width: Option<String>,
    height: Option<String>,
    weight: Option<String>,
    hold: bool,
}

fuzz_target!(|input: Input| {
    let Ok(policy) = AirlinePolicy::new(
        AirlineId::new(1),
        "Fuzz Air",
        "FZ",
        CabinLimits {
            length: 55.0,
            width: 35.0,
            height: 25.0,
            weight: 12.0,
        },
        HoldLimits {
            sum_max: 158.0,
            weight: 23.0,
        },
    ) else {
        return;
    };
    let category = if input.hold {
        BaggageCategory::Hold
    } else {
        BaggageCategory::Cabin
    };
    let raw = RawMeasurement {
        length: input.length,
        width: input.width,
        height: input.height,
        weight: input.weight,
    };

    if let Ok(verdict) = evaluate_raw(&policy, category, &raw) {
        assert_eq!(verdict.compliant, verdict.dimensions_ok && verdict.weight_ok);
        assert_eq!(verdict.compliant, verdict.findings.is_empty());
    }
});
