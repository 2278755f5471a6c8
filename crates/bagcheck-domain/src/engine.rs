use crate::checks;
use crate::measurement::{MeasurementError, RawMeasurement, parse_measurement};
use crate::model::AirlinePolicy;
use bagcheck_types::{BaggageCategory, Finding, Measurement, Verdict, ids};

/// Evaluate a validated measurement against one airline's rules for `category`.
///
/// Pure: neither the policy nor the measurement is modified.
pub fn evaluate(
    policy: &AirlinePolicy,
    category: BaggageCategory,
    measurement: &Measurement,
) -> Verdict {
    let limits = policy.limits(category);

    let mut findings: Vec<Finding> = Vec::new();
    checks::run_all(&limits, measurement, &mut findings);

    // Flags are derived from findings so the two can never disagree.
    let dimensions_ok = !findings
        .iter()
        .any(|f| f.check_id == ids::CHECK_BAGGAGE_DIMENSIONS);
    let weight_ok = !findings
        .iter()
        .any(|f| f.check_id == ids::CHECK_BAGGAGE_WEIGHT);

    Verdict {
        dimensions_ok,
        weight_ok,
        compliant: dimensions_ok && weight_ok,
        limits,
        measurement: *measurement,
        findings,
    }
}

/// Parse raw user input, then evaluate. Refuses to compare anything if parsing fails.
pub fn evaluate_raw(
    policy: &AirlinePolicy,
    category: BaggageCategory,
    raw: &RawMeasurement,
) -> Result<Verdict, MeasurementError> {
    let measurement = parse_measurement(raw)?;
    Ok(evaluate(policy, category, &measurement))
}
