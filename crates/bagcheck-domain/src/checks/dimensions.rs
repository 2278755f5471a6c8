use super::display_amount;
use bagcheck_types::{AppliedLimits, Axis, CabinLimits, Finding, HoldLimits, Measurement, ids};

pub fn run(limits: &AppliedLimits, measurement: &Measurement, out: &mut Vec<Finding>) {
    match limits {
        AppliedLimits::Cabin(cabin) => run_cabin(cabin, measurement, out),
        AppliedLimits::Hold(hold) => run_hold(hold, measurement, out),
    }
}

/// Per-axis comparison in the order given; no reordering of the bag's axes.
fn run_cabin(limits: &CabinLimits, measurement: &Measurement, out: &mut Vec<Finding>) {
    for axis in Axis::DIMENSIONS {
        let measured = measurement.axis(axis);
        let limit = limits.axis(axis);
        if measured <= limit {
            continue;
        }
        out.push(Finding {
            check_id: ids::CHECK_BAGGAGE_DIMENSIONS.to_string(),
            code: ids::CODE_AXIS_EXCEEDED.to_string(),
            axis: Some(axis),
            measured,
            limit,
            excess: measured - limit,
            message: format!("{axis} {measured} cm exceeds the cabin maximum of {limit} cm"),
            help: Some(format!(
                "Reduce the {axis} of your bag by at least {} cm.",
                display_amount(measured - limit)
            )),
        });
    }
}

fn run_hold(limits: &HoldLimits, measurement: &Measurement, out: &mut Vec<Finding>) {
    let sum = measurement.dimension_sum();
    if sum <= limits.sum_max {
        return;
    }
    out.push(Finding {
        check_id: ids::CHECK_BAGGAGE_DIMENSIONS.to_string(),
        code: ids::CODE_SUM_EXCEEDED.to_string(),
        axis: None,
        measured: sum,
        limit: limits.sum_max,
        excess: sum - limits.sum_max,
        message: format!(
            "length + width + height = {} cm exceeds the hold maximum of {} cm",
            display_amount(sum),
            limits.sum_max
        ),
        help: Some(format!(
            "Reduce the combined dimensions of your bag by at least {} cm.",
            display_amount(sum - limits.sum_max)
        )),
    });
}
