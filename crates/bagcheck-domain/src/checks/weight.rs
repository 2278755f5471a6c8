use super::display_amount;
use bagcheck_types::{AppliedLimits, Axis, Finding, Measurement, ids};

pub fn run(limits: &AppliedLimits, measurement: &Measurement, out: &mut Vec<Finding>) {
    let limit = limits.weight();
    let measured = measurement.weight;
    if measured <= limit {
        return;
    }
    out.push(Finding {
        check_id: ids::CHECK_BAGGAGE_WEIGHT.to_string(),
        code: ids::CODE_WEIGHT_EXCEEDED.to_string(),
        axis: Some(Axis::Weight),
        measured,
        limit,
        excess: measured - limit,
        message: format!(
            "weight {measured} kg exceeds the {} maximum of {limit} kg",
            limits.category()
        ),
        help: Some(format!(
            "Reduce the weight of your bag by at least {} kg.",
            display_amount(measured - limit)
        )),
    });
}
