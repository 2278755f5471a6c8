use bagcheck_types::{AppliedLimits, Finding, Measurement};

mod dimensions;
mod weight;

#[cfg(test)]
mod tests;

/// Excess amounts for human text, rounded to hundredths to hide float noise.
fn display_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// Run every rule in a fixed order: dimensions first, then weight.
pub fn run_all(limits: &AppliedLimits, measurement: &Measurement, out: &mut Vec<Finding>) {
    dimensions::run(limits, measurement, out);
    weight::run(limits, measurement, out);
}
