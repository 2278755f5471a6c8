//! Pure compliance evaluation (no IO).
//!
//! Input: an airline policy resolved elsewhere, a baggage category, and user measurements.
//! Output: a verdict with per-axis flags and findings.

#![forbid(unsafe_code)]

pub mod measurement;
pub mod model;

mod checks;
mod engine;

pub use engine::{evaluate, evaluate_raw};
pub use measurement::{MeasurementError, RawMeasurement, measurement_from_values, parse_measurement};
pub use model::{AirlinePolicy, LimitError};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
