//! Parsing and validation of user-entered measurements.
//!
//! Nothing is compared until all four fields are present, each parses to a finite
//! number greater than zero, and the three dimensions add up to a finite sum.

use bagcheck_types::{Axis, Measurement};

/// Measurement fields exactly as the user typed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawMeasurement {
    pub length: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
}

impl RawMeasurement {
    pub fn new(
        length: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            length: Some(length.into()),
            width: Some(width.into()),
            height: Some(height.into()),
            weight: Some(weight.into()),
        }
    }

    pub fn field(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::Length => self.length.as_deref(),
            Axis::Width => self.width.as_deref(),
            Axis::Height => self.height.as_deref(),
            Axis::Weight => self.weight.as_deref(),
        }
    }

    /// Axes that are absent or blank, in L, W, H, weight order.
    pub fn missing(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|axis| {
                self.field(*axis)
                    .map(|v| v.trim().is_empty())
                    .unwrap_or(true)
            })
            .collect()
    }

    /// UI guard: whether the evaluate action should be enabled.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasurementError {
    #[error("incomplete input: missing {}", join_axes(.missing))]
    Incomplete { missing: Vec<Axis> },

    #[error("invalid number for {axis}: {value:?} (expected a finite number greater than zero)")]
    InvalidNumber { axis: Axis, value: String },
}

impl MeasurementError {
    /// Fields implicated in the refusal.
    pub fn axes(&self) -> Vec<Axis> {
        match self {
            MeasurementError::Incomplete { missing } => missing.clone(),
            MeasurementError::InvalidNumber { axis, .. } => vec![*axis],
        }
    }
}

fn join_axes(axes: &[Axis]) -> String {
    axes.iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate raw fields.
///
/// Incompleteness is reported before invalidity, and lists every missing field.
pub fn parse_measurement(raw: &RawMeasurement) -> Result<Measurement, MeasurementError> {
    let missing = raw.missing();
    if !missing.is_empty() {
        return Err(MeasurementError::Incomplete { missing });
    }

    let mut values = [0.0_f64; 4];
    for (slot, axis) in values.iter_mut().zip(Axis::ALL) {
        let text = raw.field(axis).unwrap_or_default();
        *slot = parse_field(axis, text)?;
    }
    let [length, width, height, weight] = values;

    if let Some(axis) = sum_overflow_axis(length, width, height) {
        return Err(MeasurementError::InvalidNumber {
            axis,
            value: raw.field(axis).unwrap_or_default().to_string(),
        });
    }

    Ok(Measurement {
        length,
        width,
        height,
        weight,
    })
}

/// Validate already-numeric input with the same rule as [`parse_measurement`].
pub fn measurement_from_values(
    length: f64,
    width: f64,
    height: f64,
    weight: f64,
) -> Result<Measurement, MeasurementError> {
    for (axis, value) in Axis::ALL.into_iter().zip([length, width, height, weight]) {
        if !is_positive_finite(value) {
            return Err(MeasurementError::InvalidNumber {
                axis,
                value: value.to_string(),
            });
        }
    }
    if let Some(axis) = sum_overflow_axis(length, width, height) {
        let value = match axis {
            Axis::Width => width,
            _ => height,
        };
        return Err(MeasurementError::InvalidNumber {
            axis,
            value: value.to_string(),
        });
    }
    Ok(Measurement {
        length,
        width,
        height,
        weight,
    })
}

fn parse_field(axis: Axis, text: &str) -> Result<f64, MeasurementError> {
    let trimmed = text.trim();
    let invalid = || MeasurementError::InvalidNumber {
        axis,
        value: text.to_string(),
    };

    // `f64::from_str` accepts "inf" and "NaN"; only plain decimal notation is allowed here.
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'))
    {
        return Err(invalid());
    }

    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !is_positive_finite(value) {
        return Err(invalid());
    }
    Ok(value)
}

/// The dimension whose addition makes `length + width + height` non-finite.
///
/// Findings and reports carry the sum, so it must stay representable in JSON.
fn sum_overflow_axis(length: f64, width: f64, height: f64) -> Option<Axis> {
    let partial = length + width;
    if !partial.is_finite() {
        return Some(Axis::Width);
    }
    if !(partial + height).is_finite() {
        return Some(Axis::Height);
    }
    None
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
