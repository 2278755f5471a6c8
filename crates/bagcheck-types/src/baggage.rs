use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which rule family applies: per-axis cabin limits or summed hold limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BaggageCategory {
    Cabin,
    Hold,
}

impl BaggageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            BaggageCategory::Cabin => "cabin",
            BaggageCategory::Hold => "hold",
        }
    }
}

impl fmt::Display for BaggageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown baggage category: {0} (expected cabin or hold)")]
pub struct UnknownCategory(pub String);

impl FromStr for BaggageCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cabin" | "cabine" | "carry-on" => Ok(BaggageCategory::Cabin),
            "hold" | "checked" | "soute" => Ok(BaggageCategory::Hold),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// One measured quantity of a bag.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Length,
    Width,
    Height,
    Weight,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Length, Axis::Width, Axis::Height, Axis::Weight];
    pub const DIMENSIONS: [Axis; 3] = [Axis::Length, Axis::Width, Axis::Height];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Length => "length",
            Axis::Width => "width",
            Axis::Height => "height",
            Axis::Weight => "weight",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Axis::Weight => "kg",
            _ => "cm",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cabin baggage: independent maxima per axis (cm) plus a weight maximum (kg).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CabinLimits {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

impl CabinLimits {
    pub fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Length => self.length,
            Axis::Width => self.width,
            Axis::Height => self.height,
            Axis::Weight => self.weight,
        }
    }
}

/// Hold baggage: one maximum for length + width + height (cm) plus a weight maximum (kg).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HoldLimits {
    pub sum_max: f64,
    pub weight: f64,
}

/// The limits a verdict was computed against, tagged by category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum AppliedLimits {
    Cabin(CabinLimits),
    Hold(HoldLimits),
}

impl AppliedLimits {
    pub fn category(&self) -> BaggageCategory {
        match self {
            AppliedLimits::Cabin(_) => BaggageCategory::Cabin,
            AppliedLimits::Hold(_) => BaggageCategory::Hold,
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            AppliedLimits::Cabin(c) => c.weight,
            AppliedLimits::Hold(h) => h.weight,
        }
    }
}

/// Validated bag measurement: every field finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Measurement {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

impl Measurement {
    pub fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Length => self.length,
            Axis::Width => self.width,
            Axis::Height => self.height,
            Axis::Weight => self.weight,
        }
    }

    /// Linear sum used by hold rules.
    pub fn dimension_sum(&self) -> f64 {
        self.length + self.width + self.height
    }
}
