use bagcheck_types::{
    AirlineId, AirlineSummary, AppliedLimits, BaggageCategory, CabinLimits, HoldLimits,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One airline's published cabin and hold rules. Read-only once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AirlinePolicy {
    pub id: AirlineId,
    pub name: String,
    pub short_code: String,
    pub cabin: CabinLimits,
    pub hold: HoldLimits,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LimitError {
    #[error("{field} must be a finite number greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("airline name must not be blank")]
    BlankName,

    #[error("airline short code must not be blank")]
    BlankCode,
}

impl AirlinePolicy {
    /// Build a policy, rejecting blank identity fields and non-positive limits.
    pub fn new(
        id: AirlineId,
        name: impl Into<String>,
        short_code: impl Into<String>,
        cabin: CabinLimits,
        hold: HoldLimits,
    ) -> Result<Self, LimitError> {
        let policy = Self {
            id,
            name: name.into(),
            short_code: short_code.into(),
            cabin,
            hold,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), LimitError> {
        if self.name.trim().is_empty() {
            return Err(LimitError::BlankName);
        }
        if self.short_code.trim().is_empty() {
            return Err(LimitError::BlankCode);
        }

        let limits = [
            ("cabin.length", self.cabin.length),
            ("cabin.width", self.cabin.width),
            ("cabin.height", self.cabin.height),
            ("cabin.weight", self.cabin.weight),
            ("hold.sum_max", self.hold.sum_max),
            ("hold.weight", self.hold.weight),
        ];
        for (field, value) in limits {
            if !(value.is_finite() && value > 0.0) {
                return Err(LimitError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    /// Limits for the requested category. Cabin and hold shapes stay distinct.
    pub fn limits(&self, category: BaggageCategory) -> AppliedLimits {
        match category {
            BaggageCategory::Cabin => AppliedLimits::Cabin(self.cabin),
            BaggageCategory::Hold => AppliedLimits::Hold(self.hold),
        }
    }

    pub fn summary(&self) -> AirlineSummary {
        AirlineSummary {
            id: self.id,
            name: self.name.clone(),
            short_code: self.short_code.clone(),
        }
    }
}
