use crate::{AirlineSummary, AppliedLimits, Axis, BaggageCategory, Measurement, ids};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifiers for bagcheck envelopes.
pub const SCHEMA_REPORT_V1: &str = "bagcheck.report.v1";
pub const SCHEMA_ERROR_V1: &str = "bagcheck.error.v1";

/// One failed rule, with enough detail for targeted remediation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub check_id: String,
    pub code: String,

    /// Offending axis; absent for the summed hold-baggage rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,

    pub measured: f64,
    pub limit: f64,
    /// `measured - limit`; always > 0.
    pub excess: f64,

    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// Outcome of one evaluation.
///
/// `compliant == dimensions_ok && weight_ok`, and `findings` is empty exactly when compliant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Verdict {
    pub dimensions_ok: bool,
    pub weight_ok: bool,
    pub compliant: bool,
    pub limits: AppliedLimits,
    pub measurement: Measurement,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

impl Verdict {
    pub fn category(&self) -> BaggageCategory {
        self.limits.category()
    }

    pub fn dimension_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.check_id == ids::CHECK_BAGGAGE_DIMENSIONS)
    }

    pub fn weight_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.check_id == ids::CHECK_BAGGAGE_WEIGHT)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Envelope written for a completed check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub airline: AirlineSummary,
    pub verdict: Verdict,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    /// Measurement fields implicated in the refusal, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Axis>,
}

/// Envelope written when a check refuses to run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorReport {
    pub schema: String,
    pub tool: ToolMeta,
    pub error: ErrorDetail,
}
