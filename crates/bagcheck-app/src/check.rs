//! The `check` use case: resolve the airline, validate the bag, and produce a report.

use bagcheck_catalog::{CatalogError, PolicyCatalog};
use bagcheck_domain::{AirlinePolicy, MeasurementError, RawMeasurement};
use bagcheck_types::{
    AirlineSelector, Axis, BaggageCategory, CheckReport, ErrorDetail, ErrorReport,
    SCHEMA_ERROR_V1, SCHEMA_REPORT_V1, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

/// Exit code for a check that refused to run (bad input or unknown airline).
pub const EXIT_REFUSED: i32 = 1;

/// Input for the check use case.
#[derive(Clone, Copy)]
pub struct CheckInput<'a> {
    pub catalog: &'a dyn PolicyCatalog,
    pub selector: &'a AirlineSelector,
    pub category: BaggageCategory,
    /// Fields as entered; validation happens here, not in the caller.
    pub raw: &'a RawMeasurement,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: CheckReport,
}

/// Why a check produced no verdict.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Measurement(#[from] MeasurementError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl CheckError {
    /// Stable code, suitable for `bagcheck explain`.
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::Measurement(MeasurementError::Incomplete { .. }) => {
                ids::CODE_INCOMPLETE_INPUT
            }
            CheckError::Measurement(MeasurementError::InvalidNumber { .. }) => {
                ids::CODE_INVALID_NUMBER
            }
            CheckError::Catalog(CatalogError::UnknownAirline { .. }) => ids::CODE_UNKNOWN_AIRLINE,
            CheckError::Catalog(_) => ids::CODE_CATALOG_INVALID,
        }
    }

    pub fn fields(&self) -> Vec<Axis> {
        match self {
            CheckError::Measurement(e) => e.axes(),
            CheckError::Catalog(_) => Vec::new(),
        }
    }
}

pub fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "bagcheck".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Run the check use case. Nothing is compared unless the airline resolves and all four
/// measurements are valid.
pub fn run_check(input: CheckInput<'_>) -> Result<CheckOutput, CheckError> {
    let started_at = OffsetDateTime::now_utc();
    tracing::debug!(
        airline = %input.selector,
        category = %input.category,
        "running baggage check"
    );

    let (policy, verdict) = resolve_and_evaluate(&input).inspect_err(|err| {
        tracing::warn!(code = err.code(), "check refused: {err}");
    })?;

    tracing::info!(
        airline = %policy.short_code,
        category = %input.category,
        compliant = verdict.compliant,
        findings = verdict.findings.len(),
        "baggage check finished"
    );

    let report = CheckReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        airline: policy.summary(),
        verdict,
    };
    Ok(CheckOutput { report })
}

fn resolve_and_evaluate<'a>(
    input: &CheckInput<'a>,
) -> Result<(&'a AirlinePolicy, Verdict), CheckError> {
    let policy = input.catalog.resolve(input.selector)?;
    let verdict = bagcheck_domain::evaluate_raw(policy, input.category, input.raw)?;
    Ok((policy, verdict))
}

/// Envelope written instead of a report when the check refuses to run.
pub fn error_report(err: &CheckError) -> ErrorReport {
    ErrorReport {
        schema: SCHEMA_ERROR_V1.to_string(),
        tool: tool_meta(),
        error: ErrorDetail {
            code: err.code().to_string(),
            message: err.to_string(),
            fields: err.fields(),
        },
    }
}

/// Map verdict to process exit code. Refusals use [`EXIT_REFUSED`].
pub fn verdict_exit_code(verdict: &Verdict) -> i32 {
    if verdict.compliant { 0 } else { 2 }
}
