use anyhow::Context;
use bagcheck_render::{RenderableCheck, RenderableFinding, RenderableLimits, RenderableReport};
use bagcheck_types::{AppliedLimits, CheckReport, ErrorReport, SCHEMA_REPORT_V1};

/// Parse a report previously written by `check --report-out`.
pub fn parse_report_json(text: &str) -> anyhow::Result<CheckReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unsupported report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse bagcheck report")
}

pub fn serialize_report(report: &CheckReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn serialize_error_report(report: &ErrorReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize error report")
}

pub fn to_renderable(report: &CheckReport) -> RenderableReport {
    let v = &report.verdict;
    let limits = match v.limits {
        AppliedLimits::Cabin(c) => RenderableLimits::Cabin {
            length: c.length,
            width: c.width,
            height: c.height,
        },
        AppliedLimits::Hold(h) => RenderableLimits::Hold { sum_max: h.sum_max },
    };

    RenderableReport {
        airline_name: report.airline.name.clone(),
        airline_code: report.airline.short_code.clone(),
        category: v.category().to_string(),
        compliant: v.compliant,
        dimensions: RenderableCheck {
            ok: v.dimensions_ok,
        },
        limits,
        measured: [v.measurement.length, v.measurement.width, v.measurement.height],
        weight: RenderableCheck { ok: v.weight_ok },
        weight_limit: v.limits.weight(),
        measured_weight: v.measurement.weight,
        findings: v
            .findings
            .iter()
            .map(|f| RenderableFinding {
                code: f.code.clone(),
                message: f.message.clone(),
                help: f.help.clone(),
            })
            .collect(),
    }
}
