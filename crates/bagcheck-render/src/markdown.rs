use crate::{RenderableReport, fmt_amount, fmt_dimension_limit, fmt_dimensions, recommendations};

fn status(ok: bool) -> &'static str {
    if ok { "OK" } else { "FAIL" }
}

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Baggage check: {} ({})\n\n",
        report.airline_name, report.airline_code
    ));
    let verdict = if report.compliant {
        "COMPLIANT"
    } else {
        "NOT COMPLIANT"
    };
    out.push_str(&format!(
        "- Category: {}\n- Verdict: **{}**\n\n",
        report.category, verdict
    ));

    out.push_str("| Check | Status | Max | Yours |\n");
    out.push_str("|---|---|---|---|\n");
    out.push_str(&format!(
        "| Dimensions | {} | {} | {} |\n",
        status(report.dimensions.ok),
        fmt_dimension_limit(&report.limits),
        fmt_dimensions(report.measured)
    ));
    out.push_str(&format!(
        "| Weight | {} | {} kg | {} kg |\n",
        status(report.weight.ok),
        fmt_amount(report.weight_limit),
        fmt_amount(report.measured_weight)
    ));

    if report.findings.is_empty() {
        out.push_str("\nNo findings.\n");
        return out;
    }

    out.push_str("\n## Findings\n\n");
    for f in &report.findings {
        out.push_str(&format!("- `{}`: {}\n", f.code, f.message));
        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out.push_str("\n## Recommendations\n\n");
    for line in recommendations(report) {
        out.push_str(&format!("- {}\n", line));
    }

    out
}
