use crate::{RenderableReport, fmt_amount, fmt_dimension_limit, fmt_dimensions, recommendations};

/// Plain terminal rendering, one fact per line.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} ({}), {} baggage\n",
        report.airline_name, report.airline_code, report.category
    ));
    out.push_str(if report.compliant {
        "Result: compliant\n\n"
    } else {
        "Result: NOT compliant\n\n"
    });

    out.push_str(&format!(
        "Dimensions: {}\n  Max:   {}\n  Yours: {}\n",
        if report.dimensions.ok { "ok" } else { "too large" },
        fmt_dimension_limit(&report.limits),
        fmt_dimensions(report.measured)
    ));
    out.push_str(&format!(
        "Weight: {}\n  Max:   {} kg\n  Yours: {} kg\n",
        if report.weight.ok { "ok" } else { "too heavy" },
        fmt_amount(report.weight_limit),
        fmt_amount(report.measured_weight)
    ));

    if report.findings.is_empty() {
        return out;
    }

    out.push_str("\nFindings:\n");
    for f in &report.findings {
        out.push_str(&format!("  [{}] {}\n", f.code, f.message));
        if let Some(help) = &f.help {
            out.push_str(&format!("      {}\n", help));
        }
    }

    out.push_str("\nRecommendations:\n");
    for line in recommendations(report) {
        out.push_str(&format!("  * {}\n", line));
    }

    out
}
