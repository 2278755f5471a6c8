//! The `explain` use case: what a check or code means for the traveller's bag.

use bagcheck_types::explain::{self, Explanation};
use bagcheck_types::ids;

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found {
        /// Canonical identifier the lookup matched.
        identifier: &'static str,
        explanation: Explanation,
    },
    NotFound {
        identifier: String,
        /// Known identifiers that contain the query, or every identifier when none do.
        suggestions: Vec<&'static str>,
    },
}

fn known_identifiers() -> impl Iterator<Item = &'static str> {
    explain::all_check_ids()
        .iter()
        .chain(explain::all_codes())
        .copied()
}

/// Look up a check_id or code. Matching ignores case and surrounding whitespace.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let wanted = identifier.trim().to_ascii_lowercase();
    if let Some(id) = known_identifiers().find(|id| *id == wanted)
        && let Some(explanation) = explain::lookup_explanation(id)
    {
        return ExplainOutput::Found {
            identifier: id,
            explanation,
        };
    }

    let mut suggestions: Vec<&'static str> = known_identifiers()
        .filter(|id| !wanted.is_empty() && id.contains(wanted.as_str()))
        .collect();
    if suggestions.is_empty() {
        suggestions = known_identifiers().collect();
    }
    ExplainOutput::NotFound {
        identifier: identifier.to_string(),
        suggestions,
    }
}

/// Codes a check can report. Empty for codes and for input refusals.
fn codes_for_check(identifier: &str) -> &'static [&'static str] {
    match identifier {
        ids::CHECK_BAGGAGE_DIMENSIONS => &[ids::CODE_AXIS_EXCEEDED, ids::CODE_SUM_EXCEEDED],
        ids::CHECK_BAGGAGE_WEIGHT => &[ids::CODE_WEIGHT_EXCEEDED],
        _ => &[],
    }
}

pub fn format_explanation(identifier: &str, exp: &Explanation) -> String {
    let mut out = format!("{} [{}]\n\n{}\n\n", exp.title, identifier, exp.description);

    let codes = codes_for_check(identifier);
    if !codes.is_empty() {
        out.push_str(&format!("Reports: {}\n\n", codes.join(", ")));
    }

    out.push_str(&format!("How to fix:\n  {}\n\n", exp.remediation));
    out.push_str("Example:\n");
    out.push_str(&format!("  refused:  {}\n", exp.examples.before));
    out.push_str(&format!("  accepted: {}\n", exp.examples.after));
    out
}

pub fn format_not_found(identifier: &str, suggestions: &[&'static str]) -> String {
    format!(
        "bagcheck: nothing to explain for {:?}\nTry one of: {}\n",
        identifier.trim(),
        suggestions.join(", ")
    )
}
