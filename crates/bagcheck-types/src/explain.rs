//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and when it fires.
    pub description: &'static str,
    /// How to get back within the limits.
    pub remediation: &'static str,
    /// Before/after measurement examples.
    pub examples: ExamplePair,
}

/// Before and after measurement examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would trigger a finding.
    pub before: &'static str,
    /// Input that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_BAGGAGE_DIMENSIONS => Some(explain_dimensions()),
        ids::CHECK_BAGGAGE_WEIGHT => Some(explain_weight()),

        // Codes
        ids::CODE_AXIS_EXCEEDED => Some(explain_axis_exceeded()),
        ids::CODE_SUM_EXCEEDED => Some(explain_sum_exceeded()),
        ids::CODE_WEIGHT_EXCEEDED => Some(explain_weight_exceeded()),
        ids::CODE_INCOMPLETE_INPUT => Some(explain_incomplete_input()),
        ids::CODE_INVALID_NUMBER => Some(explain_invalid_number()),
        ids::CODE_UNKNOWN_AIRLINE => Some(explain_unknown_airline()),
        ids::CODE_CATALOG_INVALID => Some(explain_catalog_invalid()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_BAGGAGE_DIMENSIONS, ids::CHECK_BAGGAGE_WEIGHT]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_AXIS_EXCEEDED,
        ids::CODE_SUM_EXCEEDED,
        ids::CODE_WEIGHT_EXCEEDED,
        ids::CODE_INCOMPLETE_INPUT,
        ids::CODE_INVALID_NUMBER,
        ids::CODE_UNKNOWN_AIRLINE,
        ids::CODE_CATALOG_INVALID,
    ]
}

// --- Check-level explanations ---

fn explain_dimensions() -> Explanation {
    Explanation {
        title: "Baggage Dimensions",
        description: "\
Compares the bag's length, width and height against the airline's published limits.

The rule shape depends on the baggage category:
- Cabin baggage: each axis is compared with its own maximum (length with length,
  width with width, height with height). Axes are never swapped to find a better fit.
- Hold baggage: the three axes are added together and the sum is compared with a
  single maximum.

A measurement exactly equal to a limit is compliant.",
        remediation: "\
Bring the bag within the limits:
- Use a smaller bag, or compress a soft bag before measuring
- Measure including wheels and handles; airlines do
- For hold baggage, any split of the total works as long as the sum fits",
        examples: ExamplePair {
            before: "cabin limits 55 x 35 x 25 cm; bag 60 x 35 x 25 cm",
            after: "cabin limits 55 x 35 x 25 cm; bag 55 x 35 x 25 cm",
        },
    }
}

fn explain_weight() -> Explanation {
    Explanation {
        title: "Baggage Weight",
        description: "\
Compares the bag's weight in kilograms with the airline's maximum for the selected
category. The same rule applies to cabin and hold baggage. Equality is compliant.",
        remediation: "\
Reduce the weight of the bag:
- Move heavy items to another bag or to your person
- Check whether the airline sells additional allowance",
        examples: ExamplePair {
            before: "hold limit 23 kg; bag 25 kg",
            after: "hold limit 23 kg; bag 23 kg",
        },
    }
}

// --- Code-level explanations ---

fn explain_axis_exceeded() -> Explanation {
    Explanation {
        title: "Cabin Axis Exceeded",
        description: "\
One axis of a cabin bag is larger than the matching cabin maximum. One finding is
emitted per offending axis; `excess` gives the overrun in centimetres.",
        remediation: "\
Reduce the named axis by at least the reported excess, or choose a smaller bag.",
        examples: ExamplePair {
            before: "length 60 cm against a 55 cm maximum (excess 5 cm)",
            after: "length 55 cm against a 55 cm maximum",
        },
    }
}

fn explain_sum_exceeded() -> Explanation {
    Explanation {
        title: "Hold Dimension Sum Exceeded",
        description: "\
The sum length + width + height of a hold bag is larger than the airline's linear
maximum. How the total is distributed across axes does not matter.",
        remediation: "\
Reduce the total by at least the reported excess, on any combination of axes.",
        examples: ExamplePair {
            before: "60 + 50 + 50 = 160 cm against 158 cm",
            after: "50 + 50 + 50 = 150 cm against 158 cm",
        },
    }
}

fn explain_weight_exceeded() -> Explanation {
    Explanation {
        title: "Weight Exceeded",
        description: "\
The bag is heavier than the maximum for its category; `excess` gives the overrun in
kilograms.",
        remediation: "\
Remove at least the reported excess from the bag.",
        examples: ExamplePair {
            before: "25 kg against 23 kg (excess 2 kg)",
            after: "22.5 kg against 23 kg",
        },
    }
}

fn explain_incomplete_input() -> Explanation {
    Explanation {
        title: "Incomplete Input",
        description: "\
One or more of length, width, height and weight is missing or blank. No comparison
is made and no verdict is produced; missing values are never treated as zero.",
        remediation: "\
Supply all four measurements. The error lists every missing field.",
        examples: ExamplePair {
            before: "--length 55 --width 35 --height 25",
            after: "--length 55 --width 35 --height 25 --weight 12",
        },
    }
}

fn explain_invalid_number() -> Explanation {
    Explanation {
        title: "Invalid Number",
        description: "\
A measurement is present but is not a finite number greater than zero. Units,
decimal commas and trailing text are rejected rather than truncated.",
        remediation: "\
Enter plain decimal numbers in centimetres and kilograms, using `.` as the decimal
separator.",
        examples: ExamplePair {
            before: "--length 55cm --weight 12,5",
            after: "--length 55 --weight 12.5",
        },
    }
}

fn explain_unknown_airline() -> Explanation {
    Explanation {
        title: "Unknown Airline",
        description: "\
The airline identifier or short code did not match any catalog entry. No default
policy is substituted.",
        remediation: "\
Use `bagcheck search <name>` to find the right identifier or short code.",
        examples: ExamplePair {
            before: "--airline 999",
            after: "--airline AF",
        },
    }
}

fn explain_catalog_invalid() -> Explanation {
    Explanation {
        title: "Invalid Catalog",
        description: "\
The airline catalog could not be used: a record has a blank name or short code, a
limit that is not a finite number greater than zero, or an id or short code that
appears twice. The whole catalog is rejected rather than silently skipping entries.",
        remediation: "\
Fix the named record in the catalog file, or drop `--catalog` to use the built-in
dataset.",
        examples: ExamplePair {
            before: r#"{"id": 3, "cabin": {"length": 0, ...}}"#,
            after: r#"{"id": 3, "cabin": {"length": 55, ...}}"#,
        },
    }
}
