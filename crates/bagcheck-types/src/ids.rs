//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_BAGGAGE_DIMENSIONS: &str = "baggage.dimensions";
pub const CHECK_BAGGAGE_WEIGHT: &str = "baggage.weight";

// Codes: baggage.dimensions
pub const CODE_AXIS_EXCEEDED: &str = "axis_exceeded";
pub const CODE_SUM_EXCEEDED: &str = "sum_exceeded";

// Codes: baggage.weight
pub const CODE_WEIGHT_EXCEEDED: &str = "weight_exceeded";

// Input-level refusals (no verdict is produced)
pub const CODE_INCOMPLETE_INPUT: &str = "incomplete_input";
pub const CODE_INVALID_NUMBER: &str = "invalid_number";
pub const CODE_UNKNOWN_AIRLINE: &str = "unknown_airline";
pub const CODE_CATALOG_INVALID: &str = "catalog_invalid";
