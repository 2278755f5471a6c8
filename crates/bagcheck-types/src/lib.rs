//! Stable DTOs and IDs used across the bagcheck workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted verdict/report
//! - stable string IDs and codes
//! - airline identifiers and selectors
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod airline;
pub mod baggage;
pub mod explain;
pub mod ids;
pub mod receipt;

pub use airline::{AirlineId, AirlineSelector, AirlineSummary, ParseAirlineIdError};
pub use baggage::{
    AppliedLimits, Axis, BaggageCategory, CabinLimits, HoldLimits, Measurement, UnknownCategory,
};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    CheckReport, ErrorDetail, ErrorReport, Finding, SCHEMA_ERROR_V1, SCHEMA_REPORT_V1, ToolMeta,
    Verdict,
};
