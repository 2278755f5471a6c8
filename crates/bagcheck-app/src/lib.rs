//! Use case orchestration for bagcheck.
//!
//! This crate provides the application layer: use cases that coordinate the catalog, domain,
//! settings, and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod catalog;
mod check;
mod explain;
mod render;
mod report;
mod settings;

pub use catalog::{load_catalog, run_search, run_show};
pub use check::{
    CheckError, CheckInput, CheckOutput, EXIT_REFUSED, error_report, run_check, tool_meta,
    verdict_exit_code,
};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, render_text};
pub use report::{parse_report_json, serialize_error_report, serialize_report, to_renderable};
pub use settings::resolve_settings;

#[cfg(test)]
mod test_support;
