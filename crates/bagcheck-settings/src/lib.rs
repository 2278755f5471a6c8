//! Config parsing and resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{BagcheckConfigV1, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `bagcheck.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<BagcheckConfigV1> {
    let cfg: BagcheckConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (file values, then CLI overrides, then defaults).
pub fn resolve_config(
    cfg: BagcheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
