use anyhow::Context;
use bagcheck_settings::{BagcheckConfigV1, Overrides, ResolvedConfig};

/// Parse config text (empty is allowed; defaults apply) and apply CLI overrides.
pub fn resolve_settings(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        BagcheckConfigV1::default()
    } else {
        bagcheck_settings::parse_config_toml(config_text).context("parse config")?
    };
    let resolved = bagcheck_settings::resolve_config(cfg, overrides).context("resolve config")?;
    tracing::debug!(
        catalog = resolved.catalog.as_ref().map(|p| p.as_str()),
        search_window = resolved.search_window,
        default_category = %resolved.default_category,
        "resolved settings"
    );
    Ok(resolved)
}
