use crate::model::{BagcheckConfigV1, SCHEMA_CONFIG_V1};
use anyhow::Context;
use bagcheck_catalog::DEFAULT_SEARCH_WINDOW;
use bagcheck_types::BaggageCategory;
use camino::Utf8PathBuf;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub catalog: Option<Utf8PathBuf>,
    pub search_window: Option<u32>,
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    /// `None` means the embedded catalog.
    pub catalog: Option<Utf8PathBuf>,
    pub search_window: usize,
    pub default_category: BaggageCategory,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            search_window: DEFAULT_SEARCH_WINDOW,
            default_category: BaggageCategory::Cabin,
        }
    }
}

pub fn resolve_config(
    cfg: BagcheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let defaults = ResolvedConfig::default();

    let catalog = overrides
        .catalog
        .or_else(|| cfg.catalog.map(Utf8PathBuf::from));

    let search_window = match overrides.search_window.or(cfg.search_window) {
        Some(0) => anyhow::bail!("search_window must be at least 1"),
        Some(window) => window as usize,
        None => defaults.search_window,
    };

    let default_category = match overrides.category.or(cfg.default_category) {
        Some(category) => category
            .parse::<BaggageCategory>()
            .with_context(|| format!("invalid default_category: {category}"))?,
        None => defaults.default_category,
    };

    let resolved = ResolvedConfig {
        catalog,
        search_window,
        default_category,
    };
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse_config_toml("").expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn file_values_apply() {
        let cfg = parse_config_toml(
            r#"
schema = "bagcheck.config.v1"
catalog = "data/airlines.json"
search_window = 8
default_category = "soute"
"#,
        )
        .expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(
            resolved.catalog,
            Some(Utf8PathBuf::from("data/airlines.json"))
        );
        assert_eq!(resolved.search_window, 8);
        assert_eq!(resolved.default_category, BaggageCategory::Hold);
    }

    #[test]
    fn overrides_win_over_file() {
        let cfg = parse_config_toml(
            r#"
catalog = "a.json"
search_window = 8
default_category = "hold"
"#,
        )
        .expect("parse");
        let overrides = Overrides {
            catalog: Some(Utf8PathBuf::from("b.json")),
            search_window: Some(3),
            category: Some("cabin".to_string()),
        };
        let resolved = resolve_config(cfg, overrides).expect("resolve");
        assert_eq!(resolved.catalog, Some(Utf8PathBuf::from("b.json")));
        assert_eq!(resolved.search_window, 3);
        assert_eq!(resolved.default_category, BaggageCategory::Cabin);
    }

    #[test]
    fn zero_search_window_is_rejected() {
        let cfg = parse_config_toml("search_window = 0").expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("search_window"), "{err}");
    }

    #[test]
    fn unknown_category_is_rejected() {
        let cfg = parse_config_toml("default_category = \"trunk\"").expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("trunk"), "{err:#}");
    }

    #[test]
    fn foreign_schema_is_rejected() {
        let cfg = parse_config_toml("schema = \"depot.config.v9\"").expect("parse");
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }

    #[test]
    fn unknown_keys_fail_to_parse() {
        assert!(parse_config_toml("serch_window = 3").is_err());
    }
}
