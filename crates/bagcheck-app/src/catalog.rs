//! Catalog use cases: loading, search, and showing one airline.

use anyhow::Context;
use bagcheck_catalog::{PolicyCatalog, StaticCatalog};
use bagcheck_domain::AirlinePolicy;
use bagcheck_types::{AirlineSelector, AirlineSummary};
use camino::Utf8Path;

use crate::CheckError;

/// Load the catalog file when given, the embedded dataset otherwise.
pub fn load_catalog(path: Option<&Utf8Path>, search_window: usize) -> anyhow::Result<StaticCatalog> {
    match path {
        Some(path) => StaticCatalog::load(path, search_window)
            .with_context(|| format!("load catalog {path}")),
        None => StaticCatalog::builtin(search_window).context("load built-in catalog"),
    }
}

pub fn run_search(catalog: &dyn PolicyCatalog, query: &str) -> Vec<AirlineSummary> {
    let found: Vec<AirlineSummary> = catalog
        .search(query)
        .into_iter()
        .map(AirlinePolicy::summary)
        .collect();
    tracing::debug!(query, matches = found.len(), "catalog search");
    found
}

pub fn run_show(
    catalog: &dyn PolicyCatalog,
    selector: &AirlineSelector,
) -> Result<AirlinePolicy, CheckError> {
    let policy = catalog.resolve(selector)?;
    Ok(policy.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::catalog;
    use bagcheck_types::{AirlineId, ids};
    use camino::Utf8PathBuf;

    #[test]
    fn blank_search_lists_window() {
        let found = run_search(&catalog(), "");
        let codes: Vec<&str> = found.iter().map(|s| s.short_code.as_str()).collect();
        assert_eq!(codes, vec!["AF", "LH"]);
    }

    #[test]
    fn search_by_code_fragment() {
        let found = run_search(&catalog(), "Lh");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, AirlineId::new(2));
    }

    #[test]
    fn show_returns_full_policy() {
        let policy = run_show(&catalog(), &AirlineSelector::Code("af".to_string()))
            .expect("known airline");
        assert_eq!(policy.cabin.length, 55.0);
        assert_eq!(policy.hold.sum_max, 158.0);
    }

    #[test]
    fn show_unknown_airline() {
        let err = run_show(&catalog(), &AirlineSelector::Id(AirlineId::new(7))).unwrap_err();
        assert_eq!(err.code(), ids::CODE_UNKNOWN_AIRLINE);
    }

    #[test]
    fn builtin_catalog_loads_without_path() {
        let catalog = load_catalog(None, 3).expect("builtin");
        assert_eq!(catalog.search_window(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn missing_catalog_file_names_the_path() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("missing.json")).expect("utf8 path");
        let err = load_catalog(Some(&path), 5).unwrap_err();
        assert!(err.to_string().contains("missing.json"), "{err}");
    }
}
