use crate::{CatalogError, CatalogRecord, DEFAULT_SEARCH_WINDOW, PolicyCatalog};
use bagcheck_domain::AirlinePolicy;
use bagcheck_types::AirlineId;
use camino::Utf8Path;
use std::collections::BTreeSet;

const BUILTIN_JSON: &str = include_str!("../data/airlines.json");

/// In-memory catalog over an immutable, ordered list of policies.
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    entries: Vec<AirlinePolicy>,
    search_window: usize,
}

impl StaticCatalog {
    /// Build a catalog, rejecting invalid limits and duplicate ids or short codes.
    pub fn new(entries: Vec<AirlinePolicy>, search_window: usize) -> Result<Self, CatalogError> {
        if search_window == 0 {
            return Err(CatalogError::EmptySearchWindow);
        }

        let mut ids = BTreeSet::new();
        let mut codes = BTreeSet::new();
        for entry in &entries {
            entry
                .validate()
                .map_err(|e| CatalogError::InvalidRecord {
                    id: entry.id,
                    reason: e.to_string(),
                })?;
            if !ids.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            if !codes.insert(entry.short_code.to_ascii_uppercase()) {
                return Err(CatalogError::DuplicateCode(entry.short_code.clone()));
            }
        }

        Ok(Self {
            entries,
            search_window,
        })
    }

    /// Parse a JSON array of catalog records.
    pub fn from_json_str(text: &str, search_window: usize) -> Result<Self, CatalogError> {
        let records: Vec<CatalogRecord> = serde_json::from_str(text)?;
        let entries = records
            .into_iter()
            .map(CatalogRecord::into_policy)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries, search_window)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Utf8Path, search_window: usize) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&text, search_window)?;
        tracing::debug!(%path, entries = catalog.len(), "loaded airline catalog");
        Ok(catalog)
    }

    /// The dataset shipped with the binary.
    pub fn builtin(search_window: usize) -> Result<Self, CatalogError> {
        let catalog = Self::from_json_str(BUILTIN_JSON, search_window)?;
        tracing::debug!(entries = catalog.len(), "loaded built-in airline catalog");
        Ok(catalog)
    }

    pub fn search_window(&self) -> usize {
        self.search_window
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            search_window: DEFAULT_SEARCH_WINDOW,
        }
    }
}

impl PolicyCatalog for StaticCatalog {
    fn find_by_id(&self, id: AirlineId) -> Option<&AirlinePolicy> {
        self.entries.iter().find(|p| p.id == id)
    }

    fn search(&self, query: &str) -> Vec<&AirlinePolicy> {
        if query.trim().is_empty() {
            return self.entries.iter().take(self.search_window).collect();
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.short_code.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn all(&self) -> &[AirlinePolicy] {
        &self.entries
    }
}
