//! Airline policy catalog: the read-only reference data the evaluator runs against.
//!
//! The catalog is loaded once (from the embedded dataset or a JSON file) and never mutated,
//! so lookups and searches need no locking.

#![forbid(unsafe_code)]

mod error;
mod record;
mod static_catalog;

use bagcheck_domain::AirlinePolicy;
use bagcheck_types::{AirlineId, AirlineSelector};

pub use error::CatalogError;
pub use record::{CabinRecord, CatalogRecord, HoldRecord};
pub use static_catalog::StaticCatalog;

/// Number of entries returned for an empty search query.
pub const DEFAULT_SEARCH_WINDOW: usize = 5;

/// Lookup and search over airline policies.
pub trait PolicyCatalog {
    /// Exact lookup by catalog identifier.
    fn find_by_id(&self, id: AirlineId) -> Option<&AirlinePolicy>;

    /// Case-insensitive substring match on name or short code, in catalog order.
    ///
    /// A blank query returns the first entries of the catalog instead of everything.
    fn search(&self, query: &str) -> Vec<&AirlinePolicy>;

    /// Every entry, in catalog order.
    fn all(&self) -> &[AirlinePolicy];

    /// Exact, case-insensitive lookup by short code.
    fn find_by_code(&self, code: &str) -> Option<&AirlinePolicy> {
        let code = code.trim();
        self.all()
            .iter()
            .find(|p| p.short_code.eq_ignore_ascii_case(code))
    }

    /// Resolve a selector, failing with [`CatalogError::UnknownAirline`] rather than guessing.
    fn resolve(&self, selector: &AirlineSelector) -> Result<&AirlinePolicy, CatalogError> {
        let found = match selector {
            AirlineSelector::Id(id) => self.find_by_id(*id),
            AirlineSelector::Code(code) => self.find_by_code(code),
        };
        found.ok_or_else(|| CatalogError::UnknownAirline {
            selector: selector.to_string(),
        })
    }
}
