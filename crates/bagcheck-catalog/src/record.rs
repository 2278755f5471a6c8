//! On-disk record shape of the catalog.
//!
//! Field names follow the data provider's camelCase (`shortCode`, `sumMax`); records are
//! converted to domain policies and validated before the catalog accepts them.

use crate::CatalogError;
use bagcheck_domain::AirlinePolicy;
use bagcheck_types::{AirlineId, CabinLimits, HoldLimits};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub id: AirlineId,
    pub name: String,
    pub short_code: String,
    pub cabin: CabinRecord,
    pub hold: HoldRecord,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CabinRecord {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoldRecord {
    pub sum_max: f64,
    pub weight: f64,
}

impl CatalogRecord {
    pub fn into_policy(self) -> Result<AirlinePolicy, CatalogError> {
        let id = self.id;
        AirlinePolicy::new(
            id,
            self.name.trim(),
            self.short_code.trim(),
            CabinLimits {
                length: self.cabin.length,
                width: self.cabin.width,
                height: self.cabin.height,
                weight: self.cabin.weight,
            },
            HoldLimits {
                sum_max: self.hold.sum_max,
                weight: self.hold.weight,
            },
        )
        .map_err(|e| CatalogError::InvalidRecord {
            id,
            reason: e.to_string(),
        })
    }
}

impl From<&AirlinePolicy> for CatalogRecord {
    fn from(p: &AirlinePolicy) -> Self {
        CatalogRecord {
            id: p.id,
            name: p.name.clone(),
            short_code: p.short_code.clone(),
            cabin: CabinRecord {
                length: p.cabin.length,
                width: p.cabin.width,
                height: p.cabin.height,
                weight: p.cabin.weight,
            },
            hold: HoldRecord {
                sum_max: p.hold.sum_max,
                weight: p.hold.weight,
            },
        }
    }
}
