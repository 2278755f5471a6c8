use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "bagcheck.config.v1";

/// `bagcheck.toml` schema v1.
///
/// Every field is optional; an empty file resolves to the built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BagcheckConfigV1 {
    /// Optional schema string for tooling (`bagcheck.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Path to a catalog JSON file. The embedded dataset is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// How many entries a blank search lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_window: Option<u32>,

    /// Category used by `check` when `--category` is omitted: `cabin` or `hold`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
}
