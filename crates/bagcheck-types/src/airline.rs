use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog identifier of an airline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct AirlineId(u32);

impl AirlineId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AirlineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airline id: {input:?} (expected a non-negative integer)")]
pub struct ParseAirlineIdError {
    pub input: String,
}

impl FromStr for AirlineId {
    type Err = ParseAirlineIdError;

    /// Strict: surrounding whitespace is ignored, anything else must be digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseAirlineIdError {
                input: s.to_string(),
            });
        }
        trimmed
            .parse::<u32>()
            .map(AirlineId)
            .map_err(|_| ParseAirlineIdError {
                input: s.to_string(),
            })
    }
}

/// How a caller names the airline it wants: by catalog id or by short code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AirlineSelector {
    Id(AirlineId),
    Code(String),
}

impl AirlineSelector {
    /// All-digit input selects by id; anything else is treated as a short code.
    ///
    /// Returns `None` for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<AirlineId>() {
            Ok(id) => Some(AirlineSelector::Id(id)),
            Err(_) => Some(AirlineSelector::Code(trimmed.to_string())),
        }
    }
}

impl fmt::Display for AirlineSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirlineSelector::Id(id) => write!(f, "id {id}"),
            AirlineSelector::Code(code) => write!(f, "code {code}"),
        }
    }
}

impl From<AirlineId> for AirlineSelector {
    fn from(value: AirlineId) -> Self {
        AirlineSelector::Id(value)
    }
}

/// Identity block echoed in reports and search results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AirlineSummary {
    pub id: AirlineId,
    pub name: String,
    pub short_code: String,
}
