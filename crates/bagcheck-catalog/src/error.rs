use bagcheck_types::AirlineId;
use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No entry matches the requested id or code.
    #[error("unknown airline: no catalog entry for {selector}")]
    UnknownAirline { selector: String },

    #[error("invalid catalog record {id}: {reason}")]
    InvalidRecord { id: AirlineId, reason: String },

    #[error("duplicate airline id in catalog: {0}")]
    DuplicateId(AirlineId),

    #[error("duplicate short code in catalog: {0}")]
    DuplicateCode(String),

    #[error("catalog search window must be at least 1")]
    EmptySearchWindow,

    #[error("parse catalog json")]
    Parse(#[from] serde_json::Error),

    #[error("read catalog: {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
