use std::path::PathBuf;

use thiserror::Error;

use crate::zone::ZoneId;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised at the edges of the engine.
///
/// The demand, recommendation and network calculations themselves are total and never fail;
/// these variants cover configuration, lookups, export and the plant-needs catalog.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read farm config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid farm config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unknown zone {0}")]
    UnknownZone(ZoneId),

    #[error("month index {0} out of range (expected 0..=11)")]
    MonthOutOfRange(usize),

    #[error("invalid zone '{name}': {reason}")]
    InvalidZone { name: String, reason: String },

    #[error("BOQ export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("plant needs catalog unavailable: {0}")]
    Catalog(String),
}
