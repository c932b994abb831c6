use thiserror::Error;

/// All the ways loading a catalog or its config can go wrong
///
/// Filtering, sorting and the favorites reducer never fail, so nothing
/// in here is about them. Everything that can fail happens at startup.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset error: {0}")]
    DatasetError(String),

    #[error("Duplicate listing id in dataset: {0}")]
    DuplicateListing(String),

    #[error("Invalid listing {id}: {reason}")]
    InvalidListing { id: String, reason: String },

    #[error("Unknown sort mode: {0} (expected default, price_asc, price_desc or year_desc)")]
    InvalidSortMode(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
