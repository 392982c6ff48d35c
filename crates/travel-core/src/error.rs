// crates/travel-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by `travel-core`.
///
/// Only the loader and the strict time-zone parser produce errors. Queries
/// never fail: an unmatched keyword is an empty result, not an error.
#[derive(Debug, Error)]
pub enum TravelError {
    /// The dataset file does not exist or cannot be opened.
    #[error("{0}")]
    NotFound(String),

    /// The dataset is not valid JSON or does not have the expected shape.
    #[cfg(feature = "json")]
    #[error("invalid dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "remote")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The identifier is not a known IANA time zone.
    #[error("invalid time zone: {0}")]
    InvalidTimeZone(String),
}

pub type Result<T> = std::result::Result<T, TravelError>;
