//! Error model for the catalog crates.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Only construction-time failures live here (loading the dataset, building
/// criteria, reading configuration). Filtering and paging never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A value failed validation (e.g. negative price, inverted range).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty string).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The dataset document could not be read.
    #[error("malformed dataset: {0}")]
    Dataset(String),

    /// Two records share the same identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    /// View configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_id(id: impl core::fmt::Display) -> Self {
        Self::DuplicateId(id.to_string())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Dataset(err.to_string())
    }
}
