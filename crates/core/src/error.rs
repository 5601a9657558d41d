//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// Keep this focused on deterministic lookup failures. Storage failures belong
/// to the infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No item carries the requested id.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// An identifier could not be parsed from its textual form.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CatalogError {
    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
