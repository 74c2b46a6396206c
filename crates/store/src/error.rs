//! Error types for the record store.
//!
//! Reload helpers treat [`StoreError::NotFound`] as fatal: a record that
//! disappeared between creation and reload is a test-data bug, not a
//! condition to recover from.

use thiserror::Error;

/// Convenience alias for store operation results.
pub type StoreResult<T> = Result<T, StoreError>;

/// The primary error type for all store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given kind and id exists.
    #[error("record not found: {kind}/{id}")]
    NotFound {
        /// The record kind (collection name).
        kind: String,
        /// The record id.
        id: String,
    },

    /// A record with the given kind and id already exists.
    #[error("record already exists: {kind}/{id}")]
    AlreadyExists {
        /// The record kind (collection name).
        kind: String,
        /// The record id.
        id: String,
    },

    /// The backend itself failed.
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// Builds a [`StoreError::NotFound`] for the given record coordinates.
    pub fn not_found(kind: &str, id: &str) -> Self {
        Self::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }

    /// Builds a [`StoreError::AlreadyExists`] for the given record coordinates.
    pub fn already_exists(kind: &str, id: &str) -> Self {
        Self::AlreadyExists {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }

    /// Returns true if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
