//! # Store Error Types
//!
//! Error types for property store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (innkeep-core)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds lookup failures and seed problems     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Host app maps to its own response type                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use innkeep_core::{CoreError, ValidationError};
use thiserror::Error;

/// Property store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No entity with this id (or composite key) exists.
    ///
    /// ## When This Occurs
    /// - `get`/`update` with an unknown id
    /// - Deleting a promotion that was already deleted
    /// - A stay quote night with no rate loaded
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// An entity with this id is already in the collection.
    ///
    /// ## When This Occurs
    /// - Seeding with two rooms sharing an id
    /// - `insert` of an entity that was already inserted
    #[error("Duplicate {entity}: '{id}' already exists")]
    Duplicate { entity: String, id: String },

    /// The seed could not be read or parsed.
    #[error("Seed error: {0}")]
    Seed(String),

    /// A business rule rejected the write.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A field rule rejected the write.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Duplicate error.
    pub fn duplicate(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::Duplicate {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// True for lookup misses, so callers can tell "nothing there" apart
    /// from a rejected write.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
