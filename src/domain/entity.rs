//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for persistence operations
pub type DbResult<T> = Result<T, DbError>;

/// Errors surfaced by the persistence layer and forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DbError {
    /// The store could not be opened or the schema could not be applied.
    /// Fatal at startup.
    Init(String),
    /// The target row of an update or relationship removal does not exist.
    NotFound(String),
    /// An underlying statement failed to execute.
    Query(String),
    /// Form input failed validation.
    InvalidInput(String),
}

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbError::Init(msg) => write!(f, "storage init failed: {}", msg),
            DbError::NotFound(msg) => write!(f, "not found: {}", msg),
            DbError::Query(msg) => write!(f, "query failed: {}", msg),
            DbError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DbError {}
