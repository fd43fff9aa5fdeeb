//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DbResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity. The entity's id is ignored and a fresh one
    /// is assigned by the store.
    async fn create(&self, entity: &T) -> DbResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DbResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DbResult<Vec<T>>;

    /// Update an existing entity, replacing all mutable fields
    async fn update(&self, entity: &T) -> DbResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DbResult<()>;
}
