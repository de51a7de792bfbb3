use async_trait::async_trait;

use crate::core::error::Result;

/// Persistence contract shared by every entity store backend.
///
/// `save` is an insert when the entity has no identifier and a whole-record
/// replacement keyed by that identifier otherwise. Repositories never merge
/// partial updates.
#[async_trait]
pub trait EntityRepository<T, ID = i64>: Send + Sync {
    /// Persist an entity, assigning an identifier on first save
    async fn save(&self, entity: T) -> Result<T>;

    /// Point lookup; absence is a normal outcome, not an error
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// Full-collection scan; ordering follows the store's iteration order
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Delete by identifier; a missing identifier is a no-op
    async fn delete_by_id(&self, id: ID) -> Result<()>;
}
