use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::traits::{Entity, EntityRepository};

/// Map-backed entity store.
///
/// Backs the integration tests and the no-database development mode with
/// the same save/find/delete contract as the MySQL repositories: ids are
/// assigned from a monotonically increasing counter, saves with an id are
/// whole-record replacements, deletes of unknown ids are no-ops.
pub struct InMemoryRepository<T> {
    records: RwLock<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity + 'static> EntityRepository<T> for InMemoryRepository<T> {
    async fn save(&self, mut entity: T) -> Result<T> {
        let id = match entity.id() {
            Some(id) => {
                // keep the counter ahead of explicitly keyed records
                self.next_id.fetch_max(id + 1, Ordering::SeqCst);
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                entity.set_id(id);
                id
            }
        };

        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, entity.clone());

        Ok(entity)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
        Ok(())
    }
}
