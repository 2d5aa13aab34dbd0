use std::collections::BTreeMap;

use async_trait::async_trait;
use models::{Resource, ResourceId};
use tokio::sync::RwLock;

use super::Repository;
use crate::errors::ServiceError;

struct State<R: Resource> {
    records: BTreeMap<R::Id, R>,
    next_id: i64,
}

/// In-memory collaborator used by tests and `STORAGE=memory` runs.
/// Records are listed in identifier order.
pub struct MemoryRepository<R: Resource> {
    state: RwLock<State<R>>,
}

impl<R: Resource> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self { state: RwLock::new(State { records: BTreeMap::new(), next_id: 0 }) }
    }
}

impl<R: Resource> MemoryRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing records; their identifiers are kept as-is and the
    /// sequence continues after the largest one.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let records: BTreeMap<R::Id, R> = records.into_iter().map(|r| (r.id(), r)).collect();
        let next_id = records.keys().filter_map(ResourceId::sequence_value).max().unwrap_or(0);
        Self { state: RwLock::new(State { records, next_id }) }
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl<R: Resource> Repository<R> for MemoryRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, ServiceError> {
        Ok(self.state.read().await.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &R::Id) -> Result<Option<R>, ServiceError> {
        Ok(self.state.read().await.records.get(id).cloned())
    }

    async fn insert(&self, record: R) -> Result<R, ServiceError> {
        let mut state = self.state.write().await;
        let record = if <R::Id as ResourceId>::GENERATED {
            state.next_id += 1;
            let id = R::Id::from_sequence(state.next_id)
                .ok_or_else(|| ServiceError::Db(format!("{} sequence exhausted", R::NAME)))?;
            record.with_id(id)
        } else {
            record
        };
        let id = record.id();
        if state.records.contains_key(&id) {
            return Err(ServiceError::conflict::<R>(&id));
        }
        state.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: R) -> Result<R, ServiceError> {
        let mut state = self.state.write().await;
        let id = record.id();
        match state.records.get_mut(&id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(ServiceError::not_found::<R>(&id)),
        }
    }

    async fn delete(&self, id: &R::Id) -> Result<bool, ServiceError> {
        Ok(self.state.write().await.records.remove(id).is_some())
    }
}
