//! Persistence collaborator for one resource collection.

use async_trait::async_trait;
use models::Resource;

use crate::errors::ServiceError;

pub mod memory;
pub mod seaorm;

pub use memory::MemoryRepository;
pub use seaorm::SeaOrmRepository;

/// Store offering find-all, find-by-id, save and delete over one identifier space.
///
/// Failures are terminal for the request; callers do not retry.
#[async_trait]
pub trait Repository<R: Resource>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<R>, ServiceError>;

    async fn find_by_id(&self, id: &R::Id) -> Result<Option<R>, ServiceError>;

    /// Persist a new record. Generated identifiers are assigned here and the
    /// stored record is returned.
    async fn insert(&self, record: R) -> Result<R, ServiceError>;

    /// Overwrite every field of an existing record.
    async fn update(&self, record: R) -> Result<R, ServiceError>;

    /// Returns `false` when nothing was removed.
    async fn delete(&self, id: &R::Id) -> Result<bool, ServiceError>;
}
