//! Generic controller behind every resource collection.

use std::sync::Arc;

use common::types::GenericMessage;
use models::{Resource, ResourceId};
use tracing::{debug, info, instrument, warn};

use crate::errors::ServiceError;
use crate::repository::Repository;

/// The five operations shared by all resources. Authorization is checked by
/// the caller before any of these run.
pub struct ResourceService<R: Resource> {
    repo: Arc<dyn Repository<R>>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(repo: Arc<dyn Repository<R>>) -> Self {
        Self { repo }
    }

    /// Every record, in collaborator order.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn list(&self) -> Result<Vec<R>, ServiceError> {
        let all = self.repo.find_all().await?;
        debug!(count = all.len(), "listed");
        Ok(all)
    }

    #[instrument(skip(self, id), fields(resource = R::NAME, id = %id))]
    pub async fn get(&self, id: &R::Id) -> Result<R, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found::<R>(id))
    }

    /// Build a record from named parameters and store it. Caller-supplied
    /// codes must not collide with an existing record.
    #[instrument(skip(self, params), fields(resource = R::NAME))]
    pub async fn create(&self, params: R::Params) -> Result<R, ServiceError> {
        let record = R::from_params(params);
        record.validate()?;
        if !<R::Id as ResourceId>::GENERATED {
            let id = record.id();
            if self.repo.find_by_id(&id).await?.is_some() {
                warn!(id = %id, "create rejected, identifier taken");
                return Err(ServiceError::conflict::<R>(&id));
            }
        }
        let saved = self.repo.insert(record).await?;
        info!(id = %saved.id(), "created");
        Ok(saved)
    }

    /// Full replace. Every field of `incoming` overwrites the stored record
    /// except the identifier, which stays `id`.
    #[instrument(skip(self, id, incoming), fields(resource = R::NAME, id = %id))]
    pub async fn update(&self, id: &R::Id, incoming: R) -> Result<R, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found::<R>(id));
        }
        let record = incoming.with_id(id.clone());
        record.validate()?;
        let saved = self.repo.update(record).await?;
        info!("updated");
        Ok(saved)
    }

    #[instrument(skip(self, id), fields(resource = R::NAME, id = %id))]
    pub async fn delete(&self, id: &R::Id) -> Result<GenericMessage, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found::<R>(id));
        }
        // Lost a race with another delete
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found::<R>(id));
        }
        info!("deleted");
        Ok(GenericMessage::new(format!("{} with id {} deleted", R::NAME, id)))
    }
}
