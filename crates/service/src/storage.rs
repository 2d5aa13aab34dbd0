//! Selects the persistence collaborator handed to each resource service.

use std::sync::Arc;

use models::Resource;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PrimaryKeyTrait};

use crate::repository::{MemoryRepository, Repository, SeaOrmRepository};

#[derive(Clone, Debug)]
pub enum Storage {
    Postgres(DatabaseConnection),
    /// Process-local maps; contents are lost on restart.
    Memory,
}

impl Storage {
    pub fn is_memory(&self) -> bool {
        matches!(self, Storage::Memory)
    }

    /// Fresh collaborator for the collection behind entity `E`.
    pub fn repository<E>(&self) -> Arc<dyn Repository<E::Model>>
    where
        E: EntityTrait,
        E::Model: Resource + IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        <E::Model as Resource>::Id: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        match self {
            Storage::Postgres(db) => Arc::new(SeaOrmRepository::<E>::new(db.clone())),
            Storage::Memory => Arc::new(MemoryRepository::<E::Model>::new()),
        }
    }
}
