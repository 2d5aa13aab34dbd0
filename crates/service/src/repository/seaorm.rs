use std::marker::PhantomData;

use async_trait::async_trait;
use models::{Resource, ResourceId};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, SqlErr,
};

use super::Repository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation, one per entity.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

type IdOf<E> = <<E as EntityTrait>::Model as Resource>::Id;

#[async_trait]
impl<E> Repository<E::Model> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: Resource + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    IdOf<E>: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    async fn find_all(&self) -> Result<Vec<E::Model>, ServiceError> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        Ok(query.all(&self.db).await?)
    }

    async fn find_by_id(&self, id: &IdOf<E>) -> Result<Option<E::Model>, ServiceError> {
        Ok(E::find_by_id(id.clone()).one(&self.db).await?)
    }

    async fn insert(&self, record: E::Model) -> Result<E::Model, ServiceError> {
        let id = record.id();
        let mut active = record.into_active_model().reset_all();
        if <IdOf<E> as ResourceId>::GENERATED {
            // Let the database sequence assign the key.
            for key in E::PrimaryKey::iter() {
                active.not_set(key.into_column());
            }
        }
        // A concurrent create can slip past the service's existence check.
        match active.insert(&self.db).await {
            Ok(saved) => Ok(saved),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ServiceError::conflict::<E::Model>(&id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, record: E::Model) -> Result<E::Model, ServiceError> {
        let id = record.id();
        let active = record.into_active_model().reset_all();
        match active.update(&self.db).await {
            Ok(saved) => Ok(saved),
            Err(DbErr::RecordNotUpdated) => Err(ServiceError::not_found::<E::Model>(&id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: &IdOf<E>) -> Result<bool, ServiceError> {
        let res = E::delete_by_id(id.clone()).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::help_request;
    use models::ucsb_organization;

    fn help_request(email: &str) -> help_request::Model {
        help_request::Model {
            id: 0,
            requester_email: email.into(),
            team_id: "s22-6pm-4".into(),
            table_or_breakout_room: "13".into(),
            request_time: "2022-04-21T14:15:00".parse().unwrap(),
            explanation: "Merge conflict".into(),
            solved: false,
        }
    }

    #[tokio::test]
    async fn generated_ids_come_from_the_database() -> anyhow::Result<()> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmRepository::<help_request::Entity>::new(db);

        let saved = repo.insert(help_request("seaorm@ucsb.edu")).await?;
        assert!(saved.id > 0);
        assert_eq!(repo.find_by_id(&saved.id).await?, Some(saved.clone()));

        let solved = repo.update(help_request::Model { solved: true, ..saved.clone() }).await?;
        assert!(solved.solved);
        assert!(repo.find_all().await?.iter().any(|r| r.id == saved.id));

        assert!(repo.delete(&saved.id).await?);
        assert!(!repo.delete(&saved.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() -> anyhow::Result<()> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmRepository::<help_request::Entity>::new(db);

        let err = repo.update(help_request::Model { id: i64::MAX, ..help_request("ghost@ucsb.edu") }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn string_keys_are_kept() -> anyhow::Result<()> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmRepository::<ucsb_organization::Entity>::new(db);

        let code = format!("S{}", std::process::id());
        let org = ucsb_organization::Model {
            org_code: code.clone(),
            org_translation_short: "SEAORM".into(),
            org_translation: "SeaORM Test Club".into(),
            inactive: true,
        };
        assert_eq!(repo.insert(org.clone()).await?, org);
        assert!(repo.delete(&code).await?);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_string_key_is_a_conflict() -> anyhow::Result<()> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmRepository::<ucsb_organization::Entity>::new(db);

        let code = format!("D{}", std::process::id());
        let org = ucsb_organization::Model {
            org_code: code.clone(),
            org_translation_short: "DUP".into(),
            org_translation: "Duplicate Club".into(),
            inactive: false,
        };
        repo.insert(org.clone()).await?;
        let err = repo.insert(org).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict { entity: "UCSBOrganization", .. }), "got {err:?}");
        assert!(repo.delete(&code).await?);
        Ok(())
    }
}
