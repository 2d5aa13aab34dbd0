use crate::db::connect;
use crate::{help_request, ucsb_organization, menu_item_review};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, NotSet, Set};

/// Connect and migrate, or `None` when the database is not available.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

#[tokio::test]
async fn test_help_request_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let created = help_request::ActiveModel {
        id: NotSet,
        requester_email: Set("cgaucho@ucsb.edu".into()),
        team_id: Set("s22-5pm-3".into()),
        table_or_breakout_room: Set("7".into()),
        request_time: Set("2022-04-20T17:35:00".parse()?),
        explanation: Set("Need help with Swagger-ui".into()),
        solved: Set(false),
    }
    .insert(&db)
    .await?;
    assert!(created.id > 0);

    let mut active = created.clone().into_active_model();
    active.solved = Set(true);
    let updated = active.update(&db).await?;
    assert!(updated.solved);

    let found = help_request::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found, Some(updated));

    help_request::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(help_request::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_menu_item_review_insert() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let review = menu_item_review::ActiveModel {
        id: NotSet,
        item_id: Set(27),
        reviewer_email: Set("reviewer@ucsb.edu".into()),
        stars: Set(5),
        date_reviewed: Set("2023-01-01T12:00:00".parse()?),
        comments: Set("tasty".into()),
    }
    .insert(&db)
    .await?;
    assert_eq!(review.stars, 5);

    menu_item_review::Entity::delete_by_id(review.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_organization_uses_code_key() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let code = format!("T{}", std::process::id());
    let org = ucsb_organization::Model {
        org_code: code.clone(),
        org_translation_short: "TEST".into(),
        org_translation: "Test Organization".into(),
        inactive: false,
    };
    let inserted = org.clone().into_active_model().reset_all().insert(&db).await?;
    assert_eq!(inserted, org);

    let found = ucsb_organization::Entity::find_by_id(code.clone()).one(&db).await?;
    assert_eq!(found.map(|o| o.org_code), Some(code.clone()));

    ucsb_organization::Entity::delete_by_id(code).exec(&db).await?;
    Ok(())
}
