//! Migrator registering one table per resource collection.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_help_requests;
mod m20240101_000002_create_menu_item_reviews;
mod m20240101_000003_create_recommendation_requests;
mod m20240101_000004_create_ucsb_organization;
mod m20240101_000005_create_ucsb_dining_commons_menu_items;
mod m20240101_000006_create_articles;
mod m20240101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_help_requests::Migration),
            Box::new(m20240101_000002_create_menu_item_reviews::Migration),
            Box::new(m20240101_000003_create_recommendation_requests::Migration),
            Box::new(m20240101_000004_create_ucsb_organization::Migration),
            Box::new(m20240101_000005_create_ucsb_dining_commons_menu_items::Migration),
            Box::new(m20240101_000006_create_articles::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000010_add_indexes::Migration),
        ]
    }
}
