use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::resource::Resource;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "menuitemreviews")]
#[serde(rename_all = "camelCase")]
#[schema(as = MenuItemReviews)]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_reviewed: NaiveDateTime,
    #[sea_orm(column_type = "Text")]
    pub comments: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MenuItemReviewParams {
    // Older clients send `itemID`.
    #[serde(alias = "itemID")]
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Resource for Model {
    type Id = i64;
    type Params = MenuItemReviewParams;

    const NAME: &'static str = "MenuItemReviews";
    const PATH: &'static str = "menuitemreviews";

    fn id(&self) -> i64 { self.id }

    fn with_id(self, id: i64) -> Self { Self { id, ..self } }

    fn from_params(p: MenuItemReviewParams) -> Self {
        Self {
            id: 0,
            item_id: p.item_id,
            reviewer_email: p.reviewer_email,
            stars: p.stars,
            date_reviewed: p.date_reviewed,
            comments: p.comments,
        }
    }
}
