use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::ModelError;
use crate::resource::Resource;

/// A link to an article shared with the course.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "articles")]
#[serde(rename_all = "camelCase")]
#[schema(as = Articles)]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub url: String,
    #[sea_orm(column_type = "Text")]
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_added: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArticleParams {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_added: NaiveDateTime,
}

pub fn validate_url(u: &str) -> Result<(), ModelError> {
    if !(u.starts_with("http://") || u.starts_with("https://")) {
        return Err(ModelError::Validation("url must start with http(s)".into()));
    }
    Ok(())
}

impl Resource for Model {
    type Id = i64;
    type Params = ArticleParams;

    const NAME: &'static str = "Articles";
    const PATH: &'static str = "articles";

    fn id(&self) -> i64 { self.id }

    fn with_id(self, id: i64) -> Self { Self { id, ..self } }

    fn from_params(p: ArticleParams) -> Self {
        Self {
            id: 0,
            title: p.title,
            url: p.url,
            explanation: p.explanation,
            email: p.email,
            date_added: p.date_added,
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        validate_url(&self.url)
    }
}
