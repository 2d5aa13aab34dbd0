use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::resource::Resource;

/// A student's request for a letter of recommendation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "recommendationrequests")]
#[serde(rename_all = "camelCase")]
#[schema(as = RecommendationRequest)]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    #[sea_orm(column_type = "Text")]
    pub explanation: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_requested: NaiveDateTime,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RecommendationRequestParams {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_requested: NaiveDateTime,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Resource for Model {
    type Id = i64;
    type Params = RecommendationRequestParams;

    const NAME: &'static str = "RecommendationRequest";
    const PATH: &'static str = "recommendationrequest";

    fn id(&self) -> i64 { self.id }

    fn with_id(self, id: i64) -> Self { Self { id, ..self } }

    fn from_params(p: RecommendationRequestParams) -> Self {
        Self {
            id: 0,
            requester_email: p.requester_email,
            professor_email: p.professor_email,
            explanation: p.explanation,
            date_requested: p.date_requested,
            date_needed: p.date_needed,
            done: p.done,
        }
    }
}
