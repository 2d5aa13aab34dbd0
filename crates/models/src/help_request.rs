use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::resource::Resource;

/// A request for help raised by a student team during a lab section.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "helprequests")]
#[serde(rename_all = "camelCase")]
#[schema(as = HelpRequest)]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub request_time: NaiveDateTime,
    #[sea_orm(column_type = "Text")]
    pub explanation: String,
    pub solved: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct HelpRequestParams {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub explanation: String,
    pub solved: bool,
    /// Local date-time, `YYYY-MM-DDTHH:MM[:SS]`.
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub request_time: NaiveDateTime,
}

impl Resource for Model {
    type Id = i64;
    type Params = HelpRequestParams;

    const NAME: &'static str = "HelpRequest";
    const PATH: &'static str = "HelpRequest";

    fn id(&self) -> i64 { self.id }

    fn with_id(self, id: i64) -> Self { Self { id, ..self } }

    fn from_params(p: HelpRequestParams) -> Self {
        Self {
            id: 0,
            requester_email: p.requester_email,
            team_id: p.team_id,
            table_or_breakout_room: p.table_or_breakout_room,
            request_time: p.request_time,
            explanation: p.explanation,
            solved: p.solved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let hr = Model {
            id: 3,
            requester_email: "cgaucho@ucsb.edu".into(),
            team_id: "04".into(),
            table_or_breakout_room: "04".into(),
            request_time: "2022-01-03T00:00:00".parse().unwrap(),
            explanation: "test".into(),
            solved: false,
        };
        let json = serde_json::to_value(&hr).unwrap();
        assert_eq!(json["requesterEmail"], "cgaucho@ucsb.edu");
        assert_eq!(json["tableOrBreakoutRoom"], "04");
        assert_eq!(json["requestTime"], "2022-01-03T00:00:00");
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn body_without_id_deserializes() {
        let hr: Model = serde_json::from_value(serde_json::json!({
            "requesterEmail": "a@ucsb.edu",
            "teamId": "s22-5pm-3",
            "tableOrBreakoutRoom": "7",
            "requestTime": "2022-04-20T17:35:00",
            "explanation": "Need help with Swagger-ui",
            "solved": true
        }))
        .unwrap();
        assert_eq!(hr.id, 0);
        assert!(hr.solved);
    }

    #[test]
    fn request_time_without_seconds_deserializes() {
        let hr: Model = serde_json::from_value(serde_json::json!({
            "requesterEmail": "a@ucsb.edu",
            "teamId": "s22-5pm-3",
            "tableOrBreakoutRoom": "7",
            "requestTime": "2022-01-03T00:00",
            "explanation": "Need help with Swagger-ui",
            "solved": false
        }))
        .unwrap();
        assert_eq!(serde_json::to_value(&hr).unwrap()["requestTime"], "2022-01-03T00:00:00");
    }
}
