use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::resource::Resource;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "ucsbdiningcommonsmenuitems")]
#[serde(rename_all = "camelCase")]
#[schema(as = UCSBDiningCommonsMenuItem)]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MenuItemParams {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Resource for Model {
    type Id = i64;
    type Params = MenuItemParams;

    const NAME: &'static str = "UCSBDiningCommonsMenuItem";
    const PATH: &'static str = "ucsbdiningcommonsmenuitems";

    fn id(&self) -> i64 { self.id }

    fn with_id(self, id: i64) -> Self { Self { id, ..self } }

    fn from_params(p: MenuItemParams) -> Self {
        Self { id: 0, dining_commons_code: p.dining_commons_code, name: p.name, station: p.station }
    }
}
