use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::ModelError;
use crate::resource::Resource;

/// Student organization, keyed by its short code (e.g. `ZPR`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "ucsborganization")]
#[serde(rename_all = "camelCase")]
#[schema(as = UCSBOrganization)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(default)]
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UcsbOrganizationParams {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

pub fn validate_org_code(code: &str) -> Result<(), ModelError> {
    if code.trim().is_empty() {
        return Err(ModelError::Validation("orgCode must not be blank".into()));
    }
    if code.chars().any(char::is_whitespace) {
        return Err(ModelError::Validation("orgCode must not contain whitespace".into()));
    }
    Ok(())
}

impl Resource for Model {
    type Id = String;
    type Params = UcsbOrganizationParams;

    const NAME: &'static str = "UCSBOrganization";
    const PATH: &'static str = "ucsborganization";

    fn id(&self) -> String { self.org_code.clone() }

    fn with_id(self, org_code: String) -> Self { Self { org_code, ..self } }

    fn from_params(p: UcsbOrganizationParams) -> Self {
        Self {
            org_code: p.org_code,
            org_translation_short: p.org_translation_short,
            org_translation: p.org_translation,
            inactive: p.inactive,
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        validate_org_code(&self.org_code)
    }
}
