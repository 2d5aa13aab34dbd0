use models::errors::ModelError;
use models::Resource;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("{entity} with id {id} already exists")]
    Conflict { entity: &'static str, id: String },
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found<R: Resource>(id: &R::Id) -> Self {
        Self::NotFound { entity: R::NAME, id: id.to_string() }
    }

    pub fn conflict<R: Resource>(id: &R::Id) -> Self {
        Self::Conflict { entity: R::NAME, id: id.to_string() }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Db(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = ServiceError::not_found::<models::menu_item_review::Model>(&7);
        assert_eq!(err.to_string(), "MenuItemReviews with id 7 not found");
        let err = ServiceError::not_found::<models::ucsb_organization::Model>(&"ZPR".to_string());
        assert_eq!(err.to_string(), "UCSBOrganization with id ZPR not found");
    }
}
