//! Service layer providing the list/get/create/update/delete contract on top of models.
//! - Separates resource rules from data access.
//! - Data access goes through the `Repository` collaborator, backed by SeaORM or memory.
//! - Reports typed errors; mapping to HTTP happens in the server crate.

pub mod errors;
pub mod repository;
pub mod resource;
pub mod storage;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use repository::{MemoryRepository, Repository, SeaOrmRepository};
pub use resource::ResourceService;
pub use storage::Storage;
