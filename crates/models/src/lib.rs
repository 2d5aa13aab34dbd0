pub mod errors;
pub mod db;
pub mod resource;
pub mod timestamp;

pub mod help_request;
pub mod menu_item_review;
pub mod recommendation_request;
pub mod ucsb_organization;
pub mod ucsb_dining_commons_menu_item;
pub mod article;

pub use resource::{Resource, ResourceId};

#[cfg(test)]
mod tests;
