use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use models::{
    article, help_request, menu_item_review, recommendation_request, ucsb_dining_commons_menu_item,
    ucsb_organization,
};
use service::{Repository, Storage};

use crate::auth::{self, Authenticator};
use crate::openapi;
use crate::resources::resource_router;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// One persistence collaborator per resource collection.
#[derive(Clone)]
pub struct Repositories {
    pub help_requests: Arc<dyn Repository<help_request::Model>>,
    pub menu_item_reviews: Arc<dyn Repository<menu_item_review::Model>>,
    pub recommendation_requests: Arc<dyn Repository<recommendation_request::Model>>,
    pub organizations: Arc<dyn Repository<ucsb_organization::Model>>,
    pub menu_items: Arc<dyn Repository<ucsb_dining_commons_menu_item::Model>>,
    pub articles: Arc<dyn Repository<article::Model>>,
}

impl Repositories {
    pub fn from_storage(storage: &Storage) -> Self {
        Self {
            help_requests: storage.repository::<help_request::Entity>(),
            menu_item_reviews: storage.repository::<menu_item_review::Entity>(),
            recommendation_requests: storage.repository::<recommendation_request::Entity>(),
            organizations: storage.repository::<ucsb_organization::Entity>(),
            menu_items: storage.repository::<ucsb_dining_commons_menu_item::Entity>(),
            articles: storage.repository::<article::Entity>(),
        }
    }
}

/// Build the full application router: public health and docs, the current
/// user probe, and every resource collection.
pub fn build_router(repos: Repositories, auth: Authenticator) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    let me = Router::new()
        .route("/api/currentUser", get(auth::current_user))
        .with_state(auth.clone());

    let resources = Router::new()
        .merge(resource_router(repos.help_requests, auth.clone()))
        .merge(resource_router(repos.menu_item_reviews, auth.clone()))
        .merge(resource_router(repos.recommendation_requests, auth.clone()))
        .merge(resource_router(repos.organizations, auth.clone()))
        .merge(resource_router(repos.menu_items, auth.clone()))
        .merge(resource_router(repos.articles, auth));

    public
        .merge(me)
        .merge(resources)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                // One INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // Status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
