//! One router per resource, generic over the entity.
//!
//! Paths under `/api/<PATH>`: `GET /all`, `GET ?id=`, `POST /post?<fields>`,
//! `PUT ?id=` with a JSON body, `DELETE ?id=`. The capability extractor is
//! always the first argument so authorization runs before anything else is
//! parsed.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRef, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use common::types::GenericMessage;
use models::Resource;
use serde::Deserialize;
use service::{Repository, ResourceService};
use tracing::info;

use crate::auth::{AdminUser, AuthUser, Authenticator};
use crate::errors::ApiError;

pub struct ResourceState<R: Resource> {
    pub service: Arc<ResourceService<R>>,
    pub auth: Authenticator,
}

impl<R: Resource> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self { service: Arc::clone(&self.service), auth: self.auth.clone() }
    }
}

impl<R: Resource> FromRef<ResourceState<R>> for Authenticator {
    fn from_ref(state: &ResourceState<R>) -> Self {
        state.auth.clone()
    }
}

/// `?id=` selector. Organizations are historically addressed as `?code=`.
#[derive(Debug, Deserialize)]
pub struct IdQuery<I> {
    #[serde(alias = "code")]
    pub id: I,
}

async fn list<R: Resource>(
    _user: AuthUser,
    State(state): State<ResourceState<R>>,
) -> Result<Json<Vec<R>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

async fn get_one<R: Resource>(
    _user: AuthUser,
    State(state): State<ResourceState<R>>,
    query: Result<Query<IdQuery<R::Id>>, QueryRejection>,
) -> Result<Json<R>, ApiError> {
    let Query(q) = query?;
    Ok(Json(state.service.get(&q.id).await?))
}

async fn create<R: Resource>(
    AdminUser(user): AdminUser,
    State(state): State<ResourceState<R>>,
    params: Result<Query<R::Params>, QueryRejection>,
) -> Result<Json<R>, ApiError> {
    let Query(params) = params?;
    let saved = state.service.create(params).await?;
    info!(resource = R::NAME, id = %saved.id(), by = %user.email, "resource created");
    Ok(Json(saved))
}

async fn update<R: Resource>(
    AdminUser(user): AdminUser,
    State(state): State<ResourceState<R>>,
    query: Result<Query<IdQuery<R::Id>>, QueryRejection>,
    body: Result<Json<R>, JsonRejection>,
) -> Result<Json<R>, ApiError> {
    let Query(q) = query?;
    let Json(incoming) = body?;
    let saved = state.service.update(&q.id, incoming).await?;
    info!(resource = R::NAME, id = %q.id, by = %user.email, "resource updated");
    Ok(Json(saved))
}

async fn delete<R: Resource>(
    AdminUser(user): AdminUser,
    State(state): State<ResourceState<R>>,
    query: Result<Query<IdQuery<R::Id>>, QueryRejection>,
) -> Result<Json<GenericMessage>, ApiError> {
    let Query(q) = query?;
    let msg = state.service.delete(&q.id).await?;
    info!(resource = R::NAME, id = %q.id, by = %user.email, "resource deleted");
    Ok(Json(msg))
}

pub fn base_path<R: Resource>() -> String {
    format!("/api/{}", R::PATH)
}

pub fn resource_router<R: Resource>(repo: Arc<dyn Repository<R>>, auth: Authenticator) -> Router {
    let state = ResourceState { service: Arc::new(ResourceService::new(repo)), auth };
    let base = base_path::<R>();
    Router::new()
        .route(&format!("{base}/all"), get(list::<R>))
        .route(&format!("{base}/post"), post(create::<R>))
        .route(&base, get(get_one::<R>).put(update::<R>).delete(delete::<R>))
        .with_state(state)
}
