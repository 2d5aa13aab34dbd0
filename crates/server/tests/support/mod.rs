#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};
use models::Resource;
use serde_json::Value;
use service::{MemoryRepository, Repository, ServiceError, Storage};
use tower::ServiceExt;

use server::auth::{Authenticator, Claims, ROLE_ADMIN, ROLE_USER};
use server::routes::{self, Repositories};

pub const SECRET: &str = "integration-test-secret";
pub const CONFIGURED_ADMIN: &str = "phtcon@ucsb.edu";

/// Who is calling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    User,
    Admin,
}

pub fn token(email: &str, roles: &[&str]) -> String {
    let claims = Claims {
        sub: email.to_string(),
        email: email.to_string(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        exp: 4_102_444_800,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
}

pub fn bearer(caller: Caller) -> Option<String> {
    match caller {
        Caller::Anonymous => None,
        Caller::User => Some(token("cgaucho@ucsb.edu", &[ROLE_USER])),
        Caller::Admin => Some(token("admin@ucsb.edu", &[ROLE_USER, ROLE_ADMIN])),
    }
}

pub fn authenticator() -> Authenticator {
    Authenticator::new(SECRET, vec![CONFIGURED_ADMIN.to_string()])
}

pub fn memory_repositories() -> Repositories {
    Repositories::from_storage(&Storage::Memory)
}

pub fn app(repos: Repositories) -> Router {
    routes::build_router(repos, authenticator())
}

/// Send one request and decode the JSON body (`Null` when empty).
pub async fn send(app: &Router, method: &str, uri: &str, caller: Caller, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(tok) = bearer(caller) {
        req = req.header("authorization", format!("Bearer {tok}"));
    }
    let req = match body {
        Some(json) => req
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    send_request(app, req).await
}

pub async fn send_request(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, json)
}

/// Memory collaborator that counts every call it receives.
pub struct CountingRepository<R: Resource> {
    inner: MemoryRepository<R>,
    calls: AtomicUsize,
}

impl<R: Resource> CountingRepository<R> {
    pub fn new(inner: MemoryRepository<R>) -> Arc<Self> {
        Arc::new(Self { inner, calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl<R: Resource> Repository<R> for CountingRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, ServiceError> {
        self.tick();
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: &R::Id) -> Result<Option<R>, ServiceError> {
        self.tick();
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, record: R) -> Result<R, ServiceError> {
        self.tick();
        self.inner.insert(record).await
    }

    async fn update(&self, record: R) -> Result<R, ServiceError> {
        self.tick();
        self.inner.update(record).await
    }

    async fn delete(&self, id: &R::Id) -> Result<bool, ServiceError> {
        self.tick();
        self.inner.delete(id).await
    }
}
