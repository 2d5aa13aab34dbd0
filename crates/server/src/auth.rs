//! Bearer/cookie JWT verification and the two capability tiers.
//!
//! Tokens are issued by the identity provider; this service only checks the
//! HS256 signature and expiry. Any failure leaves the caller anonymous, and
//! anonymous callers are rejected with 403 like under-privileged ones.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::{async_trait, Json};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::errors::ApiError;

pub const AUTH_COOKIE: &str = "auth_token";
pub const ROLE_USER: &str = "ROLE_USER";
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,
}

/// The authenticated caller as seen by handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CurrentUser {
    pub email: String,
    pub roles: Vec<String>,
    pub admin: bool,
}

struct Inner {
    key: DecodingKey,
    validation: Validation,
    admin_emails: Vec<String>,
}

#[derive(Clone)]
pub struct Authenticator {
    inner: Arc<Inner>,
}

impl Authenticator {
    pub fn new(secret: &str, admin_emails: impl IntoIterator<Item = String>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let admin_emails = admin_emails.into_iter().map(|e| e.trim().to_ascii_lowercase()).collect();
        Self { inner: Arc::new(Inner { key: DecodingKey::from_secret(secret.as_bytes()), validation, admin_emails }) }
    }

    pub fn from_config(cfg: &configs::AuthConfig) -> Self {
        Self::new(&cfg.jwt_secret, cfg.admin_emails.iter().cloned())
    }

    fn token_from_headers(headers: &HeaderMap) -> Option<String> {
        let bearer = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|t| t.trim().to_string());
        bearer.or_else(|| CookieJar::from_headers(headers).get(AUTH_COOKIE).map(|c| c.value().to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<CurrentUser, ApiError> {
        let data = decode::<Claims>(token, &self.inner.key, &self.inner.validation).map_err(|e| {
            debug!(error = %e, "token rejected");
            ApiError::forbidden()
        })?;
        let claims = data.claims;
        let email = claims.email.to_ascii_lowercase();
        let admin = claims.roles.iter().any(|r| r == ROLE_ADMIN) || self.inner.admin_emails.contains(&email);
        Ok(CurrentUser { email: claims.email, roles: claims.roles, admin })
    }

    pub fn authenticate(&self, headers: &HeaderMap) -> Result<CurrentUser, ApiError> {
        let token = Self::token_from_headers(headers).ok_or_else(ApiError::forbidden)?;
        self.verify(&token)
    }
}

/// Any caller holding a valid token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

/// A caller holding a valid token with administrator rights.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    Authenticator: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Authenticator::from_ref(state).authenticate(&parts.headers).map(AuthUser)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    Authenticator: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = Authenticator::from_ref(state).authenticate(&parts.headers)?;
        if !user.admin {
            debug!(email = %user.email, "admin operation refused");
            return Err(ApiError::forbidden());
        }
        Ok(AdminUser(user))
    }
}

#[utoipa::path(
    get,
    path = "/api/currentUser",
    tag = "current user",
    responses((status = 200, description = "The authenticated caller", body = CurrentUser), (status = 403, description = "Forbidden"))
)]
pub async fn current_user(AuthUser(user): AuthUser) -> Json<CurrentUser> {
    Json(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "unit-test-secret";

    fn token(email: &str, roles: &[&str], exp: usize) -> String {
        let claims = Claims {
            sub: email.into(),
            email: email.into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
    }

    fn far_future() -> usize {
        4_102_444_800
    }

    #[test]
    fn admin_role_grants_admin() {
        let auth = Authenticator::new(SECRET, Vec::new());
        let user = auth.verify(&token("phtcon@ucsb.edu", &[ROLE_USER, ROLE_ADMIN], far_future())).unwrap();
        assert!(user.admin);
    }

    #[test]
    fn configured_admin_emails_grant_admin() {
        let auth = Authenticator::new(SECRET, vec!["PHTCON@ucsb.edu".to_string()]);
        let user = auth.verify(&token("phtcon@ucsb.edu", &[ROLE_USER], far_future())).unwrap();
        assert!(user.admin);
        let other = auth.verify(&token("cgaucho@ucsb.edu", &[ROLE_USER], far_future())).unwrap();
        assert!(!other.admin);
    }

    #[test]
    fn expired_or_forged_tokens_are_rejected() {
        let auth = Authenticator::new(SECRET, Vec::new());
        assert!(auth.verify(&token("a@ucsb.edu", &[ROLE_USER], 1)).is_err());
        let forged = Authenticator::new("other-secret", Vec::new());
        assert!(forged.verify(&token("a@ucsb.edu", &[ROLE_USER], far_future())).is_err());
    }

    #[test]
    fn token_is_read_from_cookie_when_no_bearer() {
        let auth = Authenticator::new(SECRET, Vec::new());
        let mut headers = HeaderMap::new();
        let cookie = format!("theme=dark; {AUTH_COOKIE}={}", token("a@ucsb.edu", &[ROLE_USER], far_future()));
        headers.insert(axum::http::header::COOKIE, HeaderValue::from_str(&cookie).unwrap());
        assert_eq!(auth.authenticate(&headers).unwrap().email, "a@ucsb.edu");

        assert!(matches!(auth.authenticate(&HeaderMap::new()), Err(ApiError::Forbidden(_))));
    }
}
