//! Caller identity extractors.
//!
//! The access token is read from the `atelier_access_token` cookie, or from an
//! `Authorization: Bearer` header when no cookie is present. The signing secret
//! comes from router state through [`JwtSecret`]'s `FromRef` impl.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use http::request::Parts;
use http::{HeaderMap, StatusCode, header};

use atelier_domain::id::UserId;
use atelier_domain::user::UserRole;

use crate::cookie::ATELIER_ACCESS_TOKEN;
use crate::token::validate_access_token;

/// HMAC secret used to validate access tokens.
#[derive(Clone)]
pub struct JwtSecret(pub Arc<str>);

impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An authenticated caller.
///
/// Rejects with 401 `UNAUTHORIZED` if no token is present or it fails validation.
/// Role enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: UserId,
    pub role: UserRole,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Rejection for a missing or invalid access token.
#[derive(Debug)]
pub struct Unauthenticated;

impl IntoResponse for Unauthenticated {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "UNAUTHORIZED",
            "message": "unauthorized",
        });
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(ATELIER_ACCESS_TOKEN) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_owned());
        }
    }
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
}

fn identify(headers: &HeaderMap, secret: &JwtSecret) -> Option<Identity> {
    let token = token_from_headers(headers)?;
    let info = validate_access_token(&token, secret.as_str()).ok()?;
    Some(Identity {
        user_id: info.user_id,
        role: info.role,
    })
}

impl<S> FromRequestParts<S> for Identity
where
    JwtSecret: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Unauthenticated;

    // Validate synchronously and hand back a 'static future; an `async fn` here
    // would capture the `parts` lifetime.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = identify(&parts.headers, &JwtSecret::from_ref(state));
        async move { identity.ok_or(Unauthenticated) }
    }
}

/// Identity for endpoints that also serve anonymous callers. Never rejects.
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<Identity>);

impl OptionalIdentity {
    pub fn user_id(&self) -> Option<UserId> {
        self.0.as_ref().map(|i| i.user_id)
    }
}

impl<S> FromRequestParts<S> for OptionalIdentity
where
    JwtSecret: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = identify(&parts.headers, &JwtSecret::from_ref(state));
        async move { Ok(Self(identity)) }
    }
}
