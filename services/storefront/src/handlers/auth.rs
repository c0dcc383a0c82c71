use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use atelier_auth_types::cookie::{clear_access_token_cookie, set_access_token_cookie};
use atelier_auth_types::identity::Identity;
use atelier_domain::id::UserId;
use atelier_domain::user::UserRole;

use crate::domain::types::User;
use crate::error::StorefrontError;
use crate::state::AppState;
use crate::usecase::auth::{
    GetMeUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(serialize_with = "atelier_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

// ── POST /auth/register ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), StorefrontError> {
    let uc = RegisterUseCase {
        users: state.user_repo(),
        notifier: state.notifier.clone(),
    };
    let user = uc
        .execute(RegisterInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token_exp: u64,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, StorefrontError> {
    let uc = LoginUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
    };
    let out = uc
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    let jar = set_access_token_cookie(jar, out.access_token, state.cookie_domain.clone());
    let body = LoginResponse {
        user: out.user.into(),
        access_token_exp: out.access_token_exp,
    };
    Ok((StatusCode::OK, jar, Json(body)))
}

// ── DELETE /auth/session ─────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = clear_access_token_cookie(jar, state.cookie_domain.clone());
    (StatusCode::NO_CONTENT, jar)
}

// ── GET /auth/me ─────────────────────────────────────────────────────────────

pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, StorefrontError> {
    let uc = GetMeUseCase {
        users: state.user_repo(),
    };
    let user = uc.execute(identity.user_id).await?;
    Ok(Json(user.into()))
}
