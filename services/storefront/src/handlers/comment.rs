use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use atelier_auth_types::identity::Identity;
use atelier_core::client_ip::ClientIp;
use atelier_domain::id::{ArtworkId, CommentId, UserId};

use crate::domain::types::CommentView;
use crate::error::StorefrontError;
use crate::state::AppState;
use crate::usecase::comment::{CreateCommentInput, CreateCommentUseCase, DeleteCommentUseCase};
use crate::usecase::comment_like::ToggleCommentLikeUseCase;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AuthorResponse {
    pub id: UserId,
    pub name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: CommentId,
    pub content: String,
    #[serde(serialize_with = "atelier_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub author: AuthorResponse,
    pub likes: u64,
    pub is_liked: bool,
}

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.comment.id,
            content: view.comment.content,
            created_at: view.comment.created_at,
            author: AuthorResponse {
                id: view.author.id,
                name: view.author.name,
            },
            likes: view.likes,
            is_liked: view.is_liked,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentLikeResponse {
    pub likes: u64,
    pub is_liked: bool,
}

// ── POST /artworks/{id}/comment ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

pub async fn create_comment(
    identity: Identity,
    ClientIp(client_ip): ClientIp,
    State(state): State<AppState>,
    Path(artwork_id): Path<ArtworkId>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), StorefrontError> {
    let uc = CreateCommentUseCase {
        comments: state.comment_repo(),
        users: state.user_repo(),
        limiter: state.rate_limiter.clone(),
    };
    let view = uc
        .execute(CreateCommentInput {
            user_id: identity.user_id,
            client_ip,
            artwork_id,
            content: body.content,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(view.into())))
}

// ── DELETE /comments/{id} ────────────────────────────────────────────────────

pub async fn delete_comment(
    identity: Identity,
    State(state): State<AppState>,
    Path(comment_id): Path<CommentId>,
) -> Result<StatusCode, StorefrontError> {
    let uc = DeleteCommentUseCase {
        comments: state.comment_repo(),
    };
    uc.execute(identity.user_id, identity.role, comment_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /comments/{id}/like ─────────────────────────────────────────────────

pub async fn toggle_comment_like(
    identity: Identity,
    State(state): State<AppState>,
    Path(comment_id): Path<CommentId>,
) -> Result<Json<CommentLikeResponse>, StorefrontError> {
    let uc = ToggleCommentLikeUseCase {
        repo: state.comment_like_repo(),
    };
    let toggled = uc.execute(identity.user_id, comment_id).await?;
    Ok(Json(CommentLikeResponse {
        likes: toggled.likes,
        is_liked: toggled.is_liked,
    }))
}
