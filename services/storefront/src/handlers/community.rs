use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use atelier_auth_types::identity::OptionalIdentity;
use atelier_domain::id::ArtworkId;

use crate::error::StorefrontError;
use crate::handlers::comment::CommentResponse;
use crate::handlers::reaction::ReactionResponse;
use crate::state::AppState;
use crate::usecase::community::GetCommunityUseCase;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityStats {
    pub total_comments: u64,
    pub total_reactions: u64,
}

#[derive(Serialize)]
pub struct CommunityResponse {
    pub comments: Vec<CommentResponse>,
    pub reactions: Vec<ReactionResponse>,
    pub stats: CommunityStats,
}

// ── GET /artworks/{id}/community ─────────────────────────────────────────────

pub async fn get_community(
    viewer: OptionalIdentity,
    State(state): State<AppState>,
    Path(artwork_id): Path<ArtworkId>,
) -> Result<Json<CommunityResponse>, StorefrontError> {
    let uc = GetCommunityUseCase {
        artworks: state.artwork_repo(),
        comments: state.comment_repo(),
        reactions: state.reaction_repo(),
        likes: state.comment_like_repo(),
    };
    let summary = uc.execute(artwork_id, viewer.user_id()).await?;
    Ok(Json(CommunityResponse {
        comments: summary.comments.into_iter().map(Into::into).collect(),
        reactions: summary
            .reactions
            .into_iter()
            .map(|r| ReactionResponse {
                kind: r.kind,
                count: r.count,
                is_selected: r.is_selected,
            })
            .collect(),
        stats: CommunityStats {
            total_comments: summary.total_comments,
            total_reactions: summary.total_reactions,
        },
    }))
}
