use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use atelier_auth_types::identity::Identity;
use atelier_domain::id::ArtworkId;
use atelier_domain::reaction::ReactionKind;

use crate::error::StorefrontError;
use crate::state::AppState;
use crate::usecase::reaction::{ReactionToggled, ToggleReactionUseCase};

#[derive(Deserialize)]
pub struct ToggleReactionRequest {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    #[serde(rename = "type")]
    pub kind: ReactionKind,
    pub count: u64,
    pub is_selected: bool,
}

impl From<ReactionToggled> for ReactionResponse {
    fn from(t: ReactionToggled) -> Self {
        Self {
            kind: t.kind,
            count: t.count,
            is_selected: t.is_selected,
        }
    }
}

// ── POST /artworks/{id}/reaction ─────────────────────────────────────────────

pub async fn toggle_reaction(
    identity: Identity,
    State(state): State<AppState>,
    Path(artwork_id): Path<ArtworkId>,
    Json(body): Json<ToggleReactionRequest>,
) -> Result<Json<ReactionResponse>, StorefrontError> {
    let uc = ToggleReactionUseCase {
        repo: state.reaction_repo(),
    };
    let toggled = uc
        .execute(identity.user_id, artwork_id, &body.kind)
        .await?;
    Ok(Json(toggled.into()))
}
