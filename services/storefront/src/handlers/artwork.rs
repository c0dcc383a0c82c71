use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use atelier_auth_types::identity::Identity;
use atelier_domain::id::{ArtworkId, UserId};
use atelier_domain::pagination::PageRequest;

use crate::domain::types::{Artwork, ArtworkSortBy};
use crate::error::StorefrontError;
use crate::state::AppState;
use crate::usecase::artwork::{
    CreateArtworkInput, CreateArtworkUseCase, DeleteArtworkUseCase, GetArtworkUseCase,
    ListArtworksUseCase, TranceFeedUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkResponse {
    pub id: ArtworkId,
    pub title: String,
    pub description: Option<String>,
    pub media_url: String,
    pub width: u32,
    pub height: u32,
    pub media_hash: String,
    pub ai_metadata: Option<serde_json::Value>,
    pub uploader_id: UserId,
    #[serde(serialize_with = "atelier_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Artwork> for ArtworkResponse {
    fn from(a: Artwork) -> Self {
        Self {
            id: a.id,
            title: a.title,
            description: a.description,
            media_url: a.media_url,
            width: a.width,
            height: a.height,
            media_hash: a.media_hash,
            ai_metadata: a.ai_metadata,
            uploader_id: a.uploader_id,
            created_at: a.created_at,
        }
    }
}

fn into_responses(artworks: Vec<Artwork>) -> Vec<ArtworkResponse> {
    artworks.into_iter().map(Into::into).collect()
}

// ── POST /artworks ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtworkRequest {
    pub title: String,
    pub description: Option<String>,
    pub media_url: String,
    pub width: u32,
    pub height: u32,
    pub media_hash: String,
    pub ai_metadata: Option<serde_json::Value>,
}

pub async fn create_artwork(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateArtworkRequest>,
) -> Result<(StatusCode, Json<ArtworkResponse>), StorefrontError> {
    let uc = CreateArtworkUseCase {
        artworks: state.artwork_repo(),
    };
    let artwork = uc
        .execute(
            identity.user_id,
            identity.role,
            CreateArtworkInput {
                title: body.title,
                description: body.description,
                media_url: body.media_url,
                width: body.width,
                height: body.height,
                media_hash: body.media_hash,
                ai_metadata: body.ai_metadata,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(artwork.into())))
}

// ── GET /artworks ────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ArtworkListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub sort: Option<String>,
}

pub async fn list_artworks(
    State(state): State<AppState>,
    Query(query): Query<ArtworkListQuery>,
) -> Result<Json<Vec<ArtworkResponse>>, StorefrontError> {
    let sort_by = match query.sort.as_deref() {
        None => ArtworkSortBy::default(),
        Some(s) => ArtworkSortBy::from_kebab(s)
            .ok_or_else(|| StorefrontError::validation("sort must be newest, oldest or random"))?,
    };
    let defaults = PageRequest::default();
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(defaults.per_page),
        page: query.page.unwrap_or(defaults.page),
    };
    let uc = ListArtworksUseCase {
        artworks: state.artwork_repo(),
    };
    let artworks = uc.execute(sort_by, page).await?;
    Ok(Json(into_responses(artworks)))
}

// ── GET /artworks/trance ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct TranceQuery {
    pub count: Option<u32>,
}

pub async fn trance_feed(
    State(state): State<AppState>,
    Query(query): Query<TranceQuery>,
) -> Result<Json<Vec<ArtworkResponse>>, StorefrontError> {
    let uc = TranceFeedUseCase {
        artworks: state.artwork_repo(),
    };
    let artworks = uc.execute(query.count).await?;
    Ok(Json(into_responses(artworks)))
}

// ── GET /artworks/{id} ───────────────────────────────────────────────────────

pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<ArtworkId>,
) -> Result<Json<ArtworkResponse>, StorefrontError> {
    let uc = GetArtworkUseCase {
        artworks: state.artwork_repo(),
    };
    let artwork = uc.execute(id).await?;
    Ok(Json(artwork.into()))
}

// ── DELETE /artworks/{id} ────────────────────────────────────────────────────

pub async fn delete_artwork(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<ArtworkId>,
) -> Result<StatusCode, StorefrontError> {
    let uc = DeleteArtworkUseCase {
        artworks: state.artwork_repo(),
    };
    uc.execute(identity.role, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
