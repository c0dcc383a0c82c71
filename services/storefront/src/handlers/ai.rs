use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use atelier_auth_types::identity::Identity;
use atelier_core::client_ip::ClientIp;

use crate::error::StorefrontError;
use crate::state::AppState;
use crate::usecase::describe::{DescribeInput, DescribeUseCase, DescriptionSource};
use crate::usecase::synthesize::SynthesizeUseCase;

// ── POST /synthesize ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SynthesizeRequest {
    pub prompt: String,
}

#[derive(Serialize)]
pub struct SynthesizeResponse {
    pub image: String,
}

pub async fn synthesize(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<SynthesizeRequest>,
) -> Result<Json<SynthesizeResponse>, StorefrontError> {
    let uc = SynthesizeUseCase {
        generator: state.ai.clone(),
    };
    let image = uc.execute(&body.prompt).await?;
    Ok(Json(SynthesizeResponse { image }))
}

// ── POST /ai-describe ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeRequest {
    pub artwork_titles: Vec<String>,
    pub blend_mode: String,
    pub intensity: f64,
}

#[derive(Serialize)]
pub struct DescribeResponse {
    pub description: String,
    pub source: DescriptionSource,
}

pub async fn describe(
    ClientIp(client_ip): ClientIp,
    State(state): State<AppState>,
    Json(body): Json<DescribeRequest>,
) -> Result<Json<DescribeResponse>, StorefrontError> {
    let uc = DescribeUseCase {
        generator: state.ai.clone(),
        limiter: state.describe_limiter.clone(),
    };
    let out = uc
        .execute(
            &client_ip,
            DescribeInput {
                artwork_titles: body.artwork_titles,
                blend_mode: body.blend_mode,
                intensity: body.intensity,
            },
        )
        .await?;
    Ok(Json(DescribeResponse {
        description: out.description,
        source: out.source,
    }))
}
