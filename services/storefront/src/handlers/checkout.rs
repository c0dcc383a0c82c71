use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use atelier_auth_types::identity::Identity;
use atelier_domain::id::ArtworkId;
use atelier_domain::print::PrintSize;

use crate::error::StorefrontError;
use crate::state::AppState;
use crate::usecase::checkout::{CheckoutItem, CreateCheckoutUseCase};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItemRequest {
    pub artwork_id: ArtworkId,
    pub size: PrintSize,
    pub quantity: u32,
}

#[derive(Deserialize)]
pub struct CheckoutRequestBody {
    pub items: Vec<CheckoutItemRequest>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub session_id: String,
    pub url: String,
}

// ── POST /checkout ───────────────────────────────────────────────────────────

pub async fn create_checkout(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CheckoutRequestBody>,
) -> Result<Json<CheckoutResponse>, StorefrontError> {
    let uc = CreateCheckoutUseCase {
        artworks: state.artwork_repo(),
        gateway: state.payment.clone(),
        settings: state.checkout.clone(),
    };
    let items = body
        .items
        .into_iter()
        .map(|i| CheckoutItem {
            artwork_id: i.artwork_id,
            size: i.size,
            quantity: i.quantity,
        })
        .collect();
    let session = uc.execute(identity.user_id, items).await?;
    Ok(Json(CheckoutResponse {
        session_id: session.id,
        url: session.url,
    }))
}
