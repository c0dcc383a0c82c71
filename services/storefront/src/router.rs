use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use atelier_core::health::healthz;
use atelier_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    ai::{describe, synthesize},
    artwork::{create_artwork, delete_artwork, get_artwork, list_artworks, trance_feed},
    auth::{get_me, login, logout, register},
    checkout::create_checkout,
    comment::{create_comment, delete_comment, toggle_comment_like},
    community::get_community,
    health::readyz,
    reaction::toggle_reaction,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/session", delete(logout))
        .route("/auth/me", get(get_me))
        // Artworks
        .route("/artworks", get(list_artworks).post(create_artwork))
        .route("/artworks/trance", get(trance_feed))
        .route("/artworks/{id}", get(get_artwork).delete(delete_artwork))
        // Community
        .route("/artworks/{id}/reaction", post(toggle_reaction))
        .route("/artworks/{id}/comment", post(create_comment))
        .route("/artworks/{id}/community", get(get_community))
        .route("/comments/{id}", delete(delete_comment))
        .route("/comments/{id}/like", post(toggle_comment_like))
        // Commerce and AI
        .route("/checkout", post(create_checkout))
        .route("/synthesize", post(synthesize))
        .route("/ai-describe", post(describe))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
