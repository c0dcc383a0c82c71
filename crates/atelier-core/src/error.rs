//! Error body rendering shared by every service error type.
//!
//! Services define their own `thiserror` enums and delegate the wire format
//! here: `{"kind": "...", "message": "..."}` with the matching status code.

use std::sync::OnceLock;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Message returned for internal failures unless development mode is on.
pub const INTERNAL_MESSAGE: &str = "internal error";

static EXPOSE_INTERNAL_ERRORS: OnceLock<bool> = OnceLock::new();

/// Enable or disable returning internal error chains to clients.
///
/// Set once at startup from configuration; later calls are ignored.
pub fn set_expose_internal_errors(expose: bool) {
    let _ = EXPOSE_INTERNAL_ERRORS.set(expose);
}

fn expose_internal_errors() -> bool {
    EXPOSE_INTERNAL_ERRORS.get().copied().unwrap_or(false)
}

/// Client-facing message for an internal failure.
pub fn internal_message(error: &anyhow::Error) -> String {
    render_internal_message(error, expose_internal_errors())
}

fn render_internal_message(error: &anyhow::Error, expose: bool) -> String {
    if expose {
        format!("{error:#}")
    } else {
        INTERNAL_MESSAGE.to_owned()
    }
}

/// Build the JSON error response.
pub fn error_response(status: StatusCode, kind: &str, message: String) -> Response {
    let body = serde_json::json!({
        "kind": kind,
        "message": message,
    });
    (status, axum::Json(body)).into_response()
}
