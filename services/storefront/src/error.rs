use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use atelier_core::error::{error_response, internal_message};

/// Storefront error variants. `kind()` is the stable machine-readable code.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Validation(String),
    #[error("content contains prohibited language")]
    ModerationFailed,
    #[error("invalid reaction type: {0}")]
    InvalidReactionType(String),
    #[error("forbidden")]
    Forbidden,
    #[error("user not found")]
    UserNotFound,
    #[error("artwork not found")]
    ArtworkNotFound,
    #[error("comment not found")]
    CommentNotFound,
    #[error("email already registered")]
    EmailTaken,
    #[error("artwork already exists")]
    ArtworkAlreadyExists,
    #[error("too many requests, try again later")]
    RateLimited,
    #[error("{0} provider is not configured")]
    ProviderNotConfigured(&'static str),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl StorefrontError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::ModerationFailed => "MODERATION_FAILED",
            Self::InvalidReactionType(_) => "INVALID_REACTION_TYPE",
            Self::Forbidden => "FORBIDDEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ArtworkNotFound => "ARTWORK_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::ArtworkAlreadyExists => "ARTWORK_ALREADY_EXISTS",
            Self::RateLimited => "RATE_LIMITED",
            Self::ProviderNotConfigured(_) => "PROVIDER_NOT_CONFIGURED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Validation(_) | Self::ModerationFailed | Self::InvalidReactionType(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::ArtworkNotFound | Self::CommentNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::EmailTaken | Self::ArtworkAlreadyExists => StatusCode::CONFLICT,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::ProviderNotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Internal(e) => {
                tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
                internal_message(e)
            }
            other => other.to_string(),
        };
        error_response(self.status(), self.kind(), message)
    }
}
