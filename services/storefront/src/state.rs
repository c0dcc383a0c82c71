use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use atelier_auth_types::identity::JwtSecret;
use atelier_core::client_ip::TrustedProxies;

use crate::infra::ai::OpenAiClient;
use crate::infra::db::{
    DbArtworkRepository, DbCommentLikeRepository, DbCommentRepository, DbReactionRepository,
    DbUserRepository,
};
use crate::infra::notify::WelcomeNotifier;
use crate::infra::payment::StripeGateway;
use crate::infra::rate_limit::RateLimiterBackend;
use crate::usecase::checkout::CheckoutSettings;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
    pub cookie_domain: String,
    pub trusted_proxies: TrustedProxies,
    /// Comment creation, keyed `comment:{ip}`.
    pub rate_limiter: RateLimiterBackend,
    /// Blend descriptions, keyed `describe:{ip}`.
    pub describe_limiter: RateLimiterBackend,
    /// `None` when no payment key is configured.
    pub payment: Option<StripeGateway>,
    /// `None` when no AI key is configured.
    pub ai: Option<OpenAiClient>,
    pub notifier: WelcomeNotifier,
    pub checkout: CheckoutSettings,
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}

impl FromRef<AppState> for TrustedProxies {
    fn from_ref(state: &AppState) -> Self {
        state.trusted_proxies
    }
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn artwork_repo(&self) -> DbArtworkRepository {
        DbArtworkRepository {
            db: self.db.clone(),
        }
    }

    pub fn comment_repo(&self) -> DbCommentRepository {
        DbCommentRepository {
            db: self.db.clone(),
        }
    }

    pub fn reaction_repo(&self) -> DbReactionRepository {
        DbReactionRepository {
            db: self.db.clone(),
        }
    }

    pub fn comment_like_repo(&self) -> DbCommentLikeRepository {
        DbCommentLikeRepository {
            db: self.db.clone(),
        }
    }
}
