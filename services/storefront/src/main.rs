use std::net::SocketAddr;
use std::time::Duration;

use sea_orm::Database;
use tracing::{info, warn};

use atelier_auth_types::identity::JwtSecret;
use atelier_core::client_ip::TrustedProxies;
use atelier_core::error::set_expose_internal_errors;
use atelier_core::tracing::init_tracing;

use atelier_storefront::config::StorefrontConfig;
use atelier_storefront::infra::ai::OpenAiClient;
use atelier_storefront::infra::notify::WelcomeNotifier;
use atelier_storefront::infra::payment::StripeGateway;
use atelier_storefront::infra::rate_limit::RateLimiterBackend;
use atelier_storefront::router::build_router;
use atelier_storefront::state::AppState;
use atelier_storefront::usecase::checkout::CheckoutSettings;

/// Upper bound on any single provider call.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing("info,sqlx=warn,tower_http=info");

    let config = StorefrontConfig::from_env();
    set_expose_internal_errors(config.is_development());

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let (rate_limiter, describe_limiter) = match &config.redis_url {
        Some(url) => {
            let pool = deadpool_redis::Config::from_url(url)
                .create_pool(Some(deadpool_redis::Runtime::Tokio1))
                .expect("failed to create Redis pool");
            (
                RateLimiterBackend::redis(pool.clone(), config.comment_rate_limit_per_minute),
                RateLimiterBackend::redis(pool, config.describe_rate_limit_per_minute),
            )
        }
        None => {
            warn!("REDIS_URL not set; rate limits are tracked per process");
            (
                RateLimiterBackend::in_memory(config.comment_rate_limit_per_minute),
                RateLimiterBackend::in_memory(config.describe_rate_limit_per_minute),
            )
        }
    };
    if config.trusted_proxy_hops == 0 {
        info!("TRUSTED_PROXY_HOPS is 0; rate limits key on the socket peer address");
    }

    let http = reqwest::Client::builder()
        .timeout(PROVIDER_TIMEOUT)
        .build()
        .expect("failed to build HTTP client");

    let payment = config.payment.api_key.clone().map(|api_key| StripeGateway {
        client: http.clone(),
        api_url: config.payment.api_url.clone(),
        api_key,
    });
    if payment.is_none() {
        warn!("PAYMENT_API_KEY not set; checkout is disabled");
    }

    let ai = config.ai.api_key.clone().map(|api_key| OpenAiClient {
        client: http.clone(),
        api_url: config.ai.api_url.clone(),
        api_key,
        text_model: config.ai.text_model.clone(),
        image_model: config.ai.image_model.clone(),
    });
    if ai.is_none() {
        warn!("AI_API_KEY not set; synthesis is disabled and descriptions use the local fallback");
    }

    let notifier = match &config.welcome_webhook_url {
        Some(url) => WelcomeNotifier::Webhook {
            client: http.clone(),
            url: url.clone(),
        },
        None => WelcomeNotifier::LogOnly,
    };

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret.as_str()),
        cookie_domain: config.cookie_domain.clone(),
        trusted_proxies: TrustedProxies(config.trusted_proxy_hops),
        rate_limiter,
        describe_limiter,
        payment,
        ai,
        notifier,
        checkout: CheckoutSettings {
            success_url: config.payment.success_url.clone(),
            cancel_url: config.payment.cancel_url.clone(),
            currency: config.payment.currency.clone(),
        },
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.storefront_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("storefront listening on {addr}");
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server error");
}
