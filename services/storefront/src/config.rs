/// Storefront configuration loaded from environment variables.
///
/// Call after `dotenvy::dotenv()` so a local `.env` file is honoured.
#[derive(Debug)]
pub struct StorefrontConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing access tokens.
    pub jwt_secret: String,
    /// Cookie domain attribute (default "localhost").
    pub cookie_domain: String,
    /// TCP port for the HTTP server (default 3000). Env var: `STOREFRONT_PORT`.
    pub storefront_port: u16,
    /// `development` exposes internal error chains in responses.
    pub app_env: String,
    /// Redis URL for the comment rate limiter. In-process counters when unset.
    pub redis_url: Option<String>,
    pub comment_rate_limit_per_minute: u32,
    /// Requests per minute per client for `/ai-describe`.
    pub describe_rate_limit_per_minute: u32,
    /// Reverse proxies in front of the service that append to
    /// `X-Forwarded-For` (default 0: the socket peer is the client).
    pub trusted_proxy_hops: usize,
    pub payment: PaymentConfig,
    pub ai: AiConfig,
    /// Endpoint notified after registration. Log-only when unset.
    pub welcome_webhook_url: Option<String>,
}

#[derive(Debug)]
pub struct PaymentConfig {
    /// Payment processor secret key. Checkout returns 503 when unset.
    pub api_key: Option<String>,
    pub api_url: String,
    pub success_url: String,
    pub cancel_url: String,
    pub currency: String,
}

#[derive(Debug)]
pub struct AiConfig {
    /// AI provider key. Synthesis returns 503 and descriptions fall back
    /// to local text when unset.
    pub api_key: Option<String>,
    pub api_url: String,
    pub text_model: String,
    pub image_model: String,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            cookie_domain: env_or("COOKIE_DOMAIN", "localhost"),
            storefront_port: env_parse("STOREFRONT_PORT").unwrap_or(3000),
            app_env: env_or("APP_ENV", "production"),
            redis_url: env_opt("REDIS_URL"),
            comment_rate_limit_per_minute: env_parse("COMMENT_RATE_LIMIT_PER_MINUTE")
                .filter(|&v| v > 0)
                .unwrap_or(5),
            describe_rate_limit_per_minute: env_parse("DESCRIBE_RATE_LIMIT_PER_MINUTE")
                .filter(|&v| v > 0)
                .unwrap_or(10),
            trusted_proxy_hops: env_parse("TRUSTED_PROXY_HOPS").unwrap_or(0),
            payment: PaymentConfig {
                api_key: env_opt("PAYMENT_API_KEY"),
                api_url: env_or("PAYMENT_API_URL", "https://api.stripe.com"),
                success_url: env_or(
                    "CHECKOUT_SUCCESS_URL",
                    "http://localhost:3000/checkout/success",
                ),
                cancel_url: env_or("CHECKOUT_CANCEL_URL", "http://localhost:3000/checkout/cancel"),
                currency: env_or("CHECKOUT_CURRENCY", "usd"),
            },
            ai: AiConfig {
                api_key: env_opt("AI_API_KEY"),
                api_url: env_or("AI_API_URL", "https://api.openai.com"),
                text_model: env_or("AI_TEXT_MODEL", "gpt-4o-mini"),
                image_model: env_or("AI_IMAGE_MODEL", "dall-e-3"),
            },
            welcome_webhook_url: env_opt("WELCOME_WEBHOOK_URL"),
        }
    }

    pub fn is_development(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("development")
    }
}

/// Unset and empty both count as absent.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_opt(key).and_then(|v| v.parse().ok())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_owned())
}
