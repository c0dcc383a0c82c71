//! Signed-in callers for integration tests.
//!
//! Services authenticate with a JWT carried in the `atelier_access_token`
//! cookie or a bearer header. `MockAuth` signs a real token with the test
//! secret so requests pass through the production extractor unchanged.

use http::{HeaderName, HeaderValue, header};

use atelier_auth_types::cookie::ATELIER_ACCESS_TOKEN;
use atelier_auth_types::token::issue_access_token;
use atelier_domain::id::UserId;
use atelier_domain::user::UserRole;

/// Secret shared by test routers and [`MockAuth`].
pub const TEST_JWT_SECRET: &str = "atelier-test-secret";

/// Configurable identity attached to test requests.
pub struct MockAuth {
    pub user_id: UserId,
    pub role: UserRole,
    token: String,
}

impl MockAuth {
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        let (token, _) = issue_access_token(user_id, role, TEST_JWT_SECRET)
            .unwrap_or_else(|e| panic!("failed to sign test token: {e}"));
        Self {
            user_id,
            role,
            token,
        }
    }

    pub fn user() -> Self {
        Self::new(UserId::generate(), UserRole::User)
    }

    pub fn admin() -> Self {
        Self::new(UserId::generate(), UserRole::Admin)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `Cookie` header carrying the access token.
    pub fn cookie_header(&self) -> (HeaderName, HeaderValue) {
        let value = format!("{ATELIER_ACCESS_TOKEN}={}", self.token);
        (header::COOKIE, header_value(&value))
    }

    /// `Authorization: Bearer` header carrying the access token.
    pub fn bearer_header(&self) -> (HeaderName, HeaderValue) {
        let value = format!("Bearer {}", self.token);
        (header::AUTHORIZATION, header_value(&value))
    }
}

fn header_value(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|e| panic!("invalid header value: {e}"))
}
