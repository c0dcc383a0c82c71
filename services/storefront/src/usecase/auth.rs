use anyhow::Context as _;
use chrono::Utc;

use atelier_auth_types::token::issue_access_token;
use atelier_domain::id::UserId;
use atelier_domain::user::UserRole;

use crate::domain::repository::{RegistrationNotifier, UserRepository};
use crate::domain::types::User;
use crate::error::StorefrontError;
use crate::infra::password::{hash_password, verify_password};

pub const MAX_NAME_CHARS: usize = 80;
pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MAX_PASSWORD_CHARS: usize = 128;
const MAX_EMAIL_CHARS: usize = 320;

/// Lowercase and shape-check an email address.
pub fn normalize_email(email: &str) -> Result<String, StorefrontError> {
    let email = email.trim().to_lowercase();
    let valid = email.chars().count() <= MAX_EMAIL_CHARS
        && !email.chars().any(char::is_whitespace)
        && match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            None => false,
        };
    if !valid {
        return Err(StorefrontError::validation("email is invalid"));
    }
    Ok(email)
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUseCase<U: UserRepository, N: RegistrationNotifier> {
    pub users: U,
    pub notifier: N,
}

impl<U: UserRepository, N: RegistrationNotifier> RegisterUseCase<U, N> {
    pub async fn execute(&self, input: RegisterInput) -> Result<User, StorefrontError> {
        let name = input.name.trim();
        let name_chars = name.chars().count();
        if name_chars == 0 || name_chars > MAX_NAME_CHARS {
            return Err(StorefrontError::validation(format!(
                "name must be 1-{MAX_NAME_CHARS} characters"
            )));
        }
        let email = normalize_email(&input.email)?;
        let password_chars = input.password.chars().count();
        if !(MIN_PASSWORD_CHARS..=MAX_PASSWORD_CHARS).contains(&password_chars) {
            return Err(StorefrontError::validation(format!(
                "password must be {MIN_PASSWORD_CHARS}-{MAX_PASSWORD_CHARS} characters"
            )));
        }

        let password = input.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .context("join password hashing task")??;

        let user = User {
            id: UserId::generate(),
            name: name.to_owned(),
            email,
            password_hash,
            role: UserRole::User,
            created_at: Utc::now(),
        };
        // The unique index on email is authoritative; no lookup beforehand.
        self.users.create(&user).await?;

        self.notifier.notify_registered(&user);
        Ok(user)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginOutput {
    pub user: User,
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> LoginUseCase<U> {
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, StorefrontError> {
        let email = input.email.trim().to_lowercase();
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(StorefrontError::InvalidCredentials)?;

        let password = input.password;
        let stored_hash = user.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
                .await
                .context("join password verification task")?;
        if !verified {
            return Err(StorefrontError::InvalidCredentials);
        }

        let (access_token, access_token_exp) =
            issue_access_token(user.id, user.role, &self.jwt_secret)
                .context("issue access token")?;
        Ok(LoginOutput {
            user,
            access_token,
            access_token_exp,
        })
    }
}

// ── GetMe ────────────────────────────────────────────────────────────────────

pub struct GetMeUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetMeUseCase<U> {
    pub async fn execute(&self, user_id: UserId) -> Result<User, StorefrontError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(StorefrontError::UserNotFound)
    }
}
