use chrono::Utc;
use tracing::info;

use atelier_domain::id::{ArtworkId, CommentId, UserId};
use atelier_domain::user::UserRole;

use crate::domain::moderation::{find_banned_word, normalize_comment};
use crate::domain::repository::{CommentRepository, RateLimiter, UserRepository};
use crate::domain::types::{Comment, CommentAuthor, CommentView};
use crate::error::StorefrontError;

fn rate_limit_key(client_ip: &str) -> String {
    format!("comment:{client_ip}")
}

// ── CreateComment ────────────────────────────────────────────────────────────

pub struct CreateCommentInput {
    pub user_id: UserId,
    pub client_ip: String,
    pub artwork_id: ArtworkId,
    pub content: String,
}

pub struct CreateCommentUseCase<C: CommentRepository, U: UserRepository, L: RateLimiter> {
    pub comments: C,
    pub users: U,
    pub limiter: L,
}

impl<C, U, L> CreateCommentUseCase<C, U, L>
where
    C: CommentRepository,
    U: UserRepository,
    L: RateLimiter,
{
    /// Checks run in order: rate limit, length, moderation, then the insert.
    pub async fn execute(&self, input: CreateCommentInput) -> Result<CommentView, StorefrontError> {
        if !self.limiter.allow(&rate_limit_key(&input.client_ip)).await? {
            return Err(StorefrontError::RateLimited);
        }

        let content = normalize_comment(&input.content)
            .map_err(|violation| StorefrontError::Validation(violation.message()))?;

        if let Some(word) = find_banned_word(content) {
            info!(user_id = %input.user_id, word, "comment rejected by moderation filter");
            return Err(StorefrontError::ModerationFailed);
        }

        let author = self
            .users
            .find_by_id(input.user_id)
            .await?
            .ok_or(StorefrontError::Unauthorized)?;

        let comment = Comment {
            id: CommentId::generate(),
            content: content.to_owned(),
            user_id: input.user_id,
            artwork_id: input.artwork_id,
            created_at: Utc::now(),
        };
        self.comments.create(&comment).await?;

        Ok(CommentView {
            comment,
            author: CommentAuthor {
                id: author.id,
                name: author.name,
            },
            likes: 0,
            is_liked: false,
        })
    }
}

// ── DeleteComment ────────────────────────────────────────────────────────────

pub struct DeleteCommentUseCase<C: CommentRepository> {
    pub comments: C,
}

impl<C: CommentRepository> DeleteCommentUseCase<C> {
    /// Only the author or an admin may delete.
    pub async fn execute(
        &self,
        user_id: UserId,
        role: UserRole,
        comment_id: CommentId,
    ) -> Result<(), StorefrontError> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or(StorefrontError::CommentNotFound)?;
        if comment.user_id != user_id && !role.is_admin() {
            return Err(StorefrontError::Forbidden);
        }
        if !self.comments.delete(comment_id).await? {
            return Err(StorefrontError::CommentNotFound);
        }
        Ok(())
    }
}
