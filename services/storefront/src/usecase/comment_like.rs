use atelier_domain::id::{CommentId, UserId};

use crate::domain::repository::CommentLikeRepository;
use crate::error::StorefrontError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentLikeToggled {
    pub likes: u64,
    pub is_liked: bool,
}

// ── ToggleCommentLike ────────────────────────────────────────────────────────

pub struct ToggleCommentLikeUseCase<R: CommentLikeRepository> {
    pub repo: R,
}

impl<R: CommentLikeRepository> ToggleCommentLikeUseCase<R> {
    pub async fn execute(
        &self,
        user_id: UserId,
        comment_id: CommentId,
    ) -> Result<CommentLikeToggled, StorefrontError> {
        let is_liked = self.repo.toggle(user_id, comment_id).await?;
        let likes = self.repo.count(comment_id).await?;
        Ok(CommentLikeToggled { likes, is_liked })
    }
}
