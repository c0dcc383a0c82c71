use atelier_domain::id::{ArtworkId, CommentId, UserId};
use atelier_domain::reaction::ReactionKind;

use crate::domain::repository::{
    ArtworkRepository, CommentLikeRepository, CommentRepository, ReactionRepository,
};
use crate::domain::types::{CommentView, CommunitySummary, ReactionCount};
use crate::error::StorefrontError;

// ── GetCommunity ─────────────────────────────────────────────────────────────

pub struct GetCommunityUseCase<A, C, R, L>
where
    A: ArtworkRepository,
    C: CommentRepository,
    R: ReactionRepository,
    L: CommentLikeRepository,
{
    pub artworks: A,
    pub comments: C,
    pub reactions: R,
    pub likes: L,
}

impl<A, C, R, L> GetCommunityUseCase<A, C, R, L>
where
    A: ArtworkRepository,
    C: CommentRepository,
    R: ReactionRepository,
    L: CommentLikeRepository,
{
    /// `viewer` drives `is_liked` / `is_selected`; anonymous viewers see all false.
    pub async fn execute(
        &self,
        artwork_id: ArtworkId,
        viewer: Option<UserId>,
    ) -> Result<CommunitySummary, StorefrontError> {
        if !self.artworks.exists(artwork_id).await? {
            return Err(StorefrontError::ArtworkNotFound);
        }

        let rows = self.comments.list_for_artwork(artwork_id).await?;
        let comment_ids: Vec<CommentId> = rows.iter().map(|(c, _)| c.id).collect();
        let like_counts = self.likes.counts_for(&comment_ids).await?;
        let liked = match viewer {
            Some(user_id) => self.likes.liked_by(user_id, &comment_ids).await?,
            None => Default::default(),
        };

        let comments: Vec<CommentView> = rows
            .into_iter()
            .map(|(comment, author)| CommentView {
                likes: like_counts.get(&comment.id).copied().unwrap_or(0),
                is_liked: liked.contains(&comment.id),
                comment,
                author,
            })
            .collect();

        let counts = self.reactions.counts_by_kind(artwork_id).await?;
        let selected = match viewer {
            Some(user_id) => self.reactions.kinds_by_user(artwork_id, user_id).await?,
            None => Default::default(),
        };
        let reactions: Vec<ReactionCount> = ReactionKind::ALL
            .into_iter()
            .map(|kind| ReactionCount {
                kind,
                count: counts.get(&kind).copied().unwrap_or(0),
                is_selected: selected.contains(&kind),
            })
            .collect();

        Ok(CommunitySummary {
            total_comments: comments.len() as u64,
            total_reactions: reactions.iter().map(|r| r.count).sum(),
            comments,
            reactions,
        })
    }
}
