use atelier_domain::id::{ArtworkId, UserId};
use atelier_domain::reaction::ReactionKind;

use crate::domain::repository::ReactionRepository;
use crate::error::StorefrontError;

/// State of one reaction kind after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionToggled {
    pub kind: ReactionKind,
    pub count: u64,
    pub is_selected: bool,
}

// ── ToggleReaction ───────────────────────────────────────────────────────────

pub struct ToggleReactionUseCase<R: ReactionRepository> {
    pub repo: R,
}

impl<R: ReactionRepository> ToggleReactionUseCase<R> {
    /// `kind` is the raw client value; anything outside the fixed set is rejected
    /// before the store is touched.
    pub async fn execute(
        &self,
        user_id: UserId,
        artwork_id: ArtworkId,
        kind: &str,
    ) -> Result<ReactionToggled, StorefrontError> {
        let kind: ReactionKind = kind
            .parse()
            .map_err(|_| StorefrontError::InvalidReactionType(kind.to_owned()))?;
        let is_selected = self.repo.toggle(user_id, artwork_id, kind).await?;
        let count = self.repo.count(artwork_id, kind).await?;
        Ok(ReactionToggled {
            kind,
            count,
            is_selected,
        })
    }
}
