#![allow(async_fn_in_trait)]

use std::collections::{HashMap, HashSet};

use atelier_domain::id::{ArtworkId, CommentId, UserId};
use atelier_domain::pagination::PageRequest;
use atelier_domain::reaction::ReactionKind;

use crate::domain::types::{
    Artwork, ArtworkSortBy, CheckoutRequest, CheckoutSession, Comment, CommentAuthor, User,
};
use crate::error::StorefrontError;

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    /// Insert a new user. A duplicate email yields `EmailTaken`.
    async fn create(&self, user: &User) -> Result<(), StorefrontError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StorefrontError>;
    /// `email` must already be lowercased.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorefrontError>;
}

/// Repository for artworks.
pub trait ArtworkRepository: Send + Sync {
    /// Insert a new artwork. A duplicate media hash yields `ArtworkAlreadyExists`.
    async fn create(&self, artwork: &Artwork) -> Result<(), StorefrontError>;
    async fn find_by_id(&self, id: ArtworkId) -> Result<Option<Artwork>, StorefrontError>;
    async fn find_by_ids(&self, ids: &[ArtworkId]) -> Result<Vec<Artwork>, StorefrontError>;
    async fn exists(&self, id: ArtworkId) -> Result<bool, StorefrontError>;
    async fn list(
        &self,
        sort_by: ArtworkSortBy,
        page: PageRequest,
    ) -> Result<Vec<Artwork>, StorefrontError>;
    /// Up to `count` artworks in random order.
    async fn sample(&self, count: u32) -> Result<Vec<Artwork>, StorefrontError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: ArtworkId) -> Result<bool, StorefrontError>;
}

/// Repository for comments.
pub trait CommentRepository: Send + Sync {
    /// Insert a comment. An unknown artwork yields `ArtworkNotFound` and an
    /// unknown author yields `Unauthorized`.
    async fn create(&self, comment: &Comment) -> Result<(), StorefrontError>;
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, StorefrontError>;
    /// All comments of an artwork with their authors, newest first.
    async fn list_for_artwork(
        &self,
        artwork_id: ArtworkId,
    ) -> Result<Vec<(Comment, CommentAuthor)>, StorefrontError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: CommentId) -> Result<bool, StorefrontError>;
}

/// Repository for artwork reactions.
pub trait ReactionRepository: Send + Sync {
    /// Insert the reaction if absent, delete it if present. Returns whether the
    /// reaction exists afterwards. An unknown artwork yields `ArtworkNotFound`
    /// and an unknown user yields `Unauthorized`.
    async fn toggle(
        &self,
        user_id: UserId,
        artwork_id: ArtworkId,
        kind: ReactionKind,
    ) -> Result<bool, StorefrontError>;
    async fn count(
        &self,
        artwork_id: ArtworkId,
        kind: ReactionKind,
    ) -> Result<u64, StorefrontError>;
    /// Counts per kind. Kinds without reactions may be absent.
    async fn counts_by_kind(
        &self,
        artwork_id: ArtworkId,
    ) -> Result<HashMap<ReactionKind, u64>, StorefrontError>;
    /// Kinds the user has selected on the artwork.
    async fn kinds_by_user(
        &self,
        artwork_id: ArtworkId,
        user_id: UserId,
    ) -> Result<HashSet<ReactionKind>, StorefrontError>;
}

/// Repository for comment likes.
pub trait CommentLikeRepository: Send + Sync {
    /// Insert the like if absent, delete it if present. Returns whether the
    /// like exists afterwards. An unknown comment yields `CommentNotFound` and
    /// an unknown user yields `Unauthorized`.
    async fn toggle(&self, user_id: UserId, comment_id: CommentId)
    -> Result<bool, StorefrontError>;
    async fn count(&self, comment_id: CommentId) -> Result<u64, StorefrontError>;
    /// Like counts for the given comments. Comments without likes may be absent.
    async fn counts_for(
        &self,
        comment_ids: &[CommentId],
    ) -> Result<HashMap<CommentId, u64>, StorefrontError>;
    /// The subset of `comment_ids` the user has liked.
    async fn liked_by(
        &self,
        user_id: UserId,
        comment_ids: &[CommentId],
    ) -> Result<HashSet<CommentId>, StorefrontError>;
}

/// Fixed-window request counter.
pub trait RateLimiter: Send + Sync {
    /// Record one hit for `key`. Returns `false` once the window's limit is exceeded.
    async fn allow(&self, key: &str) -> Result<bool, StorefrontError>;
}

/// Payment processor that hosts the checkout page.
pub trait PaymentGateway: Send + Sync {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, StorefrontError>;
}

/// Text-generation provider.
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, system: &str, prompt: &str) -> Result<String, StorefrontError>;
}

/// Image-generation provider. Returns an image URL or data URL.
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<String, StorefrontError>;
}

/// Side channel told about new registrations. Fire-and-forget: implementations
/// must not block the caller and must swallow their own failures.
pub trait RegistrationNotifier: Send + Sync {
    fn notify_registered(&self, user: &User);
}
