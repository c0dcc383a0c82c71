use chrono::{DateTime, Utc};

use atelier_domain::id::{ArtworkId, CommentId, UserId};
use atelier_domain::pagination::Sort;
use atelier_domain::reaction::ReactionKind;
use atelier_domain::user::UserRole;

/// Registered account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Lowercased.
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub description: Option<String>,
    pub media_url: String,
    pub width: u32,
    pub height: u32,
    pub media_hash: String,
    pub ai_metadata: Option<serde_json::Value>,
    pub uploader_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Sort order for artwork listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkSortBy {
    CreatedAt(Sort),
    Random,
}

impl Default for ArtworkSortBy {
    fn default() -> Self {
        Self::CreatedAt(Sort::Desc)
    }
}

impl ArtworkSortBy {
    /// Parse the `sort` query value (`newest`, `oldest`, `random`).
    pub fn from_kebab(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(Self::CreatedAt(Sort::Desc)),
            "oldest" => Some(Self::CreatedAt(Sort::Asc)),
            "random" => Some(Self::Random),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub user_id: UserId,
    pub artwork_id: ArtworkId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAuthor {
    pub id: UserId,
    pub name: String,
}

/// A comment as shown to a particular viewer.
#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    pub author: CommentAuthor,
    pub likes: u64,
    pub is_liked: bool,
}

/// Count of one reaction kind on an artwork, from a viewer's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionCount {
    pub kind: ReactionKind,
    pub count: u64,
    pub is_selected: bool,
}

/// Aggregated social state of one artwork.
#[derive(Debug, Clone)]
pub struct CommunitySummary {
    pub comments: Vec<CommentView>,
    /// Always one entry per [`ReactionKind`], in canonical order.
    pub reactions: Vec<ReactionCount>,
    pub total_comments: u64,
    pub total_reactions: u64,
}

/// One priced line sent to the payment processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineItem {
    pub name: String,
    pub unit_amount_cents: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub customer_reference: UserId,
    pub line_items: Vec<CheckoutLineItem>,
    pub currency: String,
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}
