use chrono::Utc;

use atelier_domain::id::{ArtworkId, UserId};
use atelier_domain::pagination::PageRequest;
use atelier_domain::user::UserRole;

use crate::domain::repository::ArtworkRepository;
use crate::domain::types::{Artwork, ArtworkSortBy};
use crate::error::StorefrontError;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 5_000;
const MAX_MEDIA_HASH_CHARS: usize = 128;

pub const DEFAULT_TRANCE_COUNT: u32 = 12;
pub const MAX_TRANCE_COUNT: u32 = 50;

// ── CreateArtwork ────────────────────────────────────────────────────────────

pub struct CreateArtworkInput {
    pub title: String,
    pub description: Option<String>,
    pub media_url: String,
    pub width: u32,
    pub height: u32,
    pub media_hash: String,
    pub ai_metadata: Option<serde_json::Value>,
}

fn validate_artwork(input: &CreateArtworkInput) -> Result<(), StorefrontError> {
    let title_chars = input.title.trim().chars().count();
    if title_chars == 0 || title_chars > MAX_TITLE_CHARS {
        return Err(StorefrontError::validation(format!(
            "title must be 1-{MAX_TITLE_CHARS} characters"
        )));
    }
    if let Some(description) = &input.description {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(StorefrontError::validation(format!(
                "description must be at most {MAX_DESCRIPTION_CHARS} characters"
            )));
        }
    }
    let url = input.media_url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/')) {
        return Err(StorefrontError::validation(
            "mediaUrl must be an http(s) URL or an absolute path",
        ));
    }
    if input.width == 0 || input.height == 0 {
        return Err(StorefrontError::validation("width and height must be positive"));
    }
    let hash = input.media_hash.trim();
    if hash.is_empty() || hash.len() > MAX_MEDIA_HASH_CHARS {
        return Err(StorefrontError::validation(format!(
            "mediaHash must be 1-{MAX_MEDIA_HASH_CHARS} characters"
        )));
    }
    Ok(())
}

pub struct CreateArtworkUseCase<A: ArtworkRepository> {
    pub artworks: A,
}

impl<A: ArtworkRepository> CreateArtworkUseCase<A> {
    pub async fn execute(
        &self,
        uploader_id: UserId,
        role: UserRole,
        input: CreateArtworkInput,
    ) -> Result<Artwork, StorefrontError> {
        if !role.is_admin() {
            return Err(StorefrontError::Forbidden);
        }
        validate_artwork(&input)?;

        let artwork = Artwork {
            id: ArtworkId::generate(),
            title: input.title.trim().to_owned(),
            description: input
                .description
                .map(|d| d.trim().to_owned())
                .filter(|d| !d.is_empty()),
            media_url: input.media_url.trim().to_owned(),
            width: input.width,
            height: input.height,
            media_hash: input.media_hash.trim().to_owned(),
            ai_metadata: input.ai_metadata,
            uploader_id,
            created_at: Utc::now(),
        };
        self.artworks.create(&artwork).await?;
        Ok(artwork)
    }
}

// ── GetArtwork ───────────────────────────────────────────────────────────────

pub struct GetArtworkUseCase<A: ArtworkRepository> {
    pub artworks: A,
}

impl<A: ArtworkRepository> GetArtworkUseCase<A> {
    pub async fn execute(&self, id: ArtworkId) -> Result<Artwork, StorefrontError> {
        self.artworks
            .find_by_id(id)
            .await?
            .ok_or(StorefrontError::ArtworkNotFound)
    }
}

// ── ListArtworks ─────────────────────────────────────────────────────────────

pub struct ListArtworksUseCase<A: ArtworkRepository> {
    pub artworks: A,
}

impl<A: ArtworkRepository> ListArtworksUseCase<A> {
    pub async fn execute(
        &self,
        sort_by: ArtworkSortBy,
        page: PageRequest,
    ) -> Result<Vec<Artwork>, StorefrontError> {
        self.artworks.list(sort_by, page.clamped()).await
    }
}

// ── DeleteArtwork ────────────────────────────────────────────────────────────

pub struct DeleteArtworkUseCase<A: ArtworkRepository> {
    pub artworks: A,
}

impl<A: ArtworkRepository> DeleteArtworkUseCase<A> {
    pub async fn execute(&self, role: UserRole, id: ArtworkId) -> Result<(), StorefrontError> {
        if !role.is_admin() {
            return Err(StorefrontError::Forbidden);
        }
        if !self.artworks.delete(id).await? {
            return Err(StorefrontError::ArtworkNotFound);
        }
        Ok(())
    }
}

// ── TranceFeed ───────────────────────────────────────────────────────────────

pub struct TranceFeedUseCase<A: ArtworkRepository> {
    pub artworks: A,
}

impl<A: ArtworkRepository> TranceFeedUseCase<A> {
    /// Random artworks for the slideshow. `count` defaults to 12.
    pub async fn execute(&self, count: Option<u32>) -> Result<Vec<Artwork>, StorefrontError> {
        let count = count.unwrap_or(DEFAULT_TRANCE_COUNT);
        if !(1..=MAX_TRANCE_COUNT).contains(&count) {
            return Err(StorefrontError::validation(format!(
                "count must be 1-{MAX_TRANCE_COUNT}"
            )));
        }
        self.artworks.sample(count).await
    }
}
