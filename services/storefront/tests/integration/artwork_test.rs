use chrono::{Duration, Utc};

use atelier_domain::id::{ArtworkId, UserId};
use atelier_domain::pagination::{PageRequest, Sort};
use atelier_domain::user::UserRole;

use atelier_storefront::domain::types::ArtworkSortBy;
use atelier_storefront::error::StorefrontError;
use atelier_storefront::usecase::artwork::{
    CreateArtworkInput, CreateArtworkUseCase, DeleteArtworkUseCase, GetArtworkUseCase,
    ListArtworksUseCase, TranceFeedUseCase,
};

use crate::helpers::MockStore;

fn upload(title: &str, media_hash: &str) -> CreateArtworkInput {
    CreateArtworkInput {
        title: title.to_owned(),
        description: Some("   ".to_owned()),
        media_url: "https://cdn.atelier.test/nebula.jpg".to_owned(),
        width: 3000,
        height: 2000,
        media_hash: media_hash.to_owned(),
        ai_metadata: Some(serde_json::json!({ "model": "diffusion-xl" })),
    }
}

// ── Create ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_let_admin_upload_artwork() {
    let store = MockStore::new();
    let admin = store.seed_user("Root", UserRole::Admin);

    let artwork = CreateArtworkUseCase {
        artworks: store.clone(),
    }
    .execute(admin.id, UserRole::Admin, upload("  Nebula  ", "sha256:abc"))
    .await
    .unwrap();

    assert_eq!(artwork.title, "Nebula");
    assert_eq!(artwork.description, None);
    assert_eq!(artwork.uploader_id, admin.id);
    assert_eq!(artwork.ai_metadata.unwrap()["model"], "diffusion-xl");
    assert_eq!(store.artwork_count(), 1);
}

#[tokio::test]
async fn should_forbid_upload_for_regular_user() {
    let store = MockStore::new();

    let result = CreateArtworkUseCase {
        artworks: store.clone(),
    }
    .execute(UserId::generate(), UserRole::User, upload("Nebula", "sha256:abc"))
    .await;

    assert!(matches!(result, Err(StorefrontError::Forbidden)));
    assert_eq!(store.artwork_count(), 0);
}

#[tokio::test]
async fn should_reject_duplicate_media_hash() {
    let store = MockStore::new();
    let uc = CreateArtworkUseCase {
        artworks: store.clone(),
    };
    let admin = UserId::generate();

    uc.execute(admin, UserRole::Admin, upload("Nebula", "sha256:abc"))
        .await
        .unwrap();
    let result = uc
        .execute(admin, UserRole::Admin, upload("Nebula again", "sha256:abc"))
        .await;

    assert!(matches!(result, Err(StorefrontError::ArtworkAlreadyExists)));
    assert_eq!(store.artwork_count(), 1);
}

#[tokio::test]
async fn should_validate_upload_fields() {
    let store = MockStore::new();
    let uc = CreateArtworkUseCase {
        artworks: store.clone(),
    };

    let mut blank_title = upload("", "sha256:1");
    blank_title.title = "   ".to_owned();
    let mut zero_width = upload("Nebula", "sha256:2");
    zero_width.width = 0;
    let mut no_hash = upload("Nebula", "");
    no_hash.media_hash = " ".to_owned();

    for input in [blank_title, zero_width, no_hash] {
        let result = uc.execute(UserId::generate(), UserRole::Admin, input).await;
        assert!(matches!(result, Err(StorefrontError::Validation(_))));
    }
    assert_eq!(store.artwork_count(), 0);
}

// ── Read ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_get_artwork_or_report_missing() {
    let store = MockStore::new();
    let artwork = store.seed_artwork("Nebula", Utc::now());
    let uc = GetArtworkUseCase {
        artworks: store.clone(),
    };

    assert_eq!(uc.execute(artwork.id).await.unwrap().title, "Nebula");
    let missing = uc.execute(ArtworkId::generate()).await;
    assert!(matches!(missing, Err(StorefrontError::ArtworkNotFound)));
}

#[tokio::test]
async fn should_list_artworks_by_creation_time() {
    let store = MockStore::new();
    let now = Utc::now();
    store.seed_artwork("Oldest", now - Duration::days(2));
    store.seed_artwork("Newest", now);
    store.seed_artwork("Middle", now - Duration::days(1));
    let uc = ListArtworksUseCase {
        artworks: store.clone(),
    };

    let newest_first = uc
        .execute(ArtworkSortBy::default(), PageRequest::default())
        .await
        .unwrap();
    let titles: Vec<_> = newest_first.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["Newest", "Middle", "Oldest"]);

    let second_page = uc
        .execute(
            ArtworkSortBy::CreatedAt(Sort::Asc),
            PageRequest {
                per_page: 2,
                page: 2,
            },
        )
        .await
        .unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].title, "Newest");
}

#[tokio::test]
async fn should_bound_trance_feed_size() {
    let store = MockStore::new();
    for n in 0..15 {
        store.seed_artwork(&format!("Piece {n}"), Utc::now());
    }
    let uc = TranceFeedUseCase {
        artworks: store.clone(),
    };

    assert_eq!(uc.execute(None).await.unwrap().len(), 12);
    assert_eq!(uc.execute(Some(3)).await.unwrap().len(), 3);
    assert_eq!(uc.execute(Some(50)).await.unwrap().len(), 15);
    for count in [0, 51] {
        let result = uc.execute(Some(count)).await;
        assert!(matches!(result, Err(StorefrontError::Validation(_))));
    }
}

// ── Delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_restrict_artwork_deletion_to_admins() {
    let store = MockStore::new();
    let artwork = store.seed_artwork("Nebula", Utc::now());
    let uc = DeleteArtworkUseCase {
        artworks: store.clone(),
    };

    let forbidden = uc.execute(UserRole::User, artwork.id).await;
    assert!(matches!(forbidden, Err(StorefrontError::Forbidden)));
    assert_eq!(store.artwork_count(), 1);

    uc.execute(UserRole::Admin, artwork.id).await.unwrap();
    assert_eq!(store.artwork_count(), 0);

    let again = uc.execute(UserRole::Admin, artwork.id).await;
    assert!(matches!(again, Err(StorefrontError::ArtworkNotFound)));
}
