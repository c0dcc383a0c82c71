use chrono::Utc;

use atelier_domain::id::ArtworkId;
use atelier_domain::reaction::ReactionKind;
use atelier_domain::user::UserRole;

use atelier_storefront::error::StorefrontError;
use atelier_storefront::usecase::reaction::ToggleReactionUseCase;

use crate::helpers::MockStore;

fn usecase(store: &MockStore) -> ToggleReactionUseCase<MockStore> {
    ToggleReactionUseCase {
        repo: store.clone(),
    }
}

#[tokio::test]
async fn should_select_reaction_on_first_toggle() {
    let store = MockStore::new();
    let user = store.seed_user("Ada", UserRole::User);
    let artwork = store.seed_artwork("Nebula", Utc::now());

    let toggled = usecase(&store)
        .execute(user.id, artwork.id, "cosmic")
        .await
        .unwrap();

    assert_eq!(toggled.kind, ReactionKind::Cosmic);
    assert_eq!(toggled.count, 1);
    assert!(toggled.is_selected);
}

#[tokio::test]
async fn should_restore_state_when_toggled_twice() {
    let store = MockStore::new();
    let user = store.seed_user("Ada", UserRole::User);
    let artwork = store.seed_artwork("Nebula", Utc::now());
    let uc = usecase(&store);

    uc.execute(user.id, artwork.id, "cosmic").await.unwrap();
    let toggled = uc.execute(user.id, artwork.id, "cosmic").await.unwrap();

    assert_eq!(toggled.count, 0);
    assert!(!toggled.is_selected);
    assert_eq!(store.reaction_count(), 0);
}

#[tokio::test]
async fn should_count_every_user_once_per_kind() {
    let store = MockStore::new();
    let ada = store.seed_user("Ada", UserRole::User);
    let grace = store.seed_user("Grace", UserRole::User);
    let artwork = store.seed_artwork("Nebula", Utc::now());
    let uc = usecase(&store);

    uc.execute(ada.id, artwork.id, "love").await.unwrap();
    let toggled = uc.execute(grace.id, artwork.id, "love").await.unwrap();
    assert_eq!(toggled.count, 2);

    let toggled = uc.execute(ada.id, artwork.id, "love").await.unwrap();
    assert_eq!(toggled.count, 1);
    assert!(!toggled.is_selected);
}

#[tokio::test]
async fn should_keep_kinds_independent() {
    let store = MockStore::new();
    let user = store.seed_user("Ada", UserRole::User);
    let artwork = store.seed_artwork("Nebula", Utc::now());
    let uc = usecase(&store);

    uc.execute(user.id, artwork.id, "mystical").await.unwrap();
    let toggled = uc.execute(user.id, artwork.id, "mind_blown").await.unwrap();

    assert_eq!(toggled.count, 1);
    assert!(toggled.is_selected);
    assert_eq!(store.reaction_count(), 2);
}

#[tokio::test]
async fn should_reject_unknown_reaction_type_without_touching_store() {
    let store = MockStore::new();
    let user = store.seed_user("Ada", UserRole::User);
    let artwork = store.seed_artwork("Nebula", Utc::now());

    for kind in ["meh", "Cosmic", "", "mind-blown"] {
        let result = usecase(&store).execute(user.id, artwork.id, kind).await;
        assert!(
            matches!(result, Err(StorefrontError::InvalidReactionType(ref k)) if k == kind),
            "kind {kind:?} was accepted"
        );
    }
    assert_eq!(store.reaction_count(), 0);
}

#[tokio::test]
async fn should_report_unknown_artwork() {
    let store = MockStore::new();
    let user = store.seed_user("Ada", UserRole::User);

    let result = usecase(&store)
        .execute(user.id, ArtworkId::generate(), "love")
        .await;

    assert!(matches!(result, Err(StorefrontError::ArtworkNotFound)));
}

#[tokio::test]
async fn should_reject_toggle_from_deleted_account() {
    let store = MockStore::new();
    let user = store.seed_user("Ada", UserRole::User);
    let artwork = store.seed_artwork("Nebula", Utc::now());
    store.delete_user(user.id);

    let result = usecase(&store).execute(user.id, artwork.id, "love").await;

    assert!(matches!(result, Err(StorefrontError::Unauthorized)));
    assert_eq!(store.reaction_count(), 0);
}
