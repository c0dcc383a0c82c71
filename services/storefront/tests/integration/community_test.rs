use chrono::Utc;

use atelier_domain::id::ArtworkId;
use atelier_domain::reaction::ReactionKind;
use atelier_domain::user::UserRole;

use atelier_storefront::error::StorefrontError;
use atelier_storefront::usecase::comment_like::ToggleCommentLikeUseCase;
use atelier_storefront::usecase::community::GetCommunityUseCase;
use atelier_storefront::usecase::reaction::ToggleReactionUseCase;

use crate::helpers::MockStore;

fn usecase(store: &MockStore) -> GetCommunityUseCase<MockStore, MockStore, MockStore, MockStore> {
    GetCommunityUseCase {
        artworks: store.clone(),
        comments: store.clone(),
        reactions: store.clone(),
        likes: store.clone(),
    }
}

#[tokio::test]
async fn should_list_every_reaction_kind_for_quiet_artwork() {
    let store = MockStore::new();
    let artwork = store.seed_artwork("Nebula", Utc::now());

    let summary = usecase(&store).execute(artwork.id, None).await.unwrap();

    let kinds: Vec<ReactionKind> = summary.reactions.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, ReactionKind::ALL.to_vec());
    assert!(summary.reactions.iter().all(|r| r.count == 0 && !r.is_selected));
    assert!(summary.comments.is_empty());
    assert_eq!(summary.total_comments, 0);
    assert_eq!(summary.total_reactions, 0);
}

#[tokio::test]
async fn should_aggregate_reactions_from_viewer_perspective() {
    let store = MockStore::new();
    let ada = store.seed_user("Ada", UserRole::User);
    let grace = store.seed_user("Grace", UserRole::User);
    let artwork = store.seed_artwork("Nebula", Utc::now());
    let react = ToggleReactionUseCase {
        repo: store.clone(),
    };
    react.execute(ada.id, artwork.id, "cosmic").await.unwrap();
    react.execute(grace.id, artwork.id, "cosmic").await.unwrap();
    react.execute(grace.id, artwork.id, "love").await.unwrap();

    let summary = usecase(&store)
        .execute(artwork.id, Some(ada.id))
        .await
        .unwrap();

    let cosmic = summary
        .reactions
        .iter()
        .find(|r| r.kind == ReactionKind::Cosmic)
        .unwrap();
    assert_eq!(cosmic.count, 2);
    assert!(cosmic.is_selected);
    let love = summary
        .reactions
        .iter()
        .find(|r| r.kind == ReactionKind::Love)
        .unwrap();
    assert_eq!(love.count, 1);
    assert!(!love.is_selected);
    assert_eq!(summary.total_reactions, 3);

    let anonymous = usecase(&store).execute(artwork.id, None).await.unwrap();
    assert!(anonymous.reactions.iter().all(|r| !r.is_selected));
}

#[tokio::test]
async fn should_list_comments_newest_first_with_likes() {
    let store = MockStore::new();
    let ada = store.seed_user("Ada", UserRole::User);
    let grace = store.seed_user("Grace", UserRole::User);
    let artwork = store.seed_artwork("Nebula", Utc::now());
    let older = store.seed_comment(&ada, &artwork, "first!", 30);
    let newer = store.seed_comment(&grace, &artwork, "gorgeous", 5);
    let elsewhere = store.seed_artwork("Tide", Utc::now());
    store.seed_comment(&ada, &elsewhere, "other artwork", 1);

    let like = ToggleCommentLikeUseCase {
        repo: store.clone(),
    };
    like.execute(ada.id, older.id).await.unwrap();
    like.execute(grace.id, older.id).await.unwrap();

    let summary = usecase(&store)
        .execute(artwork.id, Some(grace.id))
        .await
        .unwrap();

    let ids: Vec<_> = summary.comments.iter().map(|c| c.comment.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(summary.comments[0].author.name, "Grace");
    assert_eq!(summary.comments[0].likes, 0);
    assert!(!summary.comments[0].is_liked);
    assert_eq!(summary.comments[1].likes, 2);
    assert!(summary.comments[1].is_liked);
    assert_eq!(summary.total_comments, 2);
}

#[tokio::test]
async fn should_report_unknown_artwork() {
    let store = MockStore::new();

    let result = usecase(&store).execute(ArtworkId::generate(), None).await;

    assert!(matches!(result, Err(StorefrontError::ArtworkNotFound)));
}
