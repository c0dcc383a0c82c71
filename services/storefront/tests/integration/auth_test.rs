use atelier_auth_types::token::validate_access_token;
use atelier_domain::id::UserId;
use atelier_domain::user::UserRole;
use atelier_testing::auth::TEST_JWT_SECRET;

use atelier_storefront::error::StorefrontError;
use atelier_storefront::usecase::auth::{
    GetMeUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};

use crate::helpers::{MockStore, RecordingNotifier, TEST_PASSWORD};

fn register_usecase(
    store: &MockStore,
    notifier: &RecordingNotifier,
) -> RegisterUseCase<MockStore, RecordingNotifier> {
    RegisterUseCase {
        users: store.clone(),
        notifier: notifier.clone(),
    }
}

fn login_usecase(store: &MockStore) -> LoginUseCase<MockStore> {
    LoginUseCase {
        users: store.clone(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

fn registration(name: &str, email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// ── Register ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_user_with_normalized_email() {
    let store = MockStore::new();
    let notifier = RecordingNotifier::default();

    let user = register_usecase(&store, &notifier)
        .execute(registration(" Ada ", " Ada@Example.COM ", "lovelace-1815"))
        .await
        .unwrap();

    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, UserRole::User);
    assert_ne!(user.password_hash, "lovelace-1815");
    assert_eq!(store.user_count(), 1);
    assert_eq!(*notifier.notified.lock().unwrap(), vec![user.id]);
}

#[tokio::test]
async fn should_reject_duplicate_email_regardless_of_case() {
    let store = MockStore::new();
    let notifier = RecordingNotifier::default();
    let uc = register_usecase(&store, &notifier);

    uc.execute(registration("Ada", "ada@example.com", "lovelace-1815"))
        .await
        .unwrap();
    let result = uc
        .execute(registration("Imposter", "ADA@example.com", "another-pass"))
        .await;

    assert!(matches!(result, Err(StorefrontError::EmailTaken)));
    assert_eq!(store.user_count(), 1);
    assert_eq!(notifier.notified.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_validate_registration_fields() {
    let store = MockStore::new();
    let notifier = RecordingNotifier::default();
    let uc = register_usecase(&store, &notifier);

    let cases = [
        registration("", "ada@example.com", "lovelace-1815"),
        registration(&"n".repeat(81), "ada@example.com", "lovelace-1815"),
        registration("Ada", "not-an-email", "lovelace-1815"),
        registration("Ada", "ada@localhost", "lovelace-1815"),
        registration("Ada", "ada@example.com", "short"),
        registration("Ada", "ada@example.com", &"p".repeat(129)),
    ];
    for case in cases {
        let result = uc.execute(case).await;
        assert!(matches!(result, Err(StorefrontError::Validation(_))));
    }
    assert_eq!(store.user_count(), 0);
    assert!(notifier.notified.lock().unwrap().is_empty());
}

// ── Login ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_for_valid_credentials() {
    let store = MockStore::new();
    let user = store.seed_user("Ada", UserRole::Admin);

    let output = login_usecase(&store)
        .execute(LoginInput {
            email: "ADA@atelier.test".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(output.user.id, user.id);
    let info = validate_access_token(&output.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.role, UserRole::Admin);
    assert_eq!(info.access_token_exp, output.access_token_exp);
}

#[tokio::test]
async fn should_not_distinguish_unknown_email_from_wrong_password() {
    let store = MockStore::new();
    store.seed_user("Ada", UserRole::User);
    let uc = login_usecase(&store);

    let wrong_password = uc
        .execute(LoginInput {
            email: "ada@atelier.test".to_owned(),
            password: "not the password".to_owned(),
        })
        .await;
    let unknown_email = uc
        .execute(LoginInput {
            email: "nobody@atelier.test".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await;

    assert!(matches!(wrong_password, Err(StorefrontError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(StorefrontError::InvalidCredentials)));
}

#[tokio::test]
async fn should_log_in_after_registering() {
    let store = MockStore::new();
    let notifier = RecordingNotifier::default();
    let user = register_usecase(&store, &notifier)
        .execute(registration("Grace", "grace@example.com", "hopper-1906"))
        .await
        .unwrap();

    let output = login_usecase(&store)
        .execute(LoginInput {
            email: "grace@example.com".to_owned(),
            password: "hopper-1906".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(output.user.id, user.id);
}

// ── Me ───────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_current_user() {
    let store = MockStore::new();
    let user = store.seed_user("Ada", UserRole::User);

    let me = GetMeUseCase {
        users: store.clone(),
    }
    .execute(user.id)
    .await
    .unwrap();

    assert_eq!(me.email, "ada@atelier.test");
}

#[tokio::test]
async fn should_report_deleted_account() {
    let store = MockStore::new();

    let result = GetMeUseCase {
        users: store.clone(),
    }
    .execute(UserId::generate())
    .await;

    assert!(matches!(result, Err(StorefrontError::UserNotFound)));
}
