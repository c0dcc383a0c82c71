use chrono::Utc;

use atelier_domain::cart::MAX_LINE_QUANTITY;
use atelier_domain::id::{ArtworkId, UserId};
use atelier_domain::print::PrintSize;

use atelier_storefront::error::StorefrontError;
use atelier_storefront::usecase::checkout::{
    CheckoutItem, CheckoutSettings, CreateCheckoutUseCase, MAX_CHECKOUT_ITEMS, MAX_CHECKOUT_LINES,
};

use crate::helpers::{MockGateway, MockStore};

fn settings() -> CheckoutSettings {
    CheckoutSettings {
        success_url: "https://atelier.test/checkout/success".to_owned(),
        cancel_url: "https://atelier.test/checkout/cancel".to_owned(),
        currency: "eur".to_owned(),
    }
}

fn usecase(store: &MockStore, gateway: &MockGateway) -> CreateCheckoutUseCase<MockStore, MockGateway> {
    CreateCheckoutUseCase {
        artworks: store.clone(),
        gateway: Some(gateway.clone()),
        settings: settings(),
    }
}

fn item(artwork_id: ArtworkId, size: PrintSize, quantity: u32) -> CheckoutItem {
    CheckoutItem {
        artwork_id,
        size,
        quantity,
    }
}

#[tokio::test]
async fn should_price_lines_from_print_size() {
    let store = MockStore::new();
    let gateway = MockGateway::default();
    let nebula = store.seed_artwork("Nebula", Utc::now());
    let tide = store.seed_artwork("Tide", Utc::now());
    let buyer = UserId::generate();

    let session = usecase(&store, &gateway)
        .execute(
            buyer,
            vec![
                item(nebula.id, PrintSize::Small, 2),
                item(tide.id, PrintSize::Large, 1),
            ],
        )
        .await
        .unwrap();

    assert_eq!(session.id, "cs_test_1");
    assert_eq!(session.url, "https://pay.atelier.test/cs_test_1");

    let requests = gateway.requests.lock().unwrap();
    let request = &requests[0];
    assert_eq!(request.customer_reference, buyer);
    assert_eq!(request.currency, "eur");
    assert_eq!(request.success_url, "https://atelier.test/checkout/success");
    assert_eq!(request.line_items.len(), 2);
    assert_eq!(
        request.line_items[0].name,
        format!("Nebula ({})", PrintSize::Small.label())
    );
    assert_eq!(
        request.line_items[0].unit_amount_cents,
        PrintSize::Small.unit_price_cents()
    );
    assert_eq!(request.line_items[0].quantity, 2);
    assert_eq!(
        request.line_items[1].unit_amount_cents,
        PrintSize::Large.unit_price_cents()
    );
}

#[tokio::test]
async fn should_merge_repeated_items_and_cap_quantity() {
    let store = MockStore::new();
    let gateway = MockGateway::default();
    let nebula = store.seed_artwork("Nebula", Utc::now());

    usecase(&store, &gateway)
        .execute(
            UserId::generate(),
            vec![
                item(nebula.id, PrintSize::Medium, 7),
                item(nebula.id, PrintSize::Medium, 7),
                item(nebula.id, PrintSize::Small, 0),
            ],
        )
        .await
        .unwrap();

    let requests = gateway.requests.lock().unwrap();
    assert_eq!(requests[0].line_items.len(), 1);
    assert_eq!(requests[0].line_items[0].quantity, MAX_LINE_QUANTITY);
}

#[tokio::test]
async fn should_reject_empty_cart() {
    let store = MockStore::new();
    let gateway = MockGateway::default();
    let nebula = store.seed_artwork("Nebula", Utc::now());
    let uc = usecase(&store, &gateway);

    let empty = uc.execute(UserId::generate(), vec![]).await;
    assert!(matches!(empty, Err(StorefrontError::Validation(_))));

    let zero_only = uc
        .execute(UserId::generate(), vec![item(nebula.id, PrintSize::Large, 0)])
        .await;
    assert!(matches!(zero_only, Err(StorefrontError::Validation(_))));
    assert!(gateway.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_too_many_distinct_lines() {
    let store = MockStore::new();
    let gateway = MockGateway::default();
    let items = (0..=MAX_CHECKOUT_LINES)
        .map(|_| item(ArtworkId::generate(), PrintSize::Small, 1))
        .collect();

    let result = usecase(&store, &gateway)
        .execute(UserId::generate(), items)
        .await;

    assert!(matches!(result, Err(StorefrontError::Validation(_))));
}

#[tokio::test]
async fn should_reject_oversized_submission_before_merging() {
    let store = MockStore::new();
    let gateway = MockGateway::default();
    let nebula = store.seed_artwork("Nebula", Utc::now());
    let items = vec![item(nebula.id, PrintSize::Small, 1); MAX_CHECKOUT_ITEMS + 1];

    let result = usecase(&store, &gateway)
        .execute(UserId::generate(), items)
        .await;

    assert!(matches!(result, Err(StorefrontError::Validation(_))));
    assert!(gateway.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_report_unknown_artwork_without_calling_gateway() {
    let store = MockStore::new();
    let gateway = MockGateway::default();
    let nebula = store.seed_artwork("Nebula", Utc::now());

    let result = usecase(&store, &gateway)
        .execute(
            UserId::generate(),
            vec![
                item(nebula.id, PrintSize::Small, 1),
                item(ArtworkId::generate(), PrintSize::Small, 1),
            ],
        )
        .await;

    assert!(matches!(result, Err(StorefrontError::ArtworkNotFound)));
    assert!(gateway.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_report_unconfigured_payment_provider() {
    let store = MockStore::new();
    let nebula = store.seed_artwork("Nebula", Utc::now());

    let result = CreateCheckoutUseCase {
        artworks: store.clone(),
        gateway: None::<MockGateway>,
        settings: settings(),
    }
    .execute(UserId::generate(), vec![item(nebula.id, PrintSize::Small, 1)])
    .await;

    assert!(matches!(
        result,
        Err(StorefrontError::ProviderNotConfigured("payment"))
    ));
}
