#![allow(clippy::unwrap_used)]
// Integration tests for the dispatcher: full pending/fulfilled/rejected
// action lifecycles against a wiremock server, observed through the store.

use std::sync::Arc;

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storekeep_api::ApiClient;
use storekeep_api::customers::CustomerDraft;
use storekeep_api::products::{ProductDraft, ProductFilter, VariantDraft};
use storekeep_core::{AppStore, BatchStatus, Dispatcher, RecordId, RequestStatus};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Dispatcher) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let api = Arc::new(ApiClient::with_client(reqwest::Client::new(), base_url));
    let dispatcher = Dispatcher::new(Arc::new(AppStore::new()), api);
    (server, dispatcher)
}

fn product_page() -> serde_json::Value {
    json!({
        "data": [{ "id": 1, "name": "Widget", "price": 9.99 }],
        "pagination": { "total": 1, "page": 1, "limit": 10, "pages": 1 }
    })
}

// ── Fetch lifecycle ─────────────────────────────────────────────────

#[tokio::test]
async fn fetch_products_ends_succeeded_with_items() {
    let (server, dispatcher) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page()))
        .mount(&server)
        .await;

    dispatcher
        .fetch_products(1, 10, &ProductFilter::default())
        .await
        .unwrap();

    let state = dispatcher.store().products.snapshot();
    assert_eq!(state.status, RequestStatus::Succeeded);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, RecordId::Int(1));
    assert_eq!(state.items[0].name, "Widget");
    assert_eq!(state.pagination.pages, 1);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn failed_refetch_keeps_stale_items() {
    let (server, dispatcher) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
        .mount(&server)
        .await;

    dispatcher
        .fetch_products(1, 10, &ProductFilter::default())
        .await
        .unwrap();
    let err = dispatcher
        .fetch_products(1, 10, &ProductFilter::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("db down"));

    let state = dispatcher.store().products.snapshot();
    assert_eq!(state.status, RequestStatus::Failed);
    // Last-known-good data stays visible instead of flashing empty.
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("API error: db down"));
}

// ── Mutations ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_customer_appends_at_end() {
    let (server, dispatcher) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 1, "name": "Existing" }],
            "pagination": { "total": 1, "page": 1, "limit": 10, "pages": 1 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42, "name": "Jane", "email": "jane@x.com",
            "phone": "555", "address": "1 Main"
        })))
        .mount(&server)
        .await;

    dispatcher.fetch_customers(1, 10, None).await.unwrap();
    dispatcher
        .create_customer(&CustomerDraft {
            name: "Jane".into(),
            email: Some("jane@x.com".into()),
            phone: Some("555".into()),
            address: Some("1 Main".into()),
        })
        .await
        .unwrap();

    let state = dispatcher.store().customers.snapshot();
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items.last().unwrap().id, RecordId::Int(42));
    // Exactly one record with the new id.
    assert_eq!(
        state
            .items
            .iter()
            .filter(|c| c.id == RecordId::Int(42))
            .count(),
        1
    );
    // total intentionally stale until the next fetch.
    assert_eq!(state.pagination.total, 1);
}

#[tokio::test]
async fn delete_404_records_error_and_keeps_items() {
    let (server, dispatcher) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    dispatcher
        .fetch_products(1, 10, &ProductFilter::default())
        .await
        .unwrap();
    let err = dispatcher.remove_product(&RecordId::Int(5)).await.unwrap_err();
    assert!(err.to_string().contains("404 Not Found"));

    let state = dispatcher.store().products.snapshot();
    assert_eq!(state.status, RequestStatus::Failed);
    assert_eq!(state.error.as_deref(), Some("API error: 404 Not Found"));
    assert_eq!(state.items.len(), 1);
}

#[tokio::test]
async fn remove_filters_record_out() {
    let (server, dispatcher) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    dispatcher
        .fetch_products(1, 10, &ProductFilter::default())
        .await
        .unwrap();
    dispatcher.remove_product(&RecordId::Int(1)).await.unwrap();

    let state = dispatcher.store().products.snapshot();
    assert!(state.by_id(&RecordId::Int(1)).is_none());
    assert!(state.items.is_empty());
}

// ── Variants: lazy detail + partial batch ───────────────────────────

#[tokio::test]
async fn fetch_variants_populates_detail_cache() {
    let (server, dispatcher) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products/7/variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 70, "productId": 7, "size": "S", "stock": 3 },
            { "id": 71, "productId": 7, "size": "M", "stock": 5 }
        ])))
        .mount(&server)
        .await;

    let pid = RecordId::Int(7);
    dispatcher.fetch_variants(&pid).await.unwrap();

    let cached = dispatcher.store().variants_for(&pid).unwrap();
    assert_eq!(cached.len(), 2);
    assert_eq!(cached[0].size.as_deref(), Some("S"));
}

#[tokio::test]
async fn variant_batch_reports_partial_failure() {
    let (server, dispatcher) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7, "name": "Tee", "price": 15.0
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/products/7/variants"))
        .and(body_partial_json(json!({ "size": "S" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 70, "productId": 7, "size": "S", "stock": 3
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/products/7/variants"))
        .and(body_partial_json(json!({ "size": "M" })))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "message": "duplicate variant" })),
        )
        .mount(&server)
        .await;

    let draft = ProductDraft {
        name: "Tee".into(),
        price: 15.0,
        sku: None,
        description: None,
        stock: None,
        category_id: None,
        status: None,
    };
    let variants = vec![
        VariantDraft {
            size: Some("S".into()),
            color: None,
            stock: 3,
            sku: None,
        },
        VariantDraft {
            size: Some("M".into()),
            color: None,
            stock: 5,
            sku: None,
        },
    ];

    let (product, outcome) = dispatcher
        .create_product_with_variants(&draft, variants)
        .await
        .unwrap();

    // Parent survives the child failure; outcome summarizes it.
    assert_eq!(product.id, RecordId::Int(7));
    assert_eq!(outcome.attempted, 2);
    assert_eq!(outcome.succeeded, 1);
    assert_eq!(outcome.failed(), 1);
    assert_eq!(outcome.status(), BatchStatus::PartiallySucceeded);
    assert!(outcome.errors[0].contains("duplicate variant"));
}

// ── Auth ────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_authenticates_subsequent_requests() {
    let (server, dispatcher) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-abc",
            "user": { "id": 1, "name": "Admin", "email": "admin@x.com" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(header("Authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page()))
        .mount(&server)
        .await;

    let secret: SecretString = "hunter2".to_owned().into();
    let outcome = dispatcher.login("admin@x.com", &secret).await.unwrap();
    assert_eq!(outcome.user.email, "admin@x.com");
    assert_eq!(
        dispatcher.store().session_user().unwrap().email,
        "admin@x.com"
    );

    // The stored token rides along on the next request.
    dispatcher
        .fetch_products(1, 10, &ProductFilter::default())
        .await
        .unwrap();

    dispatcher.logout();
    assert!(dispatcher.store().session_user().is_none());
}

// ── Dashboard ───────────────────────────────────────────────────────

#[tokio::test]
async fn dashboard_refresh_commits_all_sections() {
    let (server, dispatcher) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalRevenue": 1234.5, "orderCount": 10,
            "productCount": 40, "customerCount": 9, "lowStockCount": 3
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/sales-targets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "label": "July", "target": 500.0, "achieved": 620.0 }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/recent-activity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "activityType": "sale", "message": "Sold 2x Widget" }
        ])))
        .mount(&server)
        .await;

    dispatcher.refresh_dashboard("month", Some(20)).await.unwrap();

    let state = dispatcher.store().dashboard.snapshot();
    assert_eq!(state.status, RequestStatus::Succeeded);
    assert!((state.overview.unwrap().total_revenue - 1234.5).abs() < f64::EPSILON);
    assert_eq!(state.targets.len(), 1);
    assert_eq!(state.activity.len(), 1);
    assert_eq!(state.activity[0].kind, "sale");
}
