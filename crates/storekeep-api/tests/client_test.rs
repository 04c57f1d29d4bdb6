#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storekeep_api::products::ProductFilter;
use storekeep_api::customers::CustomerDraft;
use storekeep_api::types::RecordId;
use storekeep_api::{ApiClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ApiClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

// ── Product list tests ──────────────────────────────────────────────

#[tokio::test]
async fn test_list_products() {
    let (server, client) = setup().await;

    let body = json!({
        "data": [{ "id": 1, "name": "Widget", "price": 9.99 }],
        "pagination": { "total": 1, "page": 1, "limit": 10, "pages": 1 }
    });

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client
        .list_products(1, 10, &ProductFilter::default())
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, RecordId::Int(1));
    assert_eq!(page.data[0].name, "Widget");
    assert_eq!(page.pagination.pages, 1);
}

#[tokio::test]
async fn test_absent_filter_fields_not_sent() {
    let (server, client) = setup().await;

    let body = json!({
        "data": [],
        "pagination": { "total": 0, "page": 1, "limit": 10, "pages": 0 }
    });

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("search", "mug"))
        .and(query_param_is_missing("categoryId"))
        .and(query_param_is_missing("priceMin"))
        .and(query_param_is_missing("priceMax"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let filter = ProductFilter {
        search: Some("mug".into()),
        ..ProductFilter::default()
    };
    let page = client.list_products(1, 10, &filter).await.unwrap();
    assert!(page.data.is_empty());
}

// ── Auth header tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_bearer_token_injected_after_set() {
    let (server, client) = setup().await;

    let body = json!({
        "data": [],
        "pagination": { "total": 0, "page": 1, "limit": 10, "pages": 0 }
    });

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    client.set_token(SecretString::from("tok-123".to_owned()));
    client
        .list_products(1, 10, &ProductFilter::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unauthorized_maps_to_dedicated_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_products(1, 10, &ProductFilter::default()).await;
    assert!(matches!(result, Err(Error::Unauthorized)));
}

// ── Error-body parsing tests ────────────────────────────────────────

#[tokio::test]
async fn test_delete_404_uses_server_message() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/products/5"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Product not found" })),
        )
        .mount(&server)
        .await;

    let result = client.delete_product(&RecordId::Int(5)).await;

    match result {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Product not found");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_404_falls_back_to_status_line() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/products/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client.delete_product(&RecordId::Int(5)).await;

    match result {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "404 Not Found");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_body_text_without_json() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/suppliers/9"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let result = client.get_supplier(&RecordId::Int(9)).await;

    match result {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Mutation tests ──────────────────────────────────────────────────

#[tokio::test]
async fn test_create_customer_returns_server_record() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "name": "Jane",
            "email": "jane@x.com",
            "phone": "555",
            "address": "1 Main"
        })))
        .mount(&server)
        .await;

    let draft = CustomerDraft {
        name: "Jane".into(),
        email: Some("jane@x.com".into()),
        phone: Some("555".into()),
        address: Some("1 Main".into()),
    };
    let created = client.create_customer(&draft).await.unwrap();

    assert_eq!(created.id, RecordId::Int(42));
    assert_eq!(created.email.as_deref(), Some("jane@x.com"));
}

// ── Login tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-abc",
            "user": { "id": 1, "name": "Admin", "email": "admin@x.com", "role": "admin" }
        })))
        .mount(&server)
        .await;

    let secret: SecretString = "hunter2".to_owned().into();
    let resp = client.login("admin@x.com", &secret).await.unwrap();

    assert_eq!(resp.token, "jwt-abc");
    assert_eq!(resp.user.email, "admin@x.com");
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let secret: SecretString = "wrong".to_owned().into();
    let result = client.login("admin@x.com", &secret).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

// ── Schema strictness ───────────────────────────────────────────────

#[tokio::test]
async fn test_nonconforming_payload_is_rejected() {
    let (server, client) = setup().await;

    // `price` missing — the strict schema must flag this, not trust it.
    let body = json!({
        "data": [{ "id": 1, "name": "Widget" }],
        "pagination": { "total": 1, "page": 1, "limit": 10, "pages": 1 }
    });

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let result = client.list_products(1, 10, &ProductFilter::default()).await;
    assert!(matches!(result, Err(Error::Deserialization { .. })));
}
