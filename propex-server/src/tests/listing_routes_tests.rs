use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use super::test_utils::*;
use crate::create_router;

async fn get(uri: &str, state: crate::AppState) -> (StatusCode, Value) {
    let app = create_router(state);
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

fn two_listing_state() -> crate::AppState {
    let mut store = CannedStore {
        listings: vec![
            test_listing(1, "Casa Norte", 350_000),
            test_listing(2, "Apto Cedritos", 220_000),
        ],
        ..Default::default()
    };
    store.images.insert(
        store.listings[0].id.clone(),
        "https://img.example/casa.jpg".to_string(),
    );
    setup_test_state(store)
}

#[tokio::test]
async fn search_returns_page_with_camel_case_fields() {
    let (status, json) = get("/api/v1/listings", two_listing_state()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["page"], 1);
    assert_eq!(json["pageSize"], 10);
    assert_eq!(json["total"], 2);
    assert_eq!(json["totalPages"], 1);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Casa Norte");
    assert_eq!(items[0]["codeInternal"], "P-0001");
    assert_eq!(items[0]["imageUrl"], "https://img.example/casa.jpg");
    // Explicit "no image" marker, not a missing key.
    assert!(items[1].get("imageUrl").is_some());
    assert!(items[1]["imageUrl"].is_null());
}

#[tokio::test]
async fn out_of_range_page_size_is_clamped_not_rejected() {
    let (status, json) =
        get("/api/v1/listings?pageSize=1000", two_listing_state()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["pageSize"], 100);
}

#[tokio::test]
async fn inverted_price_range_is_a_bad_request() {
    let (status, json) = get(
        "/api/v1/listings?minPrice=500&maxPrice=100",
        two_listing_state(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("minPrice"), "{message}");
}

#[tokio::test]
async fn malformed_identifier_is_a_bad_request() {
    let (status, json) =
        get("/api/v1/listings/not-an-id", two_listing_state()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["status"], 400);
}

#[tokio::test]
async fn absent_identifier_is_not_found() {
    let (status, _) = get(
        &format!("/api/v1/listings/{}", object_id(404)),
        two_listing_state(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn existing_identifier_returns_enriched_view() {
    let (status, json) = get(
        &format!("/api/v1/listings/{}", object_id(1)),
        two_listing_state(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], object_id(1));
    assert_eq!(json["name"], "Casa Norte");
    assert_eq!(json["imageUrl"], "https://img.example/casa.jpg");
}

#[tokio::test]
async fn healthz_reports_ok_without_store() {
    let (status, json) = get("/healthz", two_listing_state()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}
