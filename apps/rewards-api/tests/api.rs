//! HTTP round trips through the full router, without binding a socket.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use rewards_api::{router, ReceiptService};
use rewards_store::{ReceiptStore, SequentialIds};
use rstest::rstest;
use serde_json::{json, Value};
use tower::ServiceExt;

const MAX_BODY_BYTES: usize = 64 * 1024;

fn app() -> Router {
    let service = ReceiptService::new(
        Arc::new(ReceiptStore::new()),
        Arc::new(SequentialIds::new("receipt")),
    );
    router(Arc::new(service), MAX_BODY_BYTES)
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn post_raw(app: &Router, body: impl Into<String>) -> (StatusCode, Value) {
    let request = Request::post("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_receipt(app: &Router, receipt: &Value) -> (StatusCode, Value) {
    post_raw(app, receipt.to_string()).await
}

async fn get_points(app: &Router, id: &str) -> (StatusCode, Value) {
    let request = Request::get(format!("/receipts/{id}/points"))
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[rstest]
#[case::target(target_receipt(), 28)]
#[case::corner_market(corner_market_receipt(), 109)]
#[tokio::test]
async fn submit_then_lookup(#[case] receipt: Value, #[case] expected: u64) {
    let app = app();

    let (status, body) = post_receipt(&app, &receipt).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(id, "receipt-1");

    let (status, body) = get_points(&app, &id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "points": expected }));
}

#[tokio::test]
async fn resubmitting_gets_a_fresh_id() {
    let app = app();
    let (_, first) = post_receipt(&app, &target_receipt()).await;
    let (_, second) = post_receipt(&app, &target_receipt()).await;
    assert_ne!(first["id"], second["id"]);

    let (_, points) = get_points(&app, second["id"].as_str().unwrap()).await;
    assert_eq!(points["points"], 28);
}

#[rstest]
#[case::not_json("{not json")]
#[case::empty("")]
#[case::missing_total(r#"{"retailer":"Target","purchaseDate":"2022-01-01","purchaseTime":"13:01","items":[]}"#)]
#[case::wrong_type(r#"{"retailer":"Target","purchaseDate":"2022-01-01","purchaseTime":"13:01","items":[],"total":35.35}"#)]
#[tokio::test]
async fn malformed_body_is_rejected_without_details(#[case] body: &str) {
    let (status, body) = post_raw(&app(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"description": "The receipt is invalid."}));
}

#[tokio::test]
async fn unknown_field_is_malformed() {
    let mut receipt = target_receipt();
    receipt["cashier"] = json!("Sam");

    let (status, body) = post_receipt(&app(), &receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn invalid_receipt_lists_every_violation() {
    let mut receipt = target_receipt();
    receipt["retailer"] = json!("");
    receipt["purchaseDate"] = json!("2999-01-01");
    receipt["total"] = json!("1.00");

    let (status, body) = post_receipt(&app(), &receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["description"], "The receipt is invalid.");

    let details = body["details"].as_array().unwrap();
    assert!(details.len() >= 3, "details: {details:?}");
    assert!(details.iter().all(Value::is_string));
}

#[tokio::test]
async fn rejected_receipt_is_not_stored() {
    let app = app();
    let mut receipt = target_receipt();
    receipt["items"] = json!([]);

    let (status, _) = post_receipt(&app, &receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The id the rejected receipt would have taken.
    let (status, _) = get_points(&app, "receipt-1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let (status, body) = get_points(&app(), "7fb1377b-b223-49d9-a31a-5a02701dd310").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"description": "No receipt found for that ID."}));
}

#[tokio::test]
async fn id_with_whitespace_is_bad_request() {
    let (status, body) = get_points(&app(), "abc%20def").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["description"], "No receipt found for that ID.");
    assert_eq!(body["details"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let padding = "x".repeat(MAX_BODY_BYTES + 1);
    let (status, body) = post_raw(&app(), format!(r#"{{"retailer":"{padding}"}}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["description"], "The receipt is invalid.");
}

#[tokio::test]
async fn health_check() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(&app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}
