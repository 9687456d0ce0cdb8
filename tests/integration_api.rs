//! API Integration Tests
//!
//! Auth and validation rejections are exercised without a database (they
//! must terminate before any persistence access). End-to-end tests run only
//! when DATABASE_URL points at a migrated Postgres instance.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use finflow::api::routes::CreateTransactionRequest;
use rust_decimal::Decimal;

mod common;

fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn authed_post(uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

// =========================================================================
// Authentication rejections (no database required)
// =========================================================================

#[tokio::test]
async fn test_missing_credential_rejected_on_every_endpoint() {
    let app = common::test_app(common::lazy_state());

    for (method, uri) in [
        ("POST", "/transactions"),
        ("GET", "/transactions"),
        ("GET", "/transactions/summary"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} without credential"
        );

        let body = response_json(response).await;
        assert_eq!(body["error_code"], "missing_credential");
    }
}

#[tokio::test]
async fn test_invalid_credential_rejected() {
    let app = common::test_app(common::lazy_state());

    // The stub verifier rejects anything not shaped `token-<subject>`
    let response = app
        .clone()
        .oneshot(authed_get("/transactions", "forged"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["error_code"], "invalid_credential");
}

#[tokio::test]
async fn test_wrong_auth_scheme_is_missing_credential() {
    let app = common::test_app(common::lazy_state());

    let request = Request::builder()
        .method("GET")
        .uri("/transactions/summary")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["error_code"], "missing_credential");
}

// =========================================================================
// Validation rejections (no database required)
// =========================================================================

#[tokio::test]
async fn test_create_reports_every_violated_field() {
    let app = common::test_app(common::lazy_state());

    let body = json!({
        "amount": -1,
        "type": "transfer",
        "category": "x",
        "recipient": "y"
    });

    let response = app
        .oneshot(authed_post("/transactions", "token-user-a", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error_code"], "validation_error");

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 4, "one message per violated field: {messages:?}");
    assert!(messages.contains(&json!("Amount must be a positive number.")));
    assert!(messages.contains(&json!("Type must be either send or receive.")));
    assert!(messages.contains(&json!("Category must be between 2 and 50 characters.")));
    assert!(messages.contains(&json!("Recipient must be between 2 and 100 characters.")));
}

#[tokio::test]
async fn test_create_zero_amount_rejected() {
    let app = common::test_app(common::lazy_state());

    let body = json!({
        "amount": 0,
        "type": "send",
        "category": "groceries",
        "recipient": "corner shop"
    });

    let response = app
        .oneshot(authed_post("/transactions", "token-user-a", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0], "Amount must be a positive number.");
}

#[tokio::test]
async fn test_invalid_type_filter_rejected_before_query() {
    // Lazy pool: the request 400s without ever touching a database
    let app = common::test_app(common::lazy_state());

    let response = app
        .oneshot(authed_get("/transactions?type=refund", "token-user-a"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages[0], "Type filter must be send or receive.");
}

#[tokio::test]
async fn test_invalid_category_filter_rejected() {
    let app = common::test_app(common::lazy_state());

    let response = app
        .oneshot(authed_get("/transactions?category=x", "token-user-a"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(
        messages[0],
        "Category filter must be between 2 and 50 characters."
    );
}

// =========================================================================
// End-to-end tests (require DATABASE_URL)
// =========================================================================

async fn create_tx(
    app: &axum::Router,
    token: &str,
    amount: f64,
    kind: &str,
    category: &str,
    recipient: &str,
) -> Value {
    let body = json!({
        "amount": amount,
        "type": kind,
        "category": category,
        "recipient": recipient
    });

    let response = app
        .clone()
        .oneshot(authed_post("/transactions", token, &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED, "create failed");

    response_json(response).await
}

#[tokio::test]
async fn test_create_list_summary_e2e() {
    let Some(state) = common::try_db_state().await else {
        return;
    };
    let app = common::test_app(state);

    // Mixed send/receive records across two categories for owner A
    let first = create_tx(&app, "token-user-a", 100.0, "send", "catX", "alice").await;
    create_tx(&app, "token-user-a", 200.0, "receive", "catX", "bob").await;
    create_tx(&app, "token-user-a", 50.0, "send", "catY", "carol").await;

    // Created record carries the verified owner and server-assigned fields
    assert_eq!(first["owner_id"], "user-a");
    assert_eq!(first["type"], "send");
    assert!(first["id"].as_i64().unwrap() > 0);
    assert!(first["created_at"].is_string());

    // List: all rows belong to the requesting owner, newest first
    let response = app
        .clone()
        .oneshot(authed_get("/transactions", "token-user-a"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rows = response_json(response).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    for row in rows {
        assert_eq!(row["owner_id"], "user-a");
    }
    let timestamps: Vec<chrono::DateTime<chrono::Utc>> = rows
        .iter()
        .map(|r| r["created_at"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));

    // Summary: one row per category, send/receive folded into sent/received
    let response = app
        .clone()
        .oneshot(authed_get("/transactions/summary", "token-user-a"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let summary = response_json(response).await;
    let summary = summary.as_array().unwrap();
    assert_eq!(summary.len(), 2);

    let cat_x = summary.iter().find(|r| r["category"] == "catX").unwrap();
    assert_eq!(cat_x["sent"], json!(100.0));
    assert_eq!(cat_x["received"], json!(200.0));

    let cat_y = summary.iter().find(|r| r["category"] == "catY").unwrap();
    assert_eq!(cat_y["sent"], json!(50.0));
    assert_eq!(cat_y["received"], json!(0.0));

    // Idempotent with no intervening writes
    let response = app
        .clone()
        .oneshot(authed_get("/transactions/summary", "token-user-a"))
        .await
        .unwrap();
    let again = response_json(response).await;
    let mut again = again.as_array().unwrap().clone();
    let mut summary = summary.clone();
    summary.sort_by_key(|r| r["category"].as_str().unwrap().to_string());
    again.sort_by_key(|r| r["category"].as_str().unwrap().to_string());
    assert_eq!(summary, again);
}

#[tokio::test]
async fn test_owner_is_never_client_supplied() {
    let Some(state) = common::try_db_state().await else {
        return;
    };
    let app = common::test_app(state);

    // The body smuggles owner fields; they must be ignored
    let body = json!({
        "amount": 25.0,
        "type": "receive",
        "category": "salary",
        "recipient": "employer",
        "userId": "intruder",
        "owner_id": "intruder"
    });

    let response = app
        .clone()
        .oneshot(authed_post("/transactions", "token-user-a", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = response_json(response).await;
    assert_eq!(created["owner_id"], "user-a");
}

#[tokio::test]
async fn test_no_cross_owner_leakage() {
    let Some(state) = common::try_db_state().await else {
        return;
    };
    let app = common::test_app(state);

    create_tx(&app, "token-owner-a", 10.0, "send", "groceries", "shop").await;
    create_tx(&app, "token-owner-b", 20.0, "send", "groceries", "shop").await;
    create_tx(&app, "token-owner-b", 30.0, "receive", "salary", "employer").await;

    let response = app
        .clone()
        .oneshot(authed_get("/transactions", "token-owner-a"))
        .await
        .unwrap();
    let rows = response_json(response).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["owner_id"], "owner-a");

    // Summary is owner-scoped too
    let response = app
        .clone()
        .oneshot(authed_get("/transactions/summary", "token-owner-a"))
        .await
        .unwrap();
    let summary = response_json(response).await;
    let summary = summary.as_array().unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0]["category"], "groceries");
    assert_eq!(summary[0]["sent"], json!(10.0));
}

#[tokio::test]
async fn test_filter_combination() {
    let Some(state) = common::try_db_state().await else {
        return;
    };
    let app = common::test_app(state);

    create_tx(&app, "token-user-f", 10.0, "send", "groceries", "shop").await;
    create_tx(&app, "token-user-f", 20.0, "receive", "groceries", "refund desk").await;
    create_tx(&app, "token-user-f", 30.0, "send", "rent", "landlord").await;

    let response = app
        .clone()
        .oneshot(authed_get(
            "/transactions?type=send&category=groceries",
            "token-user-f",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rows = response_json(response).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["type"], "send");
    assert_eq!(rows[0]["category"], "groceries");
    assert_eq!(rows[0]["amount"], json!(10.0));

    // Single filters narrow independently
    let response = app
        .clone()
        .oneshot(authed_get("/transactions?type=send", "token-user-f"))
        .await
        .unwrap();
    let rows = response_json(response).await;
    assert_eq!(rows.as_array().unwrap().len(), 2);

    // No matches is an empty array, not an error
    let response = app
        .clone()
        .oneshot(authed_get("/transactions?category=travel", "token-user-f"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let rows = response_json(response).await;
    assert!(rows.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_summary_empty_for_owner_without_transactions() {
    let Some(state) = common::try_db_state().await else {
        return;
    };
    let app = common::test_app(state);

    let response = app
        .clone()
        .oneshot(authed_get("/transactions/summary", "token-nobody"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let summary = response_json(response).await;
    assert!(summary.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_create_leaves_store_unchanged() {
    let Some(state) = common::try_db_state().await else {
        return;
    };
    let app = common::test_app(state);

    let body = json!({
        "amount": -10.0,
        "type": "send",
        "category": "groceries",
        "recipient": "corner shop"
    });

    let response = app
        .clone()
        .oneshot(authed_post("/transactions", "token-user-x", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(authed_get("/transactions", "token-user-x"))
        .await
        .unwrap();
    let rows = response_json(response).await;
    assert!(rows.as_array().unwrap().is_empty());
}

// =========================================================================
// Request DTO sanity
// =========================================================================

#[test]
fn test_create_request_serializes_type_key() {
    let request = CreateTransactionRequest {
        amount: Decimal::new(105, 1),
        kind: "send".to_string(),
        category: "groceries".to_string(),
        recipient: "corner shop".to_string(),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["type"], "send");
    assert!(value.get("kind").is_none());
}
