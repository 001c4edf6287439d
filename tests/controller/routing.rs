//! Routing smoke tests driving the full router over in-memory requests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use fleetcert::{model::app::AppState, router};
use fleetcert_test_utils::{test_setup_with_compliance_tables, TestError, TestSetup};

async fn app() -> Result<Router, TestError> {
    let setup = test_setup_with_compliance_tables!()?;

    Ok(router::routes().with_state(setup.state::<AppState>()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Tests registering a drone and fetching its checklist snapshot over HTTP.
///
/// Expected: 201 on create, then 200 with a ten-item checklist
#[tokio::test]
async fn create_and_fetch_drone() -> Result<(), TestError> {
    let app = app().await?;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/orgs/1/drones",
            json!({"model_name": "AgriHawk X4"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["drone"]["id"].as_i64().unwrap();
    assert_eq!(created["drone"]["version"], 1);

    let response = app
        .oneshot(get_request(&format!("/api/drones/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let snapshot = body_json(response).await;
    assert_eq!(snapshot["one_time"]["total"], 10);
    assert_eq!(snapshot["one_time"]["completed_count"], 0);
    assert_eq!(snapshot["recurring"]["personnel"]["status"], "No Change");

    Ok(())
}

/// Tests that a stale version token surfaces as 409 Conflict.
///
/// Expected: first write 200, replay of the same token 409
#[tokio::test]
async fn stale_version_returns_conflict() -> Result<(), TestError> {
    let app = app().await?;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/orgs/1/drones",
            json!({"model_name": "AgriHawk X4"}),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["drone"]["id"].as_i64().unwrap();

    let portal = json!({"version": 1, "url": "https://portal.example.com"});

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/drones/{id}/web-portal"),
            portal.clone(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/drones/{id}/web-portal"),
            portal,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests that deleting from an audit-trail category is a 400.
///
/// Expected: append 200, delete of the training record 400
#[tokio::test]
async fn audit_trail_delete_is_bad_request() -> Result<(), TestError> {
    let app = app().await?;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/orgs/1/drones",
            json!({"model_name": "AgriHawk X4"}),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["drone"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/drones/{id}/recurring"),
            json!({
                "version": 1,
                "record": {
                    "category": "trainingRecords",
                    "date": "2026-02-10",
                    "session": "Monsoon ops refresher"
                }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!(
                    "/api/drones/{id}/recurring/trainingRecords/0?version=2"
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests that an order status outside its vocabulary is a 400.
///
/// Expected: 400 with the offending field named in the error
#[tokio::test]
async fn unknown_order_status_is_bad_request() -> Result<(), TestError> {
    let app = app().await?;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/orgs/1/orders",
            json!({
                "contract_number": "CT-2026-007",
                "client_name": "GreenField Agro",
                "client_segment": "Agriculture",
                "order_date": "2026-03-02",
                "quantity": 2,
                "unit_price": "650000",
                "advance_received": "650000",
                "payment_status": "Mostly Billed",
                "drone_model": "AgriHawk X4",
                "payload_type": "Sprayer",
                "endurance_minutes": 25,
                "battery_count": 4,
                "type_certification_status": "In Design",
                "uin_allocation_status": "Pending",
                "rpto_training_status": "Pending",
                "insurance_status": "Pending",
                "delivery_status": "Not Ready",
                "deployment_location": "Nashik, MH",
                "support_contract": "AMC 1yr"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("payment_status"));

    Ok(())
}

/// Tests that a missing drone is a 404 on the snapshot route.
///
/// Expected: 404 with the generic not-found error body
#[tokio::test]
async fn missing_drone_is_not_found() -> Result<(), TestError> {
    let app = app().await?;

    let response = app.oneshot(get_request("/api/drones/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
