//! HTTP-level integration tests for the `/api/v1/conversion` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. Rules live in an in-memory store.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;

fn approx(value: &serde_json::Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 1e-4
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_rule_returns_201() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/conversion/new",
        json!({"fromUnit": "yard", "toUnit": "inch", "convertFactor": 36.0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["id"].is_number());
    assert_eq!(json["data"]["fromUnit"], "yard");
    assert_eq!(json["data"]["toUnit"], "inch");
    assert_eq!(json["data"]["convertFactor"], 36.0);
    assert!(json["data"].get("addend").is_none());
}

#[tokio::test]
async fn create_reversed_pair_returns_409() {
    let engine = common::seeded_engine().await;
    let response = post_json(
        common::build_app(engine),
        "/api/v1/conversion/new",
        json!({"fromUnit": "foot", "toUnit": "meter", "convertFactor": 0.3048}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Conversion from foot to meter already exists");
}

#[tokio::test]
async fn create_with_negative_factor_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/conversion/new",
        json!({"fromUnit": "a", "toUnit": "b", "convertFactor": -1.0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_with_zero_addend_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/conversion/new",
        json!({"fromUnit": "a", "toUnit": "b", "convertFactor": 2.0, "addend": 0.0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_missing_fields_returns_400() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/conversion/new", json!({"fromUnit": "a"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Show / list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn show_finds_rule_in_reverse_orientation() {
    let engine = common::seeded_engine().await;
    let response = get(
        common::build_app(engine),
        "/api/v1/conversion/show?fromUnit=fahrenheit&toUnit=celsius",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["fromUnit"], "celsius");
    assert_eq!(json["data"]["addend"], 32.0);
}

#[tokio::test]
async fn show_unknown_pair_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/conversion/show?fromUnit=inch&toUnit=mile").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Conversion from inch to mile not found");
}

#[tokio::test]
async fn show_missing_param_returns_400() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/conversion/show?fromUnit=meter").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Required parameter [toUnit] is not present.");
}

#[tokio::test]
async fn list_returns_all_seeded_rules() {
    let engine = common::seeded_engine().await;
    let response = get(common::build_app(engine), "/api/v1/conversion/show/all").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_keeps_stored_units_and_id() {
    let engine = common::seeded_engine().await;
    let before = engine.retrieve_rule("meter", "foot").await.unwrap();

    let response = put_json(
        common::build_app(engine),
        "/api/v1/conversion/update",
        json!({"fromUnit": "foot", "toUnit": "meter", "convertFactor": 3.3}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], before.id);
    assert_eq!(json["data"]["fromUnit"], "meter");
    assert_eq!(json["data"]["toUnit"], "foot");
    assert_eq!(json["data"]["convertFactor"], 3.3);
}

#[tokio::test]
async fn update_unknown_pair_returns_404() {
    let app = common::build_test_app();
    let response = put_json(
        app,
        "/api/v1/conversion/update",
        json!({"fromUnit": "inch", "toUnit": "mile", "convertFactor": 2.0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remove_then_show_returns_404() {
    let engine = common::seeded_engine().await;

    let response = delete(
        common::build_app(engine.clone()),
        "/api/v1/conversion/remove?fromUnit=mile&toUnit=kilometer",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], "Conversion Config mile/kilometer removed");

    let response = get(
        common::build_app(engine),
        "/api/v1/conversion/show?fromUnit=kilometer&toUnit=mile",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Convert
// ---------------------------------------------------------------------------

#[tokio::test]
async fn convert_forward_and_reverse() {
    let engine = common::seeded_engine().await;

    let response = get(
        common::build_app(engine.clone()),
        "/api/v1/conversion/convert?fromUnit=meter&toUnit=foot&inputValue=1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(approx(&body_json(response).await["data"], 3.28084));

    let response = get(
        common::build_app(engine),
        "/api/v1/conversion/convert?fromUnit=foot&toUnit=meter&inputValue=1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(approx(&body_json(response).await["data"], 0.3048));
}

#[tokio::test]
async fn convert_same_unit_echoes_input_without_rule() {
    let app = common::build_test_app();
    let response = get(
        app,
        "/api/v1/conversion/convert?fromUnit=parsec&toUnit=parsec&inputValue=-7.5",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], -7.5);
}

#[tokio::test]
async fn convert_zero_input_returns_400() {
    let engine = common::seeded_engine().await;
    let response = get(
        common::build_app(engine),
        "/api/v1/conversion/convert?fromUnit=meter&toUnit=foot&inputValue=0",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn convert_empty_unit_returns_400() {
    let app = common::build_test_app();
    let response = get(
        app,
        "/api/v1/conversion/convert?fromUnit=&toUnit=foot&inputValue=1",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "All parameters [fromUnit, toUnit and inputValue] are mandatory."
    );
}

#[tokio::test]
async fn convert_missing_input_value_returns_400() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/conversion/convert?fromUnit=meter&toUnit=foot").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Required parameter [inputValue] is not present.");
}

#[tokio::test]
async fn convert_unknown_pair_returns_404() {
    let app = common::build_test_app();
    let response = get(
        app,
        "/api/v1/conversion/convert?fromUnit=inch&toUnit=mile&inputValue=3",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn convert_reverse_through_addend_rule_keeps_addend() {
    let engine = common::seeded_engine().await;
    let response = get(
        common::build_app(engine),
        "/api/v1/conversion/convert?fromUnit=fahrenheit&toUnit=celsius&inputValue=212",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(approx(&body_json(response).await["data"], 212.0 / 1.8 + 32.0));
}

#[tokio::test]
async fn convert_infinite_input_returns_400() {
    let engine = common::seeded_engine().await;
    let response = get(
        common::build_app(engine),
        "/api/v1/conversion/convert?fromUnit=meter&toUnit=foot&inputValue=inf",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn convert_same_unit_nan_returns_400() {
    let app = common::build_test_app();
    let response = get(
        app,
        "/api/v1/conversion/convert?fromUnit=meter&toUnit=meter&inputValue=NaN",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn convert_overflowing_result_returns_400() {
    let engine = common::empty_engine();
    engine
        .create_rule(&unitconv_core::conversion::CreateConversionRule::new(
            "meter",
            "nanometer",
            1e10,
            None,
        ))
        .await
        .unwrap();

    let response = get(
        common::build_app(engine),
        "/api/v1/conversion/convert?fromUnit=meter&toUnit=nanometer&inputValue=1e300",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Extractor rejections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_input_value_returns_json_400() {
    let app = common::build_test_app();
    let response = get(
        app,
        "/api/v1/conversion/convert?fromUnit=meter&toUnit=foot&inputValue=abc",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn malformed_json_body_returns_json_400() {
    let app = common::build_test_app();
    let request = axum::http::Request::builder()
        .method(axum::http::Method::POST)
        .uri("/api/v1/conversion/new")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"fromUnit\": "))
        .unwrap();

    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
