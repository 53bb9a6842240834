mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{TestApp, ADMIN_TOKEN};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_settings(app: &TestApp) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/config")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

async fn put_settings(app: &TestApp, payload: &Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/config")
            .header("X-Admin-Token", ADMIN_TOKEN)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

async fn post_reservation(app: &TestApp, date: &str) -> axum::response::Response {
    let payload = json!({
        "customer_name": "Luisa Marin",
        "email": "luisa@example.com",
        "phone": "+58 416-3334455",
        "package": "mini",
        "service_date": date,
        "time_slot": "morning",
        "venue": "Caracas",
        "customer_region": "Miranda",
        "event_type": "Cumpleaños"
    });

    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/reservations")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_default_settings_seeded() {
    let app = TestApp::new().await;

    let settings = get_settings(&app).await;
    assert_eq!(settings["reservations_open"], true);
    assert_eq!(settings["capacity_mini"], 30);
    assert_eq!(settings["capacity_mediano"], 60);
    assert_eq!(settings["capacity_full"], 80);
    assert_eq!(settings["blackout_dates"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_update_requires_admin_token() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/config")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "capacity_mini": 10 }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(get_settings(&app).await["capacity_mini"], 30);
}

#[tokio::test]
async fn test_partial_update_merges_fields() {
    let app = TestApp::new().await;

    let res = put_settings(&app, &json!({
        "capacity_mini": 25,
        "blackout_dates": ["2026-01-01", "2026-12-24"]
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let updated = parse_body(res).await;
    assert_eq!(updated["capacity_mini"], 25);
    assert_eq!(updated["blackout_dates"], json!(["2026-01-01", "2026-12-24"]));
    // Untouched fields keep their values
    assert_eq!(updated["capacity_mediano"], 60);
    assert_eq!(updated["reservations_open"], true);
}

#[tokio::test]
async fn test_malformed_blackout_date_rejected() {
    let app = TestApp::new().await;

    let res = put_settings(&app, &json!({ "blackout_dates": ["christmas"] })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["kind"], "validation");
}

#[tokio::test]
async fn test_no_reservations_on_blackout_dates() {
    let app = TestApp::new().await;

    put_settings(&app, &json!({ "blackout_dates": ["2026-01-01"] })).await;

    let res = post_reservation(&app, "2026-01-01").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(parse_body(res).await["kind"], "conflict");

    let res = post_reservation(&app, "2026-01-02").await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_no_reservations_while_closed() {
    let app = TestApp::new().await;

    put_settings(&app, &json!({ "reservations_open": false })).await;

    let res = post_reservation(&app, "2026-06-01").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(parse_body(res).await["kind"], "conflict");

    // Reopen and the same request goes through
    put_settings(&app, &json!({ "reservations_open": true })).await;
    let res = post_reservation(&app, "2026-06-01").await;
    assert_eq!(res.status(), StatusCode::CREATED);
}
