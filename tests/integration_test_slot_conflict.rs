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

async fn post_reservation(app: &TestApp, email: &str, venue: &str, date: &str, slot: &str) -> axum::response::Response {
    let payload = json!({
        "customer_name": "Carlos Ruiz",
        "email": email,
        "phone": "+58 424-9990011",
        "package": "full",
        "service_date": date,
        "time_slot": slot,
        "venue": venue,
        "customer_region": "Falcón",
        "event_type": "Evento corporativo"
    });

    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/reservations")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

async fn patch_status(app: &TestApp, id: &str, status: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("PATCH").uri(format!("/api/admin/reservations/{}", id))
            .header("X-Admin-Token", ADMIN_TOKEN)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "status": status }).to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_pending_requests_may_share_a_slot() {
    let app = TestApp::new().await;

    let res_a = post_reservation(&app, "a@a.com", "Caracas", "2025-12-25", "morning").await;
    assert_eq!(res_a.status(), StatusCode::CREATED);

    let res_b = post_reservation(&app, "b@b.com", "Caracas", "2025-12-25", "morning").await;
    assert_eq!(res_b.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_only_one_reservation_per_slot_gets_approved() {
    let app = TestApp::new().await;

    let a = parse_body(post_reservation(&app, "a@a.com", "Caracas", "2025-12-25", "morning").await).await;
    let b = parse_body(post_reservation(&app, "b@b.com", "Caracas", "2025-12-25", "morning").await).await;
    let a_id = a["id"].as_str().unwrap();
    let b_id = b["id"].as_str().unwrap();

    let res = patch_status(&app, a_id, "approved").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = patch_status(&app, b_id, "approved").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = parse_body(res).await;
    assert_eq!(body["kind"], "slot_conflict");

    // B is still pending, not silently cancelled
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/reservations/{}", b_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(parse_body(res).await["status"], "pending");
}

#[tokio::test]
async fn test_creation_blocked_once_slot_is_approved() {
    let app = TestApp::new().await;

    let a = parse_body(post_reservation(&app, "a@a.com", "Punto Fijo", "2026-01-10", "evening").await).await;
    patch_status(&app, a["id"].as_str().unwrap(), "approved").await;

    let res = post_reservation(&app, "c@c.com", "Punto Fijo", "2026-01-10", "evening").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(parse_body(res).await["kind"], "slot_conflict");
}

#[tokio::test]
async fn test_other_slots_and_venues_unaffected() {
    let app = TestApp::new().await;

    let a = parse_body(post_reservation(&app, "a@a.com", "Caracas", "2025-12-25", "morning").await).await;
    patch_status(&app, a["id"].as_str().unwrap(), "approved").await;

    // Same venue and date, different shift
    let b = parse_body(post_reservation(&app, "b@b.com", "Caracas", "2025-12-25", "afternoon").await).await;
    let res = patch_status(&app, b["id"].as_str().unwrap(), "approved").await;
    assert_eq!(res.status(), StatusCode::OK);

    // Same date and shift, different venue
    let c = parse_body(post_reservation(&app, "c@c.com", "Maracaibo", "2025-12-25", "morning").await).await;
    let res = patch_status(&app, c["id"].as_str().unwrap(), "approved").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cancelling_the_approved_reservation_frees_the_slot() {
    let app = TestApp::new().await;

    let a = parse_body(post_reservation(&app, "a@a.com", "Caracas", "2025-12-25", "morning").await).await;
    let b = parse_body(post_reservation(&app, "b@b.com", "Caracas", "2025-12-25", "morning").await).await;
    let a_id = a["id"].as_str().unwrap();
    let b_id = b["id"].as_str().unwrap();

    patch_status(&app, a_id, "approved").await;

    let res = patch_status(&app, b_id, "approved").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    patch_status(&app, a_id, "cancelled").await;

    let res = patch_status(&app, b_id, "approved").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "approved");
}

#[tokio::test]
async fn test_concurrent_approvals_admit_exactly_one() {
    let app = TestApp::new().await;

    let a = parse_body(post_reservation(&app, "a@a.com", "Maracaibo", "2026-07-04", "afternoon").await).await;
    let b = parse_body(post_reservation(&app, "b@b.com", "Maracaibo", "2026-07-04", "afternoon").await).await;
    let a_id = a["id"].as_str().unwrap().to_string();
    let b_id = b["id"].as_str().unwrap().to_string();

    let (res_a, res_b) = tokio::join!(
        patch_status(&app, &a_id, "approved"),
        patch_status(&app, &b_id, "approved"),
    );

    let statuses = [res_a.status(), res_b.status()];
    let ok_count = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let conflict_count = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();

    assert_eq!(ok_count, 1, "exactly one approval must win, got {:?}", statuses);
    assert_eq!(conflict_count, 1, "the loser must get a conflict, got {:?}", statuses);

    // The store agrees: one approved, one pending
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/admin/reservations?status=approved")
            .header("X-Admin-Token", ADMIN_TOKEN)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let approved = parse_body(res).await;
    assert_eq!(approved.as_array().unwrap().len(), 1);
}
