use axum::{
    body::Body,
    extract::Request,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{admin, health, reservation, settings};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    // The browser front end runs on another origin, so CORS stays wide open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::health_check))

        // Public booking flow
        .route("/api/reservations", post(reservation::create_reservation).get(reservation::list_own_reservations))
        .route("/api/reservations/{id}", get(reservation::get_reservation))

        // Settings (reads are public, writes gated by the admin extractor)
        .route("/api/config", get(settings::get_settings).put(settings::update_settings))

        // Admin
        .route("/api/admin/reservations", get(admin::list_all_reservations))
        .route("/api/admin/reservations/{id}", patch(admin::update_reservation_status))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(cors)
        .with_state(state)
}
