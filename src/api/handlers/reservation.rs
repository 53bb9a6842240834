use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateReservationRequest, OwnReservationsQuery};
use crate::domain::models::reservation::{NewReservationParams, Reservation};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = Reservation::from_params(NewReservationParams {
        customer_name: payload.customer_name,
        email: payload.email,
        phone: payload.phone,
        package: payload.package,
        service_date: payload.service_date,
        time_slot: payload.time_slot,
        venue: payload.venue,
        customer_region: payload.customer_region,
        event_type: payload.event_type,
    })?;

    let settings = state.settings_repo.get().await?;

    if !settings.reservations_open {
        warn!("Reservation rejected: reservations are closed");
        return Err(AppError::Conflict("Reservations are currently closed".into()));
    }
    if settings.blackout_dates.contains(&reservation.service_date) {
        warn!("Reservation rejected: {} is a blackout date", reservation.service_date);
        return Err(AppError::Conflict("Date is unavailable".into()));
    }

    let created = state.reservation_repo.create(&reservation).await?;

    info!(
        "Reservation created: {} ({} {} {})",
        created.id, created.venue, created.service_date, created.time_slot
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = state.reservation_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Reservation not found".into()))?;
    Ok(Json(reservation))
}

pub async fn list_own_reservations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OwnReservationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = state.reservation_repo.list_by_email(&query.email).await?;
    Ok(Json(reservations))
}
