use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{AdminReservationsQuery, UpdateReservationStatusRequest};
use crate::api::extractors::admin::AdminToken;
use crate::domain::models::reservation::ReservationStatus;
use crate::domain::services::lifecycle;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn list_all_reservations(
    State(state): State<Arc<AppState>>,
    _admin: AdminToken,
    Query(query): Query<AdminReservationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(raw.parse::<ReservationStatus>().map_err(|_| {
            AppError::Validation("status must be one of: pending, approved, cancelled".into())
        })?),
        None => None,
    };

    let reservations = state.reservation_repo.list(status).await?;
    Ok(Json(reservations))
}

pub async fn update_reservation_status(
    State(state): State<Arc<AppState>>,
    _admin: AdminToken,
    Path(id): Path<String>,
    Json(payload): Json<UpdateReservationStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let target = payload.status.parse::<ReservationStatus>().map_err(|_| {
        AppError::Validation("status must be one of: pending, approved, cancelled".into())
    })?;

    let current = state.reservation_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Reservation not found".into()))?;

    lifecycle::validate_transition(current.status, target)?;

    // The repository re-checks both preconditions inside a conditional write,
    // so a racing admin cannot slip a second approval into the same slot.
    let updated = match target {
        ReservationStatus::Approved => state.reservation_repo.approve(&id).await?,
        ReservationStatus::Cancelled => state.reservation_repo.cancel(&id).await?,
        ReservationStatus::Pending => return Err(AppError::Internal),
    };

    info!("Reservation {} -> {}", updated.id, updated.status);
    Ok(Json(updated))
}
