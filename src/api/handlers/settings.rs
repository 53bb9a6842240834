use axum::{extract::State, response::IntoResponse, Json};
use chrono::NaiveDate;
use crate::api::dtos::requests::UpdateSettingsRequest;
use crate::api::extractors::admin::AdminToken;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let settings = state.settings_repo.get().await?;
    Ok(Json(settings))
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    _admin: AdminToken,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut settings = state.settings_repo.get().await?;

    if let Some(open) = payload.reservations_open {
        settings.reservations_open = open;
    }
    if let Some(capacity) = payload.capacity_mini {
        settings.capacity_mini = capacity;
    }
    if let Some(capacity) = payload.capacity_mediano {
        settings.capacity_mediano = capacity;
    }
    if let Some(capacity) = payload.capacity_full {
        settings.capacity_full = capacity;
    }
    if let Some(dates) = payload.blackout_dates {
        for date in &dates {
            if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                return Err(AppError::Validation(format!(
                    "invalid blackout date: {}",
                    date
                )));
            }
        }
        settings.blackout_dates = dates;
    }

    let updated = state.settings_repo.update(&settings).await?;
    info!("Settings updated");
    Ok(Json(updated))
}
