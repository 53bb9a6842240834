use crate::domain::{models::settings::{Settings, SETTINGS_ID}, ports::SettingsRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Row};

pub struct PostgresSettingsRepo {
    pool: PgPool,
}

impl PostgresSettingsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // blackout_dates lives in a TEXT column as a JSON array, so the row is
    // mapped by hand instead of derived.
    fn map_row(row: &PgRow) -> Result<Settings, AppError> {
        let blackout_raw: String = row.try_get("blackout_dates")?;
        let blackout_dates = serde_json::from_str(&blackout_raw)
            .map_err(|_| AppError::Internal)?;

        Ok(Settings {
            id: row.try_get("id")?,
            reservations_open: row.try_get("reservations_open")?,
            capacity_mini: row.try_get("capacity_mini")?,
            capacity_mediano: row.try_get("capacity_mediano")?,
            capacity_full: row.try_get("capacity_full")?,
            blackout_dates,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepo {
    async fn get(&self) -> Result<Settings, AppError> {
        let row = sqlx::query("SELECT * FROM settings WHERE id = $1")
            .bind(SETTINGS_ID)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Self::map_row(&row)
    }

    async fn update(&self, settings: &Settings) -> Result<Settings, AppError> {
        let blackout_raw = serde_json::to_string(&settings.blackout_dates)
            .map_err(|_| AppError::Internal)?;

        let row = sqlx::query(
            "UPDATE settings SET reservations_open = $1, capacity_mini = $2, capacity_mediano = $3, capacity_full = $4, blackout_dates = $5, updated_at = $6
             WHERE id = $7
             RETURNING *"
        )
            .bind(settings.reservations_open)
            .bind(settings.capacity_mini)
            .bind(settings.capacity_mediano)
            .bind(settings.capacity_full)
            .bind(&blackout_raw)
            .bind(Utc::now())
            .bind(SETTINGS_ID)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Self::map_row(&row)
    }
}
