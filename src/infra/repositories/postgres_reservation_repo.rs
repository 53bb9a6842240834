use crate::domain::{
    models::reservation::{Reservation, ReservationStatus},
    ports::ReservationRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresReservationRepo {
    pool: PgPool,
}

impl PostgresReservationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PostgresReservationRepo {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        // Conditional insert: the occupancy check and the write are a single
        // statement, so two racing requests cannot both land in an occupied slot.
        sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (id, customer_name, email, phone, package, service_date, time_slot, venue, customer_region, event_type, status, created_at)
             SELECT $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12
             WHERE NOT EXISTS (
                 SELECT 1 FROM reservations
                 WHERE venue = $8 AND service_date = $6 AND time_slot = $7 AND status = 'approved'
             )
             RETURNING *"
        )
            .bind(&reservation.id).bind(&reservation.customer_name).bind(&reservation.email).bind(&reservation.phone)
            .bind(reservation.package).bind(&reservation.service_date).bind(reservation.time_slot).bind(reservation.venue)
            .bind(&reservation.customer_region).bind(&reservation.event_type).bind(reservation.status).bind(reservation.created_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::SlotConflict("Slot already has an approved reservation".into()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, status: Option<ReservationStatus>) -> Result<Vec<Reservation>, AppError> {
        match status {
            Some(status) => sqlx::query_as::<_, Reservation>(
                "SELECT * FROM reservations WHERE status = $1 ORDER BY created_at DESC"
            )
                .bind(status)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database),
            None => sqlx::query_as::<_, Reservation>(
                "SELECT * FROM reservations ORDER BY created_at DESC"
            )
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database),
        }
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE email = $1 ORDER BY created_at DESC"
        )
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn approve(&self, id: &str) -> Result<Reservation, AppError> {
        // Single conditional write; the partial unique index on approved slots
        // backs it up should the statement ever change.
        let updated = sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET status = 'approved'
             WHERE id = $1 AND status = 'pending'
               AND NOT EXISTS (
                   SELECT 1 FROM reservations other
                   WHERE other.venue = reservations.venue
                     AND other.service_date = reservations.service_date
                     AND other.time_slot = reservations.time_slot
                     AND other.status = 'approved'
                     AND other.id != reservations.id
               )
             RETURNING *"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if let Some(reservation) = updated {
            return Ok(reservation);
        }

        // Zero rows: re-read to tell the caller which precondition failed.
        match self.find_by_id(id).await? {
            None => Err(AppError::NotFound("Reservation not found".into())),
            Some(r) if r.status == ReservationStatus::Pending => Err(AppError::SlotConflict(
                "Slot already has an approved reservation".into(),
            )),
            Some(r) if r.status == ReservationStatus::Approved => Err(AppError::InvalidTransition(
                "reservation is already approved".into(),
            )),
            Some(_) => Err(AppError::InvalidTransition(
                "a cancelled reservation cannot change status".into(),
            )),
        }
    }

    async fn cancel(&self, id: &str) -> Result<Reservation, AppError> {
        let updated = sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET status = 'cancelled' WHERE id = $1 AND status != 'cancelled' RETURNING *"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if let Some(reservation) = updated {
            return Ok(reservation);
        }

        match self.find_by_id(id).await? {
            None => Err(AppError::NotFound("Reservation not found".into())),
            Some(_) => Err(AppError::InvalidTransition(
                "a cancelled reservation cannot change status".into(),
            )),
        }
    }
}
