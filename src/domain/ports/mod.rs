use crate::domain::models::{
    reservation::{Reservation, ReservationStatus},
    settings::Settings,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a new reservation. Fails with SlotConflict if an approved
    /// reservation already occupies the same (venue, date, slot); the check
    /// and the insert are one atomic statement.
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError>;
    async fn list(&self, status: Option<ReservationStatus>) -> Result<Vec<Reservation>, AppError>;
    async fn list_by_email(&self, email: &str) -> Result<Vec<Reservation>, AppError>;
    /// pending -> approved, guarded so at most one reservation per slot is
    /// ever approved. NotFound / InvalidTransition / SlotConflict otherwise.
    async fn approve(&self, id: &str) -> Result<Reservation, AppError>;
    /// Any non-cancelled reservation -> cancelled.
    async fn cancel(&self, id: &str) -> Result<Reservation, AppError>;
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> Result<Settings, AppError>;
    async fn update(&self, settings: &Settings) -> Result<Settings, AppError>;
}
