use std::sync::Arc;
use crate::domain::ports::{ReservationRepository, SettingsRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub reservation_repo: Arc<dyn ReservationRepository>,
    pub settings_repo: Arc<dyn SettingsRepository>,
}
