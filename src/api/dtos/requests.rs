use serde::Deserialize;

/// Public booking payload. Enum-valued fields arrive as raw strings and are
/// validated by the domain constructor, not here.
#[derive(Deserialize)]
pub struct CreateReservationRequest {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub package: String,
    pub service_date: String,
    pub time_slot: String,
    pub venue: String,
    pub customer_region: String,
    pub event_type: String,
}

#[derive(Deserialize)]
pub struct OwnReservationsQuery {
    pub email: String,
}

#[derive(Deserialize)]
pub struct AdminReservationsQuery {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateReservationStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct UpdateSettingsRequest {
    pub reservations_open: Option<bool>,
    pub capacity_mini: Option<i32>,
    pub capacity_mediano: Option<i32>,
    pub capacity_full: Option<i32>,
    pub blackout_dates: Option<Vec<String>>,
}
