use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row id of the single settings document.
pub const SETTINGS_ID: &str = "global";

/// System-wide business parameters, editable by administrators. A single
/// mutable document; no history is kept.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub id: String,
    pub reservations_open: bool,
    pub capacity_mini: i32,
    pub capacity_mediano: i32,
    pub capacity_full: i32,
    /// Dates ("YYYY-MM-DD") on which no new reservations are accepted.
    pub blackout_dates: Vec<String>,
    pub updated_at: DateTime<Utc>,
}
