use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AppError;

/// Guest-capacity tier booked for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Package {
    Mini,
    Mediano,
    Full,
}

/// The park runs three fixed shifts per day; one event fits in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Venue {
    Maracaibo,
    Caracas,
    #[serde(rename = "Punto Fijo")]
    #[sqlx(rename = "Punto Fijo")]
    PuntoFijo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Approved,
    Cancelled,
}

impl FromStr for Package {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "mini" => Ok(Package::Mini),
            "mediano" => Ok(Package::Mediano),
            "full" => Ok(Package::Full),
            _ => Err(()),
        }
    }
}

impl FromStr for TimeSlot {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "morning" => Ok(TimeSlot::Morning),
            "afternoon" => Ok(TimeSlot::Afternoon),
            "evening" => Ok(TimeSlot::Evening),
            _ => Err(()),
        }
    }
}

impl FromStr for Venue {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "Maracaibo" => Ok(Venue::Maracaibo),
            "Caracas" => Ok(Venue::Caracas),
            "Punto Fijo" => Ok(Venue::PuntoFijo),
            _ => Err(()),
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "pending" => Ok(ReservationStatus::Pending),
            "approved" => Ok(ReservationStatus::Approved),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Approved => "approved",
            ReservationStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Venue::Maracaibo => "Maracaibo",
            Venue::Caracas => "Caracas",
            Venue::PuntoFijo => "Punto Fijo",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Reservation {
    pub id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub package: Package,
    /// Calendar date as "YYYY-MM-DD". Kept as a plain string end to end so
    /// the booked day never shifts with the server timezone.
    pub service_date: String,
    pub time_slot: TimeSlot,
    pub venue: Venue,
    pub customer_region: String,
    pub event_type: String,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

/// Raw request fields, before any validation.
pub struct NewReservationParams {
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

impl Reservation {
    /// Validated construction. Checks every field and reports all offenders
    /// in one pass instead of bailing on the first. A new reservation always
    /// starts out pending with a server-side timestamp.
    pub fn from_params(params: NewReservationParams) -> Result<Self, AppError> {
        let mut invalid: Vec<&str> = Vec::new();

        if params.customer_name.trim().is_empty() {
            invalid.push("customer_name");
        }
        if params.email.trim().is_empty() {
            invalid.push("email");
        }
        if params.phone.trim().is_empty() {
            invalid.push("phone");
        }
        if params.customer_region.trim().is_empty() {
            invalid.push("customer_region");
        }
        if params.event_type.trim().is_empty() {
            invalid.push("event_type");
        }

        let package = params.package.parse::<Package>();
        if package.is_err() {
            invalid.push("package");
        }
        let time_slot = params.time_slot.parse::<TimeSlot>();
        if time_slot.is_err() {
            invalid.push("time_slot");
        }
        let venue = params.venue.parse::<Venue>();
        if venue.is_err() {
            invalid.push("venue");
        }
        if NaiveDate::parse_from_str(&params.service_date, "%Y-%m-%d").is_err() {
            invalid.push("service_date");
        }

        if !invalid.is_empty() {
            return Err(AppError::Validation(format!(
                "invalid or missing fields: {}",
                invalid.join(", ")
            )));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            customer_name: params.customer_name,
            email: params.email,
            phone: params.phone,
            package: package.unwrap(),
            service_date: params.service_date,
            time_slot: time_slot.unwrap(),
            venue: venue.unwrap(),
            customer_region: params.customer_region,
            event_type: params.event_type,
            status: ReservationStatus::Pending,
            created_at: Utc::now(),
        })
    }
}
