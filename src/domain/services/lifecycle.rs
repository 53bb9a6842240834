use crate::domain::models::reservation::ReservationStatus;
use crate::error::AppError;

/// Status state machine for a reservation.
///
/// Legal edges: pending -> approved, pending -> cancelled,
/// approved -> cancelled. Nothing ever returns to pending, and a cancelled
/// reservation is terminal.
///
/// Callers get a precise error before touching the store; the repositories
/// enforce the same rules again inside their conditional writes.
pub fn validate_transition(
    current: ReservationStatus,
    target: ReservationStatus,
) -> Result<(), AppError> {
    use ReservationStatus::*;

    match (current, target) {
        (_, Pending) => Err(AppError::InvalidTransition(
            "a reservation cannot return to pending".to_string(),
        )),
        (Cancelled, _) => Err(AppError::InvalidTransition(
            "a cancelled reservation cannot change status".to_string(),
        )),
        (Approved, Approved) => Err(AppError::InvalidTransition(
            "reservation is already approved".to_string(),
        )),
        (Pending, Approved) | (Pending, Cancelled) | (Approved, Cancelled) => Ok(()),
    }
}
