use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

/// Admin gate: a static token in the X-Admin-Token header, compared against
/// the value the process was started with. Presence of this extractor in a
/// handler signature is what marks a route as administrative.
pub struct AdminToken;

impl<S> FromRequestParts<S> for AdminToken
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let provided = parts.headers.get("X-Admin-Token")
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        if provided != app_state.config.admin_token {
            return Err(AppError::Unauthorized);
        }

        Ok(AdminToken)
    }
}
