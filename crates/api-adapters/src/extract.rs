//! Bearer-token extractor: decodes `Authorization: Bearer <jwt>` into the
//! caller's identity.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use domains::{AppError, Identity};

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller. Handlers that take this reject unauthenticated
/// requests with 401.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Identity);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError(AppError::Unauthorized))?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError(AppError::Unauthorized))?;

        let identity = state
            .tokens
            .verify_access(token)
            .map_err(|_| ApiError(AppError::Unauthorized))?;
        Ok(CurrentUser(identity))
    }
}
