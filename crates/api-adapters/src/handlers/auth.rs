//! Login and token refresh.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use domains::AppError;

use crate::error::ApiError;
use crate::response::success;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Verifies credentials and issues an access/refresh pair.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let member = state.members.authenticate(&body.email, &body.password).await?;
    let tokens = state
        .tokens
        .issue(member.id, member.role)
        .map_err(AppError::Internal)?;
    Ok(success(tokens))
}

/// Exchanges a valid refresh token for a fresh pair. The member is looked up
/// again so a deleted account cannot refresh itself back in.
pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let member_id = state
        .tokens
        .verify_refresh(&body.refresh_token)
        .map_err(|_| AppError::Unauthorized)?;
    let member = state.members.get(member_id).await?;
    let tokens = state
        .tokens
        .issue(member.id, member.role)
        .map_err(AppError::Internal)?;
    Ok(success(tokens))
}
