//! Heart endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use domains::HeartCreate;

use crate::authz::ensure_owner;
use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::response::{register_success, remove_success, success};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartCreateRequest {
    pub post_id: i64,
    pub user_id: i64,
}

pub async fn get(
    State(state): State<AppState>,
    Path((post_id, user_id)): Path<(i64, i64)>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(success(state.hearts.get(post_id, user_id).await?))
}

pub async fn register(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<HeartCreateRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    ensure_owner(&user.0, body.user_id)?;
    let id = state
        .hearts
        .register(HeartCreate {
            post_id: body.post_id,
            user_id: body.user_id,
        })
        .await?;
    Ok(register_success(id))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((post_id, user_id)): Path<(i64, i64)>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    state.hearts.remove(post_id, user_id).await?;
    Ok(remove_success())
}
