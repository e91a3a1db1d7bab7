//! Comment endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use domains::{CommentCreate, CommentUpdate};

use crate::authz::ensure_owner;
use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::response::{modify_success, register_success, remove_success, success};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateRequest {
    pub post_id: i64,
    pub user_id: i64,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentModifyRequest {
    pub user_id: i64,
    pub content: Option<String>,
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(success(state.comments.get(id).await?))
}

pub async fn register(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<CommentCreateRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    ensure_owner(&user.0, body.user_id)?;
    let id = state
        .comments
        .register(CommentCreate {
            post_id: body.post_id,
            user_id: body.user_id,
            content: body.content,
        })
        .await?;
    Ok(register_success(id))
}

pub async fn modify(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(body): Json<CommentModifyRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    ensure_owner(&user.0, body.user_id)?;
    state
        .comments
        .modify(
            id,
            CommentUpdate {
                content: body.content,
            },
        )
        .await?;
    Ok(modify_success())
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    state.comments.remove(id).await?;
    Ok(remove_success())
}
