//! Member endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use domains::{MemberCreate, MemberUpdate};

use crate::authz::ensure_owner;
use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::response::{modify_success, register_success, remove_success, success};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreateRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemberModifyRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub nickname: Option<String>,
    pub profile_image: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<MemberCreateRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let id = state
        .members
        .register(MemberCreate {
            email: body.email,
            password: body.password,
            nickname: body.nickname,
            // Roles are never taken from the wire; every account starts as USER.
            role: None,
            profile_image: body.profile_image,
        })
        .await?;
    Ok(register_success(id))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(success(state.members.get(id).await?))
}

pub async fn modify(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(body): Json<MemberModifyRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    ensure_owner(&user.0, id)?;
    state
        .members
        .modify(
            id,
            MemberUpdate {
                email: body.email,
                password: body.password,
                nickname: body.nickname,
                role: None,
                profile_image: body.profile_image,
            },
        )
        .await?;
    Ok(modify_success())
}

pub async fn remove(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    ensure_owner(&user.0, id)?;
    state.members.remove(id).await?;
    Ok(remove_success())
}
