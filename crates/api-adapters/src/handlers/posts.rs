//! Post endpoints. Reading a post's detail increments its view count first,
//! mirroring the controller flow of the upstream API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use domains::{PostCreate, PostUpdate};

use crate::authz::ensure_owner;
use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::response::{modify_success, register_success, remove_success, success};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateRequest {
    pub user_id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub post_image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostModifyRequest {
    pub user_id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub post_image: Option<String>,
}

/// Detail read: bumps the view count, then returns the post with writer
/// identity.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    state.posts.increment_view_count(id).await?;
    Ok(success(state.posts.get(id).await?))
}

pub async fn list(State(state): State<AppState>) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(success(state.posts.get_list().await?))
}

/// All comments under a post.
pub async fn comments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(success(state.comments.get_comments_by_post(id).await?))
}

/// All hearts under a post.
pub async fn hearts(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(success(state.hearts.get_hearts_by_post(id).await?))
}

pub async fn register(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<PostCreateRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    ensure_owner(&user.0, body.user_id)?;
    let id = state
        .posts
        .register(PostCreate {
            title: body.title,
            content: body.content,
            post_image: body.post_image,
            writer_id: body.user_id,
        })
        .await?;
    Ok(register_success(id))
}

pub async fn modify(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(body): Json<PostModifyRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    ensure_owner(&user.0, body.user_id)?;
    state
        .posts
        .modify(
            id,
            PostUpdate {
                title: body.title,
                content: body.content,
                post_image: body.post_image,
            },
        )
        .await?;
    Ok(modify_success())
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    state.posts.remove(id).await?;
    Ok(remove_success())
}
