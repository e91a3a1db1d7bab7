//! Image upload. Multipart with a `file` part and an optional `type` part
//! (`PROFILE_IMAGE` or `POST_IMAGE`, default `PROFILE_IMAGE`).

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use domains::{AppError, ImageType};

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

pub async fn upload(
    State(state): State<AppState>,
    _user: CurrentUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut file: Option<(bytes::Bytes, String)> = None;
    let mut image_type = ImageType::ProfileImage;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::Validation("invalidImageFile"))?
    {
        match field.name() {
            Some("file") => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::Validation("invalidImageFile"))?;
                file = Some((data, content_type));
            }
            Some("type") => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| AppError::Validation("invalidImageType"))?;
                image_type = text
                    .parse()
                    .map_err(|_| AppError::Validation("invalidImageType"))?;
            }
            _ => {}
        }
    }

    let (data, content_type) = file.ok_or(AppError::Validation("invalidImageFile"))?;
    let dto = state.images.upload(data, &content_type, image_type).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "registerSuccess", "data": dto })),
    ))
}
