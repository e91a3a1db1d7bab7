//! The `{message, data}` response envelope.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

pub fn success(data: impl Serialize) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "message": "success", "data": data })),
    )
}

/// 201 with the new entity id.
pub fn register_success(id: i64) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({ "message": "registerSuccess", "data": { "id": id } })),
    )
}

pub fn modify_success() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "message": "modifySuccess" })))
}

pub fn remove_success() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "message": "removeSuccess" })))
}
