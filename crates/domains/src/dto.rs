//! Read-shaped projections and service inputs crossing the boundary.
//!
//! Projections never carry password hashes and may denormalize related data
//! (e.g. commenter nickname into a comment projection). Wire casing is
//! camelCase throughout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ImageType, MemberRole};

/// Member projection returned across the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub role: MemberRole,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MemberCreate {
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub role: Option<MemberRole>,
    pub profile_image: Option<String>,
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct MemberUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub nickname: Option<String>,
    pub role: Option<MemberRole>,
    pub profile_image: Option<String>,
}

/// Post projection with the writer identity joined in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub post_image: Option<String>,
    pub view_count: i64,
    pub writer_id: i64,
    pub writer_email: String,
    pub writer_nickname: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Registration input. Title and content are optional here so the service
/// can reject missing fields with its own error codes.
#[derive(Debug, Clone)]
pub struct PostCreate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub post_image: Option<String>,
    pub writer_id: i64,
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub post_image: Option<String>,
}

/// Comment projection with commenter identity denormalized in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
    pub commenter_email: String,
    pub commenter_nickname: String,
    pub commenter_profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentCreate {
    pub post_id: i64,
    pub user_id: i64,
    pub content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub content: Option<String>,
}

/// Heart projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartDto {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub reg_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct HeartCreate {
    pub post_id: i64,
    pub user_id: i64,
}

/// Stored image projection, including the public URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub id: i64,
    pub file_name: String,
    pub image_type: ImageType,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Access/refresh token pair issued at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tokens {
    pub access_token: String,
    pub refresh_token: String,
}
