//! # Domain Models
//!
//! These structs represent the core entities of heartboard. Identity is an
//! `i64` row id assigned by the store; timestamps are UTC.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access level of a member account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    User,
    Manager,
    Admin,
}

impl MemberRole {
    /// Text form stored in the `members.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::User => "USER",
            MemberRole::Manager => "MANAGER",
            MemberRole::Admin => "ADMIN",
        }
    }
}

impl FromStr for MemberRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(MemberRole::User),
            "MANAGER" => Ok(MemberRole::Manager),
            "ADMIN" => Ok(MemberRole::Admin),
            other => Err(anyhow::anyhow!("unknown member role: {other}")),
        }
    }
}

/// A registered account. Posts, comments, and hearts reference members by id;
/// the member row does not own collections itself (cascades live in the store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub email: String,
    /// Argon2 PHC string, never the raw password.
    pub password_hash: String,
    pub nickname: String,
    pub role: MemberRole,
    /// Generated file name of the profile image, if one was uploaded.
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Insert shape for a member; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
    pub role: MemberRole,
    pub profile_image: Option<String>,
}

/// A post authored by one member. Owns its comments and hearts via
/// store-level cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub post_image: Option<String>,
    /// Monotonic non-negative read counter.
    pub view_count: i64,
    pub writer_id: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub post_image: Option<String>,
    pub writer_id: i64,
}

/// A comment attached to a post by a commenting member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub commenter_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub commenter_id: i64,
    pub content: String,
}

/// A "heart" (like). At most one per (post, member) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heart {
    pub id: i64,
    pub post_id: i64,
    pub member_id: i64,
    pub reg_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewHeart {
    pub post_id: i64,
    pub member_id: i64,
}

/// What an uploaded image is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageType {
    ProfileImage,
    PostImage,
}

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::ProfileImage => "PROFILE_IMAGE",
            ImageType::PostImage => "POST_IMAGE",
        }
    }
}

impl FromStr for ImageType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PROFILE_IMAGE" => Ok(ImageType::ProfileImage),
            "POST_IMAGE" => Ok(ImageType::PostImage),
            other => Err(anyhow::anyhow!("unknown image type: {other}")),
        }
    }
}

/// Metadata row for a stored file; the bytes live in the `FileStore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    /// Generated name, unique within the store.
    pub file_name: String,
    pub image_type: ImageType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewImage {
    pub file_name: String,
    pub image_type: ImageType,
}

/// The authenticated caller, as decoded from an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub member_id: i64,
    pub role: MemberRole,
}
