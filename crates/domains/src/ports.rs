//! # Port Traits
//!
//! Contracts implemented by the storage and auth adapters. Repository methods
//! return `anyhow::Result`; absence is modeled with `Option`/`bool` so the
//! services own the not-found error codes.

use async_trait::async_trait;
use bytes::Bytes;

use crate::dto::Tokens;
use crate::models::{
    Comment, Heart, Identity, Image, Member, MemberRole, NewComment, NewHeart, NewImage,
    NewMember, NewPost, Post,
};

/// Persistence contract for member accounts.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait MemberRepo: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Member>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Member>>;
    async fn exists_by_email(&self, email: &str) -> anyhow::Result<bool>;
    async fn exists_by_nickname(&self, nickname: &str) -> anyhow::Result<bool>;
    /// Uniqueness probe for profile edits: is the value held by any *other* member?
    async fn email_taken_by_other(&self, email: &str, member_id: i64) -> anyhow::Result<bool>;
    async fn nickname_taken_by_other(&self, nickname: &str, member_id: i64)
        -> anyhow::Result<bool>;
    async fn insert(&self, member: &NewMember) -> anyhow::Result<i64>;
    async fn update(&self, member: &Member) -> anyhow::Result<()>;
    /// Returns false when no row existed. Cascades to dependents at the store.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

/// Persistence contract for posts.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PostRepo: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Post>>;
    async fn find_with_writer(&self, id: i64) -> anyhow::Result<Option<(Post, Member)>>;
    async fn list_with_writer(&self) -> anyhow::Result<Vec<(Post, Member)>>;
    async fn exists(&self, id: i64) -> anyhow::Result<bool>;
    async fn insert(&self, post: &NewPost) -> anyhow::Result<i64>;
    async fn update(&self, post: &Post) -> anyhow::Result<()>;
    /// Atomic `view_count = view_count + 1`; false when no row existed.
    async fn increment_view_count(&self, id: i64) -> anyhow::Result<bool>;
    /// Returns false when no row existed. Cascades to comments/hearts.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

/// Persistence contract for comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepo: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Comment>>;
    async fn find_with_commenter(&self, id: i64) -> anyhow::Result<Option<(Comment, Member)>>;
    async fn list_by_post_with_commenter(
        &self,
        post_id: i64,
    ) -> anyhow::Result<Vec<(Comment, Member)>>;
    async fn insert(&self, comment: &NewComment) -> anyhow::Result<i64>;
    async fn update(&self, comment: &Comment) -> anyhow::Result<()>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

/// Persistence contract for hearts. The (post, member) pair is unique.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait HeartRepo: Send + Sync {
    async fn find_by_post_and_member(
        &self,
        post_id: i64,
        member_id: i64,
    ) -> anyhow::Result<Option<Heart>>;
    async fn list_by_post(&self, post_id: i64) -> anyhow::Result<Vec<Heart>>;
    async fn insert(&self, heart: &NewHeart) -> anyhow::Result<i64>;
    async fn delete_by_post_and_member(
        &self,
        post_id: i64,
        member_id: i64,
    ) -> anyhow::Result<bool>;
}

/// Persistence contract for image metadata rows.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ImageRepo: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Image>>;
    async fn insert(&self, image: &NewImage) -> anyhow::Result<i64>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

/// File storage contract for image bytes.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Saves raw bytes and returns the generated file name.
    async fn save(&self, data: Bytes, content_type: &str) -> anyhow::Result<String>;
    async fn delete(&self, file_name: &str) -> anyhow::Result<()>;
    /// Public URL or path for a stored file.
    fn url_for(&self, file_name: &str) -> String;
}

/// Credential hashing contract.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, raw: &str) -> anyhow::Result<String>;
    fn verify(&self, raw: &str, hash: &str) -> bool;
}

/// Session token contract: issues and verifies access/refresh pairs.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, member_id: i64, role: MemberRole) -> anyhow::Result<Tokens>;
    fn verify_access(&self, token: &str) -> anyhow::Result<Identity>;
    /// Returns the member id the refresh token was issued for.
    fn verify_refresh(&self, token: &str) -> anyhow::Result<i64>;
}
