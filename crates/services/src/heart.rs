//! Heart lifecycle manager: registration and removal of the unique
//! per-(post, member) like record.

use std::sync::Arc;

use tracing::info;

use domains::{AppError, Heart, HeartCreate, HeartDto, HeartRepo, NewHeart, PostRepo, Result};

pub struct HeartService {
    hearts: Arc<dyn HeartRepo>,
    posts: Arc<dyn PostRepo>,
}

impl HeartService {
    pub fn new(hearts: Arc<dyn HeartRepo>, posts: Arc<dyn PostRepo>) -> Self {
        Self { hearts, posts }
    }

    pub async fn get(&self, post_id: i64, user_id: i64) -> Result<HeartDto> {
        let heart = self
            .hearts
            .find_by_post_and_member(post_id, user_id)
            .await?
            .ok_or(AppError::NotFound("heartNotFound"))?;
        Ok(to_dto(heart))
    }

    pub async fn get_hearts_by_post(&self, post_id: i64) -> Result<Vec<HeartDto>> {
        let hearts = self.hearts.list_by_post(post_id).await?;
        Ok(hearts.into_iter().map(to_dto).collect())
    }

    /// Registers a heart for (post, user). A second registration for the same
    /// pair fails; the UNIQUE(post_id, member_id) constraint backs the check.
    pub async fn register(&self, input: HeartCreate) -> Result<i64> {
        if !self.posts.exists(input.post_id).await? {
            return Err(AppError::NotFound("postNotFound"));
        }
        if self
            .hearts
            .find_by_post_and_member(input.post_id, input.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Validation("heartAlreadyExists"));
        }

        let id = self
            .hearts
            .insert(&NewHeart {
                post_id: input.post_id,
                member_id: input.user_id,
            })
            .await?;
        info!(heart_id = id, post_id = input.post_id, "heart registered");
        Ok(id)
    }

    pub async fn remove(&self, post_id: i64, user_id: i64) -> Result<()> {
        if !self
            .hearts
            .delete_by_post_and_member(post_id, user_id)
            .await?
        {
            return Err(AppError::NotFound("heartNotFound"));
        }
        info!(post_id, member_id = user_id, "heart removed");
        Ok(())
    }
}

fn to_dto(heart: Heart) -> HeartDto {
    HeartDto {
        id: heart.id,
        post_id: heart.post_id,
        user_id: heart.member_id,
        reg_date: heart.reg_date,
    }
}
