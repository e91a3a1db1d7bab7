//! Comment lifecycle manager: CRUD scoped to a post and commenter, with the
//! commenter identity denormalized into every projection.

use std::sync::Arc;

use tracing::info;

use domains::{
    AppError, Comment, CommentCreate, CommentDto, CommentRepo, CommentUpdate, Member, NewComment,
    PostRepo, Result,
};

pub struct CommentService {
    comments: Arc<dyn CommentRepo>,
    posts: Arc<dyn PostRepo>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepo>, posts: Arc<dyn PostRepo>) -> Self {
        Self { comments, posts }
    }

    pub async fn get(&self, id: i64) -> Result<CommentDto> {
        let (comment, commenter) = self
            .comments
            .find_with_commenter(id)
            .await?
            .ok_or(AppError::NotFound("commentNotFound"))?;
        Ok(to_dto(comment, &commenter))
    }

    /// All comments for a post, store order. An empty list for an unknown
    /// post id is indistinguishable from a post with no comments.
    pub async fn get_comments_by_post(&self, post_id: i64) -> Result<Vec<CommentDto>> {
        let rows = self.comments.list_by_post_with_commenter(post_id).await?;
        Ok(rows
            .into_iter()
            .map(|(comment, commenter)| to_dto(comment, &commenter))
            .collect())
    }

    /// Attaches a comment to a post and commenter. Content is validated the
    /// same way post content is.
    pub async fn register(&self, input: CommentCreate) -> Result<i64> {
        let content = match input.content {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Err(AppError::Validation("invalidCommentContent")),
        };
        if !self.posts.exists(input.post_id).await? {
            return Err(AppError::NotFound("postNotFound"));
        }

        let id = self
            .comments
            .insert(&NewComment {
                post_id: input.post_id,
                commenter_id: input.user_id,
                content,
            })
            .await?;
        info!(comment_id = id, post_id = input.post_id, "comment registered");
        Ok(id)
    }

    pub async fn modify(&self, id: i64, input: CommentUpdate) -> Result<()> {
        let mut comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("commentNotFound"))?;

        if let Some(content) = input.content {
            if content.trim().is_empty() {
                return Err(AppError::Validation("invalidCommentContent"));
            }
            comment.content = content;
        }

        comment.modified_at = chrono::Utc::now();
        self.comments.update(&comment).await?;
        info!(comment_id = id, "comment modified");
        Ok(())
    }

    pub async fn remove(&self, id: i64) -> Result<()> {
        if !self.comments.delete(id).await? {
            return Err(AppError::NotFound("commentNotFound"));
        }
        info!(comment_id = id, "comment removed");
        Ok(())
    }
}

fn to_dto(comment: Comment, commenter: &Member) -> CommentDto {
    CommentDto {
        id: comment.id,
        post_id: comment.post_id,
        user_id: commenter.id,
        content: comment.content,
        commenter_email: commenter.email.clone(),
        commenter_nickname: commenter.nickname.clone(),
        commenter_profile_image: commenter.profile_image.clone(),
        created_at: comment.created_at,
        modified_at: comment.modified_at,
    }
}
