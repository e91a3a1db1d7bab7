//! Post lifecycle manager: CRUD with required-field validation, view-count
//! mutation, and writer-identity aggregation.

use std::sync::Arc;

use tracing::info;

use domains::{
    AppError, Member, NewPost, Post, PostCreate, PostDto, PostRepo, PostUpdate, Result,
};

pub struct PostService {
    posts: Arc<dyn PostRepo>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepo>) -> Self {
        Self { posts }
    }

    /// Returns the post with its writer identity joined in.
    pub async fn get(&self, id: i64) -> Result<PostDto> {
        let (post, writer) = self
            .posts
            .find_with_writer(id)
            .await?
            .ok_or(AppError::NotFound("postNotFound"))?;
        Ok(to_dto(post, &writer))
    }

    /// Adds exactly 1 to the view count. The increment is atomic at the
    /// store, so concurrent reads never lose updates.
    pub async fn increment_view_count(&self, id: i64) -> Result<()> {
        if !self.posts.increment_view_count(id).await? {
            return Err(AppError::NotFound("postNotFound"));
        }
        Ok(())
    }

    /// All posts with writer identity attached, store order.
    pub async fn get_list(&self) -> Result<Vec<PostDto>> {
        let rows = self.posts.list_with_writer().await?;
        Ok(rows
            .into_iter()
            .map(|(post, writer)| to_dto(post, &writer))
            .collect())
    }

    /// Persists a new post with view count 0. Title and content are required.
    pub async fn register(&self, input: PostCreate) -> Result<i64> {
        let title = required(input.title, "invalidPostTitle")?;
        let content = required(input.content, "invalidPostContent")?;

        let id = self
            .posts
            .insert(&NewPost {
                title,
                content,
                post_image: input.post_image,
                writer_id: input.writer_id,
            })
            .await?;
        info!(post_id = id, writer_id = input.writer_id, "post registered");
        Ok(id)
    }

    /// Partial update: each supplied field overwrites, absent fields are left
    /// unchanged.
    pub async fn modify(&self, id: i64, input: PostUpdate) -> Result<()> {
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("postNotFound"))?;

        if let Some(title) = input.title {
            post.title = title;
        }
        if let Some(content) = input.content {
            post.content = content;
        }
        if let Some(post_image) = input.post_image {
            if !post_image.is_empty() {
                post.post_image = Some(post_image);
            }
        }

        post.modified_at = chrono::Utc::now();
        self.posts.update(&post).await?;
        info!(post_id = id, "post modified");
        Ok(())
    }

    /// Deletes the post; the store cascades to its comments and hearts.
    pub async fn remove(&self, id: i64) -> Result<()> {
        if !self.posts.delete(id).await? {
            return Err(AppError::NotFound("postNotFound"));
        }
        info!(post_id = id, "post removed");
        Ok(())
    }
}

/// Missing or blank required fields fail with the given code.
fn required(value: Option<String>, code: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(code)),
    }
}

fn to_dto(post: Post, writer: &Member) -> PostDto {
    PostDto {
        id: post.id,
        title: post.title,
        content: post.content,
        post_image: post.post_image,
        view_count: post.view_count,
        writer_id: writer.id,
        writer_email: writer.email.clone(),
        writer_nickname: writer.nickname.clone(),
        created_at: post.created_at,
        modified_at: post.modified_at,
    }
}
