//! SQLite implementation of `PostRepo`. Read paths join the writer row so
//! the service can project writer identity without a second query.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use domains::{Member, NewPost, Post, PostRepo};

use crate::members::{member_from_joined_row, MEMBER_JOIN_COLUMNS};

pub struct SqlitePostRepo {
    pool: SqlitePool,
}

impl SqlitePostRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn post_from_row(row: &SqliteRow) -> anyhow::Result<Post> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        post_image: row.try_get("post_image")?,
        view_count: row.try_get("view_count")?,
        writer_id: row.try_get("writer_id")?,
        created_at: row.try_get("created_at")?,
        modified_at: row.try_get("modified_at")?,
    })
}

fn post_with_writer(row: &SqliteRow) -> anyhow::Result<(Post, Member)> {
    Ok((post_from_row(row)?, member_from_joined_row(row)?))
}

#[async_trait]
impl PostRepo for SqlitePostRepo {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query("SELECT * FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(post_from_row).transpose()
    }

    async fn find_with_writer(&self, id: i64) -> anyhow::Result<Option<(Post, Member)>> {
        let sql = format!(
            "SELECT p.*, {MEMBER_JOIN_COLUMNS} FROM posts p \
             JOIN members m ON m.id = p.writer_id WHERE p.id = ?"
        );
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(post_with_writer).transpose()
    }

    async fn list_with_writer(&self) -> anyhow::Result<Vec<(Post, Member)>> {
        let sql = format!(
            "SELECT p.*, {MEMBER_JOIN_COLUMNS} FROM posts p \
             JOIN members m ON m.id = p.writer_id ORDER BY p.id"
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(post_with_writer).collect()
    }

    async fn exists(&self, id: i64) -> anyhow::Result<bool> {
        let row = sqlx::query("SELECT 1 FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn insert(&self, post: &NewPost) -> anyhow::Result<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO posts (title, content, post_image, view_count, writer_id, \
             created_at, modified_at) VALUES (?, ?, ?, 0, ?, ?, ?)",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.post_image)
        .bind(post.writer_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(&self, post: &Post) -> anyhow::Result<()> {
        sqlx::query(
            "UPDATE posts SET title = ?, content = ?, post_image = ?, modified_at = ? \
             WHERE id = ?",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.post_image)
        .bind(post.modified_at)
        .bind(post.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn increment_view_count(&self, id: i64) -> anyhow::Result<bool> {
        // Single-statement increment: no read-modify-write race.
        let result = sqlx::query("UPDATE posts SET view_count = view_count + 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
