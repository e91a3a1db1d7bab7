//! SQLite implementation of `CommentRepo`. Read paths join the commenter row
//! for the denormalized projection.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use domains::{Comment, CommentRepo, Member, NewComment};

use crate::members::{member_from_joined_row, MEMBER_JOIN_COLUMNS};

pub struct SqliteCommentRepo {
    pool: SqlitePool,
}

impl SqliteCommentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn comment_from_row(row: &SqliteRow) -> anyhow::Result<Comment> {
    Ok(Comment {
        id: row.try_get("id")?,
        post_id: row.try_get("post_id")?,
        commenter_id: row.try_get("commenter_id")?,
        content: row.try_get("content")?,
        created_at: row.try_get("created_at")?,
        modified_at: row.try_get("modified_at")?,
    })
}

fn comment_with_commenter(row: &SqliteRow) -> anyhow::Result<(Comment, Member)> {
    Ok((comment_from_row(row)?, member_from_joined_row(row)?))
}

#[async_trait]
impl CommentRepo for SqliteCommentRepo {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Comment>> {
        let row = sqlx::query("SELECT * FROM comments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(comment_from_row).transpose()
    }

    async fn find_with_commenter(&self, id: i64) -> anyhow::Result<Option<(Comment, Member)>> {
        let sql = format!(
            "SELECT c.*, {MEMBER_JOIN_COLUMNS} FROM comments c \
             JOIN members m ON m.id = c.commenter_id WHERE c.id = ?"
        );
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(comment_with_commenter).transpose()
    }

    async fn list_by_post_with_commenter(
        &self,
        post_id: i64,
    ) -> anyhow::Result<Vec<(Comment, Member)>> {
        let sql = format!(
            "SELECT c.*, {MEMBER_JOIN_COLUMNS} FROM comments c \
             JOIN members m ON m.id = c.commenter_id WHERE c.post_id = ? ORDER BY c.id"
        );
        let rows = sqlx::query(&sql)
            .bind(post_id)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(comment_with_commenter).collect()
    }

    async fn insert(&self, comment: &NewComment) -> anyhow::Result<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO comments (post_id, commenter_id, content, created_at, modified_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(comment.post_id)
        .bind(comment.commenter_id)
        .bind(&comment.content)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(&self, comment: &Comment) -> anyhow::Result<()> {
        sqlx::query("UPDATE comments SET content = ?, modified_at = ? WHERE id = ?")
            .bind(&comment.content)
            .bind(comment.modified_at)
            .bind(comment.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
