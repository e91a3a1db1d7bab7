//! SQLite implementation of `HeartRepo`. The UNIQUE(post_id, member_id)
//! constraint makes the per-pair invariant hold even if two registrations
//! race past the service's existence check.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use domains::{Heart, HeartRepo, NewHeart};

pub struct SqliteHeartRepo {
    pool: SqlitePool,
}

impl SqliteHeartRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn heart_from_row(row: &SqliteRow) -> anyhow::Result<Heart> {
    Ok(Heart {
        id: row.try_get("id")?,
        post_id: row.try_get("post_id")?,
        member_id: row.try_get("member_id")?,
        reg_date: row.try_get("reg_date")?,
    })
}

#[async_trait]
impl HeartRepo for SqliteHeartRepo {
    async fn find_by_post_and_member(
        &self,
        post_id: i64,
        member_id: i64,
    ) -> anyhow::Result<Option<Heart>> {
        let row = sqlx::query("SELECT * FROM hearts WHERE post_id = ? AND member_id = ?")
            .bind(post_id)
            .bind(member_id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(heart_from_row).transpose()
    }

    async fn list_by_post(&self, post_id: i64) -> anyhow::Result<Vec<Heart>> {
        let rows = sqlx::query("SELECT * FROM hearts WHERE post_id = ? ORDER BY id")
            .bind(post_id)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(heart_from_row).collect()
    }

    async fn insert(&self, heart: &NewHeart) -> anyhow::Result<i64> {
        let result = sqlx::query("INSERT INTO hearts (post_id, member_id, reg_date) VALUES (?, ?, ?)")
            .bind(heart.post_id)
            .bind(heart.member_id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn delete_by_post_and_member(
        &self,
        post_id: i64,
        member_id: i64,
    ) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM hearts WHERE post_id = ? AND member_id = ?")
            .bind(post_id)
            .bind(member_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;
    use crate::members::SqliteMemberRepo;
    use crate::posts::SqlitePostRepo;
    use domains::{MemberRepo, MemberRole, NewMember, NewPost, PostRepo};

    async fn seed_post(pool: &SqlitePool) -> (i64, i64) {
        let member_id = SqliteMemberRepo::new(pool.clone())
            .insert(&NewMember {
                email: "m@x.com".into(),
                password_hash: "hash".into(),
                nickname: "M".into(),
                role: MemberRole::User,
                profile_image: None,
            })
            .await
            .unwrap();
        let post_id = SqlitePostRepo::new(pool.clone())
            .insert(&NewPost {
                title: "T".into(),
                content: "C".into(),
                post_image: None,
                writer_id: member_id,
            })
            .await
            .unwrap();
        (post_id, member_id)
    }

    #[tokio::test]
    async fn unique_pair_is_enforced_by_the_store() {
        let pool = connect_in_memory().await.unwrap();
        let (post_id, member_id) = seed_post(&pool).await;
        let repo = SqliteHeartRepo::new(pool);

        repo.insert(&NewHeart { post_id, member_id }).await.unwrap();
        let dup = repo.insert(&NewHeart { post_id, member_id }).await;
        assert!(dup.is_err());
        assert_eq!(repo.list_by_post(post_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleting_the_post_cascades_to_hearts() {
        let pool = connect_in_memory().await.unwrap();
        let (post_id, member_id) = seed_post(&pool).await;
        let posts = SqlitePostRepo::new(pool.clone());
        let repo = SqliteHeartRepo::new(pool);

        repo.insert(&NewHeart { post_id, member_id }).await.unwrap();
        assert!(posts.delete(post_id).await.unwrap());
        assert!(repo.list_by_post(post_id).await.unwrap().is_empty());
    }
}
