//! SQLite implementation of `ImageRepo`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use domains::{Image, ImageRepo, NewImage};

pub struct SqliteImageRepo {
    pool: SqlitePool,
}

impl SqliteImageRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn image_from_row(row: &SqliteRow) -> anyhow::Result<Image> {
    let image_type: String = row.try_get("image_type")?;
    Ok(Image {
        id: row.try_get("id")?,
        file_name: row.try_get("file_name")?,
        image_type: image_type.parse()?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl ImageRepo for SqliteImageRepo {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Image>> {
        let row = sqlx::query("SELECT * FROM images WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(image_from_row).transpose()
    }

    async fn insert(&self, image: &NewImage) -> anyhow::Result<i64> {
        let result =
            sqlx::query("INSERT INTO images (file_name, image_type, created_at) VALUES (?, ?, ?)")
                .bind(&image.file_name)
                .bind(image.image_type.as_str())
                .bind(Utc::now())
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM images WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
