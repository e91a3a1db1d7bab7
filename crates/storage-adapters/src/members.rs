//! SQLite implementation of `MemberRepo`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use domains::{Member, MemberRepo, NewMember};

pub struct SqliteMemberRepo {
    pool: SqlitePool,
}

impl SqliteMemberRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Maps a `members` row (unprefixed column names) to the domain model.
pub(crate) fn member_from_row(row: &SqliteRow) -> anyhow::Result<Member> {
    let role: String = row.try_get("role")?;
    Ok(Member {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        nickname: row.try_get("nickname")?,
        role: role.parse()?,
        profile_image: row.try_get("profile_image")?,
        created_at: row.try_get("created_at")?,
        modified_at: row.try_get("modified_at")?,
    })
}

/// Maps member columns aliased with an `m_` prefix, for joined queries.
pub(crate) fn member_from_joined_row(row: &SqliteRow) -> anyhow::Result<Member> {
    let role: String = row.try_get("m_role")?;
    Ok(Member {
        id: row.try_get("m_id")?,
        email: row.try_get("m_email")?,
        password_hash: row.try_get("m_password_hash")?,
        nickname: row.try_get("m_nickname")?,
        role: role.parse()?,
        profile_image: row.try_get("m_profile_image")?,
        created_at: row.try_get("m_created_at")?,
        modified_at: row.try_get("m_modified_at")?,
    })
}

/// Column list selecting member fields under the `m_` aliases.
pub(crate) const MEMBER_JOIN_COLUMNS: &str = "m.id AS m_id, m.email AS m_email, \
     m.password_hash AS m_password_hash, m.nickname AS m_nickname, m.role AS m_role, \
     m.profile_image AS m_profile_image, m.created_at AS m_created_at, \
     m.modified_at AS m_modified_at";

#[async_trait]
impl MemberRepo for SqliteMemberRepo {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Member>> {
        let row = sqlx::query("SELECT * FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(member_from_row).transpose()
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Member>> {
        let row = sqlx::query("SELECT * FROM members WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(member_from_row).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> anyhow::Result<bool> {
        let row = sqlx::query("SELECT 1 FROM members WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn exists_by_nickname(&self, nickname: &str) -> anyhow::Result<bool> {
        let row = sqlx::query("SELECT 1 FROM members WHERE nickname = ?")
            .bind(nickname)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn email_taken_by_other(&self, email: &str, member_id: i64) -> anyhow::Result<bool> {
        let row = sqlx::query("SELECT 1 FROM members WHERE email = ? AND id != ?")
            .bind(email)
            .bind(member_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn nickname_taken_by_other(
        &self,
        nickname: &str,
        member_id: i64,
    ) -> anyhow::Result<bool> {
        let row = sqlx::query("SELECT 1 FROM members WHERE nickname = ? AND id != ?")
            .bind(nickname)
            .bind(member_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn insert(&self, member: &NewMember) -> anyhow::Result<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO members (email, password_hash, nickname, role, profile_image, \
             created_at, modified_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&member.email)
        .bind(&member.password_hash)
        .bind(&member.nickname)
        .bind(member.role.as_str())
        .bind(&member.profile_image)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(&self, member: &Member) -> anyhow::Result<()> {
        sqlx::query(
            "UPDATE members SET email = ?, password_hash = ?, nickname = ?, role = ?, \
             profile_image = ?, modified_at = ? WHERE id = ?",
        )
        .bind(&member.email)
        .bind(&member.password_hash)
        .bind(&member.nickname)
        .bind(member.role.as_str())
        .bind(&member.profile_image)
        .bind(member.modified_at)
        .bind(member.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
