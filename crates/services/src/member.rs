//! Member lifecycle manager: uniqueness invariants (email, nickname),
//! password verification, and profile mutation.

use std::sync::Arc;

use tracing::info;

use domains::{
    AppError, Member, MemberCreate, MemberDto, MemberRepo, MemberRole, MemberUpdate, NewMember,
    PasswordHasher, Result,
};

pub struct MemberService {
    members: Arc<dyn MemberRepo>,
    hasher: Arc<dyn PasswordHasher>,
}

impl MemberService {
    pub fn new(members: Arc<dyn MemberRepo>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { members, hasher }
    }

    /// Registers a new member. Uniqueness is checked before any row is
    /// written; the UNIQUE constraints at the store back the check.
    pub async fn register(&self, input: MemberCreate) -> Result<i64> {
        if self.members.exists_by_email(&input.email).await? {
            return Err(AppError::Validation("emailAlreadyExists"));
        }
        if self.members.exists_by_nickname(&input.nickname).await? {
            return Err(AppError::Validation("nicknameAlreadyExists"));
        }

        let password_hash = self.hasher.hash(&input.password)?;
        let id = self
            .members
            .insert(&NewMember {
                email: input.email,
                password_hash,
                nickname: input.nickname,
                role: input.role.unwrap_or(MemberRole::User),
                profile_image: input.profile_image,
            })
            .await?;

        info!(member_id = id, "member registered");
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<MemberDto> {
        let member = self
            .members
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("userNotFound"))?;
        Ok(to_dto(member))
    }

    /// Partial profile update. Changed email/nickname values are re-validated
    /// against all *other* members.
    pub async fn modify(&self, id: i64, input: MemberUpdate) -> Result<()> {
        let mut member = self
            .members
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("userNotFound"))?;

        if let Some(email) = input.email {
            if email != member.email && self.members.email_taken_by_other(&email, id).await? {
                return Err(AppError::Validation("emailAlreadyExists"));
            }
            member.email = email;
        }
        if let Some(nickname) = input.nickname {
            if nickname != member.nickname
                && self.members.nickname_taken_by_other(&nickname, id).await?
            {
                return Err(AppError::Validation("nicknameAlreadyExists"));
            }
            member.nickname = nickname;
        }
        if let Some(password) = input.password {
            member.password_hash = self.hasher.hash(&password)?;
        }
        if let Some(role) = input.role {
            member.role = role;
        }
        if let Some(profile_image) = input.profile_image {
            member.profile_image = Some(profile_image);
        }

        member.modified_at = chrono::Utc::now();
        self.members.update(&member).await?;
        info!(member_id = id, "member modified");
        Ok(())
    }

    /// Deletes the account; the store cascades to owned posts, comments, and
    /// hearts.
    pub async fn remove(&self, id: i64) -> Result<()> {
        if !self.members.delete(id).await? {
            return Err(AppError::NotFound("userNotFound"));
        }
        info!(member_id = id, "member removed");
        Ok(())
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool> {
        Ok(self.members.exists_by_email(email).await?)
    }

    pub async fn exists_by_nickname(&self, nickname: &str) -> Result<bool> {
        Ok(self.members.exists_by_nickname(nickname).await?)
    }

    /// Succeeds silently when the candidate matches the stored hash.
    pub async fn check_password(&self, id: i64, candidate: &str) -> Result<()> {
        let member = self
            .members
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("userNotFound"))?;
        if !self.hasher.verify(candidate, &member.password_hash) {
            return Err(AppError::Validation("invalidPassword"));
        }
        Ok(())
    }

    /// Login path: same failure discipline as `check_password`, keyed by email.
    pub async fn authenticate(&self, email: &str, candidate: &str) -> Result<MemberDto> {
        let member = self
            .members
            .find_by_email(email)
            .await?
            .ok_or(AppError::NotFound("userNotFound"))?;
        if !self.hasher.verify(candidate, &member.password_hash) {
            return Err(AppError::Validation("invalidPassword"));
        }
        Ok(to_dto(member))
    }
}

fn to_dto(member: Member) -> MemberDto {
    MemberDto {
        id: member.id,
        email: member.email,
        nickname: member.nickname,
        role: member.role,
        profile_image: member.profile_image,
        created_at: member.created_at,
        modified_at: member.modified_at,
    }
}
