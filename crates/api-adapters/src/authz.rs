//! Explicit ownership check: current identity vs. resource owner, passed as
//! two arguments. No ambient session lookup.

use domains::{AppError, Identity};

/// Write operations require the authenticated caller to equal the owner id
/// embedded in the request.
pub fn ensure_owner(current: &Identity, owner_id: i64) -> Result<(), AppError> {
    if current.member_id == owner_id {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::MemberRole;

    #[test]
    fn only_the_owner_passes() {
        let caller = Identity {
            member_id: 1,
            role: MemberRole::User,
        };
        assert!(ensure_owner(&caller, 1).is_ok());
        assert!(matches!(
            ensure_owner(&caller, 2),
            Err(AppError::Forbidden)
        ));
    }
}
