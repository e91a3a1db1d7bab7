//! JWT implementation of the `TokenIssuer` port.
//!
//! Both tokens of a pair are HS256-signed with the same secret and carry a
//! `kind` claim, so an access token can never be replayed as a refresh token
//! or vice versa.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use domains::{Identity, MemberRole, TokenIssuer, Tokens};

const KIND_ACCESS: &str = "access";
const KIND_REFRESH: &str = "refresh";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Member id.
    sub: i64,
    role: String,
    kind: String,
    iat: i64,
    exp: i64,
}

pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtTokenIssuer {
    pub fn new(secret: &[u8], access_ttl_secs: u64, refresh_ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            access_ttl: Duration::seconds(access_ttl_secs as i64),
            refresh_ttl: Duration::seconds(refresh_ttl_secs as i64),
        }
    }

    fn sign(&self, member_id: i64, role: MemberRole, kind: &str, ttl: Duration) -> anyhow::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: member_id,
            role: role.as_str().to_string(),
            kind: kind.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    fn verify(&self, token: &str, kind: &str) -> anyhow::Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        if data.claims.kind != kind {
            anyhow::bail!("wrong token kind: expected {kind}");
        }
        Ok(data.claims)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, member_id: i64, role: MemberRole) -> anyhow::Result<Tokens> {
        Ok(Tokens {
            access_token: self.sign(member_id, role, KIND_ACCESS, self.access_ttl)?,
            refresh_token: self.sign(member_id, role, KIND_REFRESH, self.refresh_ttl)?,
        })
    }

    fn verify_access(&self, token: &str) -> anyhow::Result<Identity> {
        let claims = self.verify(token, KIND_ACCESS)?;
        Ok(Identity {
            member_id: claims.sub,
            role: claims.role.parse()?,
        })
    }

    fn verify_refresh(&self, token: &str) -> anyhow::Result<i64> {
        Ok(self.verify(token, KIND_REFRESH)?.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> JwtTokenIssuer {
        JwtTokenIssuer::new(b"test-secret", 3600, 86400)
    }

    #[test]
    fn issued_access_token_verifies_back_to_the_identity() {
        let tokens = issuer().issue(42, MemberRole::Manager).unwrap();
        let identity = issuer().verify_access(&tokens.access_token).unwrap();
        assert_eq!(identity.member_id, 42);
        assert_eq!(identity.role, MemberRole::Manager);
    }

    #[test]
    fn token_kinds_are_not_interchangeable() {
        let tokens = issuer().issue(1, MemberRole::User).unwrap();
        assert!(issuer().verify_access(&tokens.refresh_token).is_err());
        assert!(issuer().verify_refresh(&tokens.access_token).is_err());
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let tokens = issuer().issue(1, MemberRole::User).unwrap();
        let other = JwtTokenIssuer::new(b"other-secret", 3600, 86400);
        assert!(other.verify_access(&tokens.access_token).is_err());
    }
}
