//! Argon2 implementation of the `PasswordHasher` port.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};

pub struct Argon2PasswordHasher;

impl domains::PasswordHasher for Argon2PasswordHasher {
    /// Hashes with a fresh random salt; the result is a self-describing PHC
    /// string.
    fn hash(&self, raw: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;
        Ok(hash.to_string())
    }

    /// Verifies a candidate against a stored PHC string. Malformed hashes
    /// verify as false rather than erroring.
    fn verify(&self, raw: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(raw.as_bytes(), &parsed)
            .is_ok()
    }
}
