//! # auth-adapters
//!
//! Credential and session implementations: Argon2 password hashing and
//! JWT access/refresh token issuance.

pub mod password;
pub mod token;

pub use password::Argon2PasswordHasher;
pub use token::JwtTokenIssuer;
