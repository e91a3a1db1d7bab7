//! # configs
//!
//! Layered configuration: optional `config/default.toml`, then environment
//! variables prefixed `HEARTBOARD__` (e.g. `HEARTBOARD__SERVER__PORT=9000`).
//! `.env` files are honored via dotenvy. The JWT secret is wrapped in
//! `SecretString` so it never appears in debug output.

use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: SecretString,
    pub access_ttl_secs: u64,
    pub refresh_ttl_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct MediaConfig {
    /// Directory image bytes are written to.
    pub root_dir: String,
    /// URL prefix the stored files are served under.
    pub url_prefix: String,
}

pub fn load() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();

    let config = Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("database.url", "sqlite://heartboard.db")?
        .set_default("auth.jwt_secret", "change-me-in-production")?
        .set_default("auth.access_ttl_secs", 3600)?
        .set_default("auth.refresh_ttl_secs", 1209600)?
        .set_default("media.root_dir", "./data/images")?
        .set_default("media.url_prefix", "/static/images")?
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::with_prefix("HEARTBOARD").separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}
