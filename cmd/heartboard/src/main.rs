//! # heartboard
//!
//! The entry point: loads configuration, opens the store, assembles the
//! lifecycle managers behind the HTTP router, and serves.

use std::sync::Arc;

use secrecy::ExposeSecret;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use api_adapters::{router, AppState};
use auth_adapters::{Argon2PasswordHasher, JwtTokenIssuer};
use services::{CommentService, HeartService, ImageService, MemberService, PostService};
use storage_adapters::{
    db, LocalFileStore, SqliteCommentRepo, SqliteHeartRepo, SqliteImageRepo, SqliteMemberRepo,
    SqlitePostRepo,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = configs::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = db::connect(&config.database.url).await?;

    let member_repo = Arc::new(SqliteMemberRepo::new(pool.clone()));
    let post_repo = Arc::new(SqlitePostRepo::new(pool.clone()));
    let comment_repo = Arc::new(SqliteCommentRepo::new(pool.clone()));
    let heart_repo = Arc::new(SqliteHeartRepo::new(pool.clone()));
    let image_repo = Arc::new(SqliteImageRepo::new(pool.clone()));
    let file_store = Arc::new(LocalFileStore::new(
        config.media.root_dir.clone(),
        config.media.url_prefix.clone(),
    ));
    let hasher = Arc::new(Argon2PasswordHasher);
    let tokens = Arc::new(JwtTokenIssuer::new(
        config.auth.jwt_secret.expose_secret().as_bytes(),
        config.auth.access_ttl_secs,
        config.auth.refresh_ttl_secs,
    ));

    let state = AppState {
        members: Arc::new(MemberService::new(member_repo, hasher)),
        posts: Arc::new(PostService::new(post_repo.clone())),
        comments: Arc::new(CommentService::new(comment_repo, post_repo.clone())),
        hearts: Arc::new(HeartService::new(heart_repo, post_repo)),
        images: Arc::new(ImageService::new(image_repo, file_store)),
        tokens,
    };

    let app = router(state).nest_service(
        config.media.url_prefix.as_str(),
        ServeDir::new(&config.media.root_dir),
    );

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "heartboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
