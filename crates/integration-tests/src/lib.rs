//! Shared fixtures for the integration test targets: a fully wired
//! `AppState` over an in-memory SQLite database, faker-style data helpers,
//! and a small `oneshot` HTTP client.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use fake::faker::internet::en::FreeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use api_adapters::{router, AppState};
use auth_adapters::{Argon2PasswordHasher, JwtTokenIssuer};
use domains::{MemberCreate, MemberRole, PostCreate};
use services::{CommentService, HeartService, ImageService, MemberService, PostService};
use storage_adapters::{
    db, LocalFileStore, SqliteCommentRepo, SqliteHeartRepo, SqliteImageRepo, SqliteMemberRepo,
    SqlitePostRepo,
};

static SEQ: AtomicU64 = AtomicU64::new(0);

pub const TEST_PASSWORD: &str = "correct horse battery staple";

pub struct TestApp {
    pub state: AppState,
    pub media_root: PathBuf,
}

/// Wires the full stack over a fresh in-memory database.
pub async fn setup() -> TestApp {
    let pool = db::connect_in_memory().await.expect("in-memory pool");

    let member_repo = Arc::new(SqliteMemberRepo::new(pool.clone()));
    let post_repo = Arc::new(SqlitePostRepo::new(pool.clone()));
    let comment_repo = Arc::new(SqliteCommentRepo::new(pool.clone()));
    let heart_repo = Arc::new(SqliteHeartRepo::new(pool.clone()));
    let image_repo = Arc::new(SqliteImageRepo::new(pool));

    let media_root = std::env::temp_dir().join(format!("heartboard-it-{}", Uuid::new_v4()));
    let file_store = Arc::new(LocalFileStore::new(media_root.clone(), "/static/images"));
    let hasher = Arc::new(Argon2PasswordHasher);
    let tokens = Arc::new(JwtTokenIssuer::new(b"integration-test-secret", 3600, 86400));

    let state = AppState {
        members: Arc::new(MemberService::new(member_repo, hasher)),
        posts: Arc::new(PostService::new(post_repo.clone())),
        comments: Arc::new(CommentService::new(comment_repo, post_repo.clone())),
        hearts: Arc::new(HeartService::new(heart_repo, post_repo)),
        images: Arc::new(ImageService::new(image_repo, file_store)),
        tokens,
    };

    TestApp { state, media_root }
}

impl TestApp {
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Registers a member with unique faker data, returning its id.
    pub async fn register_member(&self) -> i64 {
        self.state
            .members
            .register(member_input())
            .await
            .expect("register member")
    }

    /// Registers a post under the given writer, returning its id.
    pub async fn register_post(&self, writer_id: i64) -> i64 {
        self.state
            .posts
            .register(PostCreate {
                title: Some(Sentence(1..3).fake()),
                content: Some(Sentence(3..8).fake()),
                post_image: None,
                writer_id,
            })
            .await
            .expect("register post")
    }

    /// Access token for an existing member id.
    pub fn token_for(&self, member_id: i64) -> String {
        self.state
            .tokens
            .issue(member_id, MemberRole::User)
            .expect("issue tokens")
            .access_token
    }
}

/// Unique registration input; the sequence number keeps email/nickname
/// collision-free within a test.
pub fn member_input() -> MemberCreate {
    let n = SEQ.fetch_add(1, Ordering::Relaxed);
    let email: String = FreeEmail().fake();
    let name: String = Name().fake();
    MemberCreate {
        email: format!("{n}-{email}"),
        password: TEST_PASSWORD.into(),
        nickname: format!("{name} {n}"),
        role: None,
        profile_image: None,
    }
}

/// Sends one request through the router and returns status + parsed body.
pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = router.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Shorthand for the common "message" field assertion.
pub fn message_of(body: &Value) -> &str {
    body.get("message").and_then(Value::as_str).unwrap_or("")
}

pub fn comment_body(post_id: i64, user_id: i64, content: &str) -> Value {
    json!({ "postId": post_id, "userId": user_id, "content": content })
}
