//! Route table.
//!
//! Paths mirror the upstream API, trailing slashes included: collection
//! endpoints end in `/`, item endpoints take the id as a path segment.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, comments, hearts, images, members, posts};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/members/", post(members::register))
        .route(
            "/api/members/{id}",
            get(members::get)
                .put(members::modify)
                .delete(members::remove),
        )
        .route("/api/posts/", get(posts::list).post(posts::register))
        .route(
            "/api/posts/{id}",
            get(posts::get).put(posts::modify).delete(posts::remove),
        )
        .route("/api/posts/{id}/comments", get(posts::comments))
        .route("/api/posts/{id}/hearts", get(posts::hearts))
        .route("/api/comments/", post(comments::register))
        .route(
            "/api/comments/{id}",
            get(comments::get)
                .put(comments::modify)
                .delete(comments::remove),
        )
        .route("/api/hearts/", post(hearts::register))
        .route(
            "/api/hearts/{post_id}/{user_id}",
            get(hearts::get).delete(hearts::remove),
        )
        .route("/api/images/", post(images::upload))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
