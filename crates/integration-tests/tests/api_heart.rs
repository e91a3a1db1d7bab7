//! HTTP-level heart endpoints: pair-keyed item routes and the duplicate
//! register rejection.

use axum::http::{Method, StatusCode};
use serde_json::json;

use integration_tests::{message_of, send, setup};

#[tokio::test]
async fn register_get_and_remove_by_pair() {
    let app = setup().await;
    let writer_id = app.register_member().await;
    let post_id = app.register_post(writer_id).await;
    let user_id = app.register_member().await;
    let token = app.token_for(user_id);
    let body = json!({ "postId": post_id, "userId": user_id });

    let (status, out) = send(
        app.router(),
        Method::POST,
        "/api/hearts/",
        Some(&token),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(message_of(&out), "registerSuccess");

    let uri = format!("/api/hearts/{post_id}/{user_id}");
    let (status, out) = send(app.router(), Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message_of(&out), "success");
    assert_eq!(out["data"]["postId"].as_i64(), Some(post_id));
    assert_eq!(out["data"]["userId"].as_i64(), Some(user_id));

    let (status, out) = send(app.router(), Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message_of(&out), "removeSuccess");

    let (status, out) = send(app.router(), Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message_of(&out), "heartNotFound");
}

#[tokio::test]
async fn duplicate_register_is_rejected_with_its_code() {
    let app = setup().await;
    let writer_id = app.register_member().await;
    let post_id = app.register_post(writer_id).await;
    let token = app.token_for(writer_id);
    let body = json!({ "postId": post_id, "userId": writer_id });

    let (status, _) = send(
        app.router(),
        Method::POST,
        "/api/hearts/",
        Some(&token),
        Some(body.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, out) = send(
        app.router(),
        Method::POST,
        "/api/hearts/",
        Some(&token),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&out), "heartAlreadyExists");
}

#[tokio::test]
async fn register_requires_matching_caller() {
    let app = setup().await;
    let writer_id = app.register_member().await;
    let post_id = app.register_post(writer_id).await;
    let user_id = app.register_member().await;
    let body = json!({ "postId": post_id, "userId": user_id });

    let (status, _) = send(app.router(), Method::POST, "/api/hearts/", None, Some(body.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let writer_token = app.token_for(writer_id);
    let (status, out) = send(
        app.router(),
        Method::POST,
        "/api/hearts/",
        Some(&writer_token),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(message_of(&out), "forbidden");
}
