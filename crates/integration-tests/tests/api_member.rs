//! HTTP-level member endpoints. Roles are not part of the wire surface:
//! registration and profile edits can never assign one.

use axum::http::{Method, StatusCode};
use serde_json::json;

use integration_tests::{member_input, message_of, send, setup, TEST_PASSWORD};

#[tokio::test]
async fn register_ignores_a_caller_supplied_role() {
    let app = setup().await;
    let input = member_input();

    let (status, body) = send(
        app.router(),
        Method::POST,
        "/api/members/",
        None,
        Some(json!({
            "email": input.email,
            "password": TEST_PASSWORD,
            "nickname": input.nickname,
            "role": "ADMIN",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(message_of(&body), "registerSuccess");
    let id = body["data"]["id"].as_i64().expect("member id");

    let uri = format!("/api/members/{id}");
    let (status, body) = send(app.router(), Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"].as_str(), Some("USER"));
}

#[tokio::test]
async fn modify_cannot_escalate_the_role() {
    let app = setup().await;
    let id = app.register_member().await;
    let token = app.token_for(id);
    let uri = format!("/api/members/{id}");

    let (status, body) = send(
        app.router(),
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "nickname": "still a user", "role": "ADMIN" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message_of(&body), "modifySuccess");

    let (_, body) = send(app.router(), Method::GET, &uri, None, None).await;
    assert_eq!(body["data"]["role"].as_str(), Some("USER"));
    assert_eq!(body["data"]["nickname"].as_str(), Some("still a user"));
}

#[tokio::test]
async fn modify_and_remove_require_the_account_owner() {
    let app = setup().await;
    let id = app.register_member().await;
    let other_id = app.register_member().await;
    let other_token = app.token_for(other_id);
    let uri = format!("/api/members/{id}");

    let (status, _) = send(
        app.router(),
        Method::PUT,
        &uri,
        None,
        Some(json!({ "nickname": "hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        app.router(),
        Method::PUT,
        &uri,
        Some(&other_token),
        Some(json!({ "nickname": "hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(message_of(&body), "forbidden");

    let (status, _) = send(app.router(), Method::DELETE, &uri, Some(&other_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(app.state.members.get(id).await.is_ok());
}
