//! Member lifecycle scenarios, mirrored from the member account rules:
//! uniqueness before write, partial modification, password checking.

use domains::{MemberRole, MemberUpdate};
use integration_tests::{member_input, setup, TEST_PASSWORD};

#[tokio::test]
async fn get_returns_registered_member() {
    let app = setup().await;
    let input = member_input();
    let id = app.state.members.register(input.clone()).await.unwrap();

    let dto = app.state.members.get(id).await.unwrap();
    assert_eq!(dto.email, input.email);
    assert_eq!(dto.nickname, input.nickname);
    assert_eq!(dto.role, MemberRole::User);
}

#[tokio::test]
async fn get_of_unknown_id_is_user_not_found() {
    let app = setup().await;
    let err = app.state.members.get(0).await.unwrap_err();
    assert_eq!(err.code(), "userNotFound");
}

#[tokio::test]
async fn register_duplicate_email_fails_without_writing() {
    let app = setup().await;
    let first = member_input();
    app.state.members.register(first.clone()).await.unwrap();

    let mut dup = member_input();
    dup.email = first.email.clone();
    let err = app.state.members.register(dup).await.unwrap_err();
    assert_eq!(err.code(), "emailAlreadyExists");

    // Exactly one member holds the email.
    assert!(app.state.members.exists_by_email(&first.email).await.unwrap());
}

#[tokio::test]
async fn register_duplicate_nickname_fails() {
    let app = setup().await;
    let first = member_input();
    app.state.members.register(first.clone()).await.unwrap();

    let mut dup = member_input();
    dup.nickname = first.nickname.clone();
    let err = app.state.members.register(dup).await.unwrap_err();
    assert_eq!(err.code(), "nicknameAlreadyExists");
}

#[tokio::test]
async fn exists_checks_report_membership() {
    let app = setup().await;
    let input = member_input();
    app.state.members.register(input.clone()).await.unwrap();

    assert!(app.state.members.exists_by_email(&input.email).await.unwrap());
    assert!(app
        .state
        .members
        .exists_by_nickname(&input.nickname)
        .await
        .unwrap());
    assert!(!app.state.members.exists_by_email("nobody@x.com").await.unwrap());
}

#[tokio::test]
async fn check_password_failures_are_ordered() {
    let app = setup().await;
    let id = app.register_member().await;

    let err = app.state.members.check_password(0, "whatever").await.unwrap_err();
    assert_eq!(err.code(), "userNotFound");

    let err = app
        .state
        .members
        .check_password(id, "wrong password")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "invalidPassword");

    app.state
        .members
        .check_password(id, TEST_PASSWORD)
        .await
        .unwrap();
}

#[tokio::test]
async fn modify_applies_partial_updates() {
    let app = setup().await;
    let input = member_input();
    let id = app.state.members.register(input.clone()).await.unwrap();

    app.state
        .members
        .modify(
            id,
            MemberUpdate {
                nickname: Some("Modified User".into()),
                role: Some(MemberRole::Manager),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let dto = app.state.members.get(id).await.unwrap();
    assert_eq!(dto.nickname, "Modified User");
    assert_eq!(dto.role, MemberRole::Manager);
    // Untouched field survives.
    assert_eq!(dto.email, input.email);
}

#[tokio::test]
async fn modify_to_anothers_email_or_nickname_fails() {
    let app = setup().await;
    let first = member_input();
    app.state.members.register(first.clone()).await.unwrap();
    let second_id = app.register_member().await;

    let err = app
        .state
        .members
        .modify(
            second_id,
            MemberUpdate {
                email: Some(first.email.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "emailAlreadyExists");

    let err = app
        .state
        .members
        .modify(
            second_id,
            MemberUpdate {
                nickname: Some(first.nickname.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "nicknameAlreadyExists");
}

#[tokio::test]
async fn modify_keeping_own_unique_fields_is_allowed() {
    let app = setup().await;
    let input = member_input();
    let id = app.state.members.register(input.clone()).await.unwrap();

    // Re-submitting the member's own email must not trip the uniqueness check.
    app.state
        .members
        .modify(
            id,
            MemberUpdate {
                email: Some(input.email.clone()),
                nickname: Some(input.nickname.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn remove_deletes_and_reports_absence() {
    let app = setup().await;
    let id = app.register_member().await;

    app.state.members.remove(id).await.unwrap();
    assert_eq!(app.state.members.get(id).await.unwrap_err().code(), "userNotFound");

    let err = app.state.members.remove(0).await.unwrap_err();
    assert_eq!(err.code(), "userNotFound");
}
