//! Comment lifecycle scenarios, including the denormalized commenter
//! identity in projections.

use domains::{CommentCreate, CommentUpdate};
use integration_tests::setup;

fn create(post_id: i64, user_id: i64, content: &str) -> CommentCreate {
    CommentCreate {
        post_id,
        user_id,
        content: Some(content.into()),
    }
}

#[tokio::test]
async fn register_then_get_denormalizes_commenter() {
    let app = setup().await;
    let writer_id = app.register_member().await;
    let commenter_id = app.register_member().await;
    let commenter = app.state.members.get(commenter_id).await.unwrap();
    let post_id = app.register_post(writer_id).await;

    let comment_id = app
        .state
        .comments
        .register(create(post_id, commenter_id, "first!"))
        .await
        .unwrap();

    let dto = app.state.comments.get(comment_id).await.unwrap();
    assert_eq!(dto.post_id, post_id);
    assert_eq!(dto.user_id, commenter_id);
    assert_eq!(dto.content, "first!");
    assert_eq!(dto.commenter_email, commenter.email);
    assert_eq!(dto.commenter_nickname, commenter.nickname);
    assert_eq!(dto.commenter_profile_image, commenter.profile_image);
}

#[tokio::test]
async fn register_requires_content_and_an_existing_post() {
    let app = setup().await;
    let member_id = app.register_member().await;
    let post_id = app.register_post(member_id).await;

    let err = app
        .state
        .comments
        .register(CommentCreate {
            post_id,
            user_id: member_id,
            content: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "invalidCommentContent");

    let err = app
        .state
        .comments
        .register(create(0, member_id, "hello"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "postNotFound");
}

#[tokio::test]
async fn comments_by_post_are_scoped_to_that_post() {
    let app = setup().await;
    let member_id = app.register_member().await;
    let post_a = app.register_post(member_id).await;
    let post_b = app.register_post(member_id).await;

    for i in 0..3 {
        app.state
            .comments
            .register(create(post_a, member_id, &format!("comment {i}")))
            .await
            .unwrap();
    }
    app.state
        .comments
        .register(create(post_b, member_id, "elsewhere"))
        .await
        .unwrap();

    let comments = app.state.comments.get_comments_by_post(post_a).await.unwrap();
    assert_eq!(comments.len(), 3);
    assert!(comments.iter().all(|c| c.post_id == post_a));
}

#[tokio::test]
async fn modify_updates_content() {
    let app = setup().await;
    let member_id = app.register_member().await;
    let post_id = app.register_post(member_id).await;
    let comment_id = app
        .state
        .comments
        .register(create(post_id, member_id, "before"))
        .await
        .unwrap();

    app.state
        .comments
        .modify(
            comment_id,
            CommentUpdate {
                content: Some("after".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(app.state.comments.get(comment_id).await.unwrap().content, "after");
}

#[tokio::test]
async fn missing_comment_operations_are_not_found() {
    let app = setup().await;
    assert_eq!(app.state.comments.get(0).await.unwrap_err().code(), "commentNotFound");
    assert_eq!(
        app.state
            .comments
            .modify(0, CommentUpdate { content: Some("x".into()) })
            .await
            .unwrap_err()
            .code(),
        "commentNotFound"
    );
    assert_eq!(app.state.comments.remove(0).await.unwrap_err().code(), "commentNotFound");
}

#[tokio::test]
async fn remove_deletes_a_single_comment() {
    let app = setup().await;
    let member_id = app.register_member().await;
    let post_id = app.register_post(member_id).await;
    let keep = app
        .state
        .comments
        .register(create(post_id, member_id, "keep"))
        .await
        .unwrap();
    let gone = app
        .state
        .comments
        .register(create(post_id, member_id, "gone"))
        .await
        .unwrap();

    app.state.comments.remove(gone).await.unwrap();
    assert!(app.state.comments.get(keep).await.is_ok());
    assert_eq!(app.state.comments.get(gone).await.unwrap_err().code(), "commentNotFound");
}
