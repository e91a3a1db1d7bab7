//! Image lifecycle against the real local file store.

use bytes::Bytes;
use domains::ImageType;
use integration_tests::setup;

#[tokio::test]
async fn upload_get_remove_round_trip() {
    let app = setup().await;

    let dto = app
        .state
        .images
        .upload(
            Bytes::from_static(b"fake png bytes"),
            "image/png",
            ImageType::PostImage,
        )
        .await
        .unwrap();
    assert!(dto.file_name.ends_with(".png"));
    assert_eq!(dto.image_type, ImageType::PostImage);
    assert_eq!(dto.url, format!("/static/images/{}", dto.file_name));
    assert!(app.media_root.join(&dto.file_name).exists());

    let fetched = app.state.images.get(dto.id).await.unwrap();
    assert_eq!(fetched.file_name, dto.file_name);

    app.state.images.remove(dto.id).await.unwrap();
    assert_eq!(app.state.images.get(dto.id).await.unwrap_err().code(), "imageNotFound");
    assert!(!app.media_root.join(&dto.file_name).exists());
}

#[tokio::test]
async fn empty_upload_is_rejected() {
    let app = setup().await;
    let err = app
        .state
        .images
        .upload(Bytes::new(), "image/png", ImageType::ProfileImage)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "invalidImageFile");
}
