//! Image lifecycle manager: stores uploaded bytes under a generated name and
//! keeps a metadata row per file.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use domains::{AppError, FileStore, Image, ImageDto, ImageRepo, ImageType, NewImage, Result};

pub struct ImageService {
    images: Arc<dyn ImageRepo>,
    files: Arc<dyn FileStore>,
}

impl ImageService {
    pub fn new(images: Arc<dyn ImageRepo>, files: Arc<dyn FileStore>) -> Self {
        Self { images, files }
    }

    /// Saves the bytes, records the metadata row, and returns the projection.
    pub async fn upload(
        &self,
        data: Bytes,
        content_type: &str,
        image_type: ImageType,
    ) -> Result<ImageDto> {
        if data.is_empty() {
            return Err(AppError::Validation("invalidImageFile"));
        }

        let file_name = self.files.save(data, content_type).await?;
        let id = self
            .images
            .insert(&NewImage {
                file_name: file_name.clone(),
                image_type,
            })
            .await?;

        info!(image_id = id, file_name = %file_name, "image uploaded");
        self.get(id).await
    }

    pub async fn get(&self, id: i64) -> Result<ImageDto> {
        let image = self
            .images
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("imageNotFound"))?;
        Ok(self.to_dto(image))
    }

    /// Removes the row and the stored file.
    pub async fn remove(&self, id: i64) -> Result<()> {
        let image = self
            .images
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("imageNotFound"))?;
        self.images.delete(id).await?;
        self.files.delete(&image.file_name).await?;
        info!(image_id = id, "image removed");
        Ok(())
    }

    fn to_dto(&self, image: Image) -> ImageDto {
        ImageDto {
            id: image.id,
            url: self.files.url_for(&image.file_name),
            file_name: image.file_name,
            image_type: image.image_type,
            created_at: image.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::{MockFileStore, MockImageRepo};

    #[tokio::test]
    async fn upload_rejects_empty_payload() {
        let mut files = MockFileStore::new();
        files.expect_save().never();

        let err = ImageService::new(Arc::new(MockImageRepo::new()), Arc::new(files))
            .upload(Bytes::new(), "image/png", ImageType::ProfileImage)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "invalidImageFile");
    }

    #[tokio::test]
    async fn remove_deletes_row_and_file() {
        let mut images = MockImageRepo::new();
        images.expect_find_by_id().returning(|id| {
            Ok(Some(Image {
                id,
                file_name: "abc.png".into(),
                image_type: ImageType::PostImage,
                created_at: chrono::Utc::now(),
            }))
        });
        images.expect_delete().returning(|_| Ok(true));
        let mut files = MockFileStore::new();
        files
            .expect_delete()
            .withf(|name| name == "abc.png")
            .returning(|_| Ok(()));

        ImageService::new(Arc::new(images), Arc::new(files))
            .remove(1)
            .await
            .unwrap();
    }
}
