//! Local filesystem implementation of `FileStore`.
//!
//! Files are written under a single root directory with generated names
//! (uuid + extension guessed from the content type) and served back through
//! a static URL prefix.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use uuid::Uuid;

use domains::FileStore;

pub struct LocalFileStore {
    root: PathBuf,
    url_prefix: String,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into(),
        }
    }

    fn generate_name(content_type: &str) -> String {
        let ext = mime_guess::get_mime_extensions_str(content_type)
            .and_then(|exts| exts.first())
            .copied()
            .unwrap_or("bin");
        format!("{}.{ext}", Uuid::new_v4())
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, data: Bytes, content_type: &str) -> anyhow::Result<String> {
        let file_name = Self::generate_name(content_type);
        fs::create_dir_all(&self.root).await?;
        fs::write(self.root.join(&file_name), &data).await?;
        Ok(file_name)
    }

    async fn delete(&self, file_name: &str) -> anyhow::Result<()> {
        let path = self.root.join(file_name);
        if fs::try_exists(&path).await? {
            fs::remove_file(path).await?;
        }
        Ok(())
    }

    fn url_for(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.url_prefix.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_and_delete_round_trip() {
        let root = std::env::temp_dir().join(format!("heartboard-test-{}", Uuid::new_v4()));
        let store = LocalFileStore::new(root.clone(), "/static/images");

        let name = store
            .save(Bytes::from_static(b"png bytes"), "image/png")
            .await
            .unwrap();
        assert!(name.ends_with(".png"));
        assert_eq!(store.url_for(&name), format!("/static/images/{name}"));
        assert!(root.join(&name).exists());

        store.delete(&name).await.unwrap();
        assert!(!root.join(&name).exists());
        fs::remove_dir_all(root).await.unwrap();
    }
}
