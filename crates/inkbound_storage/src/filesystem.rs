//! Filesystem-backed image storage.

use crate::ImageStore;
use inkbound_core::ImageRef;
use inkbound_error::{InkboundResult, StorageError, StorageErrorKind};
use std::path::PathBuf;
use uuid::Uuid;

/// Directory-of-PNGs image store.
///
/// Files are named `scene_{id}_{uuid}.png`, so repeated generation for the
/// same scene never collides across retries or playthroughs. Writes go to
/// a temp file first and are renamed into place for atomicity.
pub struct FileImageStore {
    base_path: PathBuf,
}

impl FileImageStore {
    /// Create a store rooted at `base_path`, creating the directory if
    /// it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> InkboundResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened image store");
        Ok(Self { base_path })
    }

    fn image_path(&self, scene_id: u32, id: Uuid) -> PathBuf {
        self.base_path.join(format!("scene_{scene_id}_{id}.png"))
    }
}

#[async_trait::async_trait]
impl ImageStore for FileImageStore {
    #[tracing::instrument(skip(self, data), fields(scene_id, size = data.len()))]
    async fn store(&self, scene_id: u32, data: &[u8]) -> InkboundResult<ImageRef> {
        let id = Uuid::new_v4();
        let path = self.image_path(scene_id, id);

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(
            scene_id,
            path = %path.display(),
            size = data.len(),
            "Stored scene image"
        );

        Ok(ImageRef::new(id, path, data.len() as u64))
    }

    #[tracing::instrument(skip(self, reference), fields(path = %reference.path().display()))]
    async fn retrieve(&self, reference: &ImageRef) -> InkboundResult<Vec<u8>> {
        let path = reference.path();

        let data = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(
                    path.display().to_string(),
                ))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::debug!(size = data.len(), "Retrieved scene image");
        Ok(data)
    }

    async fn exists(&self, reference: &ImageRef) -> bool {
        tokio::fs::try_exists(reference.path()).await.unwrap_or(false)
    }
}
