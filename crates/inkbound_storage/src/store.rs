//! The image store trait.

use async_trait::async_trait;
use inkbound_core::ImageRef;
use inkbound_error::InkboundResult;

/// Persistence backend for generated scene illustrations.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store image bytes for a scene, returning an opaque reference.
    async fn store(&self, scene_id: u32, data: &[u8]) -> InkboundResult<ImageRef>;

    /// Read back the bytes behind a reference.
    async fn retrieve(&self, reference: &ImageRef) -> InkboundResult<Vec<u8>>;

    /// Whether the referenced image is still present.
    async fn exists(&self, reference: &ImageRef) -> bool;
}
