//! Opaque handle to a stored illustration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Reference to a generated illustration held by an image store.
///
/// The core never inspects image bytes; scenes carry this handle and the
/// storage layer resolves it back to data on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageRef {
    /// Unique identifier for this stored image
    id: Uuid,
    /// Backend-specific location of the image file
    path: PathBuf,
    /// Size of the stored payload in bytes
    size_bytes: u64,
}

impl ImageRef {
    /// Create a reference to a stored image.
    pub fn new(id: Uuid, path: PathBuf, size_bytes: u64) -> Self {
        Self {
            id,
            path,
            size_bytes,
        }
    }
}
