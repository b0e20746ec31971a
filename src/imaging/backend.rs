//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the operations the icon pipeline needs:
//! open (decode once), identify (dimensions without keeping the pixels), and
//! resize (resample a decoded image and encode it to disk).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below.

use super::params::ResizeParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for image processing backends.
///
/// The decoded image type is backend-defined so a source is decoded exactly
/// once and then resampled for every icon size.
pub trait ImageBackend {
    /// A decoded, in-memory raster.
    type Image;

    /// Open and decode an image from disk.
    fn open(&self, path: &Path) -> Result<Self::Image, BackendError>;

    /// Dimensions of an already-decoded image.
    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Get image dimensions from a file on disk.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Resample `image` to the exact target size and write it as PNG.
    fn resize(&self, image: &Self::Image, params: &ResizeParams) -> Result<(), BackendError>;
}
