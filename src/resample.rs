//! Icon resampling.
//!
//! Stage 1 of the icon set build. Decodes the source image once, then writes
//! one PNG per [`SizeSpec`] into the output directory.
//!
//! ## Output Structure
//!
//! ```text
//! AppIcon.appiconset/
//! ├── icon_16x16_1x.png        # 16×16
//! ├── icon_16x16_2x.png        # 32×32
//! ├── ...
//! └── icon_512x512_2x.png      # 1024×1024
//! ```
//!
//! ## Failure Behavior
//!
//! The source is opened before the output directory is created, so an
//! unreadable source leaves nothing behind. Any later failure aborts the run
//! immediately; icons written by earlier iterations stay on disk.

use crate::imaging::{BackendError, Dimensions, ImageBackend, ResizeParams};
use crate::sizes::{SizeSpec, largest_target};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResampleError {
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Progress events emitted while resampling.
#[derive(Debug, Clone, PartialEq)]
pub enum IconEvent {
    SourceOpened {
        path: PathBuf,
        dimensions: Dimensions,
    },
    /// The source is smaller than the largest icon on at least one axis.
    Upscaling {
        source: Dimensions,
        target: Dimensions,
    },
    /// The source is not square; icons are stretched to fit.
    NonSquareSource { dimensions: Dimensions },
    IconWritten {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

/// One icon written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputIcon {
    pub spec: SizeSpec,
    pub path: PathBuf,
}

fn emit(events: &Option<Sender<IconEvent>>, event: IconEvent) {
    if let Some(tx) = events {
        // Receiver gone means nobody is listening; the work still continues.
        tx.send(event).ok();
    }
}

/// Warnings about the source relative to the size table.
fn source_warnings(source: Dimensions, sizes: &[SizeSpec]) -> Vec<IconEvent> {
    let mut warnings = Vec::new();
    if !source.is_square() {
        warnings.push(IconEvent::NonSquareSource { dimensions: source });
    }
    let (max_w, max_h) = largest_target(sizes);
    if source.width < max_w || source.height < max_h {
        warnings.push(IconEvent::Upscaling {
            source,
            target: Dimensions {
                width: max_w,
                height: max_h,
            },
        });
    }
    warnings
}

/// Resample `source` into every size of `sizes`, writing PNGs to `output_dir`.
///
/// Returns the written icons in table order.
pub fn resample<B: ImageBackend>(
    backend: &B,
    source: &Path,
    output_dir: &Path,
    sizes: &[SizeSpec],
    events: Option<Sender<IconEvent>>,
) -> Result<Vec<OutputIcon>, ResampleError> {
    let image = backend.open(source)?;
    let dimensions = backend.dimensions(&image);
    emit(
        &events,
        IconEvent::SourceOpened {
            path: source.to_path_buf(),
            dimensions,
        },
    );
    for warning in source_warnings(dimensions, sizes) {
        emit(&events, warning);
    }

    std::fs::create_dir_all(output_dir).map_err(|source| ResampleError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(sizes.len());
    for spec in sizes {
        let path = output_dir.join(spec.filename());
        backend.resize(
            &image,
            &ResizeParams {
                output: path.clone(),
                width: spec.width,
                height: spec.height,
            },
        )?;
        emit(
            &events,
            IconEvent::IconWritten {
                path: path.clone(),
                width: spec.width,
                height: spec.height,
            },
        );
        written.push(OutputIcon { spec: *spec, path });
    }

    Ok(written)
}
