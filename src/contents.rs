//! `Contents.json` manifest for the icon set.
//!
//! Stage 2 of the icon set build. Xcode reads this file to learn which PNG
//! covers which logical size and scale:
//!
//! ```json
//! {
//!   "images": [
//!     {
//!       "filename": "icon_16x16_1x.png",
//!       "idiom": "mac",
//!       "scale": "1x",
//!       "size": "16x16"
//!     }
//!   ],
//!   "info": {
//!     "author": "xcode",
//!     "version": 1
//!   }
//! }
//! ```
//!
//! Entries are built from the same [`SizeSpec`] table the resampler uses, so
//! every `filename` names a file written in stage 1.

use crate::sizes::SizeSpec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONTENTS_FILENAME: &str = "Contents.json";
pub const MAC_IDIOM: &str = "mac";

#[derive(Error, Debug)]
pub enum ContentsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The whole manifest. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contents {
    pub images: Vec<ImageEntry>,
    pub info: Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

impl From<&SizeSpec> for ImageEntry {
    fn from(spec: &SizeSpec) -> Self {
        Self {
            filename: spec.filename(),
            idiom: MAC_IDIOM.to_string(),
            scale: spec.scale_label.to_string(),
            size: spec.size_label.to_string(),
        }
    }
}

impl Contents {
    pub fn from_sizes(sizes: &[SizeSpec]) -> Self {
        Self {
            images: sizes.iter().map(ImageEntry::from).collect(),
            info: Info::default(),
        }
    }

    pub fn filenames(&self) -> Vec<&str> {
        self.images.iter().map(|e| e.filename.as_str()).collect()
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, ContentsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the manifest for `sizes` and write it to `<output_dir>/Contents.json`.
///
/// Overwrites any existing manifest. Returns the path written.
pub fn write_contents(output_dir: &Path, sizes: &[SizeSpec]) -> Result<PathBuf, ContentsError> {
    let json = Contents::from_sizes(sizes).to_json()?;
    let path = output_dir.join(CONTENTS_FILENAME);
    std::fs::write(&path, json)?;
    Ok(path)
}

/// Read `<output_dir>/Contents.json` back.
pub fn read_contents(output_dir: &Path) -> Result<Contents, ContentsError> {
    let content = std::fs::read_to_string(output_dir.join(CONTENTS_FILENAME))?;
    Ok(serde_json::from_str(&content)?)
}
