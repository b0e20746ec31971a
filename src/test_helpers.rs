//! Shared test utilities for the appiconset test suite.
//!
//! Synthetic source images, so tests never depend on checked-in binaries.

use image::{Rgba, RgbaImage};
use std::path::Path;

/// Write an RGBA PNG with a gradient and a transparent corner.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let alpha = if x < width / 4 && y < height / 4 { 0 } else { 255 };
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, alpha])
    });
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    img.save(path).unwrap();
}
