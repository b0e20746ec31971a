//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Open** | `image::ImageReader` (decode once, reuse for every size) |
//! | **Identify** | `image::image_dimensions` |
//! | **Resize → PNG** | `resize_exact` with Lanczos3 + `PngEncoder` |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use params::ResizeParams;
pub use rust_backend::RustBackend;
