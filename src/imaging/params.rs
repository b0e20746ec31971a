//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the [`resample`](crate::resample) stage (which decides
//! which icons to create) and the [`backend`](super::backend) (which does the
//! actual pixel work). This separation allows swapping backends (e.g. for
//! testing with a mock) without changing the stage logic.

use std::path::PathBuf;

/// Parameters for an exact resize of an already-decoded source.
///
/// The source aspect ratio is not preserved: the output is always exactly
/// `width`×`height`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}
