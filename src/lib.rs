//! # appiconset
//!
//! Generates a macOS `AppIcon.appiconset` (the icon set inside an Xcode asset
//! catalog) from one source PNG.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Resample   logo.png     →  icon_<size>_<scale>.png × 10
//! 2. Contents   size table   →  Contents.json
//! ```
//!
//! Both stages read the same fixed [`sizes::ICON_SIZES`] table, so the
//! manifest always names exactly the files the resampler wrote. The manifest
//! is written last.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`sizes`] | The fixed mac icon size table and label parsing |
//! | [`resample`] | Stage 1 — decode the source once, write every icon size as PNG |
//! | [`contents`] | Stage 2 — build and write `Contents.json` |
//! | [`iconset`] | Runs both stages in order; verifies an existing icon set |
//! | [`config`] | Optional `appiconset.toml` overriding the source/output paths |
//! | [`imaging`] | Pure-Rust image operations: open, identify, resize to PNG |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Exact Resize, Lanczos3
//!
//! Every icon is resampled straight from the decoded source to its exact
//! pixel size with the Lanczos3 filter. The source aspect ratio is not
//! preserved; a non-square source gets a warning, not a crop.
//!
//! ## Fail Fast, No Rollback
//!
//! Any error aborts the run. Icons already written stay on disk and
//! `Contents.json` is not written. The source is decoded before the output
//! directory is created, so a bad source leaves no trace.

pub mod config;
pub mod contents;
pub mod iconset;
pub mod imaging;
pub mod output;
pub mod resample;
pub mod sizes;

#[cfg(test)]
pub(crate) mod test_helpers;
