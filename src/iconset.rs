//! Full icon set build: resample, then write the manifest.
//!
//! ```text
//! 1. Resample   logo.png  →  icon_*.png      (ten sizes, one decode)
//! 2. Contents   sizes     →  Contents.json   (same table, written last)
//! ```
//!
//! The manifest is written only after every icon is on disk, so a finished
//! `Contents.json` never references a file that does not exist yet.
//! [`verify`] checks an existing icon set against its manifest.

use crate::config::IconsetConfig;
use crate::contents::{self, ContentsError};
use crate::imaging::{BackendError, Dimensions, ImageBackend, RustBackend};
use crate::resample::{self, IconEvent, OutputIcon, ResampleError};
use crate::sizes::{ICON_SIZES, expected_pixels};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconsetError {
    #[error(transparent)]
    Resample(#[from] ResampleError),
    #[error("Failed to write Contents.json: {0}")]
    Contents(#[from] ContentsError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
}

/// What a successful build produced.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub icons: Vec<OutputIcon>,
    pub contents_path: PathBuf,
}

pub fn generate(
    config: &IconsetConfig,
    events: Option<Sender<IconEvent>>,
) -> Result<GenerateResult, IconsetError> {
    generate_with_backend(&RustBackend::new(), config, events)
}

/// Build the icon set using a specific backend (allows testing with mock).
pub fn generate_with_backend<B: ImageBackend>(
    backend: &B,
    config: &IconsetConfig,
    events: Option<Sender<IconEvent>>,
) -> Result<GenerateResult, IconsetError> {
    let icons = resample::resample(
        backend,
        &config.source,
        &config.output_dir,
        &ICON_SIZES,
        events,
    )?;
    let contents_path = contents::write_contents(&config.output_dir, &ICON_SIZES)?;
    Ok(GenerateResult {
        icons,
        contents_path,
    })
}

/// A mismatch between `Contents.json` and the files next to it.
#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    Missing {
        filename: String,
    },
    WrongDimensions {
        filename: String,
        expected: Dimensions,
        actual: Dimensions,
    },
    /// `size` or `scale` is not of the form `WxH` / `Nx`.
    BadLabels {
        filename: String,
        size: String,
        scale: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub checked: usize,
    pub problems: Vec<Problem>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check every manifest entry in `output_dir` against the file it names.
///
/// A missing or unparsable `Contents.json` is an error; per-entry mismatches
/// are collected into the report.
pub fn verify<B: ImageBackend>(backend: &B, output_dir: &Path) -> Result<VerifyReport, IconsetError> {
    let manifest = contents::read_contents(output_dir)?;
    let mut report = VerifyReport::default();

    for entry in &manifest.images {
        report.checked += 1;

        let Some((width, height)) = expected_pixels(&entry.size, &entry.scale) else {
            report.problems.push(Problem::BadLabels {
                filename: entry.filename.clone(),
                size: entry.size.clone(),
                scale: entry.scale.clone(),
            });
            continue;
        };

        let path = output_dir.join(&entry.filename);
        if !path.is_file() {
            report.problems.push(Problem::Missing {
                filename: entry.filename.clone(),
            });
            continue;
        }

        let actual = backend.identify(&path)?;
        let expected = Dimensions { width, height };
        if actual != expected {
            report.problems.push(Problem::WrongDimensions {
                filename: entry.filename.clone(),
                expected,
                actual,
            });
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::{CONTENTS_FILENAME, Contents, ImageEntry, Info, read_contents};
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use tempfile::TempDir;

    fn config_in(root: &Path) -> IconsetConfig {
        IconsetConfig {
            source: root.join("logo.png"),
            output_dir: root.join("AppIcon.appiconset"),
        }
    }

    #[test]
    fn generate_resamples_then_writes_manifest() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        let backend = MockBackend::with_source(1024, 1024);

        let result = generate_with_backend(&backend, &config, None).unwrap();

        assert_eq!(result.icons.len(), 10);
        assert_eq!(result.contents_path, config.output_dir.join("Contents.json"));
        let contents = read_contents(&config.output_dir).unwrap();
        assert_eq!(contents, Contents::from_sizes(&ICON_SIZES));
    }

    #[test]
    fn manifest_filenames_match_written_icons() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        let backend = MockBackend::with_source(1024, 1024);

        let result = generate_with_backend(&backend, &config, None).unwrap();

        let written: Vec<String> = backend
            .get_operations()
            .into_iter()
            .filter_map(|op| match op {
                RecordedOp::Resize { output, .. } => Some(output),
                _ => None,
            })
            .collect();
        let contents = read_contents(&config.output_dir).unwrap();
        let referenced: Vec<String> = contents
            .filenames()
            .iter()
            .map(|f| config.output_dir.join(f).to_string_lossy().to_string())
            .collect();
        assert_eq!(written, referenced);
        assert_eq!(result.icons.len(), referenced.len());
    }

    #[test]
    fn failed_resample_writes_no_manifest() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        let backend = MockBackend::with_source(1024, 1024).failing_on("icon_512x512_2x.png");

        let result = generate_with_backend(&backend, &config, None);

        assert!(matches!(result, Err(IconsetError::Resample(_))));
        assert!(!config.output_dir.join(CONTENTS_FILENAME).exists());
    }

    #[test]
    fn missing_source_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());

        let result = generate_with_backend(&MockBackend::new(), &config, None);

        assert!(result.is_err());
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn verify_reports_clean_set() {
        let tmp = TempDir::new().unwrap();
        contents::write_contents(tmp.path(), &ICON_SIZES).unwrap();
        for spec in &ICON_SIZES {
            std::fs::write(tmp.path().join(spec.filename()), b"").unwrap();
        }
        // Mock identify pops from the back, so queue in reverse table order.
        let dims = ICON_SIZES
            .iter()
            .rev()
            .map(|s| Dimensions {
                width: s.width,
                height: s.height,
            })
            .collect();
        let backend = MockBackend::with_identify(dims);

        let report = verify(&backend, tmp.path()).unwrap();
        assert_eq!(report.checked, 10);
        assert!(report.is_ok(), "unexpected problems: {:?}", report.problems);
    }

    #[test]
    fn verify_flags_missing_and_wrong_size() {
        let tmp = TempDir::new().unwrap();
        let sizes = &ICON_SIZES[..2];
        contents::write_contents(tmp.path(), sizes).unwrap();
        std::fs::write(tmp.path().join(sizes[0].filename()), b"").unwrap();
        let backend = MockBackend::with_identify(vec![Dimensions {
            width: 20,
            height: 20,
        }]);

        let report = verify(&backend, tmp.path()).unwrap();

        assert_eq!(
            report.problems,
            vec![
                Problem::WrongDimensions {
                    filename: "icon_16x16_1x.png".to_string(),
                    expected: Dimensions {
                        width: 16,
                        height: 16
                    },
                    actual: Dimensions {
                        width: 20,
                        height: 20
                    },
                },
                Problem::Missing {
                    filename: "icon_16x16_2x.png".to_string(),
                },
            ]
        );
    }

    #[test]
    fn verify_flags_bad_labels() {
        let tmp = TempDir::new().unwrap();
        let contents = Contents {
            images: vec![ImageEntry {
                filename: "icon.png".to_string(),
                idiom: "mac".to_string(),
                scale: "retina".to_string(),
                size: "16x16".to_string(),
            }],
            info: Info::default(),
        };
        std::fs::write(
            tmp.path().join(CONTENTS_FILENAME),
            contents.to_json().unwrap(),
        )
        .unwrap();

        let report = verify(&MockBackend::new(), tmp.path()).unwrap();
        assert!(matches!(&report.problems[0], Problem::BadLabels { scale, .. } if scale == "retina"));
    }

    #[test]
    fn verify_without_manifest_errors() {
        let tmp = TempDir::new().unwrap();
        let result = verify(&MockBackend::new(), tmp.path());
        assert!(matches!(result, Err(IconsetError::Contents(_))));
    }
}
