//! CLI output formatting for the icon set build.
//!
//! # Output Format
//!
//! ```text
//! Source: ConfigForge/Assets.xcassets/Logo.imageset/logo.png (1024x1024)
//! Generated: ConfigForge/Assets.xcassets/AppIcon.appiconset/icon_16x16_1x.png (16x16)
//! Generated: ConfigForge/Assets.xcassets/AppIcon.appiconset/icon_16x16_2x.png (32x32)
//! ...
//! Contents.json updated: ConfigForge/Assets.xcassets/AppIcon.appiconset/Contents.json
//! All icons generated.
//! ```
//!
//! Warnings about the source (too small, not square) are printed right after
//! the `Source:` line and prefixed with `Warning:`.
//!
//! # Architecture
//!
//! Each kind of output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure — no I/O, no side effects.

use crate::iconset::{GenerateResult, Problem, VerifyReport};
use crate::resample::IconEvent;

/// Format a single resample progress event.
pub fn format_icon_event(event: &IconEvent) -> Vec<String> {
    match event {
        IconEvent::SourceOpened { path, dimensions } => {
            vec![format!("Source: {} ({})", path.display(), dimensions)]
        }
        IconEvent::Upscaling { source, target } => vec![format!(
            "Warning: source is {}, upscaling to {}",
            source, target
        )],
        IconEvent::NonSquareSource { dimensions } => vec![format!(
            "Warning: source is not square ({}), icons will be stretched",
            dimensions
        )],
        IconEvent::IconWritten {
            path,
            width,
            height,
        } => vec![format!("Generated: {} ({}x{})", path.display(), width, height)],
    }
}

/// Format the closing lines after the manifest is written.
pub fn format_generate_output(result: &GenerateResult) -> Vec<String> {
    vec![
        format!("Contents.json updated: {}", result.contents_path.display()),
        format!("All icons generated ({} files).", result.icons.len()),
    ]
}

/// Format a verification report, one line per problem.
pub fn format_verify_output(report: &VerifyReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .problems
        .iter()
        .map(|problem| match problem {
            Problem::Missing { filename } => format!("    {}: missing", filename),
            Problem::WrongDimensions {
                filename,
                expected,
                actual,
            } => format!("    {}: expected {}, found {}", filename, expected, actual),
            Problem::BadLabels {
                filename,
                size,
                scale,
            } => format!(
                "    {}: unreadable size/scale \"{}\" @ \"{}\"",
                filename, size, scale
            ),
        })
        .collect();

    let header = if report.is_ok() {
        format!("Verified {} icons", report.checked)
    } else {
        format!(
            "{} of {} icons have problems",
            report.problems.len(),
            report.checked
        )
    };
    lines.insert(0, header);
    lines
}

pub fn print_icon_event(event: &IconEvent) {
    for line in format_icon_event(event) {
        println!("{}", line);
    }
}

pub fn print_generate_output(result: &GenerateResult) {
    for line in format_generate_output(result) {
        println!("{}", line);
    }
}

pub fn print_verify_output(report: &VerifyReport) {
    for line in format_verify_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use crate::resample::OutputIcon;
    use crate::sizes::ICON_SIZES;
    use std::path::PathBuf;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    #[test]
    fn format_source_opened() {
        let event = IconEvent::SourceOpened {
            path: PathBuf::from("assets/logo.png"),
            dimensions: dims(1024, 1024),
        };
        assert_eq!(
            format_icon_event(&event),
            vec!["Source: assets/logo.png (1024x1024)"]
        );
    }

    #[test]
    fn format_icon_written() {
        let event = IconEvent::IconWritten {
            path: PathBuf::from("out/icon_16x16_2x.png"),
            width: 32,
            height: 32,
        };
        assert_eq!(
            format_icon_event(&event),
            vec!["Generated: out/icon_16x16_2x.png (32x32)"]
        );
    }

    #[test]
    fn format_warnings() {
        let upscale = IconEvent::Upscaling {
            source: dims(512, 512),
            target: dims(1024, 1024),
        };
        assert_eq!(
            format_icon_event(&upscale),
            vec!["Warning: source is 512x512, upscaling to 1024x1024"]
        );

        let stretched = IconEvent::NonSquareSource {
            dimensions: dims(2048, 1024),
        };
        assert!(format_icon_event(&stretched)[0].starts_with("Warning: source is not square"));
    }

    #[test]
    fn format_generate_summary() {
        let result = GenerateResult {
            icons: ICON_SIZES
                .iter()
                .map(|spec| OutputIcon {
                    spec: *spec,
                    path: PathBuf::from("out").join(spec.filename()),
                })
                .collect(),
            contents_path: PathBuf::from("out/Contents.json"),
        };
        assert_eq!(
            format_generate_output(&result),
            vec![
                "Contents.json updated: out/Contents.json",
                "All icons generated (10 files).",
            ]
        );
    }

    #[test]
    fn format_verify_clean() {
        let report = VerifyReport {
            checked: 10,
            problems: vec![],
        };
        assert_eq!(format_verify_output(&report), vec!["Verified 10 icons"]);
    }

    #[test]
    fn format_verify_with_problems() {
        let report = VerifyReport {
            checked: 10,
            problems: vec![
                Problem::Missing {
                    filename: "icon_16x16_1x.png".to_string(),
                },
                Problem::WrongDimensions {
                    filename: "icon_32x32_2x.png".to_string(),
                    expected: dims(64, 64),
                    actual: dims(60, 60),
                },
            ],
        };
        assert_eq!(
            format_verify_output(&report),
            vec![
                "2 of 10 icons have problems",
                "    icon_16x16_1x.png: missing",
                "    icon_32x32_2x.png: expected 64x64, found 60x60",
            ]
        );
    }
}
