//! Icon set configuration.
//!
//! The tool targets one fixed Xcode project layout. The stock defaults point
//! at it, relative to the working directory:
//!
//! ```toml
//! # appiconset.toml (optional, all keys optional)
//! source = "ConfigForge/Assets.xcassets/Logo.imageset/logo.png"
//! output_dir = "ConfigForge/Assets.xcassets/AppIcon.appiconset"
//! ```
//!
//! When no `appiconset.toml` exists the stock defaults are used as-is.
//! The icon size table itself is fixed and cannot be configured.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "appiconset.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Paths for one icon set build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconsetConfig {
    /// Source PNG the icons are resampled from.
    pub source: PathBuf,
    /// The `.appiconset` directory receiving the icons and `Contents.json`.
    pub output_dir: PathBuf,
}

impl Default for IconsetConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("ConfigForge/Assets.xcassets/Logo.imageset/logo.png"),
            output_dir: PathBuf::from("ConfigForge/Assets.xcassets/AppIcon.appiconset"),
        }
    }
}

impl IconsetConfig {
    /// Validate paths are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.as_os_str().is_empty() {
            return Err(ConfigError::Validation("source must not be empty".into()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        let is_png = self
            .source
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if !is_png {
            return Err(ConfigError::Validation(format!(
                "source must be a .png file, got {}",
                self.source.display()
            )));
        }
        Ok(())
    }

    /// Resolve relative paths against `root`.
    pub fn resolved_in(&self, root: &Path) -> Self {
        Self {
            source: root.join(&self.source),
            output_dir: root.join(&self.output_dir),
        }
    }
}

/// Load config from `appiconset.toml` in the given directory.
///
/// Missing file → stock defaults. Present file → parsed (unknown keys
/// rejected) and validated.
pub fn load_config(root: &Path) -> Result<IconsetConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILENAME);
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        IconsetConfig::default()
    };
    config.validate()?;
    Ok(config)
}
