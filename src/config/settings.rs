//! Application settings and paths.
//!
//! Settings live in an XDG-compliant config directory unless an explicit path
//! is given on the command line.

use crate::cli::OutputFormat;
use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/digipal)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the platform config directory. Nothing is created on disk.
    pub fn discover() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "digipal", "digipal")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Output format used when `--output` is not given.
    pub default_output_format: OutputFormat,
    /// Include the digit list in plain-text reports.
    pub show_digits: bool,
    /// Include the index span in plain-text reports.
    pub show_span: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_output_format: OutputFormat::Plain,
            show_digits: true,
            show_span: true,
        }
    }
}

impl AppSettings {
    /// Resolve the settings file: an explicit path wins over the XDG default.
    pub fn resolve_path(explicit: Option<&Path>) -> ConfigResult<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(Paths::discover()?.settings_file()),
        }
    }

    /// Load settings.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let file = match Paths::discover() {
            Ok(paths) => paths.settings_file(),
            Err(e) => {
                debug!(error = %e, "no config directory, using default settings");
                return Ok(Self::default());
            }
        };

        if !file.exists() {
            debug!(path = %file.display(), "settings file absent, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_output_format, OutputFormat::Plain);
        assert!(settings.show_digits);
        assert!(settings.show_span);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: AppSettings =
            serde_json::from_str(r#"{ "default_output_format": "json" }"#).unwrap();
        assert_eq!(parsed.default_output_format, OutputFormat::Json);
        assert!(parsed.show_digits);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            default_output_format: OutputFormat::Csv,
            show_digits: false,
            show_span: true,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(AppSettings::load(Some(&path)).unwrap(), settings);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(
            AppSettings::load(Some(&path)),
            Err(ConfigError::ReadFailed { .. })
        ));
    }

    #[test]
    fn test_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AppSettings::load_from(&path),
            Err(ConfigError::InvalidFormat(_))
        ));
    }
}
