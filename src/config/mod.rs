//! Application configuration: login credentials and the scheduled executable.
//!
//! Loaded once at startup from a TOML file in the platform config directory.
//! Every field has a compiled-in default matching the original deployment, so
//! a missing or partial file is never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Executable the generated tasks point at. The doubled backslashes are part
/// of the emitted script template and must survive into the batch file.
const DEFAULT_EXECUTABLE_PATH: &str = r"C:\\path\\to\\reserve.exe";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Login username for the credential gate.
    pub username: String,
    /// Login password for the credential gate.
    pub password: String,
    /// Path to the reservation executable the scheduled tasks run.
    pub executable_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            username: "cozy".to_string(),
            password: "vkfrhd33".to_string(),
            executable_path: DEFAULT_EXECUTABLE_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Platform config file location,
    /// e.g. `~/.config/reservation-scheduler/config.toml` on Linux.
    pub fn config_file() -> Option<PathBuf> {
        ProjectDirs::from("com", "ReservationScheduler", "reservation-scheduler")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Parse a config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load the platform config file, falling back to defaults when it is
    /// missing or unreadable. Startup never fails on configuration.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::config_file() else {
            log::warn!("No config directory available, using default configuration");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Failed to load config from {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matches_original_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.username, "cozy");
        assert_eq!(config.password, "vkfrhd33");
        assert_eq!(config.executable_path, r"C:\\path\\to\\reserve.exe");
    }

    #[test]
    fn test_load_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "username = \"admin\"\npassword = \"secret\"\nexecutable_path = 'D:\\reserve.exe'"
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "secret");
        assert_eq!(config.executable_path, r"D:\reserve.exe");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "username = \"admin\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, AppConfig::default().password);
        assert_eq!(config.executable_path, AppConfig::default().executable_path);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "username = ").unwrap();

        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Io(_))));
    }
}
