//! User settings for Money Tracker
//!
//! Manages display preferences such as the currency symbol and date format.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings for Money Tracker
///
/// Every field carries a serde default, so settings files written before a
/// field existed keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Bumped when the on-disk layout changes shape
    #[serde(default = "defaults::schema_version")]
    pub schema_version: u32,

    /// Symbol shown wherever the CLI prints amounts
    #[serde(default = "defaults::currency")]
    pub currency_symbol: String,

    /// strftime pattern for dates in listings
    #[serde(default = "defaults::date_format")]
    pub date_format: String,
}

mod defaults {
    pub(super) fn schema_version() -> u32 {
        1
    }

    pub(super) fn currency() -> String {
        "$".to_string()
    }

    pub(super) fn date_format() -> String {
        "%Y-%m-%d".to_string()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: defaults::schema_version(),
            currency_symbol: defaults::currency(),
            date_format: defaults::date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults when no file exists
    ///
    /// Defaults are not written back; the file first appears when something
    /// calls [`Settings::save`].
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();
        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.schema_version, 1);
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.schema_version, 1);
    }
}
