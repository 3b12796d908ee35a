//! User settings for Pocket Ledger
//!
//! Controls how amounts and timestamps are rendered and which transaction
//! type new entries default to.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::TransactionKind;

/// User settings for Pocket Ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Timestamp format for the transaction list (strftime, local time)
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Digit group separator for amounts
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,

    /// Separator between whole and fractional part of amounts
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,

    /// Type preselected for new entries
    #[serde(default)]
    pub default_kind: TransactionKind,
}

fn default_schema_version() -> u32 {
    1
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_thousands_separator() -> String {
    ",".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            timestamp_format: default_timestamp_format(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            default_kind: TransactionKind::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use the defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
