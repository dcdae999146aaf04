//! Runtime configuration loaded from TOML
//!
//! ```toml
//! [logging]
//! file = "geokit.log"
//! global_file = "geokit-global.log"
//! level = "debug"
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, LevelFilter};

use crate::envelope::{EnvelopeError, EnvelopeResult};

/// Default configuration file looked up next to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "geokit.toml";

/// Default path of the per-run log file
pub const DEFAULT_LOG_FILE: &str = "geokit.log";

/// Settings for the geokit binary and facade
#[derive(Debug, Clone, PartialEq)]
pub struct GeoKitConfig {
    /// Per-run log file written by [`crate::utils::logger::Logger`]
    pub log_file: String,
    /// File backing the global `log` facade; console-only logging when unset
    pub global_log_file: Option<String>,
    /// Most verbose level recorded
    pub log_level: LevelFilter,
}

impl Default for GeoKitConfig {
    fn default() -> Self {
        GeoKitConfig {
            log_file: DEFAULT_LOG_FILE.to_string(),
            global_log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GeoKitConfig {
    /// Parse configuration from a TOML string
    ///
    /// Keys that are absent keep their default value.
    pub fn from_str(content: &str) -> EnvelopeResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| EnvelopeError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = GeoKitConfig::default();

        let Some(logging) = toml_value.get("logging") else {
            return Ok(config);
        };
        let logging = logging.as_table()
            .ok_or_else(|| EnvelopeError::ConfigError("[logging] must be a table".to_string()))?;

        if let Some(file) = logging.get("file") {
            config.log_file = Self::string_value(file, "logging.file")?;
        }

        if let Some(file) = logging.get("global_file") {
            config.global_log_file = Some(Self::string_value(file, "logging.global_file")?);
        }

        if let Some(level) = logging.get("level") {
            let level = Self::string_value(level, "logging.level")?;
            config.log_level = LevelFilter::from_str(&level)
                .map_err(|_| EnvelopeError::ConfigError(format!("Unknown log level: {}", level)))?;
        }

        Ok(config)
    }

    /// Helper to read a string entry
    fn string_value(value: &toml::Value, key: &str) -> EnvelopeResult<String> {
        value.as_str()
            .map(str::to_string)
            .ok_or_else(|| EnvelopeError::ConfigError(format!("{} must be a string", key)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> EnvelopeResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Load the file if it exists, defaults otherwise
    pub fn load_or_default(path: &str) -> EnvelopeResult<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            debug!("No configuration at {}, using defaults", path);
            Ok(GeoKitConfig::default())
        }
    }
}
