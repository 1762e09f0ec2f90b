//! Configuration module
//!
//! Loaded from TOML. Every section is optional; missing values fall back to
//! the defaults below.
//!
//! ```toml
//! [pagination]
//! default_page_size = 10
//! max_page_size = 100
//! max_visible_pages = 5
//!
//! [logging]
//! level = "info"
//! format = "text"   # or "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::shared::{ConfigError, ConfigResult};

/// Page size used when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Upper bound for any page size.
pub const MAX_PAGE_SIZE: u64 = 100;
/// Window width of the page selector.
pub const DEFAULT_MAX_VISIBLE_PAGES: u64 = 5;

/// Bounds applied when clamping pagination input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PaginationConfig {
    #[validate(range(min = 1, max = 100))]
    pub default_page_size: u64,
    #[validate(range(min = 1, max = 100))]
    pub max_page_size: u64,
    #[validate(range(min = 1))]
    pub max_visible_pages: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
        }
    }
}

impl PaginationConfig {
    /// Field ranges plus `default_page_size <= max_page_size`.
    pub fn validate_bounds(&self) -> Result<(), ValidationErrors> {
        self.validate()?;
        if self.default_page_size > self.max_page_size {
            let mut err = ValidationError::new("default_page_size_above_max");
            err.message = Some("default_page_size must not exceed max_page_size".into());
            let mut errors = ValidationErrors::new();
            errors.add("default_page_size", err);
            return Err(errors);
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `pagekit=debug`
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pagination: PaginationConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let config: AppConfig = toml::from_str(raw)?;
        config.pagination.validate_bounds()?;
        Ok(config)
    }
}

/// `<config_dir>/pagekit/config.toml`, or `./config.toml` when the platform
/// has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("pagekit").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}
