use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration.
///
/// Pagination operations themselves never fail; out-of-range input is
/// clamped instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
