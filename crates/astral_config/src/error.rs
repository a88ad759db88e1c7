//! Error types for configuration loading.

use std::path::PathBuf;

use astral_chart::ChartError;
use thiserror::Error;

/// Errors from reading, parsing or validating an engine config.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config text is not valid TOML for this schema.
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

impl From<ChartError> for ConfigError {
    fn from(err: ChartError) -> Self {
        match err {
            ChartError::InvalidConfig(msg) | ChartError::InvalidLocation(msg) => Self::Invalid(msg),
            _ => Self::Invalid("chart options rejected"),
        }
    }
}
