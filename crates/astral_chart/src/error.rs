//! Error types for chart construction.

use astral_time::TimeError;
use thiserror::Error;

/// Errors from validating chart inputs or chart configuration.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from civil time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Invalid orb table or chart option.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
