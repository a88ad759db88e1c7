//! Configuration for the astral engine.
//!
//! `EngineConfig` carries the natal and synastry orb tables, chart options
//! and the decision-engine confidence floor. It is loaded from TOML with
//! every field defaulted.

pub mod config;
pub mod error;

pub use config::{ChartSection, DEFAULT_CONFIDENCE_FLOOR, DecisionSection, EngineConfig};
pub use error::ConfigError;
