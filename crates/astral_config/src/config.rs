//! Engine configuration.
//!
//! Every section and field is defaulted, so an empty file is a valid
//! config. An orb table that is present replaces the default table as a
//! whole: aspects it does not list are disabled.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use astral_chart::{ChartOptions, OrbTable};

use crate::error::ConfigError;

/// Default confidence below which a question is UNCLEAR.
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.25;

/// Chart construction options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSection {
    /// Include Chiron in charts and the sky snapshot.
    pub include_minor_body: bool,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            include_minor_body: true,
        }
    }
}

/// Question decision options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionSection {
    pub confidence_floor: f64,
}

impl Default for DecisionSection {
    fn default() -> Self {
        Self {
            confidence_floor: DEFAULT_CONFIDENCE_FLOOR,
        }
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Orbs for natal patterns and transits.
    pub natal_orbs: OrbTable,
    /// Orbs for chart-to-chart comparison.
    pub synastry_orbs: OrbTable,
    pub chart: ChartSection,
    pub decision: DecisionSection,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            natal_orbs: OrbTable::natal(),
            synastry_orbs: OrbTable::synastry(),
            chart: ChartSection::default(),
            decision: DecisionSection::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Both orb tables must validate and the floor must lie in (0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.natal_orbs.validate()?;
        self.synastry_orbs.validate()?;
        if self.natal_orbs.enabled().next().is_none() {
            return Err(ConfigError::Invalid("natal_orbs must enable at least one aspect"));
        }
        if self.synastry_orbs.enabled().next().is_none() {
            return Err(ConfigError::Invalid("synastry_orbs must enable at least one aspect"));
        }
        let floor = self.decision.confidence_floor;
        if !floor.is_finite() || floor <= 0.0 || floor > 1.0 {
            return Err(ConfigError::Invalid("decision.confidence_floor must be in (0, 1]"));
        }
        Ok(())
    }

    /// Options for building natal charts.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            include_minor_body: self.chart.include_minor_body,
            orbs: self.natal_orbs,
        }
    }
}
