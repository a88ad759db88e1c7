//! Engine facade: one validated configuration plus a position provider.

use astral_chart::{BirthRecord, ChartError, NatalChart, build_chart};
use astral_config::{ConfigError, EngineConfig};
use astral_core::{ClosedFormEphemeris, LongitudeProvider};
use astral_time::Instant;

use crate::decision::{QuestionMode, ScoringResult, decide};
use crate::report::{DailyReport, daily_report};
use crate::synastry::{SynastryReport, synastry};

/// Entry point for charts, daily reports, questions and synastry.
#[derive(Debug, Clone)]
pub struct Engine<P = ClosedFormEphemeris> {
    provider: P,
    config: EngineConfig,
}

impl Engine<ClosedFormEphemeris> {
    /// Create an engine on the closed-form ephemeris.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_provider(config, ClosedFormEphemeris)
    }
}

impl Default for Engine<ClosedFormEphemeris> {
    fn default() -> Self {
        Self {
            provider: ClosedFormEphemeris,
            config: EngineConfig::default(),
        }
    }
}

impl<P: LongitudeProvider> Engine<P> {
    /// Create an engine on a custom provider.
    pub fn with_provider(config: EngineConfig, provider: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn build_chart(&self, birth: &BirthRecord) -> Result<NatalChart, ChartError> {
        build_chart(birth, &self.provider, &self.config.chart_options())
    }

    pub fn daily_report(&self, chart: &NatalChart, instant: Instant, profile_id: &str) -> DailyReport {
        daily_report(chart, instant, profile_id, &self.provider, &self.config)
    }

    /// Answer a free-text question against a daily report.
    pub fn ask(&self, text: &str, mode: QuestionMode, report: &DailyReport) -> ScoringResult {
        decide(text, mode, report, &self.config.decision)
    }

    pub fn synastry(&self, first: &NatalChart, second: &NatalChart) -> SynastryReport {
        synastry(first, second, &self.config.synastry_orbs)
    }
}
