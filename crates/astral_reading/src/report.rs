//! Daily report: one natal chart against the sky at one instant.

use serde::{Deserialize, Serialize};

use astral_chart::{Aspect, AspectNature, NatalChart, OrbTable, transits};
use astral_config::EngineConfig;
use astral_core::{Body, LongitudeProvider, MoonPhase, Sky};
use astral_time::Instant;

use crate::domain::{ALL_DOMAINS, Domain};
use crate::scoring::{CategoryScore, category_score};

/// Number of transits singled out with an interpretation.
pub const TOP_TRANSITS: usize = 5;

/// Overall energy of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyBand {
    Peak,
    Steady,
    Mixed,
    Low,
}

impl EnergyBand {
    /// ≥7.5 peak, ≥5.5 steady, ≥4 mixed, else low.
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 7.5 {
            Self::Peak
        } else if overall >= 5.5 {
            Self::Steady
        } else if overall >= 4.0 {
            Self::Mixed
        } else {
            Self::Low
        }
    }
}

/// A transit with its one-line interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopTransit {
    pub aspect: Aspect,
    pub interpretation: String,
}

/// Everything the day holds for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub instant: Instant,
    pub julian_day: f64,
    pub profile_id: String,
    /// One score per domain, in domain order.
    pub categories: Vec<CategoryScore>,
    /// Mean category score, one decimal.
    pub overall_score: f64,
    pub energy: EnergyBand,
    /// All transits, tightest first.
    pub transits: Vec<Aspect>,
    pub top_transits: Vec<TopTransit>,
    pub moon_phase: MoonPhase,
    /// Transiting bodies currently retrograde.
    pub retrogrades: Vec<Body>,
}

impl DailyReport {
    pub fn category(&self, domain: Domain) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.domain == domain)
    }
}

fn nature_phrase(nature: AspectNature) -> &'static str {
    match nature {
        AspectNature::Harmonious => "opens an easy, supportive flow",
        AspectNature::Intense => "concentrates and amplifies energy",
        AspectNature::Challenging => "creates friction that asks for adjustment",
    }
}

/// One-line reading of a transit.
pub fn interpret(aspect: &Aspect) -> String {
    let timing = if aspect.applying {
        "building"
    } else {
        "fading"
    };
    let exact = if aspect.exact { ", exact" } else { "" };
    format!(
        "Transiting {} {} your natal {}: {} ({}{}, orb {:.1}°)",
        aspect.comparison,
        aspect.aspect,
        aspect.reference,
        nature_phrase(aspect.aspect.nature()),
        timing,
        exact,
        aspect.orb
    )
}

/// Assemble a report from an already computed sky.
pub fn build_report(
    chart: &NatalChart,
    sky: &Sky,
    instant: Instant,
    profile_id: &str,
    orbs: &OrbTable,
) -> DailyReport {
    let transits = transits(chart, sky, orbs);
    let natal = chart.placements();
    let categories: Vec<CategoryScore> = ALL_DOMAINS
        .iter()
        .map(|&d| category_score(d, &transits, &sky.moon_phase, &natal))
        .collect();
    let sum: f64 = categories.iter().map(|c| f64::from(c.score)).sum();
    let overall = (sum / categories.len() as f64 * 10.0).round() / 10.0;
    let top_transits = transits
        .iter()
        .take(TOP_TRANSITS)
        .map(|a| TopTransit {
            aspect: *a,
            interpretation: interpret(a),
        })
        .collect();

    log::debug!(
        "daily report for {profile_id} at JD {:.5}: overall {overall:.1}, {} transits",
        sky.julian_day,
        transits.len()
    );
    DailyReport {
        instant,
        julian_day: sky.julian_day,
        profile_id: profile_id.to_string(),
        categories,
        overall_score: overall,
        energy: EnergyBand::from_overall(overall),
        transits,
        top_transits,
        moon_phase: sky.moon_phase,
        retrogrades: sky.retrogrades(),
    }
}

/// Compute the sky at `instant` and build the report for `chart`.
pub fn daily_report<P: LongitudeProvider>(
    chart: &NatalChart,
    instant: Instant,
    profile_id: &str,
    provider: &P,
    config: &EngineConfig,
) -> DailyReport {
    let sky = Sky::at(provider, instant.julian_day(), config.chart.include_minor_body);
    build_report(chart, &sky, instant, profile_id, &config.natal_orbs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astral_chart::AspectType;

    #[test]
    fn energy_bands() {
        assert_eq!(EnergyBand::from_overall(7.5), EnergyBand::Peak);
        assert_eq!(EnergyBand::from_overall(7.4), EnergyBand::Steady);
        assert_eq!(EnergyBand::from_overall(5.5), EnergyBand::Steady);
        assert_eq!(EnergyBand::from_overall(4.0), EnergyBand::Mixed);
        assert_eq!(EnergyBand::from_overall(3.9), EnergyBand::Low);
    }

    #[test]
    fn interpretation_mentions_both_bodies() {
        let a = Aspect {
            reference: Body::Moon,
            comparison: Body::Venus,
            aspect: AspectType::Trine,
            angle: 121.0,
            orb: 1.0,
            max_orb: 7.0,
            exact: false,
            applying: true,
        };
        let text = interpret(&a);
        assert!(text.starts_with("Transiting Venus trine your natal Moon"));
        assert!(text.contains("building"));
        assert!(text.contains("orb 1.0°"));
    }
}
