//! Category scoring: natal tendencies, transits and the Moon folded into
//! one bounded 1–10 score per life domain.
//!
//! Order of contributions:
//! 1. neutral anchor of 5
//! 2. natal (body, sign) modifiers and dignity
//! 3. transits touching the domain, scaled by orb tightness
//! 4. lunar phase
//!
//! The total is rounded and clamped to [1, 10].

use serde::{Deserialize, Serialize};

use astral_chart::{Aspect, AspectType, NatalPlacement};
use astral_core::{LunarPhase, MoonPhase};

use crate::advice::band_advice;
use crate::domain::{BodyNature, Domain, body_nature, influences_domain};
use crate::modifiers::modifier_for;

/// Starting point of every domain score.
pub const NEUTRAL_SCORE: f64 = 5.0;
/// Lowest and highest domain score.
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;
/// Weight of one dignity strength point.
pub const DIGNITY_WEIGHT: f64 = 0.25;
/// Multiplier for exact transits.
pub const EXACT_MULTIPLIER: f64 = 1.5;

/// Four qualitative bands over the 1–10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Mixed,
    Difficult,
}

/// Bands from best to worst.
pub const ALL_BANDS: [ScoreBand; 4] = [
    ScoreBand::Excellent,
    ScoreBand::Good,
    ScoreBand::Mixed,
    ScoreBand::Difficult,
];

impl ScoreBand {
    /// ≥8 excellent, ≥6 good, ≥4 mixed, else difficult.
    pub const fn from_score(score: u8) -> Self {
        match score {
            8.. => Self::Excellent,
            6..=7 => Self::Good,
            4..=5 => Self::Mixed,
            _ => Self::Difficult,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Score for one domain with its evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub domain: Domain,
    /// Integer score in [1, 10].
    pub score: u8,
    pub band: ScoreBand,
    /// Contributions in application order, deduplicated.
    pub reasoning: Vec<String>,
    pub warnings: Vec<String>,
    pub advice: String,
    pub favorable: Vec<String>,
    pub unfavorable: Vec<String>,
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

/// Base impact of an aspect before orb scaling.
///
/// A conjunction is scored by the benefic/malefic nature of both bodies:
/// benefic pair +2, malefic pair −2, one of each −1, otherwise 0.
pub fn aspect_impact(aspect: &Aspect) -> f64 {
    match aspect.aspect {
        AspectType::Trine => 2.0,
        AspectType::Sextile => 1.0,
        AspectType::SemiSextile => 0.5,
        AspectType::Square => -2.0,
        AspectType::Opposition => -1.5,
        AspectType::Quincunx => -1.0,
        AspectType::Conjunction => {
            match (body_nature(aspect.reference), body_nature(aspect.comparison)) {
                (BodyNature::Benefic, BodyNature::Benefic) => 2.0,
                (BodyNature::Malefic, BodyNature::Malefic) => -2.0,
                (BodyNature::Benefic, BodyNature::Malefic)
                | (BodyNature::Malefic, BodyNature::Benefic) => -1.0,
                _ => 0.0,
            }
        }
    }
}

/// 1.5 when exact, otherwise decaying linearly from 1 to 0.5 at the orb edge.
pub fn orb_multiplier(aspect: &Aspect) -> f64 {
    if aspect.exact {
        return EXACT_MULTIPLIER;
    }
    if aspect.max_orb <= 0.0 {
        return 0.5;
    }
    1.0 - 0.5 * (aspect.orb / aspect.max_orb).clamp(0.0, 1.0)
}

/// Whether a transit touches a domain through either of its bodies.
pub fn is_relevant(aspect: &Aspect, domain: Domain) -> bool {
    influences_domain(aspect.comparison, domain) || influences_domain(aspect.reference, domain)
}

/// Lunar phase adjustment for a domain.
pub fn moon_adjustment(phase: LunarPhase, domain: Domain) -> f64 {
    use Domain::*;
    match phase {
        LunarPhase::New => match domain {
            Decisions | Creativity | Spiritual => 1.0,
            _ => 0.0,
        },
        LunarPhase::Full => match domain {
            Decisions | Creativity | Love | Social => 1.0,
            Health => -1.0,
            _ => 0.0,
        },
        p if p.is_waning() && domain == Decisions => -1.0,
        p if p.is_waxing() && domain == Career => 1.0,
        _ => 0.0,
    }
}

/// Score one domain.
///
/// `transits` are aspects with the natal body as reference and the
/// transiting body as comparison; `natal` lists the chart placements.
pub fn category_score(
    domain: Domain,
    transits: &[Aspect],
    moon: &MoonPhase,
    natal: &[NatalPlacement],
) -> CategoryScore {
    let mut total = NEUTRAL_SCORE;
    let mut reasoning = Vec::new();
    let mut warnings = Vec::new();

    for p in natal {
        if let Some(m) = modifier_for(p.body, p.sign) {
            if let Some(delta) = m.delta(domain) {
                total += delta;
                push_unique(
                    &mut reasoning,
                    format!("Natal {} in {} ({:+.1})", p.body, p.sign, delta),
                );
                if let Some(w) = m.warning {
                    push_unique(&mut warnings, w.to_string());
                }
            }
        }
        let strength = p.dignity.strength();
        if strength != 0 && influences_domain(p.body, domain) {
            let delta = DIGNITY_WEIGHT * f64::from(strength);
            total += delta;
            push_unique(
                &mut reasoning,
                format!("Natal {} in {} ({:+.2})", p.body, p.dignity, delta),
            );
        }
    }

    for a in transits.iter().filter(|a| is_relevant(a, domain)) {
        let delta = aspect_impact(a) * orb_multiplier(a);
        if delta == 0.0 {
            continue;
        }
        total += delta;
        push_unique(
            &mut reasoning,
            format!(
                "Transiting {} {} natal {} ({:+.1})",
                a.comparison, a.aspect, a.reference, delta
            ),
        );
    }

    let lunar = moon_adjustment(moon.phase, domain);
    if lunar != 0.0 {
        total += lunar;
        push_unique(&mut reasoning, format!("{} ({:+.0})", moon.phase, lunar));
    }

    let score = total
        .round()
        .clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u8;
    let band = ScoreBand::from_score(score);
    let cell = band_advice(domain, band);
    CategoryScore {
        domain,
        score,
        band,
        reasoning,
        warnings,
        advice: cell.advice.to_string(),
        favorable: cell.favorable.iter().map(|s| s.to_string()).collect(),
        unfavorable: cell.unfavorable.iter().map(|s| s.to_string()).collect(),
    }
}
