//! Readings built on natal charts and transits.
//!
//! - [`scoring`]: per-domain 1–10 scores from transits, the Moon phase
//!   and natal dignities.
//! - [`report`]: the daily report for one chart at one instant.
//! - [`decision`]: free-text question classification and verdicts.
//! - [`synastry`]: compatibility of two charts.
//! - [`engine`]: a facade holding a validated configuration and provider.

pub mod advice;
pub mod decision;
pub mod domain;
pub mod engine;
pub mod keywords;
pub mod modifiers;
pub mod report;
pub mod scoring;
pub mod synastry;

pub use advice::{BandAdvice, band_advice};
pub use decision::{
    Classification, Factor, FactorKind, Polarity, QuestionMode, ScoringResult, Verdict, classify,
    decide, is_negated, numeric_score, polarity,
};
pub use domain::{ALL_DOMAINS, BodyNature, Domain, body_nature, influences, influences_domain};
pub use engine::Engine;
pub use modifiers::{NATAL_MODIFIERS, NatalModifier, modifier_for};
pub use report::{DailyReport, EnergyBand, TOP_TRANSITS, TopTransit, build_report, daily_report, interpret};
pub use scoring::{ALL_BANDS, CategoryScore, ScoreBand, category_score};
pub use synastry::{
    ALL_THEMES, ChartSummary, ElementHarmony, SYNASTRY_BODIES, SynastryAspect, SynastryReport,
    Theme, ThemeScore, Tier, dominant_element, element_compatibility, pair_weight, synastry,
};
