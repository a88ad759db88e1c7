//! Question decision engine.
//!
//! A free-text question is classified into a domain, its action is read
//! as push (initiate) or pull (withdraw), and the day's domain score is
//! mapped to an ordinal verdict. Secondary evidence can only strengthen a
//! verdict on the side it already sits; it never crosses from NO to YES or
//! back.

use std::fmt;

use serde::{Deserialize, Serialize};

use astral_config::DecisionSection;
use astral_core::LunarPhase;

use crate::domain::{ALL_DOMAINS, Domain, influences_domain};
use crate::keywords::{NEGATION_PHRASES, PULL_PHRASES, contains_phrase, keywords, normalize};
use crate::report::DailyReport;
use crate::scoring::{aspect_impact, is_relevant};

/// Relevant transits that contribute secondary points.
pub const SECONDARY_TRANSITS: usize = 3;
/// Rank weights of those transits.
pub const TRANSIT_RANK_WEIGHTS: [f64; SECONDARY_TRANSITS] = [1.0, 0.6, 0.3];
/// Cap on one transit's points before rank weighting.
pub const TRANSIT_POINT_CAP: f64 = 15.0;
/// Points per relevant retrograde, and the floor of their sum.
pub const RETROGRADE_POINTS: f64 = -15.0;
pub const RETROGRADE_FLOOR: f64 = -30.0;
/// Clamp on the secondary total.
pub const SECONDARY_CAP: f64 = 50.0;

/// Six-level ordinal answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    HardYes,
    SoftYes,
    Neutral,
    SoftNo,
    HardNo,
    Unclear,
}

impl Verdict {
    /// ≥8 hard yes, ≥7 soft yes, 6 neutral, ≥4 soft no, else hard no.
    pub const fn from_score(score: u8) -> Self {
        match score {
            8.. => Self::HardYes,
            7 => Self::SoftYes,
            6 => Self::Neutral,
            4..=5 => Self::SoftNo,
            _ => Self::HardNo,
        }
    }

    /// Swap YES and NO sides; neutral and unclear stay.
    pub const fn mirror(self) -> Self {
        match self {
            Self::HardYes => Self::HardNo,
            Self::SoftYes => Self::SoftNo,
            Self::SoftNo => Self::SoftYes,
            Self::HardNo => Self::HardYes,
            v => v,
        }
    }

    pub const fn is_yes(self) -> bool {
        matches!(self, Self::HardYes | Self::SoftYes)
    }

    pub const fn is_no(self) -> bool {
        matches!(self, Self::HardNo | Self::SoftNo)
    }

    /// Strengthen by secondary points without crossing sides.
    pub fn strengthen(self, secondary: f64) -> Self {
        match self {
            Self::Neutral if secondary > 20.0 => Self::SoftYes,
            Self::Neutral if secondary < -20.0 => Self::SoftNo,
            Self::SoftNo if secondary < -30.0 => Self::HardNo,
            Self::SoftYes if secondary > 30.0 => Self::HardYes,
            v => v,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::HardYes => "HARD_YES",
            Self::SoftYes => "SOFT_YES",
            Self::Neutral => "NEUTRAL",
            Self::SoftNo => "SOFT_NO",
            Self::HardNo => "HARD_NO",
            Self::Unclear => "UNCLEAR",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the asked-about action initiates or withdraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Push,
    Pull,
}

/// Directional yes/no question or open-ended guidance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionMode {
    #[default]
    YesNo,
    Guidance,
}

/// Best-matching domain of a question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub domain: Domain,
    /// `min(1, best/2) × best/total`, in (0, 1].
    pub confidence: f64,
    /// Keyword hits of the winning domain.
    pub hits: u32,
}

/// Source of a contributing factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    DomainScore,
    Transit,
    MoonPhase,
    Retrograde,
    Unclear,
}

/// One contributing factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub kind: FactorKind,
    pub description: String,
    /// Points contributed (domain score factors carry the 1–10 score).
    pub points: f64,
}

/// Decision for one question against one daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub verdict: Verdict,
    /// [-100, 100].
    pub score: i32,
    pub factors: Vec<Factor>,
    pub domain: Option<Domain>,
    pub confidence: f64,
    pub polarity: Polarity,
    /// The question asked whether NOT to act.
    pub negated: bool,
    pub mode: QuestionMode,
}

/// Classify a question by keyword hits. `None` when nothing matches.
///
/// Ties go to the earlier domain.
pub fn classify(text: &str) -> Option<Classification> {
    let normalized = normalize(text);
    let mut hits = [0u32; 8];
    for d in ALL_DOMAINS {
        hits[d.index()] = keywords(d)
            .iter()
            .filter(|kw| contains_phrase(&normalized, kw))
            .count() as u32;
    }
    let total: u32 = hits.iter().sum();
    if total == 0 {
        return None;
    }
    let mut best = Domain::Love;
    for d in ALL_DOMAINS {
        if hits[d.index()] > hits[best.index()] {
            best = d;
        }
    }
    let b = f64::from(hits[best.index()]);
    Some(Classification {
        domain: best,
        confidence: (b / 2.0).min(1.0) * b / f64::from(total),
        hits: hits[best.index()],
    })
}

/// Push unless the text contains a withdrawing phrase.
pub fn polarity(text: &str) -> Polarity {
    let normalized = normalize(text);
    if PULL_PHRASES.iter().any(|p| contains_phrase(&normalized, p)) {
        Polarity::Pull
    } else {
        Polarity::Push
    }
}

/// Whether the question asks about NOT doing something.
pub fn is_negated(text: &str) -> bool {
    let normalized = normalize(text);
    NEGATION_PHRASES.iter().any(|p| contains_phrase(&normalized, p))
}

/// Lunar trend points in push orientation.
pub fn moon_trend_points(phase: LunarPhase) -> f64 {
    match phase {
        LunarPhase::New => 10.0,
        LunarPhase::Full => 0.0,
        p if p.is_waxing() => 5.0,
        _ => -5.0,
    }
}

/// Secondary factors for a domain, push orientation, and their clamped sum.
pub fn secondary_factors(domain: Domain, report: &DailyReport) -> (Vec<Factor>, f64) {
    let mut factors = Vec::new();
    let mut total = 0.0;

    let relevant = report
        .transits
        .iter()
        .filter(|a| is_relevant(a, domain))
        .take(SECONDARY_TRANSITS);
    for (a, weight) in relevant.zip(TRANSIT_RANK_WEIGHTS) {
        let raw = (aspect_impact(a) * 10.0 * a.tightness()).clamp(-TRANSIT_POINT_CAP, TRANSIT_POINT_CAP);
        let points = raw * weight;
        total += points;
        factors.push(Factor {
            kind: FactorKind::Transit,
            description: format!("Transiting {} {} natal {}", a.comparison, a.aspect, a.reference),
            points,
        });
    }

    let moon = moon_trend_points(report.moon_phase.phase);
    total += moon;
    factors.push(Factor {
        kind: FactorKind::MoonPhase,
        description: format!("{} trend", report.moon_phase.phase),
        points: moon,
    });

    let mut retro_total = 0.0;
    for &body in report.retrogrades.iter().filter(|&&b| influences_domain(b, domain)) {
        retro_total += RETROGRADE_POINTS;
        factors.push(Factor {
            kind: FactorKind::Retrograde,
            description: format!("{body} retrograde"),
            points: RETROGRADE_POINTS,
        });
    }
    total += retro_total.max(RETROGRADE_FLOOR);

    (factors, total.clamp(-SECONDARY_CAP, SECONDARY_CAP))
}

/// Signed score in [-100, 100] for an effective domain score.
///
/// Held on the verdict's side: a NO never carries a positive score and a
/// YES never a negative one.
pub fn numeric_score(effective: u8, secondary: f64, verdict: Verdict) -> i32 {
    let raw = ((f64::from(effective) - 5.5) * 18.0 + secondary)
        .round()
        .clamp(-100.0, 100.0) as i32;
    if verdict.is_no() {
        raw.min(0)
    } else if verdict.is_yes() {
        raw.max(0)
    } else {
        raw
    }
}

/// Decide a question against a daily report.
pub fn decide(
    text: &str,
    mode: QuestionMode,
    report: &DailyReport,
    config: &DecisionSection,
) -> ScoringResult {
    let polarity = polarity(text);
    let negated = is_negated(text);
    let classification = classify(text);
    let confidence = classification.map_or(0.0, |c| c.confidence);

    let Some(class) = classification.filter(|c| c.confidence >= config.confidence_floor) else {
        log::debug!("question unclear (confidence {confidence:.2}): {text:?}");
        return ScoringResult {
            verdict: Verdict::Unclear,
            score: 0,
            factors: vec![Factor {
                kind: FactorKind::Unclear,
                description: "question does not clearly match a life domain".to_string(),
                points: 0.0,
            }],
            domain: classification.map(|c| c.domain),
            confidence,
            polarity,
            negated,
            mode,
        };
    };

    let domain_score = report.category(class.domain).map_or(5, |c| c.score);
    let effective = match polarity {
        Polarity::Push => domain_score,
        Polarity::Pull => 11 - domain_score.clamp(1, 10),
    };

    let mut factors = vec![Factor {
        kind: FactorKind::DomainScore,
        description: match polarity {
            Polarity::Push => format!("{} score {}/10", class.domain, domain_score),
            Polarity::Pull => format!(
                "{} score {}/10, inverted to {} for a withdrawing action",
                class.domain, domain_score, effective
            ),
        },
        points: f64::from(effective),
    }];

    let (mut secondary_list, mut secondary) = secondary_factors(class.domain, report);
    if polarity == Polarity::Pull {
        secondary = -secondary;
        for f in &mut secondary_list {
            f.points = -f.points;
        }
    }
    factors.extend(secondary_list);

    let mut verdict = Verdict::from_score(effective).strengthen(secondary);
    let mut score = numeric_score(effective, secondary, verdict);
    if negated {
        verdict = verdict.mirror();
        score = -score;
    }

    log::debug!(
        "decided {verdict} ({score}) for {} question, secondary {secondary:.1}",
        class.domain
    );
    ScoringResult {
        verdict,
        score,
        factors,
        domain: Some(class.domain),
        confidence: class.confidence,
        polarity,
        negated,
        mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_score(10), Verdict::HardYes);
        assert_eq!(Verdict::from_score(8), Verdict::HardYes);
        assert_eq!(Verdict::from_score(7), Verdict::SoftYes);
        assert_eq!(Verdict::from_score(6), Verdict::Neutral);
        assert_eq!(Verdict::from_score(5), Verdict::SoftNo);
        assert_eq!(Verdict::from_score(4), Verdict::SoftNo);
        assert_eq!(Verdict::from_score(3), Verdict::HardNo);
        assert_eq!(Verdict::from_score(1), Verdict::HardNo);
    }

    #[test]
    fn strengthen_never_crosses() {
        assert_eq!(Verdict::SoftNo.strengthen(50.0), Verdict::SoftNo);
        assert_eq!(Verdict::HardNo.strengthen(50.0), Verdict::HardNo);
        assert_eq!(Verdict::SoftYes.strengthen(-50.0), Verdict::SoftYes);
        assert_eq!(Verdict::SoftYes.strengthen(30.5), Verdict::HardYes);
        assert_eq!(Verdict::SoftYes.strengthen(30.0), Verdict::SoftYes);
        assert_eq!(Verdict::SoftNo.strengthen(-31.0), Verdict::HardNo);
        assert_eq!(Verdict::Neutral.strengthen(21.0), Verdict::SoftYes);
        assert_eq!(Verdict::Neutral.strengthen(-21.0), Verdict::SoftNo);
        assert_eq!(Verdict::Neutral.strengthen(20.0), Verdict::Neutral);
    }

    #[test]
    fn mirror_pairs() {
        assert_eq!(Verdict::HardYes.mirror(), Verdict::HardNo);
        assert_eq!(Verdict::SoftNo.mirror(), Verdict::SoftYes);
        assert_eq!(Verdict::Neutral.mirror(), Verdict::Neutral);
        assert_eq!(Verdict::Unclear.mirror(), Verdict::Unclear);
    }

    #[test]
    fn classify_love() {
        let c = classify("Should I text my ex tonight?").unwrap();
        assert_eq!(c.domain, Domain::Love);
        assert_eq!(c.hits, 1);
        assert!((c.confidence - 0.5).abs() < 1e-12);
    }

    #[test]
    fn classify_full_confidence() {
        let c = classify("Should I ask my boss for a promotion at work?").unwrap();
        assert_eq!(c.domain, Domain::Career);
        assert_eq!(c.hits, 3);
        assert_eq!(c.confidence, 1.0);
    }

    #[test]
    fn classify_tie_goes_to_earlier_domain() {
        // One love hit, one money hit.
        let c = classify("buy a gift for my partner").unwrap();
        assert_eq!(c.domain, Domain::Love);
        assert!((c.confidence - 0.25).abs() < 1e-12);
    }

    #[test]
    fn classify_nothing() {
        assert!(classify("what is the weather like").is_none());
    }

    #[test]
    fn polarity_detection() {
        assert_eq!(polarity("Should I rest today?"), Polarity::Pull);
        assert_eq!(polarity("Should I hold off on the contract?"), Polarity::Pull);
        assert_eq!(polarity("Should I start the project?"), Polarity::Push);
        assert_eq!(polarity("Is my interest rate good?"), Polarity::Push);
    }

    #[test]
    fn negation_detection() {
        assert!(is_negated("Should I not call her?"));
        assert!(is_negated("Shouldn't I apply?"));
        assert!(is_negated("should I avoid the party"));
        assert!(!is_negated("Should I go to the party?"));
    }

    #[test]
    fn score_stays_on_verdict_side() {
        // 5 is SOFT_NO; +25 secondary would otherwise read as +16.
        let v = Verdict::from_score(5).strengthen(25.0);
        assert_eq!(v, Verdict::SoftNo);
        assert_eq!(numeric_score(5, 25.0, v), 0);
        assert_eq!(numeric_score(5, -10.0, v), -19);

        let v = Verdict::from_score(7).strengthen(-50.0);
        assert_eq!(numeric_score(7, -50.0, v), 0);
        assert_eq!(numeric_score(9, 50.0, Verdict::HardYes), 100);
    }

    #[test]
    fn neutral_score_keeps_its_sign() {
        assert_eq!(numeric_score(6, -20.0, Verdict::Neutral), -11);
        assert_eq!(numeric_score(6, 10.0, Verdict::Neutral), 19);
    }

    #[test]
    fn moon_trend() {
        assert_eq!(moon_trend_points(LunarPhase::New), 10.0);
        assert_eq!(moon_trend_points(LunarPhase::WaxingGibbous), 5.0);
        assert_eq!(moon_trend_points(LunarPhase::Full), 0.0);
        assert_eq!(moon_trend_points(LunarPhase::LastQuarter), -5.0);
    }
}
