//! Two-chart compatibility.
//!
//! The transit engine is run across the ten planets and North Node of both
//! charts with the synastry orb table. Each aspect is weighted by its
//! unordered body pair and tagged with a relationship theme; the weighted
//! aspects, the element balance of both charts and the volume of contacts
//! fold into a 0–100 score and one of six tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use astral_chart::{Aspect, AspectNature, NatalChart, OrbTable, find_aspects};
use astral_core::{ALL_ELEMENTS, Body, Element, PLANETS, Sign};

/// Bodies compared between two charts.
pub const SYNASTRY_BODIES: [Body; 11] = [
    PLANETS[0], PLANETS[1], PLANETS[2], PLANETS[3], PLANETS[4], PLANETS[5], PLANETS[6],
    PLANETS[7], PLANETS[8], PLANETS[9], Body::NorthNode,
];

/// Weight of a pair not listed in the table.
pub const DEFAULT_PAIR_WEIGHT: u8 = 3;
/// Pairs with at least this base weight count as high-significance.
pub const HIGH_WEIGHT: u8 = 8;
/// Number of key aspects reported.
pub const KEY_ASPECTS: usize = 5;
/// Score returned when the charts form no aspects at all.
pub const NO_ASPECT_SCORE: u8 = 30;
/// Largest effective weight (base 10 at orb 0).
pub const MAX_EFFECTIVE_WEIGHT: f64 = 15.0;
/// Length cap of the strengths and challenges lists.
pub const MAX_NOTES: usize = 5;

/// The twelve relationship themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Attraction,
    Soul,
    Communication,
    Growth,
    Commitment,
    Transformation,
    Chaos,
    Dreams,
    Destiny,
    Passion,
    Emotional,
    Identity,
}

pub const ALL_THEMES: [Theme; 12] = [
    Theme::Attraction,
    Theme::Soul,
    Theme::Communication,
    Theme::Growth,
    Theme::Commitment,
    Theme::Transformation,
    Theme::Chaos,
    Theme::Dreams,
    Theme::Destiny,
    Theme::Passion,
    Theme::Emotional,
    Theme::Identity,
];

impl Theme {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attraction => "attraction",
            Self::Soul => "soul",
            Self::Communication => "communication",
            Self::Growth => "growth",
            Self::Commitment => "commitment",
            Self::Transformation => "transformation",
            Self::Chaos => "chaos",
            Self::Dreams => "dreams",
            Self::Destiny => "destiny",
            Self::Passion => "passion",
            Self::Emotional => "emotional",
            Self::Identity => "identity",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Pair table
// ---------------------------------------------------------------------------

const PAIR_TABLE: &[(Body, Body, u8, Theme)] = &[
    (Body::Venus, Body::Mars, 10, Theme::Attraction),
    (Body::Sun, Body::Moon, 9, Theme::Soul),
    (Body::Moon, Body::Moon, 7, Theme::Emotional),
    (Body::Sun, Body::Sun, 5, Theme::Identity),
    (Body::Venus, Body::Venus, 6, Theme::Attraction),
    (Body::Mars, Body::Mars, 5, Theme::Passion),
    (Body::Moon, Body::Venus, 8, Theme::Emotional),
    (Body::Moon, Body::Mars, 7, Theme::Passion),
    (Body::Sun, Body::Venus, 8, Theme::Attraction),
    (Body::Sun, Body::Mars, 7, Theme::Passion),
    (Body::Mercury, Body::Mercury, 6, Theme::Communication),
    (Body::Mercury, Body::Moon, 5, Theme::Communication),
    (Body::Mercury, Body::Venus, 5, Theme::Communication),
    (Body::Mercury, Body::Mars, 4, Theme::Communication),
    (Body::Sun, Body::Mercury, 3, Theme::Communication),
    (Body::Jupiter, Body::Sun, 6, Theme::Growth),
    (Body::Jupiter, Body::Moon, 6, Theme::Growth),
    (Body::Jupiter, Body::Venus, 7, Theme::Growth),
    (Body::Saturn, Body::Sun, 6, Theme::Commitment),
    (Body::Saturn, Body::Moon, 6, Theme::Commitment),
    (Body::Saturn, Body::Venus, 7, Theme::Commitment),
    (Body::Saturn, Body::Mars, 5, Theme::Commitment),
    (Body::Pluto, Body::Venus, 8, Theme::Transformation),
    (Body::Pluto, Body::Mars, 7, Theme::Transformation),
    (Body::Pluto, Body::Sun, 6, Theme::Transformation),
    (Body::Pluto, Body::Moon, 7, Theme::Transformation),
    (Body::Uranus, Body::Venus, 6, Theme::Chaos),
    (Body::Uranus, Body::Moon, 5, Theme::Chaos),
    (Body::Uranus, Body::Sun, 5, Theme::Chaos),
    (Body::Uranus, Body::Mars, 5, Theme::Chaos),
    (Body::Neptune, Body::Venus, 7, Theme::Dreams),
    (Body::Neptune, Body::Moon, 6, Theme::Dreams),
    (Body::Neptune, Body::Sun, 5, Theme::Dreams),
    (Body::NorthNode, Body::Sun, 8, Theme::Destiny),
    (Body::NorthNode, Body::Moon, 8, Theme::Destiny),
    (Body::NorthNode, Body::Venus, 8, Theme::Destiny),
    (Body::NorthNode, Body::Mars, 6, Theme::Destiny),
];

/// Base weight and theme of an unordered body pair.
pub fn pair_weight(a: Body, b: Body) -> (u8, Theme) {
    PAIR_TABLE
        .iter()
        .find(|(x, y, _, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map_or((DEFAULT_PAIR_WEIGHT, Theme::Identity), |&(_, _, w, t)| (w, t))
}

/// Share of an aspect's weight that counts toward its theme.
pub const fn theme_factor(nature: AspectNature) -> f64 {
    match nature {
        AspectNature::Harmonious => 1.0,
        AspectNature::Intense => 0.9,
        AspectNature::Challenging => 0.6,
    }
}

/// Share of an aspect's weight that counts as positive.
pub const fn positive_factor(nature: AspectNature) -> f64 {
    match nature {
        AspectNature::Harmonious => 1.0,
        AspectNature::Intense => 0.8,
        AspectNature::Challenging => 0.4,
    }
}

// ---------------------------------------------------------------------------
// Elements
// ---------------------------------------------------------------------------

/// Weight of a body in the element balance.
pub const fn element_weight(body: Body) -> u32 {
    match body {
        Body::Sun | Body::Moon | Body::Mercury | Body::Venus | Body::Mars => 2,
        Body::Jupiter | Body::Saturn | Body::Uranus | Body::Neptune | Body::Pluto => 1,
        _ => 0,
    }
}

/// Dominant element of a chart; ties resolve Fire, Earth, Air, Water.
pub fn dominant_element(chart: &NatalChart) -> Element {
    let mut totals = [0u32; 4];
    for b in &chart.bodies {
        totals[b.position.sign.element().index()] += element_weight(b.position.body);
    }
    let mut best = ALL_ELEMENTS[0];
    for e in ALL_ELEMENTS {
        if totals[e.index()] > totals[best.index()] {
            best = e;
        }
    }
    best
}

/// Compatibility of two elements, 0–10.
pub const fn element_compatibility(a: Element, b: Element) -> f64 {
    use Element::*;
    match (a, b) {
        (Fire, Fire) | (Earth, Earth) | (Air, Air) | (Water, Water) => 8.0,
        (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => 9.0,
        (Fire, Earth) | (Earth, Fire) => 4.0,
        (Fire, Water) | (Water, Fire) => 3.0,
        (Earth, Air) | (Air, Earth) => 4.0,
        (Air, Water) | (Water, Air) => 3.0,
    }
}

/// Element balance between two charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementHarmony {
    pub first: Element,
    pub second: Element,
    pub score: f64,
    pub descriptor: String,
}

fn harmony_descriptor(score: f64) -> &'static str {
    if score >= 8.0 {
        "Naturally harmonious"
    } else if score >= 5.0 {
        "Workable blend"
    } else {
        "Elemental friction"
    }
}

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// Six ordered compatibility tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Fated,
    Magnetic,
    Kindred,
    Complex,
    Friction,
    Distant,
}

impl Tier {
    /// ≥85 fated, ≥70 magnetic, ≥55 kindred, ≥40 complex, ≥25 friction.
    pub const fn from_score(score: u8) -> Self {
        match score {
            85.. => Self::Fated,
            70..=84 => Self::Magnetic,
            55..=69 => Self::Kindred,
            40..=54 => Self::Complex,
            25..=39 => Self::Friction,
            _ => Self::Distant,
        }
    }

    /// 0 for distant up to 5 for fated.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Distant => 0,
            Self::Friction => 1,
            Self::Complex => 2,
            Self::Kindred => 3,
            Self::Magnetic => 4,
            Self::Fated => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Fated => "fated",
            Self::Magnetic => "magnetic",
            Self::Kindred => "kindred",
            Self::Complex => "complex",
            Self::Friction => "friction",
            Self::Distant => "distant",
        }
    }

    const fn headlines(self) -> [&'static str; 3] {
        match self {
            Self::Fated => [
                "A connection written in the stars.",
                "Two charts that seem made for each other.",
                "The kind of bond that feels destined.",
            ],
            Self::Magnetic => [
                "A powerful pull draws you together.",
                "Chemistry that is hard to ignore.",
                "Sparks fly easily between you.",
            ],
            Self::Kindred => [
                "Kindred spirits with real common ground.",
                "An easy, natural understanding.",
                "A bond built on shared rhythm.",
            ],
            Self::Complex => [
                "Rich, layered and sometimes puzzling.",
                "Growth comes through working it out.",
                "Attraction and tension in equal measure.",
            ],
            Self::Friction => [
                "Opposites that rub against each other.",
                "Sparks of the abrasive kind.",
                "A pairing that asks for patience.",
            ],
            Self::Distant => [
                "Two orbits that rarely cross.",
                "Little common ground in the sky.",
                "A quiet connection with few contacts.",
            ],
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Order-independent FNV-1a seed from two names.
pub fn pair_seed(a: &str, b: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let (a, b) = (a.trim().to_lowercase(), b.trim().to_lowercase());
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hash = OFFSET;
    for byte in lo.bytes().chain(std::iter::once(0)).chain(hi.bytes()) {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Headline for a tier, picked by the pair seed.
pub fn headline(tier: Tier, seed: u64) -> &'static str {
    tier.headlines()[(seed % 3) as usize]
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// An aspect between two charts with its significance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynastryAspect {
    pub aspect: Aspect,
    /// Base pair weight, 1–10.
    pub weight: u8,
    /// Weight scaled by orb tightness, up to 1.5×.
    pub effective_weight: f64,
    pub theme: Theme,
}

impl SynastryAspect {
    fn from_aspect(aspect: Aspect) -> Self {
        let (weight, theme) = pair_weight(aspect.reference, aspect.comparison);
        Self {
            aspect,
            weight,
            effective_weight: f64::from(weight) * (1.0 + 0.5 * aspect.tightness()),
            theme,
        }
    }

    fn label(&self) -> String {
        format!(
            "{} {} {}",
            self.aspect.reference, self.aspect.aspect, self.aspect.comparison
        )
    }
}

/// Score of one theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeScore {
    pub theme: Theme,
    /// 0–10, one decimal.
    pub score: f64,
    pub aspect_count: usize,
}

/// Short description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSummary {
    pub name: String,
    pub sun: Option<Sign>,
    pub moon: Option<Sign>,
    pub rising: Sign,
    pub dominant_element: Element,
}

impl ChartSummary {
    pub fn of(chart: &NatalChart) -> Self {
        Self {
            name: chart.birth.name.clone(),
            sun: chart.sun_sign(),
            moon: chart.get(Body::Moon).map(|b| b.position.sign),
            rising: chart.ascendant.sign,
            dominant_element: dominant_element(chart),
        }
    }
}

/// Compatibility report for two charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynastryReport {
    pub first: ChartSummary,
    pub second: ChartSummary,
    /// 0–100.
    pub score: u8,
    pub tier: Tier,
    /// All cross-chart aspects, tightest first.
    pub aspects: Vec<SynastryAspect>,
    /// Heaviest aspects by effective weight.
    pub key_aspects: Vec<SynastryAspect>,
    /// One entry per theme, in theme order.
    pub themes: Vec<ThemeScore>,
    pub element_harmony: ElementHarmony,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub headline: String,
}

fn theme_scores(aspects: &[SynastryAspect]) -> Vec<ThemeScore> {
    ALL_THEMES
        .iter()
        .map(|&theme| {
            let contributions: Vec<f64> = aspects
                .iter()
                .filter(|a| a.theme == theme)
                .map(|a| a.effective_weight * theme_factor(a.aspect.aspect.nature()))
                .collect();
            let score = if contributions.is_empty() {
                0.0
            } else {
                let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
                ((mean / MAX_EFFECTIVE_WEIGHT * 10.0).clamp(0.0, 10.0) * 10.0).round() / 10.0
            };
            ThemeScore {
                theme,
                score,
                aspect_count: contributions.len(),
            }
        })
        .collect()
}

/// Weighted score from aspects and element harmony, before rounding.
fn raw_score(aspects: &[SynastryAspect], key: &[SynastryAspect], harmony: f64) -> f64 {
    if aspects.is_empty() {
        return f64::from(NO_ASPECT_SCORE);
    }
    let total: f64 = aspects.iter().map(|a| a.effective_weight).sum();
    let positive: f64 = aspects
        .iter()
        .map(|a| a.effective_weight * positive_factor(a.aspect.aspect.nature()))
        .sum();
    let ratio = if total > 0.0 { positive / total } else { 0.0 };
    let high = key.iter().filter(|a| a.weight >= HIGH_WEIGHT).count();
    60.0 * ratio
        + 1.5 * harmony
        + (0.75 * aspects.len() as f64).min(15.0)
        + (2.5 * high as f64).min(10.0)
}

fn push_note(list: &mut Vec<String>, note: String) {
    if list.len() < MAX_NOTES && !list.contains(&note) {
        list.push(note);
    }
}

/// Compare two natal charts.
pub fn synastry(first: &NatalChart, second: &NatalChart, orbs: &OrbTable) -> SynastryReport {
    let aspects: Vec<SynastryAspect> = find_aspects(
        &first.positions_of(&SYNASTRY_BODIES),
        &second.positions_of(&SYNASTRY_BODIES),
        orbs,
    )
    .into_iter()
    .map(SynastryAspect::from_aspect)
    .collect();

    let mut key_aspects = aspects.clone();
    key_aspects.sort_by(|a, b| b.effective_weight.total_cmp(&a.effective_weight));
    key_aspects.truncate(KEY_ASPECTS);

    let themes = theme_scores(&aspects);

    let (e1, e2) = (dominant_element(first), dominant_element(second));
    let harmony_score = element_compatibility(e1, e2);
    let element_harmony = ElementHarmony {
        first: e1,
        second: e2,
        score: harmony_score,
        descriptor: harmony_descriptor(harmony_score).to_string(),
    };

    let score = raw_score(&aspects, &key_aspects, harmony_score)
        .round()
        .clamp(0.0, 100.0) as u8;
    let tier = Tier::from_score(score);

    let mut strengths = Vec::new();
    let mut challenges = Vec::new();
    let mut ranked: Vec<&ThemeScore> = themes.iter().filter(|t| t.aspect_count > 0).collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    for t in ranked.iter().filter(|t| t.score >= 6.0) {
        push_note(&mut strengths, format!("Strong {} ({:.1}/10)", t.theme, t.score));
    }
    for a in &key_aspects {
        match a.aspect.aspect.nature() {
            AspectNature::Harmonious => push_note(&mut strengths, format!("{} flows easily", a.label())),
            AspectNature::Intense => push_note(&mut strengths, format!("{} fuses energies", a.label())),
            AspectNature::Challenging => {
                push_note(&mut challenges, format!("{} needs patience", a.label()))
            }
        }
    }
    for t in &ALL_THEMES {
        let (hard, soft) = aspects.iter().filter(|a| a.theme == *t).fold((0, 0), |(h, s), a| {
            if a.aspect.aspect.nature() == AspectNature::Challenging {
                (h + 1, s)
            } else {
                (h, s + 1)
            }
        });
        if hard > soft {
            push_note(&mut challenges, format!("Tension around {t}"));
        }
    }
    if harmony_score >= 8.0 {
        push_note(&mut strengths, format!("{} elements ({e1} + {e2})", element_harmony.descriptor));
    } else if harmony_score < 5.0 {
        push_note(&mut challenges, format!("{} ({e1} vs {e2})", element_harmony.descriptor));
    }

    let seed = pair_seed(&first.birth.name, &second.birth.name);
    log::debug!(
        "synastry {} / {}: score {score} ({tier}), {} aspects",
        first.birth.name,
        second.birth.name,
        aspects.len()
    );
    SynastryReport {
        first: ChartSummary::of(first),
        second: ChartSummary::of(second),
        score,
        tier,
        aspects,
        key_aspects,
        themes,
        element_harmony,
        strengths,
        challenges,
        headline: headline(tier, seed).to_string(),
    }
}
