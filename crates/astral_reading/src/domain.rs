//! Life domains and the fixed body tables that feed them.

use std::fmt;

use serde::{Deserialize, Serialize};

use astral_core::Body;

/// The eight scored life domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Love,
    Career,
    Money,
    Health,
    Social,
    Decisions,
    Creativity,
    Spiritual,
}

/// All domains in report order.
pub const ALL_DOMAINS: [Domain; 8] = [
    Domain::Love,
    Domain::Career,
    Domain::Money,
    Domain::Health,
    Domain::Social,
    Domain::Decisions,
    Domain::Creativity,
    Domain::Spiritual,
];

impl Domain {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Career => "career",
            Self::Money => "money",
            Self::Health => "health",
            Self::Social => "social",
            Self::Decisions => "decisions",
            Self::Creativity => "creativity",
            Self::Spiritual => "spiritual",
        }
    }

    /// 0-based index into [`ALL_DOMAINS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_DOMAINS
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Domains a body speaks to.
pub const fn influences(body: Body) -> &'static [Domain] {
    use Domain::*;
    match body {
        Body::Sun => &[Career, Love, Creativity, Health],
        Body::Moon => &[Love, Health, Social, Spiritual],
        Body::Mercury => &[Career, Decisions, Social, Money],
        Body::Venus => &[Love, Money, Social, Creativity],
        Body::Mars => &[Career, Health, Decisions, Love],
        Body::Jupiter => &[Money, Career, Spiritual, Social],
        Body::Saturn => &[Career, Money, Decisions, Health],
        Body::Uranus => &[Creativity, Decisions, Social],
        Body::Neptune => &[Spiritual, Creativity, Love],
        Body::Pluto => &[Money, Spiritual, Career],
        Body::NorthNode => &[Spiritual, Decisions],
        Body::SouthNode => &[Spiritual],
        Body::Chiron => &[Health, Spiritual],
    }
}

/// Whether `body` influences `domain`.
pub fn influences_domain(body: Body, domain: Domain) -> bool {
    influences(body).contains(&domain)
}

/// Benefic/malefic classification used for conjunctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyNature {
    Benefic,
    Malefic,
    Neutral,
}

/// Sun, Moon, Venus and Jupiter are benefic; Mars, Saturn, Uranus and
/// Pluto malefic; everything else neutral.
pub const fn body_nature(body: Body) -> BodyNature {
    match body {
        Body::Sun | Body::Moon | Body::Venus | Body::Jupiter => BodyNature::Benefic,
        Body::Mars | Body::Saturn | Body::Uranus | Body::Pluto => BodyNature::Malefic,
        _ => BodyNature::Neutral,
    }
}
