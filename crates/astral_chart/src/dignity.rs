//! Essential dignity of a body in a sign.
//!
//! Modern rulerships (outer planets rule Aquarius, Pisces and Scorpio
//! alongside the traditional rulers). Detriment and fall are the signs
//! opposite rulership and exaltation.

use std::fmt;

use serde::{Deserialize, Serialize};

use astral_core::{Body, Sign};

/// Dignity rating with its strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Rulership,
    Exaltation,
    Detriment,
    Fall,
    Neutral,
}

impl Dignity {
    /// +2 / +1 / −1 / −2 / 0.
    pub const fn strength(self) -> i8 {
        match self {
            Self::Rulership => 2,
            Self::Exaltation => 1,
            Self::Detriment => -1,
            Self::Fall => -2,
            Self::Neutral => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rulership => "rulership",
            Self::Exaltation => "exaltation",
            Self::Detriment => "detriment",
            Self::Fall => "fall",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Dignity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Signs ruled by a body. Empty for the nodes and Chiron.
pub const fn rulerships(body: Body) -> &'static [Sign] {
    match body {
        Body::Sun => &[Sign::Leo],
        Body::Moon => &[Sign::Cancer],
        Body::Mercury => &[Sign::Gemini, Sign::Virgo],
        Body::Venus => &[Sign::Taurus, Sign::Libra],
        Body::Mars => &[Sign::Aries, Sign::Scorpio],
        Body::Jupiter => &[Sign::Sagittarius, Sign::Pisces],
        Body::Saturn => &[Sign::Capricorn, Sign::Aquarius],
        Body::Uranus => &[Sign::Aquarius],
        Body::Neptune => &[Sign::Pisces],
        Body::Pluto => &[Sign::Scorpio],
        Body::NorthNode | Body::SouthNode | Body::Chiron => &[],
    }
}

/// Exaltation sign of a body, if it has one.
pub const fn exaltation(body: Body) -> Option<Sign> {
    match body {
        Body::Sun => Some(Sign::Aries),
        Body::Moon => Some(Sign::Taurus),
        Body::Mercury => Some(Sign::Virgo),
        Body::Venus => Some(Sign::Pisces),
        Body::Mars => Some(Sign::Capricorn),
        Body::Jupiter => Some(Sign::Cancer),
        Body::Saturn => Some(Sign::Libra),
        Body::Uranus => Some(Sign::Scorpio),
        Body::Neptune => Some(Sign::Cancer),
        Body::Pluto => Some(Sign::Aries),
        Body::NorthNode | Body::SouthNode | Body::Chiron => None,
    }
}

/// Dignity of `body` in `sign`.
///
/// Precedence when a sign qualifies twice: rulership, exaltation,
/// detriment, fall.
pub fn dignity_in_sign(body: Body, sign: Sign) -> Dignity {
    let ruled = rulerships(body);
    if ruled.contains(&sign) {
        return Dignity::Rulership;
    }
    let exalted = exaltation(body);
    if exalted == Some(sign) {
        return Dignity::Exaltation;
    }
    if ruled.iter().any(|s| s.opposite() == sign) {
        return Dignity::Detriment;
    }
    if exalted.is_some_and(|s| s.opposite() == sign) {
        return Dignity::Fall;
    }
    Dignity::Neutral
}
