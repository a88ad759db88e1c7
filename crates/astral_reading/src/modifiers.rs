//! Permanent natal tendencies: (body, sign) → per-domain deltas.

use astral_core::{Body, Sign};

use crate::domain::Domain;
use crate::domain::Domain::*;

/// One row of the natal modifier table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NatalModifier {
    pub body: Body,
    pub sign: Sign,
    pub deltas: &'static [(Domain, f64)],
    pub warning: Option<&'static str>,
}

impl NatalModifier {
    /// Delta for one domain, if this row touches it.
    pub fn delta(&self, domain: Domain) -> Option<f64> {
        self.deltas
            .iter()
            .find(|(d, _)| *d == domain)
            .map(|&(_, v)| v)
    }
}

const fn row(
    body: Body,
    sign: Sign,
    deltas: &'static [(Domain, f64)],
    warning: Option<&'static str>,
) -> NatalModifier {
    NatalModifier {
        body,
        sign,
        deltas,
        warning,
    }
}

/// Full modifier table.
pub const NATAL_MODIFIERS: &[NatalModifier] = &[
    row(
        Body::Venus,
        Sign::Pisces,
        &[(Money, -1.0), (Love, 1.0)],
        Some("Venus in Pisces: idealism can blur money judgement"),
    ),
    row(Body::Mars, Sign::Aries, &[(Career, 1.0), (Health, 1.0)], None),
    row(
        Body::Mars,
        Sign::Cancer,
        &[(Decisions, -1.0), (Health, -0.5)],
        Some("Mars in Cancer: moods can drive decisions"),
    ),
    row(Body::Mars, Sign::Libra, &[(Decisions, -0.5), (Love, 0.5)], None),
    row(Body::Venus, Sign::Taurus, &[(Money, 1.0), (Love, 1.0)], None),
    row(Body::Venus, Sign::Libra, &[(Love, 1.0), (Social, 1.0)], None),
    row(
        Body::Venus,
        Sign::Scorpio,
        &[(Love, 0.5), (Money, -0.5)],
        Some("Venus in Scorpio: intensity can tip into possessiveness"),
    ),
    row(Body::Venus, Sign::Virgo, &[(Love, -0.5), (Health, 0.5)], None),
    row(Body::Mercury, Sign::Gemini, &[(Social, 1.0), (Decisions, 0.5)], None),
    row(Body::Mercury, Sign::Virgo, &[(Decisions, 1.0), (Career, 0.5)], None),
    row(
        Body::Mercury,
        Sign::Pisces,
        &[(Decisions, -1.0)],
        Some("Mercury in Pisces: check the facts before committing"),
    ),
    row(
        Body::Mercury,
        Sign::Sagittarius,
        &[(Decisions, -0.5), (Spiritual, 0.5)],
        None,
    ),
    row(
        Body::Jupiter,
        Sign::Sagittarius,
        &[(Spiritual, 1.0), (Money, 0.5)],
        None,
    ),
    row(Body::Jupiter, Sign::Cancer, &[(Money, 1.0), (Love, 0.5)], None),
    row(
        Body::Jupiter,
        Sign::Capricorn,
        &[(Money, -0.5)],
        Some("Jupiter in Capricorn: caution can cap financial upside"),
    ),
    row(Body::Saturn, Sign::Capricorn, &[(Career, 1.0), (Money, 0.5)], None),
    row(
        Body::Saturn,
        Sign::Aries,
        &[(Decisions, -1.0)],
        Some("Saturn in Aries: impatience fights long-term plans"),
    ),
    row(
        Body::Saturn,
        Sign::Cancer,
        &[(Love, -0.5), (Health, -0.5)],
        Some("Saturn in Cancer: emotional guardedness weighs on closeness"),
    ),
    row(Body::Moon, Sign::Cancer, &[(Love, 1.0), (Health, 0.5)], None),
    row(Body::Moon, Sign::Capricorn, &[(Love, -0.5), (Career, 0.5)], None),
    row(Body::Moon, Sign::Scorpio, &[(Health, -0.5), (Spiritual, 1.0)], None),
    row(Body::Sun, Sign::Leo, &[(Creativity, 1.0), (Career, 0.5)], None),
    row(Body::Sun, Sign::Libra, &[(Decisions, -0.5), (Social, 0.5)], None),
    row(
        Body::Neptune,
        Sign::Pisces,
        &[(Spiritual, 1.0), (Money, -0.5)],
        None,
    ),
];

/// Modifier row for a placement, if any.
pub fn modifier_for(body: Body, sign: Sign) -> Option<&'static NatalModifier> {
    NATAL_MODIFIERS
        .iter()
        .find(|m| m.body == body && m.sign == sign)
}
