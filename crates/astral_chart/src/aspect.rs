//! Aspect types, orb tables and the aspect matcher.
//!
//! Orbs are configuration, not logic: the same matcher serves natal,
//! transit and synastry comparisons with different tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// An aspect is "exact" when its orb is below this many degrees.
pub const EXACT_ORB_DEG: f64 = 1.0;

/// Named angular relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectType {
    Conjunction,
    SemiSextile,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

/// All aspect types in ascending angle order.
pub const ALL_ASPECTS: [AspectType; 7] = [
    AspectType::Conjunction,
    AspectType::SemiSextile,
    AspectType::Sextile,
    AspectType::Square,
    AspectType::Trine,
    AspectType::Quincunx,
    AspectType::Opposition,
];

/// Broad character of an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectNature {
    Harmonious,
    Intense,
    Challenging,
}

impl AspectType {
    /// Exact angle in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::SemiSextile => 30.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Quincunx => 150.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::SemiSextile => "semi-sextile",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Quincunx => "quincunx",
            Self::Opposition => "opposition",
        }
    }

    pub const fn nature(self) -> AspectNature {
        match self {
            Self::Conjunction => AspectNature::Intense,
            Self::SemiSextile | Self::Sextile | Self::Trine => AspectNature::Harmonious,
            Self::Square | Self::Quincunx | Self::Opposition => AspectNature::Challenging,
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maximum orb per aspect type, in degrees. `None` disables the aspect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbTable {
    pub conjunction: Option<f64>,
    pub semi_sextile: Option<f64>,
    pub sextile: Option<f64>,
    pub square: Option<f64>,
    pub trine: Option<f64>,
    pub quincunx: Option<f64>,
    pub opposition: Option<f64>,
}

impl OrbTable {
    /// Natal and transit orbs. Semi-sextile off.
    pub const fn natal() -> Self {
        Self {
            conjunction: Some(8.0),
            semi_sextile: None,
            sextile: Some(5.0),
            square: Some(7.0),
            trine: Some(7.0),
            quincunx: Some(3.0),
            opposition: Some(8.0),
        }
    }

    /// Tighter orbs for chart-to-chart comparison.
    pub const fn synastry() -> Self {
        Self {
            conjunction: Some(7.0),
            semi_sextile: None,
            sextile: Some(4.0),
            square: Some(6.0),
            trine: Some(6.0),
            quincunx: Some(2.0),
            opposition: Some(7.0),
        }
    }

    /// Maximum orb for one aspect type, if enabled.
    pub const fn max_orb(&self, aspect: AspectType) -> Option<f64> {
        match aspect {
            AspectType::Conjunction => self.conjunction,
            AspectType::SemiSextile => self.semi_sextile,
            AspectType::Sextile => self.sextile,
            AspectType::Square => self.square,
            AspectType::Trine => self.trine,
            AspectType::Quincunx => self.quincunx,
            AspectType::Opposition => self.opposition,
        }
    }

    /// Enabled aspects with their orbs, ascending by angle.
    pub fn enabled(&self) -> impl Iterator<Item = (AspectType, f64)> + '_ {
        ALL_ASPECTS
            .iter()
            .filter_map(|&a| self.max_orb(a).map(|orb| (a, orb)))
    }

    /// Orbs must be positive and finite, and no two windows may overlap.
    pub fn validate(&self) -> Result<(), ChartError> {
        let mut prev: Option<(AspectType, f64)> = None;
        for (aspect, orb) in self.enabled() {
            if !orb.is_finite() || orb <= 0.0 {
                return Err(ChartError::InvalidConfig("orbs must be positive and finite"));
            }
            if orb > 30.0 {
                return Err(ChartError::InvalidConfig("orbs must not exceed 30 degrees"));
            }
            if let Some((p, p_orb)) = prev {
                if p.angle() + p_orb >= aspect.angle() - orb {
                    return Err(ChartError::InvalidConfig("aspect orb windows overlap"));
                }
            }
            prev = Some((aspect, orb));
        }
        Ok(())
    }
}

impl Default for OrbTable {
    fn default() -> Self {
        Self::natal()
    }
}

/// A matched aspect for one angular distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub aspect: AspectType,
    /// Deviation from the exact angle, degrees.
    pub orb: f64,
    /// Maximum orb the match was accepted under.
    pub max_orb: f64,
}

impl AspectMatch {
    pub fn is_exact(&self) -> bool {
        self.orb < EXACT_ORB_DEG
    }
}

/// Match an angular distance in [0, 180] against the orb table.
///
/// The aspect whose exact angle is closest wins, provided the deviation
/// is within that aspect's orb; on an exact tie the smaller angle wins.
pub fn match_aspect(distance: f64, orbs: &OrbTable) -> Option<AspectMatch> {
    let mut best: Option<AspectMatch> = None;
    for (aspect, max_orb) in orbs.enabled() {
        let orb = (distance - aspect.angle()).abs();
        if orb > max_orb {
            continue;
        }
        if best.is_none_or(|b| orb < b.orb) {
            best = Some(AspectMatch {
                aspect,
                orb,
                max_orb,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        OrbTable::natal().validate().unwrap();
        OrbTable::synastry().validate().unwrap();
    }

    #[test]
    fn natal_windows_with_semi_sextile_still_disjoint() {
        let mut t = OrbTable::natal();
        t.semi_sextile = Some(2.0);
        t.validate().unwrap();
    }

    #[test]
    fn overlapping_windows_rejected() {
        let mut t = OrbTable::natal();
        // Trine window opens at 96, inside the square window ending at 97.
        t.trine = Some(24.0);
        assert_eq!(
            t.validate(),
            Err(ChartError::InvalidConfig("aspect orb windows overlap"))
        );
    }

    #[test]
    fn non_positive_orb_rejected() {
        let mut t = OrbTable::natal();
        t.square = Some(0.0);
        assert!(t.validate().is_err());
        t.square = Some(f64::NAN);
        assert!(t.validate().is_err());
    }

    #[test]
    fn exact_conjunction() {
        let m = match_aspect(0.0, &OrbTable::natal()).unwrap();
        assert_eq!(m.aspect, AspectType::Conjunction);
        assert!(m.is_exact());
    }

    #[test]
    fn trine_within_orb() {
        let m = match_aspect(124.5, &OrbTable::natal()).unwrap();
        assert_eq!(m.aspect, AspectType::Trine);
        assert!((m.orb - 4.5).abs() < 1e-12);
        assert!(!m.is_exact());
        assert_eq!(m.max_orb, 7.0);
    }

    #[test]
    fn gap_between_aspects_matches_nothing() {
        assert!(match_aspect(40.0, &OrbTable::natal()).is_none());
        assert!(match_aspect(105.0, &OrbTable::natal()).is_none());
    }

    #[test]
    fn disabled_aspect_never_matches() {
        assert!(match_aspect(30.0, &OrbTable::natal()).is_none());
        let mut t = OrbTable::natal();
        t.semi_sextile = Some(2.0);
        assert_eq!(match_aspect(30.0, &t).unwrap().aspect, AspectType::SemiSextile);
    }

    #[test]
    fn synastry_orbs_are_tighter() {
        assert!(match_aspect(7.5, &OrbTable::natal()).is_some());
        assert!(match_aspect(7.5, &OrbTable::synastry()).is_none());
    }

    #[test]
    fn closest_angle_wins_when_windows_touch() {
        let t = OrbTable {
            conjunction: None,
            semi_sextile: None,
            sextile: None,
            square: Some(20.0),
            trine: Some(20.0),
            quincunx: None,
            opposition: None,
        };
        let m = match_aspect(103.0, &t).unwrap();
        assert_eq!(m.aspect, AspectType::Square);
        assert!((m.orb - 13.0).abs() < 1e-12);
        assert_eq!(match_aspect(104.0, &t).unwrap().aspect, AspectType::Square);
        assert_eq!(match_aspect(106.0, &t).unwrap().aspect, AspectType::Trine);
        assert_eq!(match_aspect(100.0, &t).unwrap().aspect, AspectType::Square);
    }

    #[test]
    fn natures() {
        assert_eq!(AspectType::Conjunction.nature(), AspectNature::Intense);
        assert_eq!(AspectType::Trine.nature(), AspectNature::Harmonious);
        assert_eq!(AspectType::Quincunx.nature(), AspectNature::Challenging);
    }
}
