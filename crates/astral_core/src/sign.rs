//! Zodiac signs and sign/degree decomposition.
//!
//! The tropical ecliptic is divided into 12 equal signs of 30 degrees,
//! starting from Aries at the vernal equinox point.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Elements in tie-break order.
pub const ALL_ELEMENTS: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Air => "air",
            Self::Water => "water",
        }
    }

    /// 0-based index into [`ALL_ELEMENTS`].
    pub const fn index(self) -> usize {
        match self {
            Self::Fire => 0,
            Self::Earth => 1,
            Self::Air => 2,
            Self::Water => 3,
        }
    }
}

impl Sign {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// The sign 180 degrees away.
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 6)
    }

    /// Fire, earth, air, water repeating from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Look up a sign by case-insensitive English name.
    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim();
        ALL_SIGNS.iter().copied().find(|s| s.name().eq_ignore_ascii_case(n))
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a longitude within its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPosition {
    /// The sign containing the longitude.
    pub sign: Sign,
    /// Decimal degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Whole arc-minutes past the whole degree (0..59).
    pub arcminute: u8,
}

impl SignPosition {
    /// Whole degrees within the sign (0..29).
    pub fn whole_degrees(&self) -> u8 {
        self.degree_in_sign.floor() as u8
    }
}

impl fmt::Display for SignPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:02}' {}", self.whole_degrees(), self.arcminute, self.sign)
    }
}

/// Decompose an ecliptic longitude into sign, degree and arc-minute.
///
/// Any real input is accepted; it is normalised to [0, 360) first.
pub fn sign_and_degree(longitude: f64) -> SignPosition {
    let lon = normalize_360(longitude);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let idx = ((lon / 30.0).floor() as u8).min(11);
    let degree_in_sign = (lon - idx as f64 * 30.0).clamp(0.0, 30.0 - f64::EPSILON * 32.0);
    let arcminute = (((degree_in_sign - degree_in_sign.floor()) * 60.0).floor() as u8).min(59);
    SignPosition {
        sign: ALL_SIGNS[idx as usize],
        degree_in_sign,
        arcminute,
    }
}

/// Longitude at a whole sign + degree (test and fixture helper).
pub fn longitude_of(sign: Sign, degree_in_sign: f64) -> f64 {
    normalize_360(sign.index() as f64 * 30.0 + degree_in_sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_display_uses_name() {
        assert_eq!(Element::Fire.to_string(), "fire");
        assert_eq!(format!("{} + {}", Element::Air, Element::Water), "air + water");
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Sign::from_index(i as u8), *s);
        }
    }

    #[test]
    fn boundary_0() {
        let p = sign_and_degree(0.0);
        assert_eq!(p.sign, Sign::Aries);
        assert!(p.degree_in_sign.abs() < 1e-12);
    }

    #[test]
    fn all_boundaries() {
        for i in 0..12u8 {
            let p = sign_and_degree(i as f64 * 30.0);
            assert_eq!(p.sign.index(), i, "boundary at {} deg", i as f64 * 30.0);
        }
    }

    #[test]
    fn mid_sign_with_minutes() {
        // 130.5 = 10°30' Leo
        let p = sign_and_degree(130.5);
        assert_eq!(p.sign, Sign::Leo);
        assert!((p.degree_in_sign - 10.5).abs() < 1e-10);
        assert_eq!(p.whole_degrees(), 10);
        assert_eq!(p.arcminute, 30);
        assert_eq!(p.to_string(), "10°30' Leo");
    }

    #[test]
    fn wrap_and_negative() {
        assert_eq!(sign_and_degree(365.0).sign, Sign::Aries);
        let p = sign_and_degree(-10.0);
        assert_eq!(p.sign, Sign::Pisces);
        assert!((p.degree_in_sign - 20.0).abs() < 1e-10);
    }

    #[test]
    fn elements_cycle() {
        assert_eq!(Sign::Aries.element(), Element::Fire);
        assert_eq!(Sign::Taurus.element(), Element::Earth);
        assert_eq!(Sign::Gemini.element(), Element::Air);
        assert_eq!(Sign::Cancer.element(), Element::Water);
        assert_eq!(Sign::Sagittarius.element(), Element::Fire);
        assert_eq!(Sign::Pisces.element(), Element::Water);
    }

    #[test]
    fn opposite_signs() {
        assert_eq!(Sign::Aries.opposite(), Sign::Libra);
        assert_eq!(Sign::Virgo.opposite(), Sign::Pisces);
    }

    #[test]
    fn longitude_of_roundtrip() {
        let lon = longitude_of(Sign::Leo, 10.0);
        assert!((lon - 130.0).abs() < 1e-12);
        assert_eq!(sign_and_degree(lon).sign, Sign::Leo);
    }

    #[test]
    fn from_name_case_insensitive() {
        assert_eq!(Sign::from_name("scorpio"), Some(Sign::Scorpio));
        assert_eq!(Sign::from_name("Ophiuchus"), None);
    }
}
