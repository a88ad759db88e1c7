//! Lunar phase from Sun–Moon elongation.
//!
//! The synodic cycle is split into eight 45-degree phases centred on the
//! principal phases (new at 0°, first quarter at 90°, full at 180°, last
//! quarter at 270°).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Eight named phases of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LunarPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All phases in cycle order.
pub const ALL_PHASES: [LunarPhase; 8] = [
    LunarPhase::New,
    LunarPhase::WaxingCrescent,
    LunarPhase::FirstQuarter,
    LunarPhase::WaxingGibbous,
    LunarPhase::Full,
    LunarPhase::WaningGibbous,
    LunarPhase::LastQuarter,
    LunarPhase::WaningCrescent,
];

impl LunarPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Phase for a Moon − Sun elongation in degrees.
    pub fn from_elongation(elongation: f64) -> Self {
        let e = normalize_360(elongation);
        let idx = (((e + 22.5) / 45.0).floor() as usize) % 8;
        ALL_PHASES[idx]
    }

    /// Crescent, quarter or gibbous on the way to full.
    pub const fn is_waxing(self) -> bool {
        matches!(
            self,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }

    /// Gibbous, quarter or crescent on the way to new.
    pub const fn is_waning(self) -> bool {
        matches!(
            self,
            Self::WaningGibbous | Self::LastQuarter | Self::WaningCrescent
        )
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lunar phase descriptor at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPhase {
    pub phase: LunarPhase,
    /// Moon − Sun in degrees [0, 360).
    pub elongation: f64,
    /// Illuminated fraction of the disc, [0, 1].
    pub illumination: f64,
}

impl MoonPhase {
    /// Phase from the Sun and Moon longitudes.
    pub fn from_longitudes(sun: f64, moon: f64) -> Self {
        let elongation = normalize_360(moon - sun);
        Self {
            phase: LunarPhase::from_elongation(elongation),
            elongation,
            illumination: (1.0 - elongation.to_radians().cos()) / 2.0,
        }
    }

    /// Shorthand for fixtures: a phase at its central elongation.
    pub fn of(phase: LunarPhase) -> Self {
        let idx = ALL_PHASES.iter().position(|p| *p == phase).unwrap_or(0);
        Self::from_longitudes(0.0, idx as f64 * 45.0)
    }
}
