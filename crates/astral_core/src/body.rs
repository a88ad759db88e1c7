//! Tracked bodies.
//!
//! Ten physical bodies (Sun through Pluto), the two mean lunar nodes and
//! one minor body (Chiron). Chart points such as the ascendant or the
//! fortune point are not bodies; they live with the chart.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A body whose longitude is a function of time alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
    Chiron,
}

/// All 13 tracked bodies in index order.
pub const ALL_BODIES: [Body; 13] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
    Body::SouthNode,
    Body::Chiron,
];

/// Sun through Pluto.
pub const PLANETS: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Chiron => "Chiron",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
            Self::NorthNode => 10,
            Self::SouthNode => 11,
            Self::Chiron => 12,
        }
    }

    /// Sun and Moon never station.
    pub const fn is_luminary(self) -> bool {
        matches!(self, Self::Sun | Self::Moon)
    }

    /// Mean lunar nodes (always regressing).
    pub const fn is_node(self) -> bool {
        matches!(self, Self::NorthNode | Self::SouthNode)
    }

    /// Sun, Moon, Mercury, Venus, Mars.
    pub const fn is_personal(self) -> bool {
        matches!(
            self,
            Self::Sun | Self::Moon | Self::Mercury | Self::Venus | Self::Mars
        )
    }

    /// Look up a body by case-insensitive English name.
    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(&n))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
