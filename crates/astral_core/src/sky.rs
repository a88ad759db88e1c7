//! Snapshot of the current sky.

use serde::{Deserialize, Serialize};

use crate::body::{Body, PLANETS};
use crate::phase::MoonPhase;
use crate::provider::{BodyPosition, LongitudeProvider};

/// Positions of the transiting bodies at one Julian Day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sky {
    pub julian_day: f64,
    /// Sun through Pluto, then Chiron when requested.
    pub positions: Vec<BodyPosition>,
    pub moon_phase: MoonPhase,
}

impl Sky {
    /// Compute the sky at `jd` with the ten planets (and Chiron).
    pub fn at<P: LongitudeProvider>(provider: &P, jd: f64, include_minor_body: bool) -> Self {
        let mut positions: Vec<BodyPosition> =
            PLANETS.iter().map(|&b| provider.position(b, jd)).collect();
        if include_minor_body {
            positions.push(provider.position(Body::Chiron, jd));
        }
        let sun = positions[0].longitude;
        let moon = positions[1].longitude;
        Self {
            julian_day: jd,
            positions,
            moon_phase: MoonPhase::from_longitudes(sun, moon),
        }
    }

    /// Position of one body, if it is part of the snapshot.
    pub fn get(&self, body: Body) -> Option<&BodyPosition> {
        self.positions.iter().find(|p| p.body == body)
    }

    /// Bodies currently retrograde, in body order.
    pub fn retrogrades(&self) -> Vec<Body> {
        self.positions
            .iter()
            .filter(|p| p.retrograde)
            .map(|p| p.body)
            .collect()
    }
}
