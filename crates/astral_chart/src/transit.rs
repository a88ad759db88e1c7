//! Aspects between two position sets.
//!
//! The same engine serves the current sky against a natal chart and one
//! natal chart against another. Reference positions are held fixed; the
//! comparison positions move at their daily speed.

use serde::{Deserialize, Serialize};

use astral_core::{Body, BodyPosition, Sky};

use crate::aspect::{AspectType, OrbTable, match_aspect};
use crate::geometry::angular_distance;
use crate::natal::NatalChart;

/// Look-ahead used to decide whether an aspect is applying.
pub const APPLYING_STEP_DAYS: f64 = 0.1;

/// One aspect between a reference body and a comparison body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// Body from the fixed set (natal chart, or the first chart).
    pub reference: Body,
    /// Body from the moving set (sky, or the second chart).
    pub comparison: Body,
    pub aspect: AspectType,
    /// Observed angular distance, [0, 180].
    pub angle: f64,
    /// Deviation from the exact angle.
    pub orb: f64,
    /// Maximum orb of the aspect type in the table used.
    pub max_orb: f64,
    /// `orb` is under one degree.
    pub exact: bool,
    /// The orb is shrinking.
    pub applying: bool,
}

impl Aspect {
    /// 1 at exactness, 0 at the edge of the orb.
    pub fn tightness(&self) -> f64 {
        if self.max_orb <= 0.0 {
            return 0.0;
        }
        (1.0 - self.orb / self.max_orb).clamp(0.0, 1.0)
    }

    /// Whether either side of the aspect is `body`.
    pub fn involves(&self, body: Body) -> bool {
        self.reference == body || self.comparison == body
    }
}

/// All aspects between `reference` and `comparison`, tightest first.
///
/// Every (reference, comparison) pair is tested once; ties on orb keep
/// reference order, then comparison order.
pub fn find_aspects(
    reference: &[BodyPosition],
    comparison: &[BodyPosition],
    orbs: &OrbTable,
) -> Vec<Aspect> {
    let mut found: Vec<(usize, usize, Aspect)> = Vec::new();
    for (i, r) in reference.iter().enumerate() {
        for (j, c) in comparison.iter().enumerate() {
            let angle = angular_distance(r.longitude, c.longitude);
            let Some(m) = match_aspect(angle, orbs) else {
                continue;
            };
            let ahead = angular_distance(r.longitude, c.longitude + c.speed * APPLYING_STEP_DAYS);
            let applying = (ahead - m.aspect.angle()).abs() < m.orb;
            found.push((
                i,
                j,
                Aspect {
                    reference: r.body,
                    comparison: c.body,
                    aspect: m.aspect,
                    angle,
                    orb: m.orb,
                    max_orb: m.max_orb,
                    exact: m.is_exact(),
                    applying,
                },
            ));
        }
    }
    found.sort_by(|a, b| {
        a.2.orb
            .total_cmp(&b.2.orb)
            .then(a.0.cmp(&b.0))
            .then(a.1.cmp(&b.1))
    });
    found.into_iter().map(|(_, _, a)| a).collect()
}

/// Current sky against a natal chart.
pub fn transits(chart: &NatalChart, sky: &Sky, orbs: &OrbTable) -> Vec<Aspect> {
    let aspects = find_aspects(&chart.positions(), &sky.positions, orbs);
    log::debug!(
        "{} transits to {} at JD {:.5}",
        aspects.len(),
        chart.birth.name,
        sky.julian_day
    );
    aspects
}
