//! Geometric chart patterns by exhaustive enumeration.
//!
//! At most 12 candidate bodies, so triples and quadruples are simply
//! enumerated. The South Node is never a candidate: it always opposes the
//! North Node and would turn every square to the nodes into a T-square.

use serde::{Deserialize, Serialize};

use astral_core::{Body, BodyPosition, Sign};

use crate::aspect::{AspectType, OrbTable, match_aspect};
use crate::geometry::angular_distance;

/// Minimum number of bodies sharing one sign for a stellium.
pub const STELLIUM_MIN_BODIES: usize = 3;

/// A detected chart pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pattern {
    Stellium { sign: Sign, bodies: Vec<Body> },
    GrandTrine { bodies: [Body; 3] },
    TSquare { opposition: [Body; 2], apex: Body },
    GrandCross { bodies: [Body; 4] },
}

impl Pattern {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Stellium { .. } => "stellium",
            Self::GrandTrine { .. } => "grand trine",
            Self::TSquare { .. } => "T-square",
            Self::GrandCross { .. } => "grand cross",
        }
    }

    /// Every body taking part in the pattern.
    pub fn bodies(&self) -> Vec<Body> {
        match self {
            Self::Stellium { bodies, .. } => bodies.clone(),
            Self::GrandTrine { bodies } => bodies.to_vec(),
            Self::TSquare { opposition, apex } => vec![opposition[0], opposition[1], *apex],
            Self::GrandCross { bodies } => bodies.to_vec(),
        }
    }
}

fn is(a: &BodyPosition, b: &BodyPosition, aspect: AspectType, orbs: &OrbTable) -> bool {
    match_aspect(angular_distance(a.longitude, b.longitude), orbs).is_some_and(|m| m.aspect == aspect)
}

/// Detect all patterns among `positions`.
///
/// Output order: stelliums by sign, grand trines, grand crosses, then
/// T-squares not already contained in a reported grand cross.
pub fn detect_patterns(positions: &[BodyPosition], orbs: &OrbTable) -> Vec<Pattern> {
    let candidates: Vec<&BodyPosition> = positions
        .iter()
        .filter(|p| p.body != Body::SouthNode)
        .collect();
    let n = candidates.len();
    let mut out = Vec::new();

    // Stellium
    for sign in astral_core::ALL_SIGNS {
        let bodies: Vec<Body> = candidates
            .iter()
            .filter(|p| p.sign == sign)
            .map(|p| p.body)
            .collect();
        if bodies.len() >= STELLIUM_MIN_BODIES {
            out.push(Pattern::Stellium { sign, bodies });
        }
    }

    // Grand trine
    for i in 0..n {
        for j in (i + 1)..n {
            if !is(candidates[i], candidates[j], AspectType::Trine, orbs) {
                continue;
            }
            for k in (j + 1)..n {
                if is(candidates[i], candidates[k], AspectType::Trine, orbs)
                    && is(candidates[j], candidates[k], AspectType::Trine, orbs)
                {
                    out.push(Pattern::GrandTrine {
                        bodies: [candidates[i].body, candidates[j].body, candidates[k].body],
                    });
                }
            }
        }
    }

    // Grand cross: two oppositions whose ends are all mutually square.
    let mut crosses: Vec<[Body; 4]> = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    let q = [candidates[a], candidates[b], candidates[c], candidates[d]];
                    let pairings = [(0, 1, 2, 3), (0, 2, 1, 3), (0, 3, 1, 2)];
                    let found = pairings.iter().any(|&(w, x, y, z)| {
                        is(q[w], q[x], AspectType::Opposition, orbs)
                            && is(q[y], q[z], AspectType::Opposition, orbs)
                            && is(q[w], q[y], AspectType::Square, orbs)
                            && is(q[w], q[z], AspectType::Square, orbs)
                            && is(q[x], q[y], AspectType::Square, orbs)
                            && is(q[x], q[z], AspectType::Square, orbs)
                    });
                    if found {
                        crosses.push([q[0].body, q[1].body, q[2].body, q[3].body]);
                    }
                }
            }
        }
    }

    // T-square
    let mut t_squares = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if !is(candidates[i], candidates[j], AspectType::Opposition, orbs) {
                continue;
            }
            for (k, apex) in candidates.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                if !(is(candidates[i], apex, AspectType::Square, orbs)
                    && is(candidates[j], apex, AspectType::Square, orbs))
                {
                    continue;
                }
                let members = [candidates[i].body, candidates[j].body, apex.body];
                let in_cross = crosses
                    .iter()
                    .any(|cross| members.iter().all(|m| cross.contains(m)));
                if !in_cross {
                    t_squares.push(Pattern::TSquare {
                        opposition: [candidates[i].body, candidates[j].body],
                        apex: apex.body,
                    });
                }
            }
        }
    }

    out.extend(crosses.into_iter().map(|bodies| Pattern::GrandCross { bodies }));
    out.extend(t_squares);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(body: Body, lon: f64) -> BodyPosition {
        BodyPosition::fixed(body, lon)
    }

    #[test]
    fn stellium_in_leo() {
        let ps = [
            pos(Body::Sun, 125.0),
            pos(Body::Mercury, 130.0),
            pos(Body::Venus, 140.0),
            pos(Body::Mars, 200.0),
        ];
        let found = detect_patterns(&ps, &OrbTable::natal());
        assert_eq!(
            found,
            vec![Pattern::Stellium {
                sign: Sign::Leo,
                bodies: vec![Body::Sun, Body::Mercury, Body::Venus],
            }]
        );
    }

    #[test]
    fn two_bodies_is_not_a_stellium() {
        let ps = [pos(Body::Sun, 125.0), pos(Body::Mercury, 130.0)];
        assert!(detect_patterns(&ps, &OrbTable::natal()).is_empty());
    }

    #[test]
    fn grand_trine_within_orb() {
        let ps = [
            pos(Body::Sun, 5.0),
            pos(Body::Moon, 127.0),
            pos(Body::Jupiter, 243.0),
        ];
        let found = detect_patterns(&ps, &OrbTable::natal());
        assert_eq!(
            found,
            vec![Pattern::GrandTrine {
                bodies: [Body::Sun, Body::Moon, Body::Jupiter]
            }]
        );
    }

    #[test]
    fn t_square() {
        let ps = [
            pos(Body::Mars, 10.0),
            pos(Body::Saturn, 190.0),
            pos(Body::Moon, 100.0),
        ];
        let found = detect_patterns(&ps, &OrbTable::natal());
        assert_eq!(
            found,
            vec![Pattern::TSquare {
                opposition: [Body::Mars, Body::Saturn],
                apex: Body::Moon,
            }]
        );
    }

    #[test]
    fn grand_cross_suppresses_its_t_squares() {
        let ps = [
            pos(Body::Sun, 0.0),
            pos(Body::Moon, 90.0),
            pos(Body::Mars, 180.0),
            pos(Body::Saturn, 270.0),
        ];
        let found = detect_patterns(&ps, &OrbTable::natal());
        assert_eq!(
            found,
            vec![Pattern::GrandCross {
                bodies: [Body::Sun, Body::Moon, Body::Mars, Body::Saturn]
            }]
        );
    }

    #[test]
    fn node_axis_is_not_an_opposition() {
        let ps = [
            pos(Body::NorthNode, 0.0),
            pos(Body::SouthNode, 180.0),
            pos(Body::Venus, 90.0),
        ];
        assert!(detect_patterns(&ps, &OrbTable::natal()).is_empty());
    }

    #[test]
    fn pattern_bodies() {
        let p = Pattern::TSquare {
            opposition: [Body::Sun, Body::Moon],
            apex: Body::Mars,
        };
        assert_eq!(p.bodies(), vec![Body::Sun, Body::Moon, Body::Mars]);
        assert_eq!(p.name(), "T-square");
    }
}
