//! Property tests for angular distance and the aspect matcher.

use astral_chart::{EXACT_ORB_DEG, OrbTable, angular_distance, find_aspects, match_aspect};
use astral_core::{Body, BodyPosition, PLANETS};
use proptest::prelude::*;

fn positions(lons: &[f64]) -> Vec<BodyPosition> {
    PLANETS
        .iter()
        .zip(lons)
        .map(|(&b, &l)| BodyPosition::new(b, l, 0.0, 0.5))
        .collect()
}

proptest! {
    /// Distance is symmetric and folded into [0, 180].
    #[test]
    fn prop_distance_symmetric(a in -720.0f64..720.0, b in -720.0f64..720.0) {
        let d = angular_distance(a, b);
        prop_assert_eq!(d, angular_distance(b, a));
        prop_assert!((0.0..=180.0).contains(&d));
    }

    /// Matching the distance in either direction gives the same aspect.
    #[test]
    fn prop_match_symmetric(a in 0.0f64..360.0, b in 0.0f64..360.0) {
        let t = OrbTable::natal();
        prop_assert_eq!(
            match_aspect(angular_distance(a, b), &t),
            match_aspect(angular_distance(b, a), &t)
        );
    }

    /// Every emitted aspect respects its orb and the exactness rule.
    #[test]
    fn prop_orb_bound(
        natal in prop::collection::vec(0.0f64..360.0, 10),
        sky in prop::collection::vec(0.0f64..360.0, 10),
    ) {
        for orbs in [OrbTable::natal(), OrbTable::synastry()] {
            let found = find_aspects(&positions(&natal), &positions(&sky), &orbs);
            for a in &found {
                let max = orbs.max_orb(a.aspect);
                prop_assert_eq!(max, Some(a.max_orb));
                prop_assert!(a.orb <= a.max_orb);
                prop_assert_eq!(a.exact, a.orb < EXACT_ORB_DEG);
                prop_assert!((a.angle - a.aspect.angle()).abs() - a.orb < 1e-9);
            }
            prop_assert!(found.windows(2).all(|w| w[0].orb <= w[1].orb));
        }
    }

    /// At most one aspect per body pair.
    #[test]
    fn prop_one_aspect_per_pair(
        natal in prop::collection::vec(0.0f64..360.0, 10),
        sky in prop::collection::vec(0.0f64..360.0, 10),
    ) {
        let found = find_aspects(&positions(&natal), &positions(&sky), &OrbTable::natal());
        let mut pairs: Vec<(Body, Body)> = found.iter().map(|a| (a.reference, a.comparison)).collect();
        let before = pairs.len();
        pairs.sort();
        pairs.dedup();
        prop_assert_eq!(before, pairs.len());
    }
}
