//! Mean lunar node longitudes.
//!
//! The mean ascending node regresses about 19.34 degrees per year. The
//! descending (South) node is always exactly opposite.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47, mean
//! longitude of the ascending node (linear term).

use astral_time::julian_centuries;

use crate::util::normalize_360;

/// Mean North Node ecliptic longitude in degrees [0, 360).
pub fn mean_north_node_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    normalize_360(125.044_52 - 1_934.136_261 * t)
}

/// Mean South Node ecliptic longitude in degrees [0, 360).
pub fn mean_south_node_deg(jd: f64) -> f64 {
    normalize_360(mean_north_node_deg(jd) + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::signed_arc;
    use astral_time::J2000_JD;

    #[test]
    fn north_node_at_j2000() {
        let deg = mean_north_node_deg(J2000_JD);
        assert!((deg - 125.04).abs() < 0.01, "node = {deg}");
    }

    #[test]
    fn south_node_exactly_opposite() {
        for &jd in &[J2000_JD, 2_440_000.5, 2_460_600.25, 2_470_000.0] {
            let diff = normalize_360(mean_south_node_deg(jd) - mean_north_node_deg(jd));
            assert!((diff - 180.0).abs() < 1e-9, "jd={jd}: diff={diff}");
        }
    }

    #[test]
    fn node_regresses_about_19_degrees_per_year() {
        let a = mean_north_node_deg(J2000_JD);
        let b = mean_north_node_deg(J2000_JD + 365.25);
        let motion = signed_arc(a, b);
        assert!((motion + 19.34).abs() < 0.05, "motion = {motion}");
    }
}
