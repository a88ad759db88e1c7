//! Sidereal time and obliquity of the ecliptic.
//!
//! The engine has no UT1 table: universal time from the civil offset is
//! used directly, which keeps the rising degree within a fraction of an
//! arc-minute for any modern date.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.
//! - Mean obliquity: Meeus, "Astronomical Algorithms", Eq. 22.2 (linear term).

use crate::julian::{J2000_JD, julian_centuries};

/// Earth Rotation Angle in degrees [0, 360).
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let turns = 0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du;
    (turns.rem_euclid(1.0)) * 360.0
}

/// Greenwich Mean Sidereal Time in degrees [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = julian_centuries(jd_ut);
    let t2 = t * t;
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2 - 0.00000044 * t2 * t;
    (earth_rotation_angle_deg(jd_ut) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local sidereal time in degrees for an east-positive geographic longitude.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + longitude_east_deg).rem_euclid(360.0)
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    23.439_291 - 0.013_004_2 * julian_centuries(jd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta = earth_rotation_angle_deg(J2000_JD);
        assert!((theta - 280.46).abs() < 0.1, "ERA = {theta}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 51s ≈ 99.97°
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.97).abs() < 0.1, "GMST = {g}");
    }

    #[test]
    fn sidereal_day_gains_about_one_degree() {
        let g1 = gmst_deg(2_451_545.0);
        let g2 = gmst_deg(2_451_546.0);
        let gain = (g2 - g1).rem_euclid(360.0);
        assert!((gain - 0.9856).abs() < 0.01, "gain = {gain}");
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_460_000.5;
        let lst = local_sidereal_time_deg(jd, 90.0);
        let expected = (gmst_deg(jd) + 90.0).rem_euclid(360.0);
        assert!((lst - expected).abs() < 1e-9);
        let west = local_sidereal_time_deg(jd, -75.0);
        assert!((0.0..360.0).contains(&west));
    }

    #[test]
    fn obliquity_at_j2000() {
        assert!((mean_obliquity_deg(J2000_JD) - 23.4393).abs() < 1e-3);
    }
}
