//! Closed-form geocentric longitudes.
//!
//! Accurate to roughly a degree over a few centuries around J2000, which
//! is enough for sign and aspect work but not for precision ephemerides.
//!
//! - Sun: mean longitude + 3-term equation of centre.
//! - Moon: mean longitude + 6 periodic terms (Meeus Ch. 47, truncated).
//! - Mercury..Saturn: heliocentric mean longitude + equation of centre,
//!   radius from the orbit conic.
//! - Uranus, Neptune, Pluto, Chiron: linear mean motion on a circle.
//!   Pluto's line is fitted to its 1950–2050 path rather than its mean
//!   elements, since its eccentricity (0.25) would put a mean-element
//!   circle a sign off within a few decades.
//!
//! Planet positions are projected from heliocentric to geocentric using
//! the Earth opposite the Sun at 1 AU; the projection produces the
//! apparent retrograde loops.
//!
//! Element values: Standish (1992) mean elements at J2000, rounded.

use astral_time::{J2000_JD, julian_centuries};

use crate::body::Body;
use crate::nodes::{mean_north_node_deg, mean_south_node_deg};
use crate::util::normalize_360;

/// Mean orbital elements of a heliocentric orbit at J2000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Mean longitude at J2000, degrees.
    pub mean_longitude: f64,
    /// Mean motion, degrees per day.
    pub daily_motion: f64,
    /// Eccentricity (0 for circular mean-motion bodies).
    pub eccentricity: f64,
    /// Longitude of perihelion, degrees.
    pub perihelion: f64,
    /// Semi-major axis, AU.
    pub semi_major_axis: f64,
}

impl OrbitalElements {
    const fn circular(mean_longitude: f64, daily_motion: f64, semi_major_axis: f64) -> Self {
        Self {
            mean_longitude,
            daily_motion,
            eccentricity: 0.0,
            perihelion: 0.0,
            semi_major_axis,
        }
    }
}

/// Heliocentric elements for the planets and Chiron. `None` for the
/// luminaries and nodes.
pub const fn orbital_elements(body: Body) -> Option<OrbitalElements> {
    let el = match body {
        Body::Mercury => OrbitalElements {
            mean_longitude: 252.2509,
            daily_motion: 4.092_334_45,
            eccentricity: 0.205_63,
            perihelion: 77.4561,
            semi_major_axis: 0.387_10,
        },
        Body::Venus => OrbitalElements {
            mean_longitude: 181.9798,
            daily_motion: 1.602_130_34,
            eccentricity: 0.006_77,
            perihelion: 131.5637,
            semi_major_axis: 0.723_33,
        },
        Body::Mars => OrbitalElements {
            mean_longitude: 355.4330,
            daily_motion: 0.524_020_68,
            eccentricity: 0.093_40,
            perihelion: 336.0602,
            semi_major_axis: 1.523_68,
        },
        Body::Jupiter => OrbitalElements {
            mean_longitude: 34.3515,
            daily_motion: 0.083_085_29,
            eccentricity: 0.048_39,
            perihelion: 14.3312,
            semi_major_axis: 5.202_60,
        },
        Body::Saturn => OrbitalElements {
            mean_longitude: 50.0774,
            daily_motion: 0.033_444_14,
            eccentricity: 0.054_15,
            perihelion: 93.0572,
            semi_major_axis: 9.554_91,
        },
        Body::Uranus => OrbitalElements::circular(314.0550, 0.011_728_34, 19.218_4),
        Body::Neptune => OrbitalElements::circular(304.3487, 0.005_981_03, 30.110_4),
        Body::Pluto => OrbitalElements::circular(248.0000, 0.005_900_00, 39.482_0),
        Body::Chiron => OrbitalElements::circular(251.6000, 0.019_550_00, 13.648_0),
        Body::Sun | Body::Moon | Body::NorthNode | Body::SouthNode => return None,
    };
    Some(el)
}

/// Geocentric longitude of the Sun in degrees [0, 360).
pub fn sun_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let l0 = 280.466_46 + 36_000.769_83 * t;
    let m = (357.529_11 + 35_999.050_29 * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t) * m.sin()
        + 0.019_993 * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    normalize_360(l0 + c)
}

/// Delaunay-style lunar arguments in radians: (M', D, M, F).
fn lunar_arguments(t: f64) -> (f64, f64, f64, f64) {
    let m_moon = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let m_sun = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();
    (m_moon, d, m_sun, f)
}

/// Geocentric longitude of the Moon in degrees [0, 360).
pub fn moon_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let l = 218.316_447_7 + 481_267.881_234_21 * t;
    let (mp, d, m, f) = lunar_arguments(t);

    let correction = 6.289 * mp.sin()
        + 1.274 * (2.0 * d - mp).sin()
        + 0.658 * (2.0 * d).sin()
        + 0.214 * (2.0 * mp).sin()
        - 0.186 * m.sin()
        - 0.114 * (2.0 * f).sin();
    normalize_360(l + correction)
}

/// Geocentric ecliptic latitude of the Moon in degrees.
pub fn moon_latitude(jd: f64) -> f64 {
    let (_, _, _, f) = lunar_arguments(julian_centuries(jd));
    5.128 * f.sin()
}

/// Heliocentric `(longitude_deg, radius_au)` for an orbit at `jd`.
pub fn heliocentric(el: &OrbitalElements, jd: f64) -> (f64, f64) {
    let days = jd - J2000_JD;
    let mean_lon = el.mean_longitude + el.daily_motion * days;
    if el.eccentricity == 0.0 {
        return (normalize_360(mean_lon), el.semi_major_axis);
    }
    let e = el.eccentricity;
    let m = (mean_lon - el.perihelion).to_radians();
    let center = (2.0 * e - e.powi(3) / 4.0) * m.sin() + 1.25 * e * e * (2.0 * m).sin();
    let true_anomaly = m + center;
    let radius = el.semi_major_axis * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());
    (normalize_360(mean_lon + center.to_degrees()), radius)
}

/// Project a heliocentric position to a geocentric ecliptic longitude.
///
/// The Earth sits opposite the Sun at 1 AU.
pub fn geocentric_longitude(helio_lon: f64, radius: f64, sun_lon: f64) -> f64 {
    let (ps, pc) = helio_lon.to_radians().sin_cos();
    let earth = (sun_lon + 180.0).to_radians();
    let (es, ec) = earth.sin_cos();
    let x = radius * pc - ec;
    let y = radius * ps - es;
    normalize_360(y.atan2(x).to_degrees())
}

/// Closed-form longitude of any tracked body, degrees [0, 360).
pub fn body_longitude(body: Body, jd: f64) -> f64 {
    match body {
        Body::Sun => sun_longitude(jd),
        Body::Moon => moon_longitude(jd),
        Body::NorthNode => mean_north_node_deg(jd),
        Body::SouthNode => mean_south_node_deg(jd),
        _ => match orbital_elements(body) {
            Some(el) => {
                let (lon, r) = heliocentric(&el, jd);
                geocentric_longitude(lon, r, sun_longitude(jd))
            }
            None => 0.0,
        },
    }
}

/// Closed-form ecliptic latitude. Only the Moon carries one; the planets
/// are treated as lying on the ecliptic.
pub fn body_latitude(body: Body, jd: f64) -> f64 {
    match body {
        Body::Moon => moon_latitude(jd),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::ALL_BODIES;

    #[test]
    fn sun_at_j2000() {
        let lon = sun_longitude(J2000_JD);
        assert!((lon - 280.38).abs() < 0.1, "sun = {lon}");
    }

    #[test]
    fn moon_at_j2000() {
        let lon = moon_longitude(J2000_JD);
        assert!((lon - 223.3).abs() < 1.0, "moon = {lon}");
    }

    #[test]
    fn moon_latitude_bounded() {
        for i in 0..60 {
            let lat = moon_latitude(J2000_JD + i as f64 * 1.3);
            assert!(lat.abs() <= 5.2, "lat = {lat}");
        }
    }

    #[test]
    fn sun_advances_about_one_degree_per_day() {
        let a = sun_longitude(J2000_JD);
        let b = sun_longitude(J2000_JD + 1.0);
        let d = normalize_360(b - a);
        assert!((d - 1.0).abs() < 0.05, "daily = {d}");
    }

    #[test]
    fn circular_orbit_has_constant_radius() {
        let el = orbital_elements(Body::Neptune).unwrap();
        assert_eq!(el.eccentricity, 0.0);
        let (_, r1) = heliocentric(&el, J2000_JD);
        let (_, r2) = heliocentric(&el, J2000_JD + 5000.0);
        assert_eq!(r1, r2);
    }

    #[test]
    fn outer_planets_move_linearly() {
        for body in [Body::Uranus, Body::Neptune, Body::Pluto] {
            let el = orbital_elements(body).unwrap();
            assert_eq!(el.eccentricity, 0.0, "{body}");
            let (l0, _) = heliocentric(&el, J2000_JD);
            let (l1, _) = heliocentric(&el, J2000_JD + 1000.0);
            assert!((normalize_360(l1 - l0) - el.daily_motion * 1000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn mars_radius_within_orbit_bounds() {
        let el = orbital_elements(Body::Mars).unwrap();
        for i in 0..40 {
            let (_, r) = heliocentric(&el, J2000_JD + i as f64 * 17.0);
            assert!((1.38..=1.67).contains(&r), "r = {r}");
        }
    }

    #[test]
    fn mercury_never_far_from_sun() {
        // Greatest elongation of Mercury is about 28 degrees.
        for i in 0..120 {
            let jd = J2000_JD + i as f64 * 3.0;
            let d = normalize_360(body_longitude(Body::Mercury, jd) - sun_longitude(jd));
            let d = if d > 180.0 { 360.0 - d } else { d };
            assert!(d < 29.0, "jd={jd} elongation={d}");
        }
    }

    #[test]
    fn all_longitudes_normalized() {
        for body in ALL_BODIES {
            for &jd in &[2_415_020.5, J2000_JD, 2_460_600.5] {
                let lon = body_longitude(body, jd);
                assert!((0.0..360.0).contains(&lon), "{body}: {lon}");
            }
        }
    }

    #[test]
    fn jupiter_geocentric_near_j2000() {
        // Jupiter stood in late Aries (~25 deg) at the start of 2000.
        let lon = body_longitude(Body::Jupiter, J2000_JD);
        assert!((20.0..36.0).contains(&lon), "jupiter = {lon}");
    }
}
