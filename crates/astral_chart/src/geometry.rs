//! Ascendant, midheaven, equal houses and angular distance.
//!
//! Ascendant from local sidereal time, geographic latitude and the mean
//! obliquity of the ecliptic (Meeus, "Astronomical Algorithms", Ch. 13).
//! Houses are equal 30-degree segments counted from the ascendant.

use astral_core::normalize_360;
use astral_time::{local_sidereal_time_deg, mean_obliquity_deg};

/// Beyond the polar circles some ecliptic degrees never rise and the
/// ascendant can jump by a full half-circle between nearby instants.
pub const POLAR_CIRCLE_DEG: f64 = 66.56;

/// Ascendant longitude in degrees [0, 360) from sidereal time.
///
/// `asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))`
///
/// Evaluated as-is at any latitude; at |φ| = 90° the tangent blows up
/// and the result is whatever the formula yields.
pub fn ascendant_from_lst(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    normalize_360(asc.to_degrees())
}

/// Ascendant for a UT Julian Day at a geographic fix (east-positive
/// longitude), degrees [0, 360).
pub fn ascendant(jd: f64, latitude_deg: f64, longitude_deg: f64) -> f64 {
    if latitude_deg.abs() >= POLAR_CIRCLE_DEG {
        log::warn!("ascendant at latitude {latitude_deg:.2} is inside the polar circle; result may be discontinuous");
    }
    let lst = local_sidereal_time_deg(jd, longitude_deg);
    ascendant_from_lst(lst, latitude_deg, mean_obliquity_deg(jd))
}

/// Equal-house midheaven: 90 degrees behind the ascendant.
pub fn midheaven(ascendant_deg: f64) -> f64 {
    normalize_360(ascendant_deg + 270.0)
}

/// Equal house (1..=12) of a longitude; house 1 starts at the ascendant.
pub fn house(longitude: f64, ascendant_deg: f64) -> u8 {
    let offset = normalize_360(longitude - ascendant_deg);
    ((offset / 30.0).floor() as u8 + 1).min(12)
}

/// Shortest angular separation between two longitudes, [0, 180].
///
/// Exactly symmetric in its arguments.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}
