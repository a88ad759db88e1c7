//! Longitude providers and derived body positions.
//!
//! The engine only ever asks "where is body B at Julian Day JD". Anything
//! that answers that question can drive it: the closed-form kernel in
//! [`crate::kernel`] is the default, and a higher-precision backend can be
//! injected behind the same trait.

use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::kernel;
use crate::sign::{Sign, sign_and_degree};
use crate::util::{normalize_360, signed_arc};

/// Half-width of the central difference used for speed and retrograde.
pub const SPEED_HALF_STEP_DAYS: f64 = 0.5;

/// Source of ecliptic longitudes for the tracked bodies.
pub trait LongitudeProvider {
    /// Geocentric ecliptic longitude in degrees [0, 360).
    fn longitude(&self, body: Body, jd: f64) -> f64;

    /// Geocentric ecliptic latitude in degrees. Defaults to the ecliptic.
    fn latitude(&self, _body: Body, _jd: f64) -> f64 {
        0.0
    }

    /// Apparent daily motion in degrees/day, shortest-arc central difference.
    fn speed(&self, body: Body, jd: f64) -> f64 {
        let before = self.longitude(body, jd - SPEED_HALF_STEP_DAYS);
        let after = self.longitude(body, jd + SPEED_HALF_STEP_DAYS);
        signed_arc(before, after) / (2.0 * SPEED_HALF_STEP_DAYS)
    }

    /// Whether the body is moving backwards along the ecliptic.
    ///
    /// The Sun and Moon are never retrograde.
    fn is_retrograde(&self, body: Body, jd: f64) -> bool {
        !body.is_luminary() && self.speed(body, jd) < 0.0
    }

    /// Full position snapshot of one body.
    fn position(&self, body: Body, jd: f64) -> BodyPosition {
        let speed = self.speed(body, jd);
        BodyPosition::new(
            body,
            self.longitude(body, jd),
            self.latitude(body, jd),
            speed,
        )
    }
}

/// Default provider: truncated closed-form series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosedFormEphemeris;

impl LongitudeProvider for ClosedFormEphemeris {
    fn longitude(&self, body: Body, jd: f64) -> f64 {
        kernel::body_longitude(body, jd)
    }

    fn latitude(&self, body: Body, jd: f64) -> f64 {
        kernel::body_latitude(body, jd)
    }
}

impl<P: LongitudeProvider + ?Sized> LongitudeProvider for &P {
    fn longitude(&self, body: Body, jd: f64) -> f64 {
        (**self).longitude(body, jd)
    }

    fn latitude(&self, body: Body, jd: f64) -> f64 {
        (**self).latitude(body, jd)
    }
}

/// Where one body sits at one instant.
///
/// Sign, degree and retrograde are pure functions of longitude and speed,
/// computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Daily motion in degrees/day (negative when retrograde).
    pub speed: f64,
    pub sign: Sign,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Arc-minutes past the whole degree.
    pub arcminute: u8,
    pub retrograde: bool,
}

impl BodyPosition {
    /// Build a position from its primitives.
    pub fn new(body: Body, longitude: f64, latitude: f64, speed: f64) -> Self {
        let longitude = normalize_360(longitude);
        let sp = sign_and_degree(longitude);
        Self {
            body,
            longitude,
            latitude,
            speed,
            sign: sp.sign,
            degree_in_sign: sp.degree_in_sign,
            arcminute: sp.arcminute,
            retrograde: !body.is_luminary() && speed < 0.0,
        }
    }

    /// A stationary position on the ecliptic (fixtures and chart points).
    pub fn fixed(body: Body, longitude: f64) -> Self {
        Self::new(body, longitude, 0.0, 0.0)
    }
}
