//! Natal chart construction.
//!
//! A chart is a pure function of the birth record, the longitude provider
//! and the chart options: every position shares one Instant and one
//! geographic fix.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use astral_core::{
    Body, BodyPosition, LongitudeProvider, PLANETS, Sign, normalize_360, sign_and_degree,
};
use astral_time::Instant;

use crate::aspect::OrbTable;
use crate::dignity::{Dignity, dignity_in_sign};
use crate::error::ChartError;
use crate::geometry::{ascendant, house, midheaven};
use crate::pattern::{Pattern, detect_patterns};

/// Local hour used when the birth time is unknown.
pub const UNKNOWN_TIME_HOUR: u32 = 12;

/// Local clock time of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthTime {
    pub hour: u32,
    pub minute: u32,
}

/// Birth data for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRecord {
    /// Display name only.
    pub name: String,
    pub date: NaiveDate,
    /// `None` when the time of birth is unknown.
    #[serde(default)]
    pub time: Option<BirthTime>,
    /// Geographic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
    /// Minutes east of UTC in effect at the birth place.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl BirthRecord {
    /// Check the geographic fix and the civil date/time.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::InvalidLocation("longitude must be in [-180, 180]"));
        }
        self.instant()?;
        Ok(())
    }

    /// Birth instant; an unknown time becomes local noon.
    pub fn instant(&self) -> Result<Instant, ChartError> {
        let (hour, minute) = match self.time {
            Some(t) => (t.hour, t.minute),
            None => (UNKNOWN_TIME_HOUR, 0),
        };
        Ok(Instant::new(
            self.date.year(),
            self.date.month(),
            self.date.day(),
            hour,
            minute,
            0,
            self.utc_offset_minutes,
        )?)
    }
}

/// Options for chart construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Include Chiron.
    pub include_minor_body: bool,
    /// Orbs used for pattern detection.
    pub orbs: OrbTable,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            include_minor_body: true,
            orbs: OrbTable::natal(),
        }
    }
}

/// One body in a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedBody {
    pub position: BodyPosition,
    /// Equal house, 1..=12.
    pub house: u8,
    pub dignity: Dignity,
}

/// A computed point that is not a body (ascendant, midheaven, fortune).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub longitude: f64,
    pub sign: Sign,
    pub degree_in_sign: f64,
    pub arcminute: u8,
    pub house: u8,
}

impl ChartPoint {
    fn new(longitude: f64, asc: f64) -> Self {
        let sp = sign_and_degree(longitude);
        Self {
            longitude: normalize_360(longitude),
            sign: sp.sign,
            degree_in_sign: sp.degree_in_sign,
            arcminute: sp.arcminute,
            house: house(longitude, asc),
        }
    }
}

/// Body, sign and dignity of one natal placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatalPlacement {
    pub body: Body,
    pub sign: Sign,
    pub dignity: Dignity,
}

/// Immutable natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub birth: BirthRecord,
    pub instant: Instant,
    pub julian_day: f64,
    /// Birth time was unknown and noon was assumed.
    pub time_unknown: bool,
    pub bodies: Vec<PlacedBody>,
    pub ascendant: ChartPoint,
    pub midheaven: ChartPoint,
    /// Part of Fortune.
    pub fortune: ChartPoint,
    pub patterns: Vec<Pattern>,
}

impl NatalChart {
    /// Assemble a chart from already computed positions.
    ///
    /// Used by [`build_chart`] and by callers that hold positions from
    /// another source (fixtures, stored charts).
    pub fn from_positions(
        birth: BirthRecord,
        instant: Instant,
        positions: &[BodyPosition],
        ascendant_deg: f64,
        orbs: &OrbTable,
    ) -> Self {
        let asc = normalize_360(ascendant_deg);
        let bodies: Vec<PlacedBody> = positions
            .iter()
            .map(|&p| PlacedBody {
                position: p,
                house: house(p.longitude, asc),
                dignity: dignity_in_sign(p.body, p.sign),
            })
            .collect();

        let sun = positions.iter().find(|p| p.body == Body::Sun).map(|p| p.longitude);
        let moon = positions.iter().find(|p| p.body == Body::Moon).map(|p| p.longitude);
        let fortune = match (sun, moon) {
            (Some(sun), Some(moon)) => fortune_point(asc, sun, moon, instant.local_hour()),
            _ => asc,
        };

        Self {
            time_unknown: birth.time.is_none(),
            birth,
            instant,
            julian_day: instant.julian_day(),
            bodies,
            ascendant: ChartPoint::new(asc, asc),
            midheaven: ChartPoint::new(midheaven(asc), asc),
            fortune: ChartPoint::new(fortune, asc),
            patterns: detect_patterns(positions, orbs),
        }
    }

    pub fn get(&self, body: Body) -> Option<&PlacedBody> {
        self.bodies.iter().find(|b| b.position.body == body)
    }

    /// All body positions in chart order.
    pub fn positions(&self) -> Vec<BodyPosition> {
        self.bodies.iter().map(|b| b.position).collect()
    }

    /// Positions of the listed bodies that are present, in list order.
    pub fn positions_of(&self, bodies: &[Body]) -> Vec<BodyPosition> {
        bodies
            .iter()
            .filter_map(|&b| self.get(b).map(|p| p.position))
            .collect()
    }

    /// Sign and dignity of every body.
    pub fn placements(&self) -> Vec<NatalPlacement> {
        self.bodies
            .iter()
            .map(|b| NatalPlacement {
                body: b.position.body,
                sign: b.position.sign,
                dignity: b.dignity,
            })
            .collect()
    }

    /// Sun sign, if the Sun is in the chart.
    pub fn sun_sign(&self) -> Option<Sign> {
        self.get(Body::Sun).map(|b| b.position.sign)
    }
}

/// Whether a local civil hour counts as a night birth.
pub fn is_night_birth(local_hour: f64) -> bool {
    !(6.0..18.0).contains(&local_hour)
}

/// Part of Fortune: ASC + Moon − Sun by day, ASC + Sun − Moon by night.
pub fn fortune_point(asc: f64, sun: f64, moon: f64, local_hour: f64) -> f64 {
    if is_night_birth(local_hour) {
        normalize_360(asc + sun - moon)
    } else {
        normalize_360(asc + moon - sun)
    }
}

/// Build a natal chart from a birth record.
pub fn build_chart<P: LongitudeProvider>(
    birth: &BirthRecord,
    provider: &P,
    options: &ChartOptions,
) -> Result<NatalChart, ChartError> {
    birth.validate()?;
    let instant = birth.instant()?;
    let jd = instant.julian_day();

    let mut positions: Vec<BodyPosition> =
        PLANETS.iter().map(|&b| provider.position(b, jd)).collect();
    positions.push(provider.position(Body::NorthNode, jd));
    positions.push(provider.position(Body::SouthNode, jd));
    if options.include_minor_body {
        positions.push(provider.position(Body::Chiron, jd));
    }

    let asc = ascendant(jd, birth.latitude, birth.longitude);
    let chart = NatalChart::from_positions(birth.clone(), instant, &positions, asc, &options.orbs);
    log::debug!(
        "built chart for {} at JD {:.5}: asc {:.2}, {} bodies, {} patterns",
        birth.name,
        jd,
        asc,
        chart.bodies.len(),
        chart.patterns.len()
    );
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astral_core::ClosedFormEphemeris;

    fn record(time: Option<BirthTime>) -> BirthRecord {
        BirthRecord {
            name: "Test".into(),
            date: NaiveDate::from_ymd_opt(1990, 7, 15).unwrap(),
            time,
            latitude: 40.7128,
            longitude: -74.0060,
            utc_offset_minutes: -240,
        }
    }

    #[test]
    fn unknown_time_defaults_to_noon() {
        let r = record(None);
        let inst = r.instant().unwrap();
        assert_eq!((inst.hour, inst.minute), (12, 0));
        let chart = build_chart(&r, &ClosedFormEphemeris, &ChartOptions::default()).unwrap();
        assert!(chart.time_unknown);
    }

    #[test]
    fn chart_has_thirteen_bodies_with_minor() {
        let r = record(Some(BirthTime { hour: 8, minute: 30 }));
        let chart = build_chart(&r, &ClosedFormEphemeris, &ChartOptions::default()).unwrap();
        assert_eq!(chart.bodies.len(), 13);
        assert!(!chart.time_unknown);
        let opts = ChartOptions {
            include_minor_body: false,
            ..ChartOptions::default()
        };
        let chart = build_chart(&r, &ClosedFormEphemeris, &opts).unwrap();
        assert_eq!(chart.bodies.len(), 12);
        assert!(chart.get(Body::Chiron).is_none());
    }

    #[test]
    fn south_node_opposes_north() {
        let r = record(Some(BirthTime { hour: 8, minute: 30 }));
        let chart = build_chart(&r, &ClosedFormEphemeris, &ChartOptions::default()).unwrap();
        let n = chart.get(Body::NorthNode).unwrap().position.longitude;
        let s = chart.get(Body::SouthNode).unwrap().position.longitude;
        assert!((normalize_360(s - n) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn midheaven_ninety_behind_ascendant() {
        let r = record(Some(BirthTime { hour: 8, minute: 30 }));
        let chart = build_chart(&r, &ClosedFormEphemeris, &ChartOptions::default()).unwrap();
        let d = normalize_360(chart.ascendant.longitude - chart.midheaven.longitude);
        assert!((d - 90.0).abs() < 1e-9);
        assert_eq!(chart.ascendant.house, 1);
        assert_eq!(chart.midheaven.house, 10);
    }

    #[test]
    fn fortune_day_and_night() {
        assert!((fortune_point(100.0, 30.0, 50.0, 12.0) - 120.0).abs() < 1e-12);
        assert!((fortune_point(100.0, 30.0, 50.0, 22.0) - 80.0).abs() < 1e-12);
        assert!(is_night_birth(5.99));
        assert!(!is_night_birth(6.0));
        assert!(is_night_birth(18.0));
    }

    #[test]
    fn invalid_location_rejected() {
        let mut r = record(None);
        r.latitude = 91.0;
        assert!(matches!(r.validate(), Err(ChartError::InvalidLocation(_))));
        let mut r = record(None);
        r.longitude = -181.0;
        assert!(matches!(
            build_chart(&r, &ClosedFormEphemeris, &ChartOptions::default()),
            Err(ChartError::InvalidLocation(_))
        ));
    }

    #[test]
    fn invalid_time_rejected() {
        let r = record(Some(BirthTime { hour: 24, minute: 0 }));
        assert!(matches!(r.validate(), Err(ChartError::Time(_))));
        let mut r = record(None);
        r.utc_offset_minutes = 15 * 60;
        assert!(matches!(r.validate(), Err(ChartError::Time(_))));
    }

    #[test]
    fn from_positions_assigns_houses_and_dignity() {
        let r = record(Some(BirthTime { hour: 12, minute: 0 }));
        let inst = r.instant().unwrap();
        let ps = [
            BodyPosition::fixed(Body::Sun, 130.0),
            BodyPosition::fixed(Body::Moon, 95.0),
        ];
        let chart = NatalChart::from_positions(r, inst, &ps, 120.0, &OrbTable::natal());
        let sun = chart.get(Body::Sun).unwrap();
        assert_eq!(sun.house, 1);
        assert_eq!(sun.dignity, Dignity::Rulership);
        assert_eq!(chart.get(Body::Moon).unwrap().house, 12);
        assert_eq!(chart.sun_sign(), Some(Sign::Leo));
        // Day birth: 120 + 95 − 130.
        assert!((chart.fortune.longitude - 85.0).abs() < 1e-9);
    }
}
