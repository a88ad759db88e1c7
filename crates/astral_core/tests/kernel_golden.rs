//! Plausibility checks for the closed-form kernel against published
//! positions (Astronomical Almanac / JPL Horizons, rounded to a degree).

use astral_core::{Body, ClosedFormEphemeris, LongitudeProvider, Sign, signed_arc};
use astral_time::Instant;

fn jd(y: i32, m: u32, d: u32) -> f64 {
    Instant::utc(y, m, d, 0, 0, 0).unwrap().julian_day()
}

fn assert_near(body: Body, jd: f64, expected: f64, tol: f64) {
    let lon = ClosedFormEphemeris.longitude(body, jd);
    let err = signed_arc(expected, lon).abs();
    assert!(err < tol, "{body}: got {lon:.2}, expected {expected:.2} (err {err:.2})");
}

/// March equinox 2024-03-20 03:06 UT: Sun at 0° Aries.
#[test]
fn sun_at_march_equinox_2024() {
    let jd = Instant::utc(2024, 3, 20, 3, 6, 0).unwrap().julian_day();
    assert_near(Body::Sun, jd, 0.0, 0.05);
}

/// Summer solstice 2021-06-21 03:32 UT: Sun at 0° Cancer.
#[test]
fn sun_at_june_solstice_2021() {
    let jd = Instant::utc(2021, 6, 21, 3, 32, 0).unwrap().julian_day();
    assert_near(Body::Sun, jd, 90.0, 0.05);
}

/// Full moon 2024-01-25 17:54 UT: Moon opposite the Sun.
#[test]
fn moon_opposite_sun_at_full_moon() {
    let jd = Instant::utc(2024, 1, 25, 17, 54, 0).unwrap().julian_day();
    let eph = ClosedFormEphemeris;
    let elong = signed_arc(eph.longitude(Body::Sun, jd), eph.longitude(Body::Moon, jd)).abs();
    assert!((elong - 180.0).abs() < 2.0, "elongation = {elong}");
}

/// Saturn in Pisces through 2024.
#[test]
fn saturn_in_pisces_2024() {
    let pos = ClosedFormEphemeris.position(Body::Saturn, jd(2024, 7, 1));
    assert_eq!(pos.sign, Sign::Pisces);
}

/// Jupiter entered Gemini on 2024-05-25; mid-July it is early Gemini.
#[test]
fn jupiter_in_gemini_mid_2024() {
    let pos = ClosedFormEphemeris.position(Body::Jupiter, jd(2024, 7, 15));
    assert_eq!(pos.sign, Sign::Gemini);
}

/// Pluto has been in late Capricorn / early Aquarius around 2023-2024.
#[test]
fn pluto_near_capricorn_aquarius_cusp() {
    assert_near(Body::Pluto, jd(2024, 1, 1), 299.5, 3.0);
}

/// Pluto spent 1939-1957 in Leo.
#[test]
fn pluto_in_leo_1950() {
    let pos = ClosedFormEphemeris.position(Body::Pluto, jd(1950, 1, 1));
    assert_eq!(pos.sign, Sign::Leo);
}

/// Mercury retrogrades roughly three times a year.
#[test]
fn mercury_retrograde_episodes_per_year() {
    let eph = ClosedFormEphemeris;
    let start = jd(2024, 1, 1);
    let mut episodes = 0;
    let mut prev = eph.is_retrograde(Body::Mercury, start);
    for day in 1..366 {
        let now = eph.is_retrograde(Body::Mercury, start + day as f64);
        if now && !prev {
            episodes += 1;
        }
        prev = now;
    }
    assert!((2..=4).contains(&episodes), "episodes = {episodes}");
}

/// Mars retrogrades once per ~26-month synodic period.
#[test]
fn mars_retrograde_once_per_synodic_period() {
    let eph = ClosedFormEphemeris;
    let start = jd(2024, 1, 1);
    let retro_days = (0..800)
        .filter(|d| eph.is_retrograde(Body::Mars, start + *d as f64))
        .count();
    assert!((40..=110).contains(&retro_days), "retro days = {retro_days}");
}

/// Outer planets spend a large share of each year retrograde.
#[test]
fn saturn_retrograde_share() {
    let eph = ClosedFormEphemeris;
    let start = jd(2024, 1, 1);
    let retro_days = (0..365)
        .filter(|d| eph.is_retrograde(Body::Saturn, start + *d as f64))
        .count();
    assert!((100..=170).contains(&retro_days), "retro days = {retro_days}");
}
