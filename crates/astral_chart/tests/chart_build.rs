//! Natal chart construction against the closed-form kernel.

use astral_chart::{
    BirthRecord, BirthTime, ChartOptions, Dignity, OrbTable, Pattern, build_chart, transits,
};
use astral_core::{Body, ClosedFormEphemeris, Sign, Sky};
use chrono::NaiveDate;

fn j2000_greenwich() -> BirthRecord {
    BirthRecord {
        name: "Epoch".into(),
        date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        time: Some(BirthTime { hour: 12, minute: 0 }),
        latitude: 51.4769,
        longitude: 0.0,
        utc_offset_minutes: 0,
    }
}

#[test]
fn j2000_sun_in_capricorn_moon_in_scorpio() {
    let chart = build_chart(&j2000_greenwich(), &ClosedFormEphemeris, &ChartOptions::default())
        .unwrap();
    assert!((chart.julian_day - 2_451_545.0).abs() < 1e-9);
    let sun = chart.get(Body::Sun).unwrap();
    assert_eq!(sun.position.sign, Sign::Capricorn);
    assert!(!sun.position.retrograde);
    assert_eq!(chart.get(Body::Moon).unwrap().position.sign, Sign::Scorpio);
}

#[test]
fn same_moment_in_two_time_zones_gives_same_positions() {
    let utc = j2000_greenwich();
    let mut ist = utc.clone();
    ist.time = Some(BirthTime { hour: 17, minute: 30 });
    ist.utc_offset_minutes = 330;
    let a = build_chart(&utc, &ClosedFormEphemeris, &ChartOptions::default()).unwrap();
    let b = build_chart(&ist, &ClosedFormEphemeris, &ChartOptions::default()).unwrap();
    assert!((a.julian_day - b.julian_day).abs() < 1e-9);
    for (pa, pb) in a.bodies.iter().zip(&b.bodies) {
        assert!((pa.position.longitude - pb.position.longitude).abs() < 1e-9);
    }
}

#[test]
fn placements_carry_dignity() {
    let chart = build_chart(&j2000_greenwich(), &ClosedFormEphemeris, &ChartOptions::default())
        .unwrap();
    let placements = chart.placements();
    assert_eq!(placements.len(), chart.bodies.len());
    for p in placements {
        if p.body.is_node() || p.body == Body::Chiron {
            assert_eq!(p.dignity, Dignity::Neutral);
        }
    }
}

#[test]
fn patterns_never_include_south_node() {
    for year in [1950, 1975, 1990, 2010, 2024] {
        let mut r = j2000_greenwich();
        r.date = NaiveDate::from_ymd_opt(year, 5, 20).unwrap();
        let chart = build_chart(&r, &ClosedFormEphemeris, &ChartOptions::default()).unwrap();
        for p in &chart.patterns {
            assert!(!p.bodies().contains(&Body::SouthNode), "{p:?}");
        }
    }
}

#[test]
fn chart_serializes_with_tagged_patterns() {
    let mut r = j2000_greenwich();
    r.time = None;
    let chart = build_chart(&r, &ClosedFormEphemeris, &ChartOptions::default()).unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["time_unknown"], serde_json::json!(true));
    assert_eq!(json["birth"]["date"], serde_json::json!("2000-01-01"));
    if let Some(Pattern::Stellium { .. }) = chart.patterns.first() {
        assert_eq!(json["patterns"][0]["kind"], serde_json::json!("stellium"));
    }
}

#[test]
fn natal_transits_against_own_birth_sky_include_exact_conjunctions() {
    let r = j2000_greenwich();
    let chart = build_chart(&r, &ClosedFormEphemeris, &ChartOptions::default()).unwrap();
    let sky = Sky::at(&ClosedFormEphemeris, chart.julian_day, true);
    let found = transits(&chart, &sky, &OrbTable::natal());
    for body in [Body::Sun, Body::Moon, Body::Saturn] {
        assert!(
            found
                .iter()
                .any(|a| a.reference == body && a.comparison == body && a.exact),
            "{body}"
        );
    }
}
