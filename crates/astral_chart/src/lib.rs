//! Chart layer for the astral engine.
//!
//! This crate provides:
//! - Ascendant, midheaven, equal houses and angular distance
//! - Aspect types, configurable orb tables and the aspect matcher
//! - Essential dignity tables
//! - Pattern detection (stellium, grand trine, T-square, grand cross)
//! - Natal chart construction from a birth record
//! - The transit engine comparing two position sets

pub mod aspect;
pub mod dignity;
pub mod error;
pub mod geometry;
pub mod natal;
pub mod pattern;
pub mod transit;

pub use aspect::{
    ALL_ASPECTS, AspectMatch, AspectNature, AspectType, EXACT_ORB_DEG, OrbTable, match_aspect,
};
pub use dignity::{Dignity, dignity_in_sign, exaltation, rulerships};
pub use error::ChartError;
pub use geometry::{POLAR_CIRCLE_DEG, angular_distance, ascendant, ascendant_from_lst, house, midheaven};
pub use natal::{
    BirthRecord, BirthTime, ChartOptions, ChartPoint, NatalChart, NatalPlacement, PlacedBody,
    build_chart, fortune_point, is_night_birth,
};
pub use pattern::{Pattern, detect_patterns};
pub use transit::{APPLYING_STEP_DAYS, Aspect, find_aspects, transits};
