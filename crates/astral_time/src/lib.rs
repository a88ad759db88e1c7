//! Civil time and sidereal time for the astral engine.
//!
//! This crate provides:
//! - `Instant`, a validated local date/time with a fixed UTC offset
//! - Julian Day ↔ Gregorian calendar conversions
//! - Greenwich / local sidereal time and the mean obliquity of the ecliptic

pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use instant::{Instant, MAX_OFFSET_MINUTES};
pub use julian::{DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, jd_to_calendar, julian_centuries};
pub use sidereal::{
    earth_rotation_angle_deg, gmst_deg, local_sidereal_time_deg, mean_obliquity_deg,
};
