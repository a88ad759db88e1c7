//! Position kernel for the astral engine.
//!
//! This crate provides:
//! - The tracked body set (ten planets, mean lunar nodes, Chiron)
//! - Closed-form geocentric longitudes behind a `LongitudeProvider` trait
//! - Sign/degree decomposition and elements
//! - Retrograde detection by central difference
//! - Lunar phase and a current-sky snapshot

pub mod body;
pub mod kernel;
pub mod nodes;
pub mod phase;
pub mod provider;
pub mod sign;
pub mod sky;
pub mod util;

pub use body::{ALL_BODIES, Body, PLANETS};
pub use kernel::body_longitude;
pub use nodes::{mean_north_node_deg, mean_south_node_deg};
pub use phase::{ALL_PHASES, LunarPhase, MoonPhase};
pub use provider::{BodyPosition, ClosedFormEphemeris, LongitudeProvider};
pub use sign::{ALL_ELEMENTS, ALL_SIGNS, Element, Sign, SignPosition, longitude_of, sign_and_degree};
pub use sky::Sky;
pub use util::{normalize_360, signed_arc};
