//! Core types and constants for the solar-system viewer core.

use glam::DVec3;

/// Unit constants

/// Astronomical unit in kilometers (used for display conversions).
pub const AU_TO_KM: f64 = 1.495978707e8;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// J2000.0 epoch as Unix timestamp (January 1, 2000, 12:00 UTC)
pub const J2000_UNIX: i64 = 946728000;

/// Earth's mean heliocentric orbital speed in km/s, reference value for the
/// display-grade speed estimate.
pub const EARTH_ORBITAL_SPEED_KM_S: f64 = 29.78;

/// Heliocentric state of a body at a single simulated instant.
///
/// Recomputed from the orbital elements every frame and never stored between
/// frames, so jumping the clock by arbitrary amounts cannot desynchronize it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyState {
    /// Position in AU, J2000 ecliptic frame, Sun at origin
    pub pos: DVec3,
}

impl BodyState {
    /// Create a new body state
    pub fn new(pos: DVec3) -> Self {
        Self { pos }
    }

    /// Distance from the Sun in AU
    pub fn radius_au(&self) -> f64 {
        self.pos.length()
    }

    /// Distance to another body in AU
    pub fn distance_to(&self, other: &BodyState) -> f64 {
        (self.pos - other.pos).length()
    }
}
