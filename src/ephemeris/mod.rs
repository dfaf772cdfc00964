//! Ephemeris module for computing celestial body positions.
//!
//! Coordinate frame:
//! - 3D heliocentric (Sun at origin), J2000 ecliptic, distances in AU.
//!
//! Every query is a pure function of (body, elapsed days since J2000);
//! nothing is persisted between frames, so arbitrary jumps of the simulated
//! clock are always consistent.

pub mod data;
pub mod kepler;

#[cfg(test)]
mod proptest_ephemeris;

pub use data::{CelestialBodyData, CelestialBodyFacts, CelestialBodyId, all_bodies, get_facts};
pub use kepler::{ElementsError, KeplerOrbit};

use glam::DVec3;
use std::collections::HashMap;

use crate::types::{BodyState, EARTH_ORBITAL_SPEED_KM_S};

/// Number of bodies in the solar system model (1 Sun + 8 planets).
pub const BODY_COUNT: usize = 9;

/// Standard body order for per-frame snapshots, Sun first.
const BODY_ORDER: [CelestialBodyId; BODY_COUNT] = [
    CelestialBodyId::Sun,
    CelestialBodyId::Mercury,
    CelestialBodyId::Venus,
    CelestialBodyId::Earth,
    CelestialBodyId::Mars,
    CelestialBodyId::Jupiter,
    CelestialBodyId::Saturn,
    CelestialBodyId::Uranus,
    CelestialBodyId::Neptune,
];

/// Distance and speed readouts for the info panel.
#[derive(Clone, Copy, Debug)]
pub struct BodyDistances {
    /// Heliocentric distance in AU
    pub from_sun_au: f64,
    /// Distance to Earth in AU
    pub from_earth_au: f64,
    /// Display-grade heliocentric speed estimate in km/s, from the
    /// circular-orbit vis-viva relation v ≈ 29.78·√(1/r).
    pub orbital_speed_km_s: f64,
}

/// Body table behind id-keyed position queries.
pub struct Ephemeris {
    /// Cached body data (static J2000 orbital elements)
    body_data: HashMap<CelestialBodyId, CelestialBodyData>,
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl Ephemeris {
    /// Create a new ephemeris with all celestial body data loaded.
    pub fn new() -> Self {
        let mut body_data = HashMap::new();
        for data in all_bodies() {
            body_data.insert(data.id, data);
        }
        Self { body_data }
    }

    /// Get the static data for a celestial body.
    pub fn body_data(&self, id: CelestialBodyId) -> Option<&CelestialBodyData> {
        self.body_data.get(&id)
    }

    /// Compute the heliocentric position of a body at `t` days past J2000.
    ///
    /// The Sun is fixed at the origin; planets follow their Kepler orbits.
    pub fn position(&self, id: CelestialBodyId, t_days: f64) -> Option<DVec3> {
        let data = self.body_data.get(&id)?;
        Some(match &data.orbit {
            Some(orbit) => orbit.position_at_days(t_days),
            None => DVec3::ZERO,
        })
    }

    /// Compute the full body state at `t` days past J2000.
    pub fn body_state(&self, id: CelestialBodyId, t_days: f64) -> Option<BodyState> {
        self.position(id, t_days).map(BodyState::new)
    }

    /// Snapshot of every body's position at `t` days past J2000, in stable
    /// Sun-first order. This is the per-frame input to projection.
    pub fn all_positions(&self, t_days: f64) -> Vec<(CelestialBodyId, DVec3)> {
        BODY_ORDER
            .iter()
            .filter_map(|&id| self.position(id, t_days).map(|pos| (id, pos)))
            .collect()
    }

    /// Distance and speed readouts for a body at `t` days past J2000.
    pub fn distances(&self, id: CelestialBodyId, t_days: f64) -> Option<BodyDistances> {
        let pos = self.position(id, t_days)?;
        let earth_pos = self.position(CelestialBodyId::Earth, t_days)?;

        let from_sun_au = pos.length();
        let orbital_speed_km_s = if from_sun_au > 0.0 {
            (1.0 / from_sun_au).sqrt() * EARTH_ORBITAL_SPEED_KM_S
        } else {
            0.0
        };

        Some(BodyDistances {
            from_sun_au,
            from_earth_au: (pos - earth_pos).length(),
            orbital_speed_km_s,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sun_is_fixed_at_origin() {
        let ephemeris = Ephemeris::new();
        for t in [0.0, 1234.5, -10000.0] {
            let pos = ephemeris.position(CelestialBodyId::Sun, t).unwrap();
            assert_eq!(pos, DVec3::ZERO);
        }
    }

    #[test]
    fn test_all_positions_order_and_count() {
        let ephemeris = Ephemeris::new();
        let snapshot = ephemeris.all_positions(100.0);

        assert_eq!(snapshot.len(), BODY_COUNT);
        assert_eq!(snapshot[0].0, CelestialBodyId::Sun);
        assert_eq!(snapshot[1].0, CelestialBodyId::Mercury);
        assert_eq!(snapshot[8].0, CelestialBodyId::Neptune);
    }

    #[test]
    fn test_earth_distance_to_itself_is_zero() {
        let ephemeris = Ephemeris::new();
        let d = ephemeris.distances(CelestialBodyId::Earth, 42.0).unwrap();
        assert_relative_eq!(d.from_earth_au, 0.0, epsilon = 1e-12);
        assert_relative_eq!(d.from_sun_au, 1.0, epsilon = 0.02);
    }

    #[test]
    fn test_earth_speed_is_near_reference() {
        let ephemeris = Ephemeris::new();
        let d = ephemeris.distances(CelestialBodyId::Earth, 0.0).unwrap();
        assert_relative_eq!(d.orbital_speed_km_s, EARTH_ORBITAL_SPEED_KM_S, epsilon = 0.5);
    }

    #[test]
    fn test_sun_distances_are_degenerate_but_finite() {
        let ephemeris = Ephemeris::new();
        let d = ephemeris.distances(CelestialBodyId::Sun, 0.0).unwrap();
        assert_eq!(d.from_sun_au, 0.0);
        assert_eq!(d.orbital_speed_km_s, 0.0);
        assert!(d.from_earth_au > 0.9);
    }

    #[test]
    fn test_body_state_matches_position() {
        let ephemeris = Ephemeris::new();
        let t = 687.0;
        let pos = ephemeris.position(CelestialBodyId::Mars, t).unwrap();
        let state = ephemeris.body_state(CelestialBodyId::Mars, t).unwrap();
        assert_eq!(state.pos, pos);
    }
}
