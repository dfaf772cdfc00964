//! Test utilities for the viewer core tests.
//!
//! Provides fixtures for reference orbits and assertions for comparing
//! angles and positions.

use glam::DVec3;

/// Fixtures for creating reference orbits.
pub mod fixtures {
    use crate::ephemeris::KeplerOrbit;

    /// Earth's J2000 orbital elements.
    pub fn earth_orbit() -> KeplerOrbit {
        KeplerOrbit::from_elements(
            1.000000, // semi-major axis (AU)
            0.016710, // eccentricity
            0.0000,   // inclination (degrees)
            -11.260,  // ascending node (degrees)
            114.207,  // argument of periapsis (degrees)
            357.517,  // mean anomaly at epoch (degrees)
            365.256,  // period (days)
        )
        .expect("reference Earth elements are valid")
    }

    /// Mars' J2000 orbital elements.
    pub fn mars_orbit() -> KeplerOrbit {
        KeplerOrbit::from_elements(1.523679, 0.0934, 1.8506, 49.558, 286.503, 19.373, 686.980)
            .expect("reference Mars elements are valid")
    }

    /// A circular 1 AU orbit in the ecliptic plane.
    pub fn circular_orbit() -> KeplerOrbit {
        KeplerOrbit::from_elements(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 365.256)
            .expect("circular reference elements are valid")
    }
}

/// Assertions for geometric test comparisons.
pub mod assertions {
    use super::*;

    /// Smallest absolute distance between two angles (radians), in [0, π].
    pub fn angle_distance(a: f64, b: f64) -> f64 {
        let mut d = (a - b).rem_euclid(std::f64::consts::TAU);
        if d > std::f64::consts::PI {
            d = std::f64::consts::TAU - d;
        }
        d.abs()
    }

    /// Assert that two positions agree within `tolerance` AU.
    ///
    /// # Panics
    /// Panics if the positions differ by more than the tolerance.
    pub fn assert_positions_close(a: DVec3, b: DVec3, tolerance: f64) {
        let distance = (a - b).length();
        assert!(
            distance <= tolerance,
            "Positions differ by {distance:.3e} AU (tolerance {tolerance:.3e}): {a:?} vs {b:?}"
        );
    }
}
