//! Common test utilities for integration tests.

use glam::DVec3;
use helioscope::camera::CameraState;
use helioscope::ephemeris::{CelestialBodyId, Ephemeris};
use helioscope::render::Viewport;

/// Standard test viewport, matching the original viewer window size.
pub fn viewport() -> Viewport {
    Viewport::new(1400, 1000)
}

/// Camera on the +X axis at `distance` AU, looking at the origin.
pub fn axial_camera(distance: f64) -> CameraState {
    CameraState {
        azimuth: 0.0,
        elevation: 0.0,
        distance,
        ..Default::default()
    }
}

/// Position lookup that must succeed for every body in the static table.
pub fn position(ephemeris: &Ephemeris, id: CelestialBodyId, t_days: f64) -> DVec3 {
    ephemeris
        .position(id, t_days)
        .expect("body is in the static table")
}
