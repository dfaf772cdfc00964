//! Spherical orbit camera for the solar-system viewer.
//!
//! The camera sits on a sphere about the world origin (the Sun) and looks at
//! the origin, or at a followed body's current-frame position. The state is
//! owned by the embedding UI layer and passed by reference into projection
//! each frame; the core never mutates it.

use glam::DVec3;

use crate::ephemeris::CelestialBodyId;
use crate::types::DEG_TO_RAD;

/// Minimum camera distance in AU. Degenerate distances (≤ 0) clamp here
/// rather than producing a singular view.
pub const MIN_DISTANCE: f64 = 0.05;

/// Maximum camera distance in AU (far enough to frame Neptune's orbit).
pub const MAX_DISTANCE: f64 = 120.0;

/// Default camera distance, framing the inner solar system.
pub const DEFAULT_DISTANCE: f64 = 8.0;

/// Default view tilt above the ecliptic.
pub const DEFAULT_ELEVATION: f64 = 25.0 * DEG_TO_RAD;

/// Elevation clamp, just short of the poles so the view basis stays stable.
pub const MAX_ELEVATION: f64 = 89.0 * DEG_TO_RAD;

/// Minimum zoom level (furthest zoom-out).
pub const MIN_ZOOM: f64 = 0.05;

/// Maximum zoom level (closest zoom-in).
pub const MAX_ZOOM: f64 = 50.0;

/// Default zoom level.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f64 = 0.1;

/// Dolly factor per scroll detent.
pub const DOLLY_STEP: f64 = 0.1;

/// When the view direction is this closely aligned with the world up axis,
/// switch to the fallback up vector to avoid a singular basis.
const UP_SINGULARITY: f64 = 0.999;

/// Camera state: spherical coordinates about the origin plus zoom and an
/// optional followed body (a lookup key, never an ownership link).
#[derive(Clone, Debug, PartialEq)]
pub struct CameraState {
    /// Azimuth angle around the up axis, radians
    pub azimuth: f64,
    /// Elevation above the reference plane, radians
    pub elevation: f64,
    /// Radial distance from the origin, AU
    pub distance: f64,
    /// Screen-space magnification factor
    pub zoom: f64,
    /// Body the view re-centers on each frame, if any
    pub follow: Option<CelestialBodyId>,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: DEFAULT_ELEVATION,
            distance: DEFAULT_DISTANCE,
            zoom: DEFAULT_ZOOM,
            follow: None,
        }
    }
}

impl CameraState {
    /// Camera position in world space.
    ///
    /// eye = ρ · (cos φ·cos θ, sin φ, cos φ·sin θ), with ρ clamped to a
    /// positive minimum so a degenerate distance cannot collapse the basis.
    pub fn eye(&self) -> DVec3 {
        let rho = self.distance.max(MIN_DISTANCE);
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        rho * DVec3::new(cos_el * cos_az, sin_el, cos_el * sin_az)
    }

    /// Rotate the camera on its sphere, clamping elevation short of the poles.
    pub fn orbit(&mut self, d_azimuth: f64, d_elevation: f64) {
        self.azimuth += d_azimuth;
        self.elevation = (self.elevation + d_elevation).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Move the camera toward (negative steps) or away from (positive steps)
    /// the origin, multiplicatively.
    pub fn dolly(&mut self, steps: f64) {
        self.distance =
            (self.distance * (1.0 + steps * DOLLY_STEP)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Logarithmic zoom: positive deltas zoom in.
    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom = (self.zoom * (1.0 + delta * ZOOM_SPEED)).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Toggle follow mode for a body: following it again stops following.
    pub fn toggle_follow(&mut self, id: CelestialBodyId) {
        self.follow = if self.follow == Some(id) { None } else { Some(id) };
    }

    /// Reset to the default view and stop following.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Resolve the look target from this frame's body positions.
    ///
    /// Follow mode uses the followed body's current position so the view
    /// stays centered as the clock advances; without follow (or if the body
    /// is absent from the snapshot) the target is the origin.
    pub fn look_target(&self, positions: &[(CelestialBodyId, DVec3)]) -> DVec3 {
        self.follow
            .and_then(|id| {
                positions
                    .iter()
                    .find(|(body, _)| *body == id)
                    .map(|(_, pos)| *pos)
            })
            .unwrap_or(DVec3::ZERO)
    }

    /// Orthonormal view basis looking from the eye toward `target`.
    pub fn basis(&self, target: DVec3) -> ViewBasis {
        let eye = self.eye();

        // Eye coincident with the target would leave the view direction
        // undefined; fall back to looking at the origin.
        let forward = (target - eye)
            .try_normalize()
            .unwrap_or_else(|| (-eye).try_normalize().unwrap_or(DVec3::NEG_Z));

        // Fallback up vector when looking straight along the up axis.
        let world_up = if forward.y.abs() > UP_SINGULARITY {
            DVec3::Z
        } else {
            DVec3::Y
        };

        let right = forward.cross(world_up).normalize();
        let up = right.cross(forward);

        ViewBasis { eye, right, up, forward }
    }
}

/// Orthonormal camera frame for one projection pass.
#[derive(Clone, Copy, Debug)]
pub struct ViewBasis {
    pub eye: DVec3,
    pub right: DVec3,
    pub up: DVec3,
    pub forward: DVec3,
}

impl ViewBasis {
    /// Transform a world-space point into camera space.
    ///
    /// z is the depth along the view axis: positive in front of the camera.
    pub fn camera_space(&self, world: DVec3) -> DVec3 {
        let d = world - self.eye;
        DVec3::new(d.dot(self.right), d.dot(self.up), d.dot(self.forward))
    }
}
