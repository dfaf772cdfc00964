//! Perspective projection of heliocentric positions into screen space.
//!
//! The returned point sequence is ordered back-to-front by camera-space
//! depth, so the caller obtains correct occlusion by compositing in order
//! without a depth buffer. That ordering is part of the output contract.

use glam::DVec3;

use crate::camera::{CameraState, MAX_ZOOM, MIN_ZOOM};
use crate::ephemeris::CelestialBodyId;

/// Focal length of the pinhole projection, in pixels.
pub const FOCAL_LENGTH: f64 = 500.0;

/// Near clip plane in AU of camera-space depth. Points at or behind it are
/// excluded from the output: not drawn, not picked.
pub const NEAR_CLIP: f64 = 1e-3;

/// Fraction of the viewport half-extent that auto-fitted content occupies.
pub const FIT_MARGIN: f64 = 0.8;

/// Viewport dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Screen center in pixels.
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

/// A body projected onto the screen for one frame.
#[derive(Clone, Copy, Debug)]
pub struct ScreenPoint {
    pub id: CelestialBodyId,
    /// Screen x in pixels, origin top-left
    pub x: i32,
    /// Screen y in pixels, down-positive
    pub y: i32,
    /// Camera-space depth along the view axis, AU
    pub depth: f64,
    /// Apparent-size factor `FOCAL_LENGTH / depth`; strictly positive for
    /// every retained point, larger for nearer bodies
    pub scale: f64,
}

/// Project a frame's body positions into screen space.
///
/// The look target re-centers on the followed body's position from this
/// very snapshot, so follow mode stays correct as the clock advances.
/// Points behind the near clip plane are silently dropped; the remainder is
/// sorted back-to-front by depth.
pub fn project(
    points: &[(CelestialBodyId, DVec3)],
    camera: &CameraState,
    viewport: Viewport,
) -> Vec<ScreenPoint> {
    let target = camera.look_target(points);
    let basis = camera.basis(target);
    let (cx, cy) = viewport.center();

    let mut projected: Vec<ScreenPoint> = points
        .iter()
        .filter_map(|&(id, world)| {
            let cam = basis.camera_space(world);
            if cam.z <= NEAR_CLIP {
                return None;
            }
            Some(ScreenPoint {
                id,
                x: (cx + cam.x / cam.z * FOCAL_LENGTH * camera.zoom).round() as i32,
                y: (cy - cam.y / cam.z * FOCAL_LENGTH * camera.zoom).round() as i32,
                depth: cam.z,
                scale: FOCAL_LENGTH / cam.z,
            })
        })
        .collect();

    projected.sort_by(|a, b| {
        b.depth
            .partial_cmp(&a.depth)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    projected
}

/// Project an orbit-path polyline under the same view as [`project`].
///
/// `target` is the frame's resolved look target (see
/// [`CameraState::look_target`]). Segments behind the near clip plane are
/// dropped, which may split the polyline; the caller draws the survivors.
pub fn project_path(
    path: &[DVec3],
    camera: &CameraState,
    target: DVec3,
    viewport: Viewport,
) -> Vec<(i32, i32)> {
    let basis = camera.basis(target);
    let (cx, cy) = viewport.center();

    path.iter()
        .filter_map(|&world| {
            let cam = basis.camera_space(world);
            if cam.z <= NEAR_CLIP {
                return None;
            }
            Some((
                (cx + cam.x / cam.z * FOCAL_LENGTH * camera.zoom).round() as i32,
                (cy - cam.y / cam.z * FOCAL_LENGTH * camera.zoom).round() as i32,
            ))
        })
        .collect()
}

/// Zoom level that frames every given body with a [`FIT_MARGIN`] border,
/// clamped to the camera zoom range.
pub fn fit_zoom(
    points: &[(CelestialBodyId, DVec3)],
    camera: &CameraState,
    viewport: Viewport,
) -> f64 {
    let target = camera.look_target(points);
    let basis = camera.basis(target);

    let max_offset = points
        .iter()
        .map(|&(_, world)| basis.camera_space(world))
        .filter(|cam| cam.z > NEAR_CLIP)
        .map(|cam| (cam.x.abs() / cam.z * FOCAL_LENGTH).max(cam.y.abs() / cam.z * FOCAL_LENGTH))
        .fold(0.0_f64, f64::max);

    if max_offset <= 0.0 {
        return camera.zoom;
    }

    let half_extent = f64::from(viewport.width.min(viewport.height)) / 2.0;
    (FIT_MARGIN * half_extent / max_offset).clamp(MIN_ZOOM, MAX_ZOOM)
}
