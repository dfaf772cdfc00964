//! Screen-space output for the viewer: perspective projection with depth
//! ordering, orbit-path polylines, and click picking.
//!
//! Everything here is pure geometry over the frame's inputs; the embedding
//! UI layer draws the returned primitives and owns all presentation state.

pub mod paths;
pub mod pick;
pub mod project;

pub use paths::OrbitPathCache;
pub use pick::screen_pick;
pub use project::{ScreenPoint, Viewport, fit_zoom, project, project_path};
