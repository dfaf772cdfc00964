//! Cached orbit-path polylines for trail rendering.
//!
//! Orbital elements never change at runtime, so a body's sampled path is
//! cache-eligible: entries are computed on first access and only discarded
//! on explicit invalidation (selection change) or when the sampling
//! resolution changes. Recomputation is cheap, so no locking is involved;
//! the cache is plain single-threaded mutable state owned by the caller.

use std::collections::HashMap;

use glam::DVec3;
use log::debug;

use crate::ephemeris::{CelestialBodyId, Ephemeris};

/// Default number of samples per orbit; a rendering-quality knob, not a
/// correctness value.
pub const DEFAULT_PATH_SAMPLES: usize = 180;

/// Per-body cache of closed orbit polylines.
pub struct OrbitPathCache {
    samples: usize,
    paths: HashMap<CelestialBodyId, Vec<DVec3>>,
}

impl Default for OrbitPathCache {
    fn default() -> Self {
        Self::new(DEFAULT_PATH_SAMPLES)
    }
}

impl OrbitPathCache {
    /// Create a cache sampling `samples` points per orbit.
    pub fn new(samples: usize) -> Self {
        Self {
            samples,
            paths: HashMap::new(),
        }
    }

    /// Current sampling resolution.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Change the sampling resolution, discarding every cached path.
    pub fn set_samples(&mut self, samples: usize) {
        if samples != self.samples {
            self.samples = samples;
            self.paths.clear();
        }
    }

    /// The closed orbit polyline for a body, sampling it on first access.
    ///
    /// Returns `None` for bodies without an orbit (the Sun).
    pub fn path(&mut self, ephemeris: &Ephemeris, id: CelestialBodyId) -> Option<&[DVec3]> {
        if !self.paths.contains_key(&id) {
            let orbit = ephemeris.body_data(id)?.orbit.as_ref()?;
            debug!(
                "sampling orbit path for {} ({} samples)",
                id.name(),
                self.samples
            );
            self.paths.insert(id, orbit.sample_path(self.samples));
        }
        self.paths.get(&id).map(Vec::as_slice)
    }

    /// Drop one body's cached path (e.g. on selection change).
    pub fn invalidate(&mut self, id: CelestialBodyId) {
        self.paths.remove(&id);
    }

    /// Drop every cached path.
    pub fn clear(&mut self) {
        self.paths.clear();
    }
}
