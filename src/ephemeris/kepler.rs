//! Kepler orbit solver using Newton's method for the Kepler equation.

use glam::{DMat3, DVec3};
use log::warn;

use crate::types::DEG_TO_RAD;

/// Convergence tolerance for the Kepler equation solver, in radians.
pub const SOLVER_TOLERANCE: f64 = 1e-6;

/// Hard iteration cap for the Kepler equation solver.
///
/// For bound orbits (e < 1) Newton's method converges well within this in
/// practice; the cap guards edge-case eccentricities. Hitting it is treated
/// as a recoverable approximation, never a frame failure.
pub const SOLVER_MAX_ITERATIONS: u32 = 30;

/// Error rejecting an invalid orbital element set at construction time.
///
/// The element table is static configuration compiled into the program, so
/// any of these indicates a data-entry defect rather than a runtime
/// condition.
#[derive(thiserror::Error, Debug)]
pub enum ElementsError {
    #[error("eccentricity {0} outside [0, 1): orbit is not bound")]
    UnboundOrbit(f64),

    #[error("non-positive semi-major axis: {0} AU")]
    InvalidSemiMajorAxis(f64),

    #[error("non-positive orbital period: {0} days")]
    InvalidPeriod(f64),
}

/// Keplerian orbital elements for computing heliocentric positions
/// analytically. Angles in radians, distances in AU, time in days.
#[derive(Clone, Debug)]
pub struct KeplerOrbit {
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless, 0 ≤ e < 1 for ellipse)
    pub eccentricity: f64,
    /// Inclination to the ecliptic in radians
    pub inclination: f64,
    /// Longitude of the ascending node in radians
    pub ascending_node: f64,
    /// Argument of periapsis in radians
    pub argument_of_periapsis: f64,
    /// Mean anomaly at J2000 epoch in radians
    pub mean_anomaly_at_epoch: f64,
    /// Mean motion in radians per day
    pub mean_motion: f64,
    /// Precomposed orbital-plane → ecliptic rotation
    to_ecliptic: DMat3,
}

impl KeplerOrbit {
    /// Create a new Kepler orbit from J2000 orbital elements.
    ///
    /// # Arguments
    /// * `semi_major_axis` - Semi-major axis in AU
    /// * `eccentricity` - Orbital eccentricity (must be in [0, 1))
    /// * `inclination_deg` - Inclination to the ecliptic in degrees
    /// * `ascending_node_deg` - Longitude of the ascending node in degrees
    /// * `argument_of_periapsis_deg` - Argument of periapsis in degrees
    /// * `mean_anomaly_at_epoch_deg` - Mean anomaly at J2000 epoch in degrees
    /// * `period_days` - Orbital period in days (must be positive)
    ///
    /// # Errors
    /// Rejects unbound orbits (e ≥ 1) and non-positive axes/periods; the
    /// element table is fixed at program start, so a rejection here is a
    /// data-entry defect in that table.
    pub fn from_elements(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
        argument_of_periapsis_deg: f64,
        mean_anomaly_at_epoch_deg: f64,
        period_days: f64,
    ) -> Result<Self, ElementsError> {
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(ElementsError::UnboundOrbit(eccentricity));
        }
        if semi_major_axis <= 0.0 {
            return Err(ElementsError::InvalidSemiMajorAxis(semi_major_axis));
        }
        if period_days <= 0.0 {
            return Err(ElementsError::InvalidPeriod(period_days));
        }

        let inclination = inclination_deg * DEG_TO_RAD;
        let ascending_node = ascending_node_deg * DEG_TO_RAD;
        let argument_of_periapsis = argument_of_periapsis_deg * DEG_TO_RAD;

        // Orbital plane to ecliptic: rotate by ω about z, then i about x,
        // then Ω about z. The order is load-bearing; swapping it misorients
        // the orbit.
        let to_ecliptic = DMat3::from_rotation_z(ascending_node)
            * DMat3::from_rotation_x(inclination)
            * DMat3::from_rotation_z(argument_of_periapsis);

        Ok(Self {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node,
            argument_of_periapsis,
            mean_anomaly_at_epoch: mean_anomaly_at_epoch_deg * DEG_TO_RAD,
            mean_motion: std::f64::consts::TAU / period_days,
            to_ecliptic,
        })
    }

    /// Mean anomaly at `t` days past epoch, normalized to [0, 2π).
    pub fn mean_anomaly_at_days(&self, t_days: f64) -> f64 {
        (self.mean_anomaly_at_epoch + self.mean_motion * t_days)
            .rem_euclid(std::f64::consts::TAU)
    }

    /// Solve Kepler's equation M = E - e*sin(E) for eccentric anomaly E
    /// using Newton's method.
    ///
    /// # Arguments
    /// * `mean_anomaly` - Mean anomaly M in radians
    ///
    /// # Returns
    /// Eccentric anomaly E in radians. If the iteration cap is reached the
    /// last iterate is returned as the best available approximation and a
    /// warning is logged; a real-time frame never fails on this.
    pub fn solve_eccentric_anomaly(&self, mean_anomaly: f64) -> f64 {
        // Normalize mean anomaly to [0, 2π)
        let m = mean_anomaly.rem_euclid(std::f64::consts::TAU);

        // Initial guess: E = M for low eccentricity, π for high e
        let mut e_anomaly = if self.eccentricity < 0.8 {
            m
        } else {
            std::f64::consts::PI
        };

        for _ in 0..SOLVER_MAX_ITERATIONS {
            let sin_e = e_anomaly.sin();
            let cos_e = e_anomaly.cos();

            // f(E) = E - e*sin(E) - M
            let f = e_anomaly - self.eccentricity * sin_e - m;
            // f'(E) = 1 - e*cos(E)
            let f_prime = 1.0 - self.eccentricity * cos_e;

            // Newton step
            let delta = f / f_prime;
            e_anomaly -= delta;

            if delta.abs() < SOLVER_TOLERANCE {
                return e_anomaly;
            }
        }

        warn!(
            "Kepler solver hit iteration cap (e={}, M={:.6}); using last iterate",
            self.eccentricity, m
        );
        e_anomaly
    }

    /// Compute true anomaly from eccentric anomaly.
    ///
    /// # Arguments
    /// * `eccentric_anomaly` - Eccentric anomaly E in radians
    ///
    /// # Returns
    /// True anomaly ν in radians
    pub fn eccentric_to_true_anomaly(&self, eccentric_anomaly: f64) -> f64 {
        let e = self.eccentricity;
        let half_e = eccentric_anomaly / 2.0;

        // Using atan2 for full quadrant coverage (atan only returns [-π/2, π/2])
        // Formula: ν = 2 * atan2(sqrt(1+e) * sin(E/2), sqrt(1-e) * cos(E/2))
        let y = (1.0 + e).sqrt() * half_e.sin();
        let x = (1.0 - e).sqrt() * half_e.cos();
        2.0 * y.atan2(x)
    }

    /// Compute orbital radius from eccentric anomaly.
    ///
    /// # Arguments
    /// * `eccentric_anomaly` - Eccentric anomaly E in radians
    ///
    /// # Returns
    /// Distance from the Sun in AU
    pub fn radius(&self, eccentric_anomaly: f64) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * eccentric_anomaly.cos())
    }

    /// Heliocentric position at `t` days past the J2000 epoch.
    ///
    /// # Returns
    /// Position vector in AU, J2000 ecliptic frame.
    pub fn position_at_days(&self, t_days: f64) -> DVec3 {
        let mean_anomaly = self.mean_anomaly_at_days(t_days);
        let e_anomaly = self.solve_eccentric_anomaly(mean_anomaly);
        self.position_at_eccentric_anomaly(e_anomaly)
    }

    /// Sample one full orbit as a closed polyline.
    ///
    /// Samples are taken at evenly spaced mean anomalies measured from
    /// periapsis, so the path covers exactly one orbital revolution and is
    /// independent of the body's current time offset. The first and last
    /// points coincide, closing the loop. `samples` is a rendering-quality
    /// knob and is clamped to a sane range.
    pub fn sample_path(&self, samples: usize) -> Vec<DVec3> {
        let samples = samples.clamp(16, 4096);
        let mut points = Vec::with_capacity(samples + 1);

        for i in 0..=samples {
            let m = std::f64::consts::TAU * i as f64 / samples as f64;
            let e_anomaly = self.solve_eccentric_anomaly(m);
            points.push(self.position_at_eccentric_anomaly(e_anomaly));
        }

        points
    }

    /// Orbital period in days.
    pub fn period_days(&self) -> f64 {
        std::f64::consts::TAU / self.mean_motion
    }

    /// Position on the orbit for a solved eccentric anomaly.
    fn position_at_eccentric_anomaly(&self, e_anomaly: f64) -> DVec3 {
        let true_anomaly = self.eccentric_to_true_anomaly(e_anomaly);
        let radius = self.radius(e_anomaly);

        let in_plane = DVec3::new(
            radius * true_anomaly.cos(),
            radius * true_anomaly.sin(),
            0.0,
        );
        self.to_ecliptic * in_plane
    }
}
