//! Property-based tests for ephemeris computations using proptest.
//!
//! These tests verify that orbital computations maintain expected properties
//! across a wide range of inputs.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::kepler::{KeplerOrbit, SOLVER_TOLERANCE};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Verify Kepler solver convergence for all valid eccentricities and mean anomalies.
    ///
    /// The solver should always converge and produce E such that M = E - e*sin(E).
    #[test]
    fn prop_kepler_solver_convergence(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.95,
    ) {
        let mean_anomaly = mean_anomaly_normalized * TAU;

        let orbit = KeplerOrbit::from_elements(
            1.0,
            eccentricity,
            0.0,
            0.0,
            0.0,
            0.0,
            365.256,
        ).unwrap();

        let e_anom = orbit.solve_eccentric_anomaly(mean_anomaly);

        // Verify Kepler's equation: M = E - e*sin(E)
        let m_check = e_anom - eccentricity * e_anom.sin();
        let m_normalized = mean_anomaly.rem_euclid(TAU);

        let error = (m_check - m_normalized).abs();
        prop_assert!(
            error < 10.0 * SOLVER_TOLERANCE,
            "Kepler solver failed: M={}, e={}, E={}, M_check={}, error={}",
            mean_anomaly, eccentricity, e_anom, m_check, error
        );
    }

    /// Verify mean anomaly normalization stays in [0, 2π) for arbitrary times.
    #[test]
    fn prop_mean_anomaly_normalized(
        t_days in -1.0e5f64..1.0e5,
        m0_deg in 0.0f64..360.0,
    ) {
        let orbit = KeplerOrbit::from_elements(
            1.524,
            0.0934,
            1.85,
            49.6,
            286.5,
            m0_deg,
            686.98,
        ).unwrap();

        let m = orbit.mean_anomaly_at_days(t_days);
        prop_assert!((0.0..TAU).contains(&m), "M = {} out of range at t = {}", m, t_days);
    }

    /// Verify position returns to start after one period.
    ///
    /// After exactly one orbital period, the body should return to its
    /// starting position within solver tolerance.
    #[test]
    fn prop_position_periodic(
        eccentricity in 0.0f64..0.6,
        start_time_days in -365.0f64..365.0,
        inclination_deg in 0.0f64..25.0,
    ) {
        let orbit = KeplerOrbit::from_elements(
            1.0,
            eccentricity,
            inclination_deg,
            30.0,
            45.0,
            10.0,
            365.256,
        ).unwrap();

        let period = orbit.period_days();
        let pos_start = orbit.position_at_days(start_time_days);
        let pos_end = orbit.position_at_days(start_time_days + period);

        let distance = (pos_end - pos_start).length();
        prop_assert!(
            distance < 1e-4,
            "Position not periodic: distance after one period = {} AU",
            distance
        );
    }

    /// Verify position continuity - no discontinuous jumps.
    ///
    /// Position should change smoothly over time with no sudden jumps.
    #[test]
    fn prop_position_continuity(
        start_time_days in 0.0f64..3650.0,
        eccentricity in 0.0f64..0.5,
    ) {
        let orbit = KeplerOrbit::from_elements(
            1.0,
            eccentricity,
            10.0,
            45.0,
            45.0,
            0.0,
            365.256,
        ).unwrap();

        // Check continuity over small time steps
        let dt = 0.05; // days
        let pos1 = orbit.position_at_days(start_time_days);
        let pos2 = orbit.position_at_days(start_time_days + dt);
        let pos3 = orbit.position_at_days(start_time_days + 2.0 * dt);

        // Finite-difference speeds in AU/day
        let v12 = (pos2 - pos1).length() / dt;
        let v23 = (pos3 - pos2).length() / dt;

        // Speed should not change dramatically between adjacent samples
        // (for non-extreme orbits)
        let v_change = (v23 - v12).abs() / (v12 + 1e-4);
        prop_assert!(
            v_change < 0.15,
            "Velocity discontinuity detected: v12={}, v23={}, change={}%",
            v12, v23, v_change * 100.0
        );
    }

    /// Verify radius bounds: r must stay within [a(1-e), a(1+e)] everywhere.
    #[test]
    fn prop_radius_within_apsides(
        eccentricity in 0.0f64..0.9,
        t_days in -1.0e4f64..1.0e4,
        semi_major_axis in 0.3f64..40.0,
    ) {
        let orbit = KeplerOrbit::from_elements(
            semi_major_axis,
            eccentricity,
            5.0,
            100.0,
            270.0,
            180.0,
            4332.0,
        ).unwrap();

        let r = orbit.position_at_days(t_days).length();
        let perihelion = semi_major_axis * (1.0 - eccentricity);
        let aphelion = semi_major_axis * (1.0 + eccentricity);

        prop_assert!(
            r >= perihelion * (1.0 - 1e-6) && r <= aphelion * (1.0 + 1e-6),
            "Radius {} AU outside [{}, {}] at t={}",
            r, perihelion, aphelion, t_days
        );
    }

    /// Verify sampled orbit paths are closed and finite.
    #[test]
    fn prop_sampled_path_closed(
        samples in 90usize..360,
        eccentricity in 0.0f64..0.8,
    ) {
        let orbit = KeplerOrbit::from_elements(
            5.2,
            eccentricity,
            1.3,
            100.5,
            273.9,
            20.0,
            4332.589,
        ).unwrap();

        let path = orbit.sample_path(samples);
        prop_assert_eq!(path.len(), samples + 1);

        for p in &path {
            prop_assert!(p.is_finite(), "Non-finite path sample: {:?}", p);
        }

        let gap = (path[0] - path[path.len() - 1]).length();
        prop_assert!(gap < 1e-9, "Path not closed: gap = {} AU", gap);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;
    use crate::ephemeris::data::all_bodies;

    #[test]
    fn test_all_body_orbits_have_valid_eccentricity() {
        for body in all_bodies() {
            // Only bodies with orbits (not the Sun)
            if let Some(ref orbit) = body.orbit {
                let e = orbit.eccentricity;
                assert!(
                    (0.0..1.0).contains(&e),
                    "{:?} has invalid eccentricity {}",
                    body.id,
                    e
                );
            }
        }
    }

    #[test]
    fn test_kepler_solver_at_boundary_mean_anomaly() {
        // Test at M = 0, π, 2π
        let orbit = KeplerOrbit::from_elements(1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 365.256).unwrap();

        for m in [0.0, std::f64::consts::PI, TAU - 0.001, TAU] {
            let e = orbit.solve_eccentric_anomaly(m);
            assert!(e.is_finite(), "Solver failed at M = {}", m);
        }
    }
}
