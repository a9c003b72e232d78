//! End-to-end propagation tests.
//!
//! Covers the properties the marching engine must hold for every scheme,
//! limiter, and direction: periodicity of the wrap column, stationarity of
//! uniform fields, the acceleration boost, and the direction-dependent CFL
//! policy.

use hux_rs::{
    integrate, integrate_with_diagnostics, map_longitude, Direction, LimiterVariant, MeshSpacing,
    PhysicalParameters, PropagationError, SchemeVariant, SOLAR_RADIUS_KM,
};
use std::f64::consts::TAU;

const ALL_SCHEMES: [SchemeVariant; 6] = [
    SchemeVariant::UpwindFirst,
    SchemeVariant::MacCormack,
    SchemeVariant::LaxWendroff,
    SchemeVariant::LaxFriedrichs,
    SchemeVariant::UpwindMacCormack,
    SchemeVariant::UpwindLaxWendroff,
];

const ALL_LIMITERS: [LimiterVariant; 4] = [
    LimiterVariant::VanLeer,
    LimiterVariant::Minmod,
    LimiterVariant::Superbee,
    LimiterVariant::MonotonizedCentral,
];

/// Mesh comfortably inside the CFL bound for speeds >= 300 km/s.
fn stable_mesh(nr: usize, nphi: usize) -> MeshSpacing {
    MeshSpacing::new(vec![1.0e6; nr], vec![TAU / nphi as f64; nphi])
}

/// Smooth periodic slow/fast stream profile, nphi distinct cells.
fn stream_profile(nphi: usize) -> Vec<f64> {
    (0..nphi)
        .map(|j| 450.0 + 150.0 * (TAU * j as f64 / nphi as f64).sin())
        .collect()
}

#[test]
fn test_periodicity_forward_all_schemes_and_limiters() {
    let nphi = 64;
    let mesh = stable_mesh(40, nphi);
    let params = PhysicalParameters::default();
    let v0 = stream_profile(nphi);

    for scheme in ALL_SCHEMES {
        for limiter in ALL_LIMITERS {
            let field = integrate(
                &v0,
                &mesh,
                &params,
                scheme,
                limiter,
                Direction::Forward,
                true,
            )
            .unwrap();
            for i in 0..field.n_rows() {
                assert_eq!(
                    field.get(i, nphi),
                    field.get(i, 0),
                    "{scheme:?}/{limiter:?}: wrap column differs at row {i}"
                );
                assert!(field.get(i, 0).is_finite());
            }
        }
    }
}

#[test]
fn test_periodicity_backward() {
    let nphi = 64;
    let mesh = stable_mesh(40, nphi);
    let params = PhysicalParameters::default();
    let v1 = stream_profile(nphi);

    for scheme in [SchemeVariant::UpwindFirst, SchemeVariant::UpwindLaxWendroff] {
        for limiter in ALL_LIMITERS {
            let field = integrate(
                &v1,
                &mesh,
                &params,
                scheme,
                limiter,
                Direction::Backward,
                true,
            )
            .unwrap();
            for i in 0..field.n_rows() {
                assert_eq!(
                    field.get(i, nphi),
                    field.get(i, 0),
                    "{scheme:?}/{limiter:?}: wrap column differs at row {i}"
                );
                assert!(field.get(i, 0).is_finite());
            }
        }
    }
}

#[test]
fn test_uniform_field_stays_uniform_without_acceleration() {
    let nphi = 32;
    let mesh = stable_mesh(25, nphi);
    let params = PhysicalParameters::default();
    let v0 = vec![500.0; nphi];

    for scheme in ALL_SCHEMES {
        let field = integrate(
            &v0,
            &mesh,
            &params,
            scheme,
            LimiterVariant::Superbee,
            Direction::Forward,
            false,
        )
        .unwrap();
        for i in 0..field.n_rows() {
            for j in 0..field.n_cols() {
                assert_eq!(field.get(i, j), 500.0, "{scheme:?} drifted at ({i}, {j})");
            }
        }
    }
}

#[test]
fn test_acceleration_boost_at_forward_seed_row() {
    let nphi = 16;
    let mesh = stable_mesh(5, nphi);
    let params = PhysicalParameters::default();
    let v0 = vec![1.0; nphi];

    let field = integrate(
        &v0,
        &mesh,
        &params,
        SchemeVariant::UpwindFirst,
        LimiterVariant::VanLeer,
        Direction::Forward,
        true,
    )
    .unwrap();

    // alpha = 0.15, r0/rh = 30/50: literal value from the reference model.
    let expected = 1.0 + 0.15 * (1.0 - (-30.0_f64 / 50.0).exp());
    for j in 0..=nphi {
        assert!((field.get(0, j) - expected).abs() < 1e-12);
    }
}

#[test]
fn test_backward_removes_boost_at_inner_row() {
    let nphi = 16;
    let mesh = stable_mesh(5, nphi);
    let params = PhysicalParameters::default();
    let v1 = vec![500.0; nphi];

    let field = integrate(
        &v1,
        &mesh,
        &params,
        SchemeVariant::UpwindFirst,
        LimiterVariant::VanLeer,
        Direction::Backward,
        true,
    )
    .unwrap();

    // A uniform profile marches unchanged; only the inner row is adjusted,
    // after all rows are written.
    let delta = params.alpha * (1.0 - (-params.r0 / params.rh).exp());
    for i in 1..field.n_rows() {
        assert_eq!(field.get(i, 0), 500.0);
    }
    assert!((field.get(0, 0) - 500.0 * (1.0 - delta)).abs() < 1e-9);
}

#[test]
fn test_cfl_policy_asymmetry() {
    // dr large enough that slow cells exceed the Courant bound.
    let nphi = 64;
    let mesh = MeshSpacing::new(vec![2.0e7; 3], vec![TAU / nphi as f64; nphi]);
    let params = PhysicalParameters::default();
    let v0 = stream_profile(nphi);

    // Backward: fatal, with the offending indices surfaced.
    let err = integrate(
        &v0,
        &mesh,
        &params,
        SchemeVariant::UpwindFirst,
        LimiterVariant::VanLeer,
        Direction::Backward,
        false,
    )
    .unwrap_err();
    match err {
        PropagationError::StabilityViolation { step, courant, .. } => {
            assert_eq!(step, 0);
            assert!(courant > 1.0);
        }
        other => panic!("expected StabilityViolation, got {other:?}"),
    }

    // Forward: identical inputs complete, with the violations recorded.
    let (field, diag) = integrate_with_diagnostics(
        &v0,
        &mesh,
        &params,
        SchemeVariant::UpwindFirst,
        LimiterVariant::VanLeer,
        Direction::Forward,
        false,
    )
    .unwrap();
    assert_eq!(field.n_rows(), 4);
    assert!(diag.any_violation());
    assert!(diag.max_courant > 1.0);
    assert!(diag.violations.iter().all(|v| v.courant > 1.0));
}

#[test]
fn test_forward_upwind_respects_max_principle() {
    // Within the CFL bound the upwind update cannot create new extrema.
    let nphi = 64;
    let mesh = stable_mesh(60, nphi);
    let params = PhysicalParameters::default();
    let v0 = stream_profile(nphi);
    let (lo, hi) = (300.0, 600.0);

    let field = integrate(
        &v0,
        &mesh,
        &params,
        SchemeVariant::UpwindFirst,
        LimiterVariant::VanLeer,
        Direction::Forward,
        false,
    )
    .unwrap();

    for i in 0..field.n_rows() {
        for j in 0..field.n_cols() {
            let v = field.get(i, j);
            assert!(
                (lo - 1e-9..=hi + 1e-9).contains(&v),
                "value {v} at ({i}, {j}) outside the initial range"
            );
        }
    }
}

#[test]
fn test_backward_rejects_centered_schemes() {
    let nphi = 16;
    let mesh = stable_mesh(4, nphi);
    let params = PhysicalParameters::default();
    let v1 = vec![500.0; nphi];

    for scheme in [
        SchemeVariant::MacCormack,
        SchemeVariant::LaxWendroff,
        SchemeVariant::LaxFriedrichs,
        SchemeVariant::UpwindMacCormack,
    ] {
        let err = integrate(
            &v1,
            &mesh,
            &params,
            scheme,
            LimiterVariant::VanLeer,
            Direction::Backward,
            false,
        )
        .unwrap_err();
        assert_eq!(err, PropagationError::UnsupportedScheme { scheme });
    }
}

#[test]
fn test_ballistic_matches_march_direction() {
    // The ballistic shift moves structures the same way the march advects
    // them: toward smaller Carrington longitude for omega > 0.
    let params = PhysicalParameters::default();
    let phi: Vec<f64> = (0..32).map(|j| TAU * j as f64 / 32.0).collect();
    let v = vec![400.0; 32];

    let dr = 50.0 * SOLAR_RADIUS_KM;
    let mapped = map_longitude(&v, dr, &phi, params.omega_rot);

    let expected_shift = params.omega_rot * dr / 400.0;
    assert!(expected_shift < TAU);
    // Away from the wrap seam the shift is exact.
    assert!((phi[16] - mapped[16] - expected_shift).abs() < 1e-12);
}

#[test]
fn test_ballistic_zero_rotation_identity() {
    let phi: Vec<f64> = (0..48).map(|j| TAU * j as f64 / 48.0).collect();
    let v: Vec<f64> = (0..48).map(|j| 300.0 + 10.0 * j as f64).collect();
    assert_eq!(map_longitude(&v, 1.0e9, &phi, 0.0), phi);
}
