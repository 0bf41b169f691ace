//! Conversion Validation Tests
//!
//! Sweeps the Euler ↔ quaternion conversions over their input domain:
//! 1. Round trips in the regular region
//! 2. Unit norm of generated quaternions
//! 3. Principal ranges of recovered angles
//! 4. Gimbal-lock poles and floating-point overshoot
//! 5. Agreement with nalgebra's Euler conventions

use approx::assert_relative_eq;
use nalgebra::UnitQuaternion;
use std::f64::consts::{FRAC_PI_2, PI};

use gimbal_core::{
    euler_to_quaternion, quaternion_to_euler, ConverterConfig, EulerAngles, Pole, Quaternion,
    Regime, RotationConverter,
};

/// Evenly spaced samples over `[start, end]`
fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(move |i| start + step * i as f64)
}

/// Euler triples with pitch kept 0.01 rad away from the poles
fn regular_grid() -> Vec<EulerAngles> {
    let margin = 0.01;
    let mut grid = Vec::new();
    for roll in linspace(-3.1, 3.1, 13) {
        for pitch in linspace(-FRAC_PI_2 + margin, FRAC_PI_2 - margin, 11) {
            for yaw in linspace(-3.1, 3.1, 13) {
                grid.push(EulerAngles::new(roll, pitch, yaw));
            }
        }
    }
    grid
}

mod round_trip_tests {
    use super::*;

    #[test]
    fn test_identity_round_trip() {
        let q = euler_to_quaternion(&EulerAngles::zero());
        assert_relative_eq!(q, Quaternion::identity(), epsilon = 1e-15);

        let e = quaternion_to_euler(&q);
        assert_relative_eq!(e, EulerAngles::zero(), epsilon = 1e-15);
    }

    #[test]
    fn test_combined_rotation_round_trip() {
        let e = EulerAngles::new(0.3, 0.4, 0.5);
        let recovered = quaternion_to_euler(&euler_to_quaternion(&e));

        assert_relative_eq!(recovered, e, epsilon = 1e-9);
    }

    #[test]
    fn test_regular_region_round_trip() {
        let converter = RotationConverter::default();

        for e in regular_grid() {
            let q = converter.euler_to_quaternion(&e);
            let d = converter.decompose(&q);

            assert_eq!(d.regime, Regime::Regular, "unexpected gimbal lock for {e:?}");
            assert_relative_eq!(d.angles, e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_out_of_range_angles_map_to_same_rotation() {
        // pitch beyond π/2 is a valid rotation, remapped into the principal range
        let converter = RotationConverter::default();
        let e = EulerAngles::new(0.2, 2.0, -0.3);

        let q = converter.euler_to_quaternion(&e);
        let recovered = converter.quaternion_to_euler(&q);
        let q_back = converter.euler_to_quaternion(&recovered);

        assert!(recovered.pitch.abs() <= FRAC_PI_2);
        assert_relative_eq!(
            q.to_unit_quaternion().angle_to(&q_back.to_unit_quaternion()),
            0.0,
            epsilon = 1e-6
        );
    }
}

mod invariant_tests {
    use super::*;

    #[test]
    fn test_unit_norm_for_all_inputs() {
        for roll in linspace(-10.0, 10.0, 21) {
            for pitch in linspace(-10.0, 10.0, 21) {
                for yaw in linspace(-10.0, 10.0, 21) {
                    let q = euler_to_quaternion(&EulerAngles::new(roll, pitch, yaw));
                    assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_unit_norm_without_output_normalization() {
        let converter = RotationConverter::new(ConverterConfig {
            normalize_output: false,
            ..Default::default()
        })
        .unwrap();

        for e in regular_grid() {
            let q = converter.euler_to_quaternion(&e);
            assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_principal_ranges() {
        // Unit quaternions spread over the sphere, poles included
        let samples: Vec<f64> = linspace(-1.0, 1.0, 9).collect();

        for &w in &samples {
            for &x in &samples {
                for &y in &samples {
                    for &z in &samples {
                        let Ok(q) = Quaternion::new(w, x, y, z).normalize() else {
                            continue;
                        };

                        let e = quaternion_to_euler(&q);

                        assert!(e.pitch.abs() <= FRAC_PI_2, "pitch out of range for {q:?}");
                        assert!(e.roll > -PI && e.roll <= PI, "roll out of range for {q:?}");
                        assert!(e.yaw > -PI && e.yaw <= PI, "yaw out of range for {q:?}");
                    }
                }
            }
        }
    }
}

mod gimbal_lock_tests {
    use super::*;

    #[test]
    fn test_north_pole_scenario() {
        let q = euler_to_quaternion(&EulerAngles::new(0.0, FRAC_PI_2, 0.0));
        let e = quaternion_to_euler(&q);

        assert_relative_eq!(e.pitch, FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(e.roll, 0.0);
    }

    #[test]
    fn test_south_pole_scenario() {
        let q = euler_to_quaternion(&EulerAngles::new(0.0, -FRAC_PI_2, 0.0));
        let e = quaternion_to_euler(&q);

        assert_relative_eq!(e.pitch, -FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(e.roll, 0.0);
    }

    #[test]
    fn test_axis_aligned_pole_quaternions() {
        // 90 deg about Y, then a yaw of 90 deg about world Z
        let half = FRAC_PI_2 / 2.0;
        let pitch_up = Quaternion::new(half.cos(), 0.0, half.sin(), 0.0);
        let e = quaternion_to_euler(&pitch_up);
        assert_eq!(e.roll, 0.0);
        assert_relative_eq!(e.pitch, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(e.yaw, 0.0, epsilon = 1e-12);

        // q_z(π/2) ⊗ q_y(π/2) = (1/2, −1/2, 1/2, 1/2)
        let e = quaternion_to_euler(&Quaternion::new(0.5, -0.5, 0.5, 0.5));
        assert_eq!(e.roll, 0.0);
        assert_relative_eq!(e.pitch, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(e.yaw, FRAC_PI_2, epsilon = 1e-12);

        // q_z(π/2) ⊗ q_y(−π/2) = (1/2, 1/2, −1/2, 1/2)
        let e = quaternion_to_euler(&Quaternion::new(0.5, 0.5, -0.5, 0.5));
        assert_eq!(e.roll, 0.0);
        assert_relative_eq!(e.pitch, -FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(e.yaw, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_pole_results_describe_input_rotation() {
        let converter = RotationConverter::default();

        for pitch in [FRAC_PI_2, -FRAC_PI_2] {
            for roll in linspace(-3.0, 3.0, 7) {
                for yaw in linspace(-3.0, 3.0, 7) {
                    let q = converter.euler_to_quaternion(&EulerAngles::new(roll, pitch, yaw));
                    let d = converter.decompose(&q);

                    assert!(d.regime.is_singular());
                    assert_eq!(d.angles.roll, 0.0);

                    let q_back = converter.euler_to_quaternion(&d.angles);
                    let distance = q.to_unit_quaternion().angle_to(&q_back.to_unit_quaternion());
                    assert_relative_eq!(distance, 0.0, epsilon = 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_overshoot_guard() {
        // sin(pitch) argument computes to just above 1
        let component = (0.5_f64 + 5e-11).sqrt();
        let q = Quaternion::new(component, 0.0, component, 0.0);

        let strict = RotationConverter::new(ConverterConfig {
            normalize_input: false,
            ..Default::default()
        })
        .unwrap();

        let d = strict.decompose(&q);

        assert_eq!(d.regime, Regime::GimbalLock(Pole::North));
        assert!(!d.angles.pitch.is_nan());
        assert_relative_eq!(d.angles.pitch, FRAC_PI_2, epsilon = 1e-6);
    }
}

mod nalgebra_consistency_tests {
    use super::*;

    #[test]
    fn test_matches_nalgebra_euler_construction() {
        for e in regular_grid() {
            let ours = euler_to_quaternion(&e);
            let theirs = Quaternion::from(UnitQuaternion::from_euler_angles(e.roll, e.pitch, e.yaw));

            assert_relative_eq!(ours, theirs, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matches_nalgebra_euler_extraction() {
        for e in regular_grid() {
            let na_q = UnitQuaternion::from_euler_angles(e.roll, e.pitch, e.yaw);
            let (roll, pitch, yaw) = na_q.euler_angles();

            let ours = quaternion_to_euler(&Quaternion::from(na_q));

            assert_relative_eq!(ours, EulerAngles::new(roll, pitch, yaw), epsilon = 1e-9);
        }
    }
}

mod concurrency_tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_converter_shared_across_threads() {
        let converter = RotationConverter::default();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                thread::spawn(move || {
                    let e = EulerAngles::new(0.1 * i as f64, 0.2, -0.3);
                    let q = converter.euler_to_quaternion(&e);
                    (e, converter.quaternion_to_euler(&q))
                })
            })
            .collect();

        for handle in handles {
            let (input, output) = handle.join().unwrap();
            assert_relative_eq!(output, input, epsilon = 1e-9);
        }
    }
}
