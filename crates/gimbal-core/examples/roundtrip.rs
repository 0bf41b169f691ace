//! Round-trip Demonstration
//!
//! Converts a generic attitude and a gimbal-locked attitude to quaternions
//! and back. Run with `RUST_LOG=warn` to see the gimbal-lock warning.

use std::f64::consts::FRAC_PI_2;

use gimbal_core::{EulerAngles, RotationConverter};

fn print_round_trip(converter: &RotationConverter, input: EulerAngles) {
    let q = converter.euler_to_quaternion(&input);
    let d = converter.decompose(&q);

    println!("Input (deg) : {:.2?}", input.to_degrees());
    println!("Quaternion  : {:.4?}", q.to_array());
    println!("Output (deg): {:.2?}", d.angles.to_degrees());
    println!("Regime      : {:?}", d.regime);
}

fn main() {
    env_logger::init();

    let converter = RotationConverter::default();

    println!("=== Case 1: Standard Rotation ===");
    print_round_trip(&converter, EulerAngles::new(0.5, 0.5, 0.5));

    println!("\n=== Case 2: Gimbal Lock (Pitch = 90°) ===");
    print_round_trip(&converter, EulerAngles::new(0.0, FRAC_PI_2, 0.0));
}
