use std::f64::consts::PI;

use rand::{distributions::Uniform, prelude::*};

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: num_traits::Float + std::fmt::Display>(
    actual: T,
    expected: T,
    epsilon: T,
) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random complex signal in the provided interleaved buffer
///
/// # Panics
///
/// Panics if `signal.len()` is odd
pub fn gen_random_signal<T>(signal: &mut [T])
where
    T: num_traits::Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(signal.len() % 2, 0, "interleaved signal must have even length");

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for sample in signal.iter_mut() {
        *sample = uniform_dist.sample(&mut rng);
    }
}

/// Direct O(N^2) forward DFT over an interleaved complex signal, the
/// test oracle for the fast transforms.
pub fn naive_dft(signal: &[f64]) -> Vec<f64> {
    let n = signal.len() / 2;
    let mut spectrum = vec![0.0; signal.len()];

    for k in 0..n {
        let (mut sum_re, mut sum_im) = (0.0, 0.0);
        for t in 0..n {
            let angle = -2.0 * PI * ((k * t) % n) as f64 / n as f64;
            let (sin, cos) = angle.sin_cos();
            let (re, im) = (signal[2 * t], signal[2 * t + 1]);
            sum_re += re * cos - im * sin;
            sum_im += re * sin + im * cos;
        }
        spectrum[2 * k] = sum_re;
        spectrum[2 * k + 1] = sum_im;
    }

    spectrum
}
