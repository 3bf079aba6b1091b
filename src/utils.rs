//! Utility functions such as interleave/deinterleave

use num_traits::Float;

/// Combines separate real and imaginary component slices into a single
/// interleaved vector, the storage layout the transform entry points take.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub fn interleave<T: Float>(reals: &[T], imags: &[T]) -> Vec<T> {
    assert_eq!(reals.len(), imags.len());

    let mut signal = Vec::with_capacity(2 * reals.len());
    for (z_re, z_im) in reals.iter().zip(imags.iter()) {
        signal.push(*z_re);
        signal.push(*z_im);
    }
    signal
}

/// Separates an interleaved signal like `[re0, im0, re1, im1]` into
/// `([re0, re1], [im0, im1])`.
pub fn deinterleave<T: Float>(signal: &[T]) -> (Vec<T>, Vec<T>) {
    signal.chunks_exact(2).map(|z| (z[0], z[1])).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleave_round_trip() {
        let reals: Vec<f64> = (0..17).map(f64::from).collect();
        let imags: Vec<f64> = (0..17).map(|i| f64::from(-i)).collect();

        let signal = interleave(&reals, &imags);
        assert_eq!(signal.len(), 34);
        assert_eq!(&signal[..4], &[0.0, 0.0, 1.0, -1.0]);

        let (r, i) = deinterleave(&signal);
        assert_eq!(r, reals);
        assert_eq!(i, imags);
    }
}
