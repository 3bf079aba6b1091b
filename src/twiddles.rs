//! Per-level twiddle factor generation for the radix-4 combine stage.

macro_rules! impl_generate_level_for {
    ($func_name:ident, $precision:ident) => {
        /// Twiddle coefficients for one combine level of sub-transform `size`:
        /// `size / 4` groups of 4 interleaved `(cos, sin)` pairs at angles
        /// `-2*pi*i*k / size` for `i` in `0..4`.
        ///
        /// The higher powers of each root are produced by complex
        /// multiplication instead of three more `sin_cos` calls per group.
        pub(crate) fn $func_name(size: usize) -> Vec<$precision> {
            debug_assert!(size >= 16 && size % 4 == 0);

            let mut level = Vec::with_capacity(2 * size);
            let angle_mult = -2.0 * std::$precision::consts::PI / size as $precision;

            for k in 0..size / 4 {
                let (s1, c1) = (angle_mult * k as $precision).sin_cos();
                let (c2, s2) = (c1 * c1 - s1 * s1, c1 * s1 + s1 * c1);
                let (c3, s3) = (c2 * c1 - s2 * s1, c2 * s1 + s2 * c1);
                level.extend_from_slice(&[1.0, 0.0, c1, s1, c2, s2, c3, s3]);
            }

            level
        }
    };
}

impl_generate_level_for!(generate_level_64, f64);
impl_generate_level_for!(generate_level_32, f32);

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    use utilities::assert_float_closeness;

    use super::*;

    #[test]
    fn level_16_known_values() {
        let level = generate_level_64(16);
        assert_eq!(level.len(), 32);

        // Group k = 0 is four unit coefficients.
        for i in 0..4 {
            assert_float_closeness(level[2 * i], 1.0, 1e-12);
            assert_float_closeness(level[2 * i + 1], 0.0, 1e-12);
        }

        // Group k = 1, i = 1: e^{-i 2 pi / 16}.
        assert_float_closeness(level[10], (PI / 8.0).cos(), 1e-12);
        assert_float_closeness(level[11], -(PI / 8.0).sin(), 1e-12);

        // Group k = 1, i = 2: e^{-i pi / 4}.
        assert_float_closeness(level[12], FRAC_1_SQRT_2, 1e-12);
        assert_float_closeness(level[13], -FRAC_1_SQRT_2, 1e-12);

        // Group k = 2, i = 2: e^{-i pi / 2}.
        assert_float_closeness(level[20], 0.0, 1e-12);
        assert_float_closeness(level[21], -1.0, 1e-12);
    }

    #[test]
    fn chained_powers_match_direct_evaluation() {
        let size = 256;
        let level = generate_level_64(size);

        for k in 0..size / 4 {
            for i in 0..4 {
                let angle = -2.0 * PI * (i * k) as f64 / size as f64;
                assert_float_closeness(level[8 * k + 2 * i], angle.cos(), 1e-10);
                assert_float_closeness(level[8 * k + 2 * i + 1], angle.sin(), 1e-10);
            }
        }
    }
}
