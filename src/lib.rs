//! quadfft is a pure-Rust implementation of the recursive radix-4 Fast
//! Fourier Transform, for signals whose length is a power of 4.
//!
//! Two drivers share one contract: [`fft_64`] runs the plain recursion,
//! and [`fft_64_tiled`] stages the combine phase through a small,
//! cache-line-sized scratch buffer to improve locality on large inputs.
//! Both produce identical output. Signals are flat interleaved arrays of
//! floats (`[re0, im0, re1, im1, ...]`); a [`planner::Planner64`] built
//! for the signal length owns the twiddle factor table and carries the
//! transform [`planner::Direction`].
//!
//! ```
//! use quadfft::planner::{Direction, Planner64};
//!
//! let planner = Planner64::new(4, Direction::Forward).unwrap();
//! let impulse = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! let spectrum = quadfft::fft_64(&impulse, &planner).unwrap();
//! assert_eq!(spectrum, vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
//! ```

use crate::error::FftError;
use crate::options::Options;

mod dft;
pub mod error;
mod kernels;
pub mod options;
pub mod planner;
mod twiddles;
pub mod utils;
mod view;

macro_rules! impl_fft_for {
    ($fft:ident, $fft_tiled:ident, $fft_tiled_with_opts:ident, $precision:ty, $planner:ty) => {
        /// Transform the interleaved signal with the plain recursive driver,
        /// returning the freshly written spectrum.
        ///
        /// # Errors
        ///
        /// [`FftError::InvalidSize`] if the signal's logical length is not a
        /// power of 4 at least 4; [`FftError::UninitializedTable`] if the
        /// planner was built for a different length. Nothing is written on
        /// error.
        pub fn $fft(input: &[$precision], planner: &$planner) -> Result<Vec<$precision>, FftError> {
            crate::dft::transform(
                input,
                &planner.levels,
                planner.num_points,
                planner.direction,
                &crate::dft::Tiling::Plain,
            )
        }

        /// Transform with the buffer-tiled driver using default [`Options`].
        ///
        /// Sub-problems larger than `threshold` recurse through the tiled
        /// driver; smaller ones delegate to the plain recursion. `threshold`
        /// must itself be a power of 4 at least 4.
        ///
        /// # Errors
        ///
        /// As [`fft_64`], plus [`FftError::InvalidSize`] for a bad `threshold`.
        pub fn $fft_tiled(
            input: &[$precision],
            planner: &$planner,
            threshold: usize,
        ) -> Result<Vec<$precision>, FftError> {
            $fft_tiled_with_opts(input, &Options::default(), planner, threshold)
        }

        /// Transform with the buffer-tiled driver and explicit [`Options`].
        pub fn $fft_tiled_with_opts(
            input: &[$precision],
            opts: &Options,
            planner: &$planner,
            threshold: usize,
        ) -> Result<Vec<$precision>, FftError> {
            crate::dft::transform(
                input,
                &planner.levels,
                planner.num_points,
                planner.direction,
                &crate::dft::Tiling::Tiled {
                    threshold,
                    cache_line_complexes: opts.cache_line_complexes,
                },
            )
        }
    };
}

impl_fft_for!(fft_64, fft_64_tiled, fft_64_tiled_with_opts, f64, crate::planner::Planner64);
impl_fft_for!(fft_32, fft_32_tiled, fft_32_tiled_with_opts, f32, crate::planner::Planner32);

#[cfg(feature = "complex-nums")]
macro_rules! impl_fft_complex_for {
    ($func_name:ident, $precision:ty, $planner:ty, $fft_func:ident) => {
        /// Transform a slice of [`num_complex::Complex`] samples.
        ///
        /// The slice is reinterpreted as interleaved floats without copying
        /// on the way in.
        ///
        /// # Errors
        ///
        /// See [`fft_64`].
        pub fn $func_name(
            signal: &[num_complex::Complex<$precision>],
            planner: &$planner,
        ) -> Result<Vec<num_complex::Complex<$precision>>, FftError> {
            let flat: &[$precision] = bytemuck::cast_slice(signal);
            let spectrum = $fft_func(flat, planner)?;
            Ok(spectrum
                .chunks_exact(2)
                .map(|z| num_complex::Complex::new(z[0], z[1]))
                .collect())
        }
    };
}

#[cfg(feature = "complex-nums")]
impl_fft_complex_for!(fft_64_complex, f64, crate::planner::Planner64, fft_64);
#[cfg(feature = "complex-nums")]
impl_fft_complex_for!(fft_32_complex, f32, crate::planner::Planner32, fft_32);
