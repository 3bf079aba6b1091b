//! The planner module provides a convenient interface for planning and executing
//! a radix-4 Fast Fourier Transform (FFT). The planner is responsible for
//! pre-computing the twiddle factor table for every combine level of the
//! recursion, as well as carrying the direction of the FFT.

use crate::error::FftError;
use crate::twiddles::{generate_level_32, generate_level_64};

/// Reverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Copy, Clone, Debug)]
pub enum Direction {
    /// Leave the exponent term in the twiddle factor alone
    Forward = 1,
    /// Multiply the exponent term in the twiddle factor by -1
    Reverse = -1,
}

/// Validates a transform size and returns its radix-4 exponent `log4(n)`.
pub(crate) fn checked_exponent(n: usize) -> Result<usize, FftError> {
    if n >= 4 && n.is_power_of_two() && n.trailing_zeros() % 2 == 0 {
        Ok((n.trailing_zeros() / 2) as usize)
    } else {
        Err(FftError::InvalidSize(n))
    }
}

/// Bounds-checked lookup of the 8-float twiddle group used by one combine
/// call: level `exponent` covers sub-transforms of size `4^exponent`.
pub(crate) fn twiddle_group<T>(
    levels: &[Vec<T>],
    exponent: usize,
    group: usize,
) -> Result<&[T], FftError> {
    let out_of_range = FftError::IndexOutOfRange {
        level: exponent,
        group,
    };

    // Levels start at sub-transform size 16, i.e. exponent 2.
    let level = exponent
        .checked_sub(2)
        .and_then(|idx| levels.get(idx))
        .ok_or(out_of_range)?;
    level.get(8 * group..8 * group + 8).ok_or(out_of_range)
}

macro_rules! impl_planner_for {
    ($struct_name:ident, $precision:ty, $generate_level_fn:ident) => {
        /// The planner owns the twiddle factor table for all the `log_4(N) - 1`
        /// combine levels of the recursion. Level `j` (sub-transform size
        /// `16 * 4^j`) holds `size / 4` groups of 4 interleaved complex
        /// coefficients; the recursion's size-4 leaves need no twiddles, so a
        /// planner for `N == 4` carries an empty table.
        pub struct $struct_name {
            /// One interleaved coefficient array per combine level, smallest
            /// sub-transform first
            pub(crate) levels: Vec<Vec<$precision>>,
            /// The transform size this planner was built for
            pub(crate) num_points: usize,
            /// The direction of the FFT associated with this planner
            pub direction: Direction,
        }

        impl $struct_name {
            /// Create a planner for an FFT of size `num_points`.
            ///
            /// The twiddle table is pre-computed based on the provided
            /// [`Direction`]; the table itself always stores forward
            /// coefficients and `Reverse` is applied by conjugation at
            /// transform time.
            ///
            /// # Errors
            ///
            /// Returns [`FftError::InvalidSize`] if `num_points` is not a
            /// power of 4, or is less than 4. No partial table is allocated
            /// on failure.
            pub fn new(num_points: usize, direction: Direction) -> Result<Self, FftError> {
                let exponent = checked_exponent(num_points)?;

                let levels = (2..=exponent)
                    .map(|level| $generate_level_fn(1 << (2 * level)))
                    .collect();

                Ok(Self {
                    levels,
                    num_points,
                    direction,
                })
            }

            /// The transform size this planner serves.
            pub fn num_points(&self) -> usize {
                self.num_points
            }
        }
    };
}

impl_planner_for!(Planner64, f64, generate_level_64);
impl_planner_for!(Planner32, f32, generate_level_32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_of_powers_of_four() {
        assert_eq!(checked_exponent(4), Ok(1));
        assert_eq!(checked_exponent(16), Ok(2));
        assert_eq!(checked_exponent(1 << 20), Ok(10));
    }

    #[test]
    fn rejects_sizes_that_are_not_powers_of_four() {
        for n in [0, 1, 2, 3, 8, 10, 32, 100, 128] {
            assert_eq!(checked_exponent(n), Err(FftError::InvalidSize(n)));
        }
    }

    macro_rules! test_planner_levels {
        ($test_name:ident, $planner:ty) => {
            #[test]
            fn $test_name() {
                // N == 4 is pure base case: no combine level exists.
                let planner = <$planner>::new(4, Direction::Forward).unwrap();
                assert!(planner.levels.is_empty());

                let planner = <$planner>::new(1024, Direction::Forward).unwrap();
                assert_eq!(planner.levels.len(), 4);
                for (j, level) in planner.levels.iter().enumerate() {
                    // Level j covers sub-transforms of size 16 * 4^j and
                    // stores 2 floats per coefficient.
                    assert_eq!(level.len(), 2 * (16 << (2 * j)));
                }
            }
        };
    }

    test_planner_levels!(planner_levels_64, Planner64);
    test_planner_levels!(planner_levels_32, Planner32);

    #[test]
    fn invalid_size_allocates_nothing() {
        assert!(matches!(
            Planner64::new(10, Direction::Forward),
            Err(FftError::InvalidSize(10))
        ));
    }

    #[test]
    fn group_lookup_is_bounds_checked() {
        let planner = Planner64::new(64, Direction::Forward).unwrap();

        assert!(twiddle_group(&planner.levels, 3, 15).is_ok());
        assert_eq!(
            twiddle_group(&planner.levels, 3, 16),
            Err(FftError::IndexOutOfRange { level: 3, group: 16 })
        );
        assert_eq!(
            twiddle_group(&planner.levels, 4, 0),
            Err(FftError::IndexOutOfRange { level: 4, group: 0 })
        );
        assert_eq!(
            twiddle_group(&planner.levels, 1, 0),
            Err(FftError::IndexOutOfRange { level: 1, group: 0 })
        );
    }
}
