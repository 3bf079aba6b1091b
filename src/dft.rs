//! Recursive transform drivers: the plain radix-4 recursion and the
//! buffer-tiled variant that stages the combine phase through a small
//! scratch buffer for cache locality.

use num_traits::Float;

use crate::error::FftError;
use crate::kernels::{butterfly4, combine4};
use crate::planner::{checked_exponent, twiddle_group, Direction};
use crate::view::{ComplexView, ComplexViewMut};

/// Plain recursion: four quarter-size sub-transforms over the decimated
/// input, then `N/4` combine calls at stride `N/4`.
///
/// `exponent` is `log4` of the view's length; each output quarter is a
/// disjoint contiguous chunk of `y`.
fn dft_rec<T: Float>(
    x: ComplexView<'_, T>,
    y: &mut [T],
    exponent: usize,
    levels: &[Vec<T>],
) -> Result<(), FftError> {
    let n = x.len();
    if n == 4 {
        butterfly4(x, y);
        return Ok(());
    }

    let quarter = n / 4;
    for (j, y_quarter) in y.chunks_exact_mut(2 * quarter).enumerate() {
        dft_rec(x.decimate4(j), y_quarter, exponent - 1, levels)?;
    }

    for j in 0..quarter {
        let group = twiddle_group(levels, exponent, j)?;
        combine4(ComplexViewMut::new(y, j, quarter), group);
    }

    Ok(())
}

/// Buffer-tiled recursion: identical divide phase (delegating to the
/// plain recursion once `n <= threshold`), but the combine phase copies 4
/// chunks of `ls` complex samples into a contiguous scratch buffer, runs
/// `ls` combines on it, and copies back.
fn dft_tiled_rec<T: Float>(
    x: ComplexView<'_, T>,
    y: &mut [T],
    exponent: usize,
    levels: &[Vec<T>],
    threshold: usize,
    ls: usize,
) -> Result<(), FftError> {
    let n = x.len();
    if n == 4 {
        butterfly4(x, y);
        return Ok(());
    }

    let quarter = n / 4;
    if n > threshold {
        for (j, y_quarter) in y.chunks_exact_mut(2 * quarter).enumerate() {
            dft_tiled_rec(x.decimate4(j), y_quarter, exponent - 1, levels, threshold, ls)?;
        }
    } else {
        // Buffering overhead is not worth it for small sub-problems.
        for (j, y_quarter) in y.chunks_exact_mut(2 * quarter).enumerate() {
            dft_rec(x.decimate4(j), y_quarter, exponent - 1, levels)?;
        }
    }

    if quarter % ls != 0 {
        // Tile wider than a combine group's span; combine in place.
        for j in 0..quarter {
            let group = twiddle_group(levels, exponent, j)?;
            combine4(ComplexViewMut::new(y, j, quarter), group);
        }
        return Ok(());
    }

    // Scratch buffer for one combine tile: 4 chunks of `ls` complexes.
    // Owned by this frame only; a parallel caller gets its own.
    let mut buf = vec![T::zero(); 8 * ls];
    for j1 in 0..quarter / ls {
        for i in 0..4 {
            let src = 2 * (ls * j1 + quarter * i);
            buf[2 * ls * i..2 * ls * (i + 1)].copy_from_slice(&y[src..src + 2 * ls]);
        }

        for j2 in 0..ls {
            let group = twiddle_group(levels, exponent, j1 * ls + j2)?;
            combine4(ComplexViewMut::new(&mut buf, j2, ls), group);
        }

        for i in 0..4 {
            let dst = 2 * (ls * j1 + quarter * i);
            y[dst..dst + 2 * ls].copy_from_slice(&buf[2 * ls * i..2 * ls * (i + 1)]);
        }
    }

    Ok(())
}

pub(crate) enum Tiling {
    Plain,
    Tiled { threshold: usize, cache_line_complexes: usize },
}

/// Shared top-level entry point: validates every precondition before any
/// recursive descent, handles the `Reverse` direction by conjugation
/// around the forward recursion, and returns the freshly written output.
pub(crate) fn transform<T: Float>(
    input: &[T],
    levels: &[Vec<T>],
    num_points: usize,
    direction: Direction,
    tiling: &Tiling,
) -> Result<Vec<T>, FftError> {
    if input.len() % 2 != 0 {
        return Err(FftError::InvalidSize(input.len()));
    }
    let n = input.len() / 2;
    let exponent = checked_exponent(n)?;
    if num_points != n {
        return Err(FftError::UninitializedTable {
            expected: n,
            built_for: num_points,
        });
    }
    if let Tiling::Tiled { threshold, cache_line_complexes } = tiling {
        checked_exponent(*threshold)?;
        if *cache_line_complexes == 0 {
            return Err(FftError::InvalidSize(0));
        }
    }

    let mut output = vec![T::zero(); input.len()];

    let run_forward = |x: &[T], y: &mut [T]| match tiling {
        Tiling::Plain => dft_rec(ComplexView::new(x), y, exponent, levels),
        Tiling::Tiled { threshold, cache_line_complexes } => dft_tiled_rec(
            ComplexView::new(x),
            y,
            exponent,
            levels,
            *threshold,
            *cache_line_complexes,
        ),
    };

    match direction {
        Direction::Forward => run_forward(input, &mut output)?,
        Direction::Reverse => {
            let mut conjugated = input.to_vec();
            for z_im in conjugated.iter_mut().skip(1).step_by(2) {
                *z_im = -*z_im;
            }
            run_forward(&conjugated, &mut output)?;

            let scaling_factor = T::from(n).unwrap().recip();
            for z in output.chunks_exact_mut(2) {
                z[0] = z[0] * scaling_factor;
                z[1] = -z[1] * scaling_factor;
            }
        }
    }

    Ok(output)
}
