//! Radix-4 butterfly kernels: the size-4 base case and the strided
//! twiddle-combine stage.

use num_traits::Float;

use crate::view::{ComplexView, ComplexViewMut};

/// 4-point DIF butterfly, the recursion's leaf computation.
///
/// Reads 4 complex samples through the strided input view and writes the
/// 4-point DFT (forward convention) contiguously into `y[0..8]`, bin `m`
/// at complex slot `m`. Computed as 8 real sums/differences; the `-j`
/// rotation of bins 1 and 3 shows up as the cross-swapped real/imaginary
/// terms in `t5`/`t7`.
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon",
))]
#[inline]
pub(crate) fn butterfly4<T: Float>(x: ComplexView<'_, T>, y: &mut [T]) {
    debug_assert_eq!(x.len(), 4);

    let (x0_re, x0_im) = x.get(0);
    let (x1_re, x1_im) = x.get(1);
    let (x2_re, x2_im) = x.get(2);
    let (x3_re, x3_im) = x.get(3);

    let t0 = x0_re + x2_re;
    let t1 = x1_re + x3_re;
    let t2 = x0_im + x2_im;
    let t3 = x1_im + x3_im;
    let t4 = x0_re - x2_re;
    let t5 = x1_im - x3_im;
    let t6 = x0_im - x2_im;
    let t7 = x1_re - x3_re;

    y[0] = t0 + t1;
    y[1] = t2 + t3;
    y[2] = t4 + t5;
    y[3] = t6 - t7;
    y[4] = t0 - t1;
    y[5] = t2 - t3;
    y[6] = t4 - t5;
    y[7] = t6 + t7;
}

/// Twiddle-combine stage applied across the strided outputs of four
/// sub-transforms.
///
/// Multiplies the four complex values of `y` by the 8-float twiddle group
/// (true complex product `(ar*br - ai*bi, ar*bi + ai*br)`), then applies
/// the same 4-point butterfly as [`butterfly4`], writing back to the same
/// strided slots.
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon",
))]
#[inline]
pub(crate) fn combine4<T: Float>(mut y: ComplexViewMut<'_, T>, twiddles: &[T]) {
    debug_assert_eq!(twiddles.len(), 8);

    let mut z = [T::zero(); 8];
    for i in 0..4 {
        let (a_re, a_im) = y.get(i);
        let (w_re, w_im) = (twiddles[2 * i], twiddles[2 * i + 1]);
        z[2 * i] = a_re * w_re - a_im * w_im;
        z[2 * i + 1] = a_re * w_im + a_im * w_re;
    }

    let t0 = z[0] + z[4];
    let t1 = z[2] + z[6];
    let t2 = z[1] + z[5];
    let t3 = z[3] + z[7];
    let t4 = z[0] - z[4];
    let t5 = z[3] - z[7];
    let t6 = z[1] - z[5];
    let t7 = z[2] - z[6];

    y.set(0, t0 + t1, t2 + t3);
    y.set(1, t4 + t5, t6 - t7);
    y.set(2, t0 - t1, t2 - t3);
    y.set(3, t4 - t5, t6 + t7);
}
