//! Strided views over interleaved complex storage.
//!
//! A logical vector of `len` complex samples lives in a flat slice of
//! floats, element `i` at flat offset `2 * (offset + i * stride)`. The
//! recursive drivers carve sub-problems out of the input by copying a
//! view and adjusting its offset/stride, so no pointer arithmetic leaks
//! into the transform code itself.

use num_traits::Float;

/// Read-only view of a strided complex sub-vector.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ComplexView<'a, T> {
    data: &'a [T],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'a, T: Float> ComplexView<'a, T> {
    /// View over the whole signal, stride 1.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is odd.
    pub(crate) fn new(data: &'a [T]) -> Self {
        assert_eq!(data.len() % 2, 0);
        Self {
            data,
            offset: 0,
            stride: 1,
            len: data.len() / 2,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Complex sample `i` of this view as `(re, im)`.
    #[inline]
    pub(crate) fn get(&self, i: usize) -> (T, T) {
        debug_assert!(i < self.len);
        let base = 2 * (self.offset + i * self.stride);
        (self.data[base], self.data[base + 1])
    }

    /// Sub-view holding every 4th sample starting at `branch`, i.e. the
    /// radix-4 decimation `x[branch], x[branch + s], x[branch + 2s], ...`
    /// expressed against the original storage.
    #[inline]
    pub(crate) fn decimate4(&self, branch: usize) -> Self {
        debug_assert!(branch < 4);
        Self {
            data: self.data,
            offset: self.offset + branch * self.stride,
            stride: self.stride * 4,
            len: self.len / 4,
        }
    }
}

/// Mutable strided view used by the combine stage, which reads and
/// writes the same four slots `y[offset + i * stride]`.
pub(crate) struct ComplexViewMut<'a, T> {
    data: &'a mut [T],
    offset: usize,
    stride: usize,
}

impl<'a, T: Float> ComplexViewMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], offset: usize, stride: usize) -> Self {
        Self {
            data,
            offset,
            stride,
        }
    }

    #[inline]
    pub(crate) fn get(&self, i: usize) -> (T, T) {
        let base = 2 * (self.offset + i * self.stride);
        (self.data[base], self.data[base + 1])
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, re: T, im: T) {
        let base = 2 * (self.offset + i * self.stride);
        self.data[base] = re;
        self.data[base + 1] = im;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_signal_view() {
        let data: Vec<f64> = (0..8).map(f64::from).collect();
        let view = ComplexView::new(&data);
        assert_eq!(view.len(), 4);
        assert_eq!(view.get(0), (0.0, 1.0));
        assert_eq!(view.get(3), (6.0, 7.0));
    }

    #[test]
    fn decimation_walks_every_fourth_sample() {
        let data: Vec<f64> = (0..32).map(f64::from).collect();
        let view = ComplexView::new(&data);

        let branch1 = view.decimate4(1);
        assert_eq!(branch1.len(), 4);
        // Element k of branch j is x[j + 4k].
        assert_eq!(branch1.get(0), (2.0, 3.0));
        assert_eq!(branch1.get(1), (10.0, 11.0));

        let nested = branch1.decimate4(2);
        assert_eq!(nested.len(), 1);
        // j + 4*2 = 9 -> flat 18.
        assert_eq!(nested.get(0), (18.0, 19.0));
    }

    #[test]
    fn mut_view_round_trips() {
        let mut data = vec![0.0f64; 16];
        let mut view = ComplexViewMut::new(&mut data, 1, 3);
        view.set(0, 1.0, 2.0);
        view.set(1, 3.0, 4.0);
        assert_eq!(view.get(0), (1.0, 2.0));
        assert_eq!(data[2..4], [1.0, 2.0]);
        assert_eq!(data[8..10], [3.0, 4.0]);
    }
}
