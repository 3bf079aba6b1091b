/// Options to tune to improve performance depending on the hardware and input size.
///
/// Calling the tiled transform without specifying options will use a reasonable
/// default for the cache-line size of current mainstream hardware.
///
/// You only need to tune these options if you are trying to squeeze maximum
/// performance out of a known hardware platform that you can benchmark at
/// varying input sizes.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of complex samples assumed to fit in one cache line. The tiled
    /// combine stage copies chunks of this many samples through its scratch
    /// buffer. Must be non-zero; values that do not divide the sub-problem
    /// width make the affected recursion frames fall back to the in-place
    /// combine.
    pub cache_line_complexes: usize,
}

impl Default for Options {
    fn default() -> Self {
        // 64-byte lines and 16-byte double-precision complex samples.
        Self {
            cache_line_complexes: 4,
        }
    }
}

impl Options {
    /// Options for an explicit cache-line size in bytes, given the storage
    /// size of one complex sample.
    pub fn for_cache_line_bytes(line_bytes: usize, sample_bytes: usize) -> Self {
        Self {
            cache_line_complexes: (line_bytes / sample_bytes).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_line_sizes() {
        assert_eq!(Options::for_cache_line_bytes(64, 16).cache_line_complexes, 4);
        assert_eq!(Options::for_cache_line_bytes(64, 8).cache_line_complexes, 8);
        // Degenerate inputs still yield a usable tile width.
        assert_eq!(Options::for_cache_line_bytes(8, 16).cache_line_complexes, 1);
    }
}
