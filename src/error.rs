//! Errors the transform entry points can return.

/// Errors reported by planner construction and the transform drivers.
///
/// Every error is detected before any recursive descent begins, so a
/// failed call never leaves partial output behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The transform size (or tiling threshold) is not a power of 4, or is below 4.
    InvalidSize(usize),
    /// The combine stage addressed a twiddle level or group outside the table.
    IndexOutOfRange { level: usize, group: usize },
    /// The planner was built for a different size than the input signal.
    UninitializedTable { expected: usize, built_for: usize },
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSize(n) => {
                write!(f, "size {n} is not a power of 4 greater than or equal to 4")
            }
            Self::IndexOutOfRange { level, group } => {
                write!(f, "twiddle lookup out of range (level {level}, group {group})")
            }
            Self::UninitializedTable { expected, built_for } => {
                write!(
                    f,
                    "planner was built for {built_for} points but the signal has {expected}"
                )
            }
        }
    }
}

impl std::error::Error for FftError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_readable() {
        let err = FftError::InvalidSize(10);
        assert_eq!(
            err.to_string(),
            "size 10 is not a power of 4 greater than or equal to 4"
        );

        let err = FftError::UninitializedTable {
            expected: 16,
            built_for: 64,
        };
        assert!(err.to_string().contains("built for 64"));
    }
}
