//! Error types for the example-items crate.

use thiserror::Error;

/// Errors that can occur during item generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The requested item count is zero or above the supported maximum.
    #[error("item count must be between 1 and {max}, got {requested}")]
    CountOutOfRange {
        /// Number of items requested by the caller.
        requested: usize,
        /// Largest count the generator accepts.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_out_of_range_formats_correctly() {
        let err = GenerationError::CountOutOfRange {
            requested: 0,
            max: 10_000,
        };
        assert_eq!(
            err.to_string(),
            "item count must be between 1 and 10000, got 0"
        );
    }
}
