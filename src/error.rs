//! Error types for local search.

use thiserror::Error;

/// Rejection of a malformed problem instance or search configuration.
///
/// Searches never fail once started; every variant here is raised at
/// construction or before the first iteration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Graph coloring with zero colors.
    #[error("number of colors must be at least 1")]
    NoColors,

    /// Graph without any node.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// A node adjacent to itself can never be properly colored.
    #[error("node {0} is adjacent to itself")]
    SelfLoop(usize),

    /// Subset-sum instance without items.
    #[error("item list is empty")]
    NoItems,

    /// Declared item count disagrees with the weights supplied.
    #[error("expected {expected} items, got {actual}")]
    ItemCountMismatch {
        /// Declared item count.
        expected: usize,
        /// Number of weights actually supplied.
        actual: usize,
    },

    /// Tenure bounds are not ordered `min <= initial <= max`.
    #[error("tabu tenure must satisfy min <= initial <= max, got {min} <= {initial} <= {max}")]
    InvalidTenure {
        /// Lower tenure bound.
        min: usize,
        /// Starting tenure.
        initial: usize,
        /// Upper tenure bound.
        max: usize,
    },

    /// Iteration budget of zero.
    #[error("max_iterations must be positive")]
    ZeroIterations,
}

/// Result alias for fallible construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::SelfLoop(4).to_string(),
            "node 4 is adjacent to itself"
        );
        assert_eq!(
            ConfigError::ItemCountMismatch {
                expected: 3,
                actual: 2
            }
            .to_string(),
            "expected 3 items, got 2"
        );
    }
}
