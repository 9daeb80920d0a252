//! Core trait for Tabu Search problems.

/// A minimization problem over a fixed-length vector of binary flags.
///
/// The neighborhood is the flip neighborhood: every neighbor differs from
/// the current state in exactly one flag.
pub trait FlipProblem {
    /// Number of decision variables (flags).
    fn variable_count(&self) -> usize;

    /// Non-negative objective of a complete assignment. Zero is optimal.
    fn objective(&self, flags: &[bool]) -> u64;

    /// Objective after flipping `index` only.
    ///
    /// `flags` is restored before returning. Implementations with an
    /// incremental formula may override this.
    fn flip_objective(&self, flags: &mut [bool], index: usize) -> u64 {
        flags[index] = !flags[index];
        let value = self.objective(flags);
        flags[index] = !flags[index];
        value
    }
}
