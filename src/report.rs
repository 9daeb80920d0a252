//! Run reporting.
//!
//! Counters and human-readable summaries for finished runs. Nothing here
//! feeds back into a stopping decision.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::climb::ClimbResult;
use crate::tabu::TabuResult;

/// Node counters accumulated over a hill-climbing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClimbStats {
    /// States whose neighborhood was generated (iterations taken).
    pub expanded: usize,
    /// Neighbors generated, summed over all expansions.
    pub visited: usize,
}

impl ClimbStats {
    /// Records one expansion producing `neighbor_count` neighbors.
    pub fn record_expansion(&mut self, neighbor_count: usize) {
        self.expanded += 1;
        self.visited += neighbor_count;
    }
}

impl<S: fmt::Debug> fmt::Display for ClimbResult<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type of hill climbing: {}", self.strategy)?;
        writeln!(f, "Last state: {:?}", self.state)?;
        writeln!(f, "Heuristic: {} ({:?})", self.heuristic, self.termination)?;
        writeln!(f, "Number of visited nodes: {}", self.stats.visited)?;
        write!(f, "Number of expanded nodes: {}", self.stats.expanded)
    }
}

impl fmt::Display for TabuResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selected: Vec<usize> = self
            .best
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect();
        writeln!(f, "Best solution: S = {selected:?}")?;
        writeln!(
            f,
            "Search objective value: {} (iteration {} of {})",
            self.best_objective, self.best_iteration, self.iterations
        )?;
        write!(
            f,
            "Restores: {}, restarts: {}, deadlocks: {}",
            self.restores, self.restarts, self.deadlocks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climb::{Strategy, Termination};

    #[test]
    fn test_record_expansion() {
        let mut stats = ClimbStats::default();
        stats.record_expansion(3);
        stats.record_expansion(0);
        stats.record_expansion(2);
        assert_eq!(stats.expanded, 3);
        assert_eq!(stats.visited, 5);
    }

    #[test]
    fn test_climb_summary() {
        let result = ClimbResult {
            strategy: Strategy::FirstChoice,
            state: vec![1, 2],
            heuristic: 0,
            stats: ClimbStats {
                expanded: 1,
                visited: 2,
            },
            termination: Termination::Solved,
            heuristic_history: vec![1, 0],
        };
        let text = result.to_string();
        assert!(text.starts_with("Type of hill climbing: first_choice"));
        assert!(text.contains("Number of visited nodes: 2"));
        assert!(text.ends_with("Number of expanded nodes: 1"));
    }

    #[test]
    fn test_tabu_summary_lists_selected_indices() {
        let result = TabuResult {
            best: vec![true, false, true],
            best_objective: 0,
            iterations: 10,
            best_iteration: 4,
            restores: 0,
            restarts: 1,
            deadlocks: 0,
            objective_history: vec![],
        };
        let text = result.to_string();
        assert!(text.contains("S = [0, 2]"));
        assert!(text.contains("(iteration 4 of 10)"));
    }
}
