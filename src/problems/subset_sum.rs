//! Subset-sum as a flip problem.

use crate::error::{ConfigError, Result};
use crate::tabu::FlipProblem;

/// Choose items whose weights sum as close as possible to `target`.
///
/// Weights may be negative. The objective is `|sum(selected) - target|`.
#[derive(Debug, Clone)]
pub struct SubsetSum {
    items: Vec<i64>,
    target: i64,
}

impl SubsetSum {
    /// Creates an instance of `item_count` weights.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoItems`] for an empty list and
    /// [`ConfigError::ItemCountMismatch`] when `items.len() != item_count`.
    pub fn new(item_count: usize, target: i64, items: Vec<i64>) -> Result<Self> {
        if items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        if items.len() != item_count {
            return Err(ConfigError::ItemCountMismatch {
                expected: item_count,
                actual: items.len(),
            });
        }
        Ok(Self { items, target })
    }

    /// Item weights.
    pub fn items(&self) -> &[i64] {
        &self.items
    }

    /// Target sum.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Sum of the selected weights.
    pub fn sum(&self, flags: &[bool]) -> i128 {
        self.items
            .iter()
            .zip(flags)
            .filter(|&(_, &on)| on)
            .map(|(&w, _)| i128::from(w))
            .sum()
    }

    /// Weights of the selected items, in item order.
    pub fn selected_items(&self, flags: &[bool]) -> Vec<i64> {
        self.items
            .iter()
            .zip(flags)
            .filter_map(|(&w, &on)| on.then_some(w))
            .collect()
    }
}

impl FlipProblem for SubsetSum {
    fn variable_count(&self) -> usize {
        self.items.len()
    }

    fn objective(&self, flags: &[bool]) -> u64 {
        let deviation = (self.sum(flags) - i128::from(self.target)).unsigned_abs();
        u64::try_from(deviation).unwrap_or(u64::MAX)
    }

    fn flip_objective(&self, flags: &mut [bool], index: usize) -> u64 {
        let weight = i128::from(self.items[index]);
        let delta = if flags[index] { -weight } else { weight };
        let deviation = (self.sum(flags) + delta - i128::from(self.target)).unsigned_abs();
        u64::try_from(deviation).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tabu::{TabuConfig, TabuRunner, TabuSearch};

    const ITEMS: [i64; 9] = [-7, -3, -2, 5, 8, 3, 2, -1, 10];

    fn instance() -> SubsetSum {
        SubsetSum::new(9, 0, ITEMS.to_vec()).unwrap()
    }

    #[test]
    fn test_zero_target_reached() {
        let problem = instance();
        for seed in 0..20 {
            let config = TabuConfig::default().with_seed(seed);
            let result = TabuRunner::run(&problem, &config).unwrap();
            assert_eq!(result.best_objective, 0, "seed {seed}");
            assert_eq!(problem.sum(&result.best), 0);
            assert!(result.iterations <= 300);
        }
    }

    #[test]
    fn test_runs_full_budget_after_reaching_zero() {
        let problem = instance();
        let config = TabuConfig::default().with_seed(42);
        let result = TabuRunner::run(&problem, &config).unwrap();
        assert_eq!(result.iterations, 300);
        assert_eq!(result.objective_history.len(), 300);
        assert_eq!(result.restarts, 3);
    }

    #[test]
    fn test_objective_and_selection() {
        let problem = instance();
        let flags = [true, false, false, true, false, false, false, false, false];
        assert_eq!(problem.sum(&flags), -2);
        assert_eq!(problem.objective(&flags), 2);
        assert_eq!(problem.selected_items(&flags), vec![-7, 5]);
        assert_eq!(problem.objective(&[true; 9]), 15);
    }

    #[test]
    fn test_flip_objective_matches_full_evaluation() {
        let problem = SubsetSum::new(4, 6, vec![4, -1, 9, 2]).unwrap();
        let mut flags = vec![true, true, false, false];
        for i in 0..4 {
            let incremental = problem.flip_objective(&mut flags, i);
            let mut flipped = flags.clone();
            flipped[i] = !flipped[i];
            assert_eq!(incremental, problem.objective(&flipped));
        }
        assert_eq!(flags, vec![true, true, false, false]);
    }

    #[test]
    fn test_flip_round_trip() {
        let problem = instance();
        let original = vec![false, true, true, false, true, false, false, true, false];
        let mut search = TabuSearch::with_initial_state(
            &problem,
            TabuConfig::default(),
            create_rng(0),
            original.clone(),
        )
        .unwrap();
        search.step();
        let moved: Vec<usize> = (0..9)
            .filter(|&i| search.flags()[i] != original[i])
            .collect();
        assert_eq!(moved.len(), 1);

        let mut back = search.flags().to_vec();
        back[moved[0]] = !back[moved[0]];
        assert_eq!(back, original);
    }

    #[test]
    fn test_rejects_bad_instances() {
        assert_eq!(
            SubsetSum::new(0, 5, vec![]).err(),
            Some(ConfigError::NoItems)
        );
        assert_eq!(
            SubsetSum::new(3, 5, vec![1, 2]).err(),
            Some(ConfigError::ItemCountMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let problem = SubsetSum::new(2, i64::MIN, vec![i64::MAX, i64::MAX]).unwrap();
        assert_eq!(problem.objective(&[true, true]), u64::MAX);
    }
}
