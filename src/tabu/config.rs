//! Tabu Search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// What to do when every variable is tabu at move-selection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeadlockPolicy {
    /// Move the variable with the smallest remaining countdown, lowest
    /// index on ties.
    #[default]
    LeastRemaining,
    /// Apply a diversification restart, then select among the freed
    /// variables as usual.
    Diversify,
}

/// Configuration parameters for adaptive Tabu Search over binary flags.
///
/// # Examples
///
/// ```
/// use u_localsearch::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tenure(2, 3, 6)
///     .with_stagnation_limit(50);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.initial_tenure, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabuConfig {
    /// Number of iterations to run.
    pub max_iterations: usize,
    /// Lower bound of the adaptive tenure.
    pub tenure_min: usize,
    /// Tenure at the start of the run.
    pub initial_tenure: usize,
    /// Upper bound of the adaptive tenure.
    pub tenure_max: usize,
    /// Stagnant iterations before restoring the last improving solution.
    pub stagnation_limit: usize,
    /// Every `restart_period` iterations the state is randomized and the
    /// tabu list cleared. 0 disables restarts.
    pub restart_period: usize,
    /// Resolution of the all-moves-tabu case.
    pub deadlock_policy: DeadlockPolicy,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 300,
            tenure_min: 3,
            initial_tenure: 4,
            tenure_max: 5,
            stagnation_limit: 30,
            restart_period: 100,
            deadlock_policy: DeadlockPolicy::default(),
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tenure bounds and starting tenure.
    pub fn with_tenure(mut self, min: usize, initial: usize, max: usize) -> Self {
        self.tenure_min = min;
        self.initial_tenure = initial;
        self.tenure_max = max;
        self
    }

    /// Sets the stagnation limit that triggers a restore.
    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    /// Sets the restart period (0 disables restarts).
    pub fn with_restart_period(mut self, n: usize) -> Self {
        self.restart_period = n;
        self
    }

    /// Sets the deadlock policy.
    pub fn with_deadlock_policy(mut self, policy: DeadlockPolicy) -> Self {
        self.deadlock_policy = policy;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !(self.tenure_min <= self.initial_tenure && self.initial_tenure <= self.tenure_max) {
            return Err(ConfigError::InvalidTenure {
                min: self.tenure_min,
                initial: self.initial_tenure,
                max: self.tenure_max,
            });
        }
        Ok(())
    }
}
