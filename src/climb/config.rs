//! Hill-climbing configuration and neighbor-selection strategies.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the next state is chosen among the neighbors of the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Steepest descent: the strictly best neighbor, first one on ties.
    #[default]
    Greedy,
    /// Uniform pick among all strictly improving neighbors.
    Stochastic,
    /// First strictly improving neighbor in generation order.
    FirstChoice,
    /// Greedy selection that tolerates a bounded run of stalled iterations.
    ///
    /// A stall repeats the same greedy selection from the same state; no
    /// new starting state is drawn.
    RandomRestart,
}

impl Strategy {
    /// Name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Stochastic => "stochastic",
            Strategy::FirstChoice => "first_choice",
            Strategy::RandomRestart => "random_restart",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hill-climbing strategy `{0}`")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(Strategy::Greedy),
            "stochastic" => Ok(Strategy::Stochastic),
            "first_choice" => Ok(Strategy::FirstChoice),
            "random_restart" => Ok(Strategy::RandomRestart),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

/// Configuration for a hill-climbing run.
///
/// # Examples
///
/// ```
/// use u_localsearch::climb::{ClimbConfig, Strategy};
///
/// let config = ClimbConfig::new(Strategy::RandomRestart)
///     .with_max_attempts(3)
///     .with_seed(42);
/// assert_eq!(config.max_attempts, 3);
/// assert_eq!(config.strategy, Strategy::RandomRestart);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClimbConfig {
    /// Neighbor-selection strategy.
    pub strategy: Strategy,
    /// Consecutive stalled iterations tolerated by [`Strategy::RandomRestart`].
    pub max_attempts: usize,
    /// Hard cap on expanded states. 0 = no limit.
    pub max_iterations: usize,
    /// Random seed (None for random). Only [`Strategy::Stochastic`] draws from it.
    pub seed: Option<u64>,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_attempts: 5,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl ClimbConfig {
    /// Default configuration with the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Sets the selection strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the consecutive stall budget of [`Strategy::RandomRestart`].
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    /// Sets the cap on expanded states (0 = no limit).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClimbConfig::default();
        assert_eq!(config.strategy, Strategy::Greedy);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.max_iterations, 0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_strategy_names_parse_back() {
        for s in [
            Strategy::Greedy,
            Strategy::Stochastic,
            Strategy::FirstChoice,
            Strategy::RandomRestart,
        ] {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
        }
    }

    #[test]
    fn test_unknown_strategy() {
        let err = "steepest".parse::<Strategy>().unwrap_err();
        assert_eq!(err.to_string(), "unknown hill-climbing strategy `steepest`");
    }
}
