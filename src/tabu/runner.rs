//! Adaptive Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate a random initial assignment
//! 2. At each iteration:
//!    a. Record a new best, or restore the last improving solution after
//!    prolonged stagnation; periodically randomize and clear the tabu list
//!    b. Flip the best non-tabu variable
//!    c. Age the tabu list and forbid the flipped variable for `tenure`
//!    iterations
//!    d. Shrink the tenure after an improving move, grow it otherwise
//! 3. Terminate after `max_iterations`
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Battiti, R. & Tecchiolli, G. (1994). "The reactive tabu search",
//! *ORSA Journal on Computing* 6(2), 126-140.

use rand::Rng;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::{DeadlockPolicy, TabuConfig};
use super::types::FlipProblem;
use crate::error::{ConfigError, Result};
use crate::random::rng_from_seed;

/// An owned assignment together with its objective.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// Flag values.
    pub flags: Vec<bool>,
    /// Objective of `flags`.
    pub objective: u64,
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabuResult {
    /// Best assignment found.
    pub best: Vec<bool>,
    /// Objective of the best assignment.
    pub best_objective: u64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Completed iterations when the best assignment was reached.
    pub best_iteration: usize,
    /// Restores from the last improving solution.
    pub restores: usize,
    /// Diversification restarts.
    pub restarts: usize,
    /// Iterations in which every variable was tabu.
    pub deadlocks: usize,
    /// Best objective after each iteration.
    pub objective_history: Vec<u64>,
}

/// A Tabu Search session.
///
/// Owns the live assignment, the tabu list, the adaptive tenure, the
/// stagnation counter and both snapshots. Callers may drive it one
/// [`step`](Self::step) at a time or [`run`](Self::run) it to the end.
pub struct TabuSearch<'a, P: FlipProblem, R: Rng> {
    problem: &'a P,
    config: TabuConfig,
    rng: R,
    flags: Vec<bool>,
    objective: u64,
    tabu: Vec<usize>,
    tenure: usize,
    stagnation: usize,
    best: Snapshot,
    last_improving: Snapshot,
    iteration: usize,
    best_iteration: usize,
    restores: usize,
    restarts: usize,
    deadlocks: usize,
    objective_history: Vec<u64>,
}

impl<'a, P: FlipProblem, R: Rng> TabuSearch<'a, P, R> {
    /// Creates a session starting from a uniformly random assignment.
    pub fn new(problem: &'a P, config: TabuConfig, mut rng: R) -> Result<Self> {
        let flags = random_flags(problem.variable_count(), &mut rng);
        Self::with_initial_state(problem, config, rng, flags)
    }

    /// Creates a session starting from `flags`.
    pub fn with_initial_state(
        problem: &'a P,
        config: TabuConfig,
        rng: R,
        flags: Vec<bool>,
    ) -> Result<Self> {
        config.validate()?;
        let n = problem.variable_count();
        if n == 0 {
            return Err(ConfigError::NoItems);
        }
        if flags.len() != n {
            return Err(ConfigError::ItemCountMismatch {
                expected: n,
                actual: flags.len(),
            });
        }

        let objective = problem.objective(&flags);
        let initial = Snapshot {
            flags: flags.clone(),
            objective,
        };

        Ok(Self {
            problem,
            tenure: config.initial_tenure,
            objective_history: Vec::with_capacity(config.max_iterations),
            config,
            rng,
            flags,
            objective,
            tabu: vec![0; n],
            stagnation: 0,
            best: initial.clone(),
            last_improving: initial,
            iteration: 0,
            best_iteration: 0,
            restores: 0,
            restarts: 0,
            deadlocks: 0,
        })
    }

    /// Executes one iteration.
    pub fn step(&mut self) {
        self.iteration += 1;

        if self.objective < self.best.objective {
            self.best = self.snapshot();
            self.best_iteration = self.iteration - 1;
            self.stagnation = 0;
        } else if self.stagnation >= self.config.stagnation_limit {
            self.flags.clone_from(&self.last_improving.flags);
            self.objective = self.last_improving.objective;
            self.stagnation = 0;
            self.restores += 1;
            debug!(
                iteration = self.iteration,
                objective = self.objective,
                "restored last improving solution"
            );
        } else {
            self.stagnation += 1;
        }

        if self.config.restart_period > 0
            && self.iteration.is_multiple_of(self.config.restart_period)
        {
            self.restart();
        }

        let old_objective = self.objective;
        let index = match self.select_move() {
            Some(index) => index,
            None => self.resolve_deadlock(),
        };

        self.flags[index] = !self.flags[index];
        self.objective = self.problem.objective(&self.flags);

        for countdown in self.tabu.iter_mut() {
            *countdown = countdown.saturating_sub(1);
        }
        self.tabu[index] = self.tenure;

        if self.objective < old_objective {
            self.tenure = self.tenure.saturating_sub(1).max(self.config.tenure_min);
            self.last_improving = self.snapshot();
            self.stagnation = 0;
        } else {
            self.tenure = (self.tenure + 1).min(self.config.tenure_max);
        }

        trace!(
            iteration = self.iteration,
            index,
            objective = self.objective,
            tenure = self.tenure,
            "flipped"
        );
        self.objective_history.push(self.best.objective);
    }

    /// Runs the remaining iterations and returns the result.
    pub fn run(mut self) -> TabuResult {
        debug!(
            variables = self.flags.len(),
            objective = self.objective,
            max_iterations = self.config.max_iterations,
            "tabu search started"
        );
        while self.iteration < self.config.max_iterations {
            self.step();
        }
        self.finish()
    }

    /// Stops the session, counting the current assignment as a candidate best.
    pub fn finish(mut self) -> TabuResult {
        if self.objective < self.best.objective {
            self.best = self.snapshot();
            self.best_iteration = self.iteration;
            if let Some(last) = self.objective_history.last_mut() {
                *last = self.best.objective;
            }
        }

        debug!(
            best_objective = self.best.objective,
            iterations = self.iteration,
            restores = self.restores,
            restarts = self.restarts,
            deadlocks = self.deadlocks,
            "tabu search finished"
        );

        TabuResult {
            best: self.best.flags,
            best_objective: self.best.objective,
            iterations: self.iteration,
            best_iteration: self.best_iteration,
            restores: self.restores,
            restarts: self.restarts,
            deadlocks: self.deadlocks,
            objective_history: self.objective_history,
        }
    }

    /// Completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Live assignment.
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Objective of the live assignment.
    pub fn objective(&self) -> u64 {
        self.objective
    }

    /// Remaining tabu iterations per variable.
    pub fn tabu_list(&self) -> &[usize] {
        &self.tabu
    }

    /// Current tenure.
    pub fn tenure(&self) -> usize {
        self.tenure
    }

    /// Consecutive iterations without a new best.
    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    /// Best-known solution recorded so far.
    pub fn best(&self) -> &Snapshot {
        &self.best
    }

    /// Restore point used after prolonged stagnation.
    pub fn last_improving(&self) -> &Snapshot {
        &self.last_improving
    }

    /// Restores from the last improving solution so far.
    pub fn restores(&self) -> usize {
        self.restores
    }

    /// Diversification restarts so far.
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Iterations so far in which every variable was tabu.
    pub fn deadlocks(&self) -> usize {
        self.deadlocks
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            flags: self.flags.clone(),
            objective: self.objective,
        }
    }

    /// Lowest-objective non-tabu flip; the lowest index wins ties.
    fn select_move(&mut self) -> Option<usize> {
        let mut selected: Option<(usize, u64)> = None;
        for i in 0..self.flags.len() {
            if self.tabu[i] > 0 {
                continue;
            }
            let value = self.problem.flip_objective(&mut self.flags, i);
            if selected.is_none_or(|(_, best)| value < best) {
                selected = Some((i, value));
            }
        }
        selected.map(|(i, _)| i)
    }

    fn resolve_deadlock(&mut self) -> usize {
        self.deadlocks += 1;
        debug!(
            iteration = self.iteration,
            policy = ?self.config.deadlock_policy,
            "every variable is tabu"
        );
        match self.config.deadlock_policy {
            DeadlockPolicy::LeastRemaining => (0..self.tabu.len())
                .min_by_key(|&i| self.tabu[i])
                .unwrap_or(0),
            DeadlockPolicy::Diversify => {
                self.restart();
                self.select_move().unwrap_or(0)
            }
        }
    }

    /// Diversification restart: random assignment, empty tabu list.
    fn restart(&mut self) {
        self.flags = random_flags(self.flags.len(), &mut self.rng);
        self.objective = self.problem.objective(&self.flags);
        self.tabu.fill(0);
        self.restarts += 1;
        debug!(
            iteration = self.iteration,
            objective = self.objective,
            "diversification restart"
        );
    }
}

fn random_flags<R: Rng>(n: usize, rng: &mut R) -> Vec<bool> {
    (0..n).map(|_| rng.random_bool(0.5)).collect()
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::problems::SubsetSum;
    /// use u_localsearch::tabu::{TabuConfig, TabuRunner};
    ///
    /// let problem = SubsetSum::new(4, 9, vec![2, 7, 4, 5]).unwrap();
    /// let config = TabuConfig::default().with_seed(42);
    /// let result = TabuRunner::run(&problem, &config).unwrap();
    /// assert_eq!(result.iterations, 300);
    /// assert_eq!(result.best_objective, 0);
    /// ```
    pub fn run<P: FlipProblem>(problem: &P, config: &TabuConfig) -> Result<TabuResult> {
        let rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, rng)
    }

    /// Executes Tabu Search drawing randomness from `rng`.
    pub fn run_with_rng<P: FlipProblem, R: Rng>(
        problem: &P,
        config: &TabuConfig,
        rng: R,
    ) -> Result<TabuResult> {
        Ok(TabuSearch::new(problem, config.clone(), rng)?.run())
    }
}
