//! Hill-climbing execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the problem's initial state
//! 2. At each iteration:
//!    a. Generate the neighbor moves of the current state
//!    b. Select a strictly improving move according to the [`Strategy`]
//!    c. Apply it, or count a stall if none was selected
//! 3. Terminate when the heuristic reaches zero, when no improving move
//!    exists (after the stall budget for [`Strategy::RandomRestart`]), or
//!    at the optional iteration cap

use rand::Rng;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::{ClimbConfig, Strategy};
use super::types::ClimbProblem;
use crate::random::rng_from_seed;
use crate::report::ClimbStats;

/// Why a hill-climbing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// The heuristic reached zero.
    Solved,
    /// No neighbor improves on the current state.
    Converged,
    /// [`Strategy::RandomRestart`] spent its stall budget.
    AttemptsExhausted,
    /// `max_iterations` states were expanded.
    IterationLimit,
}

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClimbResult<S> {
    /// Strategy the run used.
    pub strategy: Strategy,
    /// Final state.
    pub state: S,
    /// Heuristic of the final state.
    pub heuristic: u64,
    /// Expanded and visited node counters.
    pub stats: ClimbStats,
    /// Stopping reason.
    pub termination: Termination,
    /// Heuristic of every accepted state, starting with the initial one.
    pub heuristic_history: Vec<u64>,
}

impl<S> ClimbResult<S> {
    /// Returns `true` if the final state has heuristic zero.
    pub fn is_solved(&self) -> bool {
        self.heuristic == 0
    }
}

/// Hill-climbing runner.
pub struct ClimbRunner;

impl ClimbRunner {
    /// Runs hill climbing with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::{BTreeMap, BTreeSet};
    /// use u_localsearch::climb::{ClimbConfig, ClimbRunner, Strategy};
    /// use u_localsearch::problems::GraphColoring;
    ///
    /// let mut graph = BTreeMap::new();
    /// graph.insert(1, BTreeSet::from([2]));
    /// graph.insert(2, BTreeSet::from([3]));
    /// let problem = GraphColoring::new(graph, 2).unwrap();
    ///
    /// let result = ClimbRunner::run(&problem, &ClimbConfig::new(Strategy::Greedy));
    /// assert!(result.is_solved());
    /// ```
    pub fn run<P: ClimbProblem>(problem: &P, config: &ClimbConfig) -> ClimbResult<P::State> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs hill climbing drawing randomness from `rng`.
    pub fn run_with_rng<P: ClimbProblem, R: Rng>(
        problem: &P,
        config: &ClimbConfig,
        rng: &mut R,
    ) -> ClimbResult<P::State> {
        let mut current = problem.initial_state();
        let mut current_h = problem.heuristic(&current);
        let mut stats = ClimbStats::default();
        let mut heuristic_history = vec![current_h];
        let mut stalls = 0usize;

        debug!(strategy = %config.strategy, heuristic = current_h, "hill climbing started");

        let termination = loop {
            if current_h == 0 {
                break Termination::Solved;
            }
            if config.max_iterations > 0 && stats.expanded >= config.max_iterations {
                break Termination::IterationLimit;
            }

            let moves = problem.neighbors(&current);
            stats.record_expansion(moves.len());

            let chosen = match config.strategy {
                Strategy::Greedy | Strategy::RandomRestart => {
                    select_greedy(problem, &mut current, current_h, &moves)
                }
                Strategy::Stochastic => {
                    select_stochastic(problem, &mut current, current_h, &moves, rng)
                }
                Strategy::FirstChoice => {
                    select_first_choice(problem, &mut current, current_h, &moves)
                }
            };

            match chosen {
                Some((index, h)) => {
                    problem.apply(&mut current, &moves[index]);
                    trace!(expanded = stats.expanded, heuristic = h, "accepted move");
                    current_h = h;
                    stalls = 0;
                    heuristic_history.push(current_h);
                }
                None if config.strategy == Strategy::RandomRestart => {
                    if stalls >= config.max_attempts {
                        break Termination::AttemptsExhausted;
                    }
                    stalls += 1;
                    trace!(stalls, "no improving neighbor");
                }
                None => break Termination::Converged,
            }
        };

        debug!(
            ?termination,
            heuristic = current_h,
            expanded = stats.expanded,
            visited = stats.visited,
            "hill climbing finished"
        );

        ClimbResult {
            strategy: config.strategy,
            state: current,
            heuristic: current_h,
            stats,
            termination,
            heuristic_history,
        }
    }
}

/// Index and score of the strictly best move; the earliest wins ties.
fn select_greedy<P: ClimbProblem>(
    problem: &P,
    state: &mut P::State,
    current_h: u64,
    moves: &[P::Move],
) -> Option<(usize, u64)> {
    let mut best = None;
    let mut best_h = current_h;
    for (i, mv) in moves.iter().enumerate() {
        let h = problem.evaluate(state, mv);
        if h < best_h {
            best_h = h;
            best = Some((i, h));
        }
    }
    best
}

/// Uniform choice among all strictly improving moves.
fn select_stochastic<P: ClimbProblem, R: Rng>(
    problem: &P,
    state: &mut P::State,
    current_h: u64,
    moves: &[P::Move],
    rng: &mut R,
) -> Option<(usize, u64)> {
    let improving: Vec<(usize, u64)> = moves
        .iter()
        .enumerate()
        .filter_map(|(i, mv)| {
            let h = problem.evaluate(state, mv);
            (h < current_h).then_some((i, h))
        })
        .collect();
    if improving.is_empty() {
        None
    } else {
        Some(improving[rng.random_range(0..improving.len())])
    }
}

/// The first strictly improving move; the rest are not evaluated.
fn select_first_choice<P: ClimbProblem>(
    problem: &P,
    state: &mut P::State,
    current_h: u64,
    moves: &[P::Move],
) -> Option<(usize, u64)> {
    for (i, mv) in moves.iter().enumerate() {
        let h = problem.evaluate(state, mv);
        if h < current_h {
            return Some((i, h));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::cell::Cell;

    // ---- Walk on a line: state x, heuristic |x - goal|, moves ±step ----

    struct Line {
        start: i64,
        goal: i64,
        floor: u64,
        evaluations: Cell<usize>,
    }

    impl Line {
        fn new(start: i64, goal: i64) -> Self {
            Self {
                start,
                goal,
                floor: 0,
                evaluations: Cell::new(0),
            }
        }
    }

    impl ClimbProblem for Line {
        type State = i64;
        type Move = i64;

        fn initial_state(&self) -> i64 {
            self.start
        }

        fn neighbors(&self, _x: &i64) -> Vec<i64> {
            vec![-2, -1, 1, 2]
        }

        fn apply(&self, x: &mut i64, mv: &i64) -> i64 {
            *x += mv;
            -mv
        }

        fn heuristic(&self, x: &i64) -> u64 {
            self.evaluations.set(self.evaluations.get() + 1);
            (x - self.goal).unsigned_abs().max(self.floor)
        }
    }

    #[test]
    fn test_greedy_reaches_goal() {
        let problem = Line::new(-9, 4);
        let result = ClimbRunner::run(&problem, &ClimbConfig::new(Strategy::Greedy));
        assert_eq!(result.state, 4);
        assert_eq!(result.termination, Termination::Solved);
        // Six +2 steps and one +1 step cover the distance of 13.
        assert_eq!(result.stats.expanded, 7);
        assert_eq!(result.stats.visited, 28);
    }

    #[test]
    fn test_first_choice_takes_first_improvement() {
        let problem = Line::new(0, 3);
        let result = ClimbRunner::run(&problem, &ClimbConfig::new(Strategy::FirstChoice));
        // Moves are tried in order -2, -1, 1, 2: +1 is the first improvement each time.
        assert_eq!(result.heuristic_history, vec![3, 2, 1, 0]);
        assert_eq!(result.stats.expanded, 3);
    }

    #[test]
    fn test_first_choice_short_circuits() {
        let problem = Line::new(10, 0);
        let config = ClimbConfig::new(Strategy::FirstChoice).with_max_iterations(1);
        let result = ClimbRunner::run(&problem, &config);
        // Initial score plus one evaluation: -2 improves immediately.
        assert_eq!(problem.evaluations.get(), 2);
        assert_eq!(result.state, 8);
        assert_eq!(result.termination, Termination::IterationLimit);
    }

    #[test]
    fn test_greedy_stops_at_plateau() {
        let mut problem = Line::new(10, 0);
        problem.floor = 5;
        let result = ClimbRunner::run(&problem, &ClimbConfig::new(Strategy::Greedy));
        assert_eq!(result.heuristic, 5);
        assert_eq!(result.termination, Termination::Converged);
        assert_eq!(result.heuristic_history, vec![10, 8, 6, 5]);
    }

    #[test]
    fn test_random_restart_tolerates_stalls() {
        let mut problem = Line::new(10, 0);
        problem.floor = 5;
        let greedy = ClimbRunner::run(&problem, &ClimbConfig::new(Strategy::Greedy));
        let restart = ClimbRunner::run(&problem, &ClimbConfig::new(Strategy::RandomRestart));

        assert_eq!(restart.termination, Termination::AttemptsExhausted);
        assert_eq!(restart.state, greedy.state);
        assert_eq!(restart.stats.expanded, greedy.stats.expanded + 5);
        assert_eq!(restart.stats.visited, greedy.stats.visited + 5 * 4);
    }

    #[test]
    fn test_random_restart_zero_attempts_matches_greedy() {
        let mut problem = Line::new(10, 0);
        problem.floor = 5;
        let config = ClimbConfig::new(Strategy::RandomRestart).with_max_attempts(0);
        let result = ClimbRunner::run(&problem, &config);
        assert_eq!(result.stats.expanded, 4);
        assert_eq!(result.termination, Termination::AttemptsExhausted);
    }

    #[test]
    fn test_stochastic_only_improves_and_is_reproducible() {
        let problem = Line::new(-20, 7);
        let config = ClimbConfig::new(Strategy::Stochastic);
        let a = ClimbRunner::run_with_rng(&problem, &config, &mut create_rng(3));
        let b = ClimbRunner::run_with_rng(&problem, &config, &mut create_rng(3));

        assert!(a.is_solved());
        assert_eq!(a.heuristic_history, b.heuristic_history);
        for w in a.heuristic_history.windows(2) {
            assert!(w[1] < w[0], "stochastic accepted a non-improving move");
        }
    }

    #[test]
    fn test_already_solved_expands_nothing() {
        let problem = Line::new(4, 4);
        let result = ClimbRunner::run(&problem, &ClimbConfig::default());
        assert_eq!(result.termination, Termination::Solved);
        assert_eq!(result.stats.expanded, 0);
        assert_eq!(result.stats.visited, 0);
    }

    #[test]
    fn test_evaluate_restores_state() {
        let problem = Line::new(0, 5);
        let mut x = 3;
        assert_eq!(problem.evaluate(&mut x, &2), 0);
        assert_eq!(x, 3);
    }
}
