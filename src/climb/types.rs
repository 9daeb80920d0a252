//! Core trait for hill-climbing problems.

use std::fmt::Debug;

/// Defines a discrete problem explored by the hill-climbing driver.
///
/// Neighbors are expressed as moves (index-based diffs) rather than full
/// state copies. The driver evaluates a move by applying it to the live
/// state, scoring, and applying the returned inverse.
///
/// # Minimization
///
/// The heuristic is a non-negative violation count. Zero is the unique
/// success value and stops every strategy.
pub trait ClimbProblem {
    /// Complete assignment of every decision variable.
    type State: Clone + PartialEq + Debug;

    /// A single atomic modification of a state.
    type Move: Clone + Debug;

    /// Creates the deterministic starting state.
    fn initial_state(&self) -> Self::State;

    /// Generates the moves leading to neighboring states, in a fixed order.
    fn neighbors(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Applies `mv` to `state` and returns the move that undoes it.
    fn apply(&self, state: &mut Self::State, mv: &Self::Move) -> Self::Move;

    /// Scores a state. Lower is better; zero means solved.
    fn heuristic(&self, state: &Self::State) -> u64;

    /// Scores the neighbor reached by `mv` without keeping it.
    ///
    /// `state` is restored before returning.
    fn evaluate(&self, state: &mut Self::State, mv: &Self::Move) -> u64 {
        let inverse = self.apply(state, mv);
        let score = self.heuristic(state);
        self.apply(state, &inverse);
        score
    }
}
