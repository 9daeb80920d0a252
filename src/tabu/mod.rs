//! Tabu Search (TS) over binary flags.
//!
//! A single-solution trajectory metaheuristic on the flip neighborhood.
//! A per-variable countdown forbids recently flipped variables. The
//! countdown length (tenure) adapts to the search. Prolonged stagnation
//! restores the last improving solution, and periodic restarts randomize
//! the assignment.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::{DeadlockPolicy, TabuConfig};
pub use runner::{Snapshot, TabuResult, TabuRunner, TabuSearch};
pub use types::FlipProblem;
