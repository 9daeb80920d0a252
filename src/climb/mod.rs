//! Hill climbing.
//!
//! Iterative improvement over a problem-defined neighborhood, with four
//! interchangeable selection strategies: greedy (steepest descent),
//! stochastic, first-choice and stall-tolerant greedy.
//!
//! # References
//!
//! Russell, S. & Norvig, P. (2010). *Artificial Intelligence: A Modern
//! Approach*, 3rd ed., §4.1.1 "Hill-climbing search".

mod config;
mod runner;
mod types;

pub use config::{ClimbConfig, ParseStrategyError, Strategy};
pub use runner::{ClimbResult, ClimbRunner, Termination};
pub use types::ClimbProblem;
