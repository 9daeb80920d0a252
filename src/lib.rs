//! Local-search metaheuristics for discrete optimization.
//!
//! Provides two trajectory-based engines:
//!
//! - **Hill Climbing**: iterative improvement over a problem-defined
//!   neighborhood with greedy, stochastic, first-choice and
//!   stall-tolerant selection strategies.
//! - **Adaptive Tabu Search (TS)**: flip-neighborhood search over binary
//!   flags with an adaptive tenure, stagnation-triggered restore and
//!   periodic diversification restarts.
//!
//! Concrete models for graph coloring and subset-sum live in [`problems`].
//!
//! # Architecture
//!
//! Drivers are generic over small problem traits ([`climb::ClimbProblem`],
//! [`tabu::FlipProblem`]). All randomness flows through an injected
//! [`rand::Rng`], so runs are reproducible under a fixed seed.

pub mod climb;
pub mod error;
pub mod problems;
pub mod random;
pub mod report;
pub mod tabu;

pub use error::{ConfigError, Result};
