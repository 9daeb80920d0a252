//! Concrete problem models.
//!
//! - [`GraphColoring`]: minimize same-colored edges, explored with
//!   [`crate::climb`].
//! - [`SubsetSum`]: hit a target sum with signed weights, explored with
//!   [`crate::tabu`].

mod coloring;
mod subset_sum;

pub use coloring::{Color, Coloring, GraphColoring, NodeId, Recolor};
pub use subset_sum::SubsetSum;
