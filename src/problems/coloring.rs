//! Graph coloring as a hill-climbing problem.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::climb::ClimbProblem;
use crate::error::{ConfigError, Result};

/// Node identifier as given by the caller.
pub type NodeId = usize;

/// Color index in `1..=num_colors`.
pub type Color = u32;

/// A complete coloring, indexed by node position (see
/// [`GraphColoring::node_ids`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coloring {
    colors: Vec<Color>,
}

impl Coloring {
    /// Colors by node position.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Recolor the node at position `node` with `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recolor {
    /// Node position.
    pub node: usize,
    /// New color.
    pub color: Color,
}

/// Minimize the number of edges whose endpoints share a color.
///
/// The neighborhood recolors the node with the most conflicts (lowest id
/// on ties) with every other color.
#[derive(Debug, Clone)]
pub struct GraphColoring {
    ids: Vec<NodeId>,
    edges: Vec<(usize, usize)>,
    num_colors: Color,
}

impl GraphColoring {
    /// Builds an instance from an adjacency description.
    ///
    /// Edges are undirected and counted once however many times they are
    /// listed. Nodes that only appear as neighbors are added.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoColors`], [`ConfigError::EmptyGraph`] or
    /// [`ConfigError::SelfLoop`].
    pub fn new<A, N>(adjacency: A, num_colors: Color) -> Result<Self>
    where
        A: IntoIterator<Item = (NodeId, N)>,
        N: IntoIterator<Item = NodeId>,
    {
        if num_colors == 0 {
            return Err(ConfigError::NoColors);
        }

        let mut nodes = BTreeSet::new();
        let mut pairs = BTreeSet::new();
        for (u, neighbors) in adjacency {
            nodes.insert(u);
            for v in neighbors {
                if u == v {
                    return Err(ConfigError::SelfLoop(u));
                }
                nodes.insert(v);
                pairs.insert((u.min(v), u.max(v)));
            }
        }
        if nodes.is_empty() {
            return Err(ConfigError::EmptyGraph);
        }

        // Every edge endpoint was inserted into `nodes`, so each lookup hits.
        let positions: BTreeMap<NodeId, usize> =
            nodes.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        let edges = pairs
            .into_iter()
            .map(|(u, v)| (positions[&u], positions[&v]))
            .collect();
        let ids: Vec<NodeId> = nodes.into_iter().collect();

        Ok(Self {
            ids,
            edges,
            num_colors,
        })
    }

    /// Node ids in ascending order; a node's position is its index here.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Position of `id`, if it is a node of the graph.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    /// Number of available colors.
    pub fn num_colors(&self) -> Color {
        self.num_colors
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of same-colored neighbors of every node, by position.
    pub fn conflicts_per_node(&self, state: &Coloring) -> Vec<usize> {
        let mut counts = vec![0; self.ids.len()];
        for &(u, v) in &self.edges {
            if state.colors[u] == state.colors[v] {
                counts[u] += 1;
                counts[v] += 1;
            }
        }
        counts
    }

    /// Maps every node id to its color.
    pub fn assignment(&self, state: &Coloring) -> BTreeMap<NodeId, Color> {
        self.ids
            .iter()
            .copied()
            .zip(state.colors.iter().copied())
            .collect()
    }
}

impl ClimbProblem for GraphColoring {
    type State = Coloring;
    type Move = Recolor;

    fn initial_state(&self) -> Coloring {
        Coloring {
            colors: vec![1; self.ids.len()],
        }
    }

    fn neighbors(&self, state: &Coloring) -> Vec<Recolor> {
        let counts = self.conflicts_per_node(state);
        let mut worst = 0;
        for (i, &c) in counts.iter().enumerate() {
            if c > counts[worst] {
                worst = i;
            }
        }

        let current = state.colors[worst];
        (1..=self.num_colors)
            .filter(|&color| color != current)
            .map(|color| Recolor { node: worst, color })
            .collect()
    }

    fn apply(&self, state: &mut Coloring, mv: &Recolor) -> Recolor {
        let previous = std::mem::replace(&mut state.colors[mv.node], mv.color);
        Recolor {
            node: mv.node,
            color: previous,
        }
    }

    fn heuristic(&self, state: &Coloring) -> u64 {
        self.edges
            .iter()
            .filter(|&&(u, v)| state.colors[u] == state.colors[v])
            .count() as u64
    }
}
