/*!
# Shortest-Path Algorithms

This module provides single-source shortest-path algorithms built on top of the graph
representations in this crate. Everything is re-exported at the top level of this module, so you
can simply do:
```rust
use spgraphs::algo::*;
```

- [`Dijkstra`] for non-negative weights (lazy-deletion priority queue),
- [`BellmanFord`] for arbitrary weights, detecting negative cycles reachable from the root,
- [`ShortestPathEngine`] which owns a graph, is bound to a root, and memoizes the results of both
  algorithms until the graph is modified.

The algorithms are configurable structs that borrow the graph; the most common calls are also
available directly on every graph via the [`ShortestPaths`] trait.
*/

mod bellman_ford;
mod dijkstra;
mod engine;
mod tree;

use crate::prelude::*;

pub use bellman_ford::*;
pub use dijkstra::*;
pub use engine::*;
pub use tree::*;

/// Shortest-path algorithms as methods on graph data structures
pub trait ShortestPaths: WeightedAdjacency {
    /// Runs [`Dijkstra`] from `root`.
    /// Requires all edge weights to be non-negative (not checked).
    ///
    /// # Examples
    /// ```
    /// use spgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedDigraph::<u32, u32>::from_parts(0..3, [(0, 1, 2), (1, 2, 2)]).unwrap();
    /// assert_eq!(g.dijkstra(0).unwrap().path(2), ShortestPath::Path(vec![0, 1, 2]));
    /// ```
    fn dijkstra(&self, root: Self::Vertex) -> Result<ShortestPathTree<Self::Vertex, Self::Weight>> {
        Dijkstra::new(self, root).run()
    }

    /// Runs [`BellmanFord`] from `root`.
    ///
    /// # Examples
    /// ```
    /// use spgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedDigraph::<u32, i32>::from_parts(0..2, [(0, 1, -2), (1, 0, 1)]).unwrap();
    /// assert_eq!(g.bellman_ford(0).unwrap().distance(1), Distance::NegativeCycle);
    /// ```
    fn bellman_ford(
        &self,
        root: Self::Vertex,
    ) -> Result<BellmanFordOutcome<Self::Vertex, Self::Weight>> {
        BellmanFord::new(self, root).run()
    }

    /// Moves the graph into a [`ShortestPathEngine`] bound to `root`.
    /// ** Fails if `root` is not in the graph **
    fn into_engine(self, root: Self::Vertex) -> Result<ShortestPathEngine<Self>> {
        ShortestPathEngine::new(self, root)
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacency {}
