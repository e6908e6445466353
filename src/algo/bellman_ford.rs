/*!
Bellman-Ford in its layered dynamic-programming form.

Let `d[i][k]` be the length of a shortest path from the root to `i` using at most `k` edges.
Then `d[root][0] = 0`, `d[i][0] = inf` for `i != root` and

```text
d[i][k] = min( d[i][k-1], min_{(u,i) in E} d[u][k-1] + c(u,i) )
```

Without negative cycles, `d[*][n-1]` are the shortest-path distances. Only the previous layer
is needed to compute the next one, so we keep two layers instead of the full table. The
predecessor of `i` is updated whenever the second term strictly improves on the first.

After layer `n-1`, one more pass checks whether any vertex could still be improved. If so, a
negative cycle is reachable from the root and the improvable vertex is reported as witness.
*/

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;
use crate::testing::test_against_oracle;

/// Terminal state of a Bellman-Ford run
#[derive(Debug, Clone)]
pub enum BellmanFordOutcome<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// No negative cycle is reachable; the tree holds final distances
    Converged(ShortestPathTree<V, W>),
    /// A negative cycle is reachable from the root.
    /// `witness` could still be improved after `n-1` layers; `tree` holds the distances at
    /// that point and is not meaningful for shortest paths.
    NegativeCycle {
        witness: V,
        tree: ShortestPathTree<V, W>,
    },
}

impl<V: Vertex, W: Weight> BellmanFordOutcome<V, W> {
    /// Returns the computed tree regardless of whether a negative cycle was found
    pub fn tree(&self) -> &ShortestPathTree<V, W> {
        match self {
            BellmanFordOutcome::Converged(tree) => tree,
            BellmanFordOutcome::NegativeCycle { tree, .. } => tree,
        }
    }

    /// Returns the witness vertex if a negative cycle was found
    pub fn negative_cycle_witness(&self) -> Option<V> {
        match self {
            BellmanFordOutcome::Converged(_) => None,
            BellmanFordOutcome::NegativeCycle { witness, .. } => Some(*witness),
        }
    }

    /// Returns the tree if no negative cycle was found
    pub fn converged(self) -> Option<ShortestPathTree<V, W>> {
        match self {
            BellmanFordOutcome::Converged(tree) => Some(tree),
            BellmanFordOutcome::NegativeCycle { .. } => None,
        }
    }

    /// Distance of `v`, or `Distance::NegativeCycle` if a negative cycle was found
    pub fn distance(&self, v: V) -> Distance<W> {
        match self {
            BellmanFordOutcome::Converged(tree) => tree.distance(v),
            BellmanFordOutcome::NegativeCycle { .. } => Distance::NegativeCycle,
        }
    }

    /// Path to `v`, or `ShortestPath::NegativeCycle` if a negative cycle was found
    pub fn path(&self, v: V) -> ShortestPath<V> {
        match self {
            BellmanFordOutcome::Converged(tree) => tree.path(v),
            BellmanFordOutcome::NegativeCycle { .. } => ShortestPath::NegativeCycle,
        }
    }
}

/// Configured single-source Bellman-Ford run on a borrowed graph.
///
/// By default, the layer loop stops as soon as a layer equals its predecessor (all later layers
/// would be identical). Use [`BellmanFord::with_early_exit`] to always compute all `n-1` layers.
///
/// # Examples
/// ```
/// use spgraphs::{prelude::*, algo::*};
///
/// let g = WeightedDigraph::<u32, i32>::from_parts(0..3, [(0, 1, 4), (1, 2, -3), (0, 2, 2)]).unwrap();
/// let outcome = BellmanFord::new(&g, 0).run().unwrap();
/// assert_eq!(outcome.distance(2), Distance::Finite(1));
/// ```
pub struct BellmanFord<'a, G>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    root: G::Vertex,
    early_exit: bool,
}

impl<'a, G> BellmanFord<'a, G>
where
    G: WeightedAdjacency,
{
    /// Prepares a run on `graph` starting at `root`
    pub fn new(graph: &'a G, root: G::Vertex) -> Self {
        Self {
            graph,
            root,
            early_exit: true,
        }
    }

    /// Sets whether to stop once a layer no longer changes
    pub fn set_early_exit(&mut self, early_exit: bool) {
        self.early_exit = early_exit;
    }

    /// Sets whether to stop once a layer no longer changes
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.set_early_exit(early_exit);
        self
    }

    /// Computes all layers and checks for a negative cycle reachable from the root.
    /// ** Fails if the root is not in the graph **
    #[tracing::instrument(skip(self), fields(root = ?self.root, nodes = self.graph.number_of_nodes()))]
    pub fn run(self) -> Result<BellmanFordOutcome<G::Vertex, G::Weight>> {
        self.graph.check_vertex(self.root)?;

        let vertices = self.graph.vertices().collect_vec();
        let mut tree = ShortestPathTree::new(self.root);

        let mut layers = 0;
        for _ in 1..vertices.len() {
            layers += 1;
            let previous = tree.distances().clone();
            let improved = self.relax_layer(&vertices, &previous, &mut tree)?;
            if improved == 0 && self.early_exit {
                break;
            }
        }

        let witness = self.find_improvable(&vertices, tree.distances())?;

        tracing::debug!(
            layers,
            relaxations = tree.relaxations(),
            negative_cycle = witness.is_some(),
            "bellman-ford finished"
        );

        Ok(match witness {
            None => BellmanFordOutcome::Converged(tree),
            Some(witness) => {
                tracing::warn!(witness = ?witness, "negative cycle reachable from root");
                BellmanFordOutcome::NegativeCycle { witness, tree }
            }
        })
    }

    /// Computes layer `k` from layer `k-1` (`previous`) in place and returns the number of
    /// vertices whose distance improved.
    fn relax_layer(
        &self,
        vertices: &[G::Vertex],
        previous: &FxHashMap<G::Vertex, Cost<G::Weight>>,
        tree: &mut ShortestPathTree<G::Vertex, G::Weight>,
    ) -> Result<usize> {
        let mut improved = 0;

        for &i in vertices {
            let mut best = previous.get(&i).copied().unwrap_or_default();
            let mut best_parent = None;

            for WeightedEdge(u, _, w) in self.graph.in_edges_of(i)? {
                let Some(&du) = previous.get(&u) else {
                    continue;
                };

                tree.count_relaxation();
                let candidate = du + w;
                if candidate < best {
                    best = candidate;
                    best_parent = Some(u);
                }
            }

            if let Some(parent) = best_parent {
                tree.update(i, best, parent);
                improved += 1;
            }
        }

        Ok(improved)
    }

    /// Returns a vertex whose distance could be improved by one more layer, if any
    fn find_improvable(
        &self,
        vertices: &[G::Vertex],
        dist: &FxHashMap<G::Vertex, Cost<G::Weight>>,
    ) -> Result<Option<G::Vertex>> {
        for &i in vertices {
            let current = dist.get(&i).copied().unwrap_or_default();
            for WeightedEdge(u, _, w) in self.graph.in_edges_of(i)? {
                let du = dist.get(&u).copied().unwrap_or_default();
                if du + w < current {
                    return Ok(Some(i));
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn reference_scenario() {
        let graph = reference_graph();
        let outcome = BellmanFord::new(&graph, 0).run().unwrap();

        assert_eq!(outcome.negative_cycle_witness(), None);
        assert_eq!(outcome.distance(2), Distance::Finite(1));
        assert_eq!(outcome.distance(4), Distance::Finite(2));
        assert_eq!(outcome.distance(3), Distance::Finite(3));
        assert_eq!(outcome.distance(9), Distance::Finite(15));
        assert_eq!(outcome.path(4), ShortestPath::Path(vec![0, 2, 4]));
        assert_eq!(outcome.path(9), ShortestPath::Path(vec![0, 3, 1, 9]));
    }

    #[test]
    fn negative_edges_without_cycle() {
        //  0 --4--> 1 --(-3)--> 2
        //  \_________2_________/
        let graph =
            WeightedDigraph::<u32, i32>::from_parts(0..4, [(0, 1, 4), (1, 2, -3), (0, 2, 2), (2, 3, -1)])
                .unwrap();
        let outcome = BellmanFord::new(&graph, 0).run().unwrap();

        assert_eq!(outcome.distance(2), Distance::Finite(1));
        assert_eq!(outcome.distance(3), Distance::Finite(0));
        assert_eq!(outcome.path(3), ShortestPath::Path(vec![0, 1, 2, 3]));
    }

    #[test]
    fn layers_respect_edge_budget() {
        // The cheap route needs three edges, so it only appears in layer 3
        let graph = WeightedDigraph::<u32, i32>::from_parts(
            0..4,
            [(0, 3, 10), (0, 1, 1), (1, 2, 1), (2, 3, 1)],
        )
        .unwrap();

        for early_exit in [false, true] {
            let outcome = BellmanFord::new(&graph, 0)
                .with_early_exit(early_exit)
                .run()
                .unwrap();
            assert_eq!(outcome.distance(3), Distance::Finite(3));
            assert_eq!(outcome.tree().predecessor_of(3), Some(2));
        }
    }

    #[test]
    fn negative_cycle_is_detected() {
        // 0 -> 1 -> 2 -> 1 with c(1,2) + c(2,1) = -1; 3 is only reachable through the cycle
        let graph = WeightedDigraph::<u32, i32>::from_parts(
            0..5,
            [(0, 1, 1), (1, 2, 2), (2, 1, -3), (2, 3, 1), (4, 0, 1)],
        )
        .unwrap();
        let outcome = BellmanFord::new(&graph, 0).run().unwrap();

        let witness = outcome.negative_cycle_witness().unwrap();
        assert!([1, 2, 3].contains(&witness));
        for v in 0..5 {
            assert_eq!(outcome.distance(v), Distance::NegativeCycle);
            assert_eq!(outcome.path(v), ShortestPath::NegativeCycle);
        }
        assert!(outcome.converged().is_none());
    }

    #[test]
    fn negative_self_loop_at_root() {
        let graph = WeightedDigraph::<u32, i32>::from_parts([0], [(0, 0, -1)]).unwrap();
        let outcome = BellmanFord::new(&graph, 0).run().unwrap();
        assert_eq!(outcome.negative_cycle_witness(), Some(0));
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let graph = WeightedDigraph::<u32, i32>::from_parts(
            0..4,
            [(0, 1, 2), (2, 3, -5), (3, 2, 1), (3, 1, 1)],
        )
        .unwrap();
        let outcome = BellmanFord::new(&graph, 0).run().unwrap();

        assert_eq!(outcome.negative_cycle_witness(), None);
        assert_eq!(outcome.distance(1), Distance::Finite(2));
        assert_eq!(outcome.distance(2), Distance::Unreachable);
        assert_eq!(outcome.path(3), ShortestPath::Unreachable);
    }

    #[test]
    fn unknown_root() {
        let graph = WeightedDigraph::<u32, i32>::from_parts(0..2, [(0, 1, 1)]).unwrap();
        assert!(BellmanFord::new(&graph, 2).run().is_err());
    }

    #[test]
    fn negative_cycles_match_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let mut with_cycle = 0;
        for _ in 0..200 {
            let n = rng.random_range(2..9);
            let graph = random_graph(rng, n, 3, -3..10);
            let outcome = BellmanFord::new(&graph, 0).run().unwrap();

            let expected = has_reachable_negative_cycle(&graph, 0);
            assert_eq!(outcome.negative_cycle_witness().is_some(), expected, "{graph}");
            with_cycle += expected as usize;
        }

        // make sure both branches were exercised
        assert!(with_cycle > 0);
        assert!(with_cycle < 200);
    }
}

test_against_oracle!(
    test_bellman_ford_oracle_non_negative,
    0..30,
    |graph, root| BellmanFord::new(graph, root).run().unwrap().converged()
);

test_against_oracle!(
    test_bellman_ford_oracle_negative,
    -3..10,
    |graph, root| BellmanFord::new(graph, root).run().unwrap().converged()
);
