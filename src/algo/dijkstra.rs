/*!
Dijkstra's algorithm for graphs with **non-negative** edge weights.

`std::collections::BinaryHeap` has no decrease-key operation. Instead of updating queue entries
in place, we push a fresh entry whenever a tentative distance improves and keep the
authoritative distances in the [`ShortestPathTree`]. When an entry is extracted whose key
differs from the authoritative distance of its vertex (or whose vertex was already settled),
it is stale and simply discarded (*lazy deletion*).

Negative weights are **not** detected. On such graphs the computed distances may be wrong;
use [`BellmanFord`](super::BellmanFord) instead.
*/

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use fxhash::FxHashSet;

use super::*;
use crate::testing::test_against_oracle;

/// Entry of the priority queue: a vertex keyed by its tentative distance at push time
#[derive(Debug, Clone, Copy)]
struct QueueEntry<V, W> {
    cost: Cost<W>,
    vertex: V,
}

impl<V: Vertex, W: Weight> PartialEq for QueueEntry<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Vertex, W: Weight> Eq for QueueEntry<V, W> {}

impl<V: Vertex, W: Weight> PartialOrd for QueueEntry<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Vertex, W: Weight> Ord for QueueEntry<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Weights are only partially ordered (floats); incomparable costs count as equal
        self.cost
            .partial_cmp(&other.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Configured single-source Dijkstra run on a borrowed graph.
///
/// # Examples
/// ```
/// use spgraphs::{prelude::*, algo::*};
///
/// let g = WeightedDigraph::<u32, u32>::from_parts(0..3, [(0, 1, 4), (1, 2, 1), (0, 2, 7)]).unwrap();
/// let tree = Dijkstra::new(&g, 0).run().unwrap();
/// assert_eq!(tree.distance(2), Distance::Finite(5));
/// ```
pub struct Dijkstra<'a, G>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    root: G::Vertex,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacency,
{
    /// Prepares a run on `graph` starting at `root`
    pub fn new(graph: &'a G, root: G::Vertex) -> Self {
        Self { graph, root }
    }

    /// Computes distances and predecessors of all vertices reachable from the root.
    /// ** Fails if the root is not in the graph **
    #[tracing::instrument(skip(self), fields(root = ?self.root, nodes = self.graph.number_of_nodes()))]
    pub fn run(self) -> Result<ShortestPathTree<G::Vertex, G::Weight>> {
        self.graph.check_vertex(self.root)?;

        let mut tree = ShortestPathTree::new(self.root);
        let mut settled: FxHashSet<G::Vertex> = FxHashSet::default();

        let mut heap = BinaryHeap::with_capacity(self.graph.len());
        heap.extend(self.graph.vertices().map(|u| {
            Reverse(QueueEntry {
                cost: tree.cost_of(u),
                vertex: u,
            })
        }));

        let mut stale = 0usize;
        while let Some(Reverse(QueueEntry { cost, vertex: u })) = heap.pop() {
            if cost != tree.cost_of(u) || !settled.insert(u) {
                stale += 1;
                continue;
            }

            // Only unreachable vertices remain in the queue
            if !cost.is_finite() {
                continue;
            }

            for WeightedEdge(_, v, w) in self.graph.out_edges_of(u)? {
                if settled.contains(&v) {
                    continue;
                }

                tree.count_relaxation();
                let candidate = cost + w;
                if candidate < tree.cost_of(v) {
                    tree.update(v, candidate, u);
                    heap.push(Reverse(QueueEntry {
                        cost: candidate,
                        vertex: v,
                    }));
                }
            }
        }

        tracing::debug!(
            settled = settled.len(),
            stale,
            relaxations = tree.relaxations(),
            "dijkstra finished"
        );

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn reference_scenario() {
        let graph = reference_graph();
        let tree = Dijkstra::new(&graph, 0).run().unwrap();

        assert_eq!(tree.distance(0), Distance::Finite(0));
        assert_eq!(tree.distance(2), Distance::Finite(1));
        assert_eq!(tree.distance(4), Distance::Finite(2));
        assert_eq!(tree.distance(3), Distance::Finite(3));
        assert_eq!(tree.distance(1), Distance::Finite(10));
        assert_eq!(tree.distance(5), Distance::Finite(4));
        assert_eq!(tree.distance(9), Distance::Finite(15));
        assert_eq!(tree.path(4), ShortestPath::Path(vec![0, 2, 4]));
        assert_eq!(tree.path(9), ShortestPath::Path(vec![0, 3, 1, 9]));
    }

    #[test]
    fn unreachable_vertices() {
        let graph = WeightedDigraph::<u32, u32>::from_parts(0..4, [(0, 1, 1), (2, 3, 1), (3, 0, 1)]).unwrap();
        let tree = Dijkstra::new(&graph, 0).run().unwrap();

        assert_eq!(tree.distance(1), Distance::Finite(1));
        assert_eq!(tree.distance(2), Distance::Unreachable);
        assert_eq!(tree.distance(3), Distance::Unreachable);
        assert_eq!(tree.path(3), ShortestPath::Unreachable);
        assert_eq!(tree.edges().into_iter().collect_vec(), vec![Edge(0, 1)]);
    }

    #[test]
    fn unknown_root() {
        let graph = WeightedDigraph::<u32, u32>::from_parts(0..2, [(0, 1, 1)]).unwrap();
        assert!(matches!(
            Dijkstra::new(&graph, 5).run(),
            Err(GraphError::UnknownVertex { .. })
        ));
    }

    #[test]
    fn float_weights() {
        let graph =
            WeightedDigraph::<u8, f64>::from_parts(0..3, [(0, 1, 0.5), (1, 2, 0.25), (0, 2, 1.0)])
                .unwrap();
        let tree = Dijkstra::new(&graph, 0).run().unwrap();
        assert_eq!(tree.distance(2), Distance::Finite(0.75));
        assert_eq!(tree.path(2), ShortestPath::Path(vec![0, 1, 2]));
    }

    #[test]
    fn zero_weight_cycles_terminate() {
        let graph = WeightedDigraph::<u32, u32>::from_parts(0..3, [(0, 1, 0), (1, 0, 0), (1, 2, 0), (2, 1, 0)])
            .unwrap();
        let tree = Dijkstra::new(&graph, 0).run().unwrap();
        for v in 0..3 {
            assert_eq!(tree.distance(v), Distance::Finite(0));
        }
        assert_eq!(tree.path(2), ShortestPath::Path(vec![0, 1, 2]));
    }

    #[test]
    fn relaxations_bounded_by_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for _ in 0..20 {
            let graph = random_graph(rng, 30, 6, 0..20);
            let tree = Dijkstra::new(&graph, 0).run().unwrap();
            assert!(tree.relaxations() <= graph.number_of_edges());
        }
    }
}

test_against_oracle!(
    test_dijkstra_oracle,
    0..30,
    |graph, root| Some(Dijkstra::new(graph, root).run().unwrap())
);
