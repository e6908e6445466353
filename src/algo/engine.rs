/*!
A root-scoped owner of a graph that memoizes shortest-path results.

The [`ShortestPathEngine`] computes a [`ShortestPathTree`] (Dijkstra) or a
[`BellmanFordOutcome`] on the first query for the respective [`Algorithm`] and answers all
further queries from the cache. Mutating the graph through the engine resets both caches.
*/

use std::collections::BTreeSet;

use super::*;

/// Selects the algorithm a query is answered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`Dijkstra`]; requires non-negative weights
    Dijkstra,
    /// [`BellmanFord`]; detects negative cycles reachable from the root
    BellmanFord,
}

#[derive(Debug, Clone, Default)]
enum CacheState<T> {
    #[default]
    Uninitialized,
    Computed(T),
}

impl<T> CacheState<T> {
    fn get(&self) -> Option<&T> {
        match self {
            CacheState::Uninitialized => None,
            CacheState::Computed(value) => Some(value),
        }
    }

    fn get_or_try_init(&mut self, init: impl FnOnce() -> Result<T>) -> Result<&T> {
        if matches!(self, CacheState::Uninitialized) {
            *self = CacheState::Computed(init()?);
        }

        match &*self {
            CacheState::Computed(value) => Ok(value),
            CacheState::Uninitialized => unreachable!(),
        }
    }
}

/// Owns a graph, is bound to a fixed root, and caches the results of both algorithms.
///
/// # Examples
/// ```
/// use spgraphs::{prelude::*, algo::*};
///
/// let mut engine = ShortestPathEngine::<WeightedDigraph<u32, u32>>::from_parts(
///     0,
///     0..4,
///     [(0, 1, 3), (1, 2, 3), (0, 2, 7)],
/// )
/// .unwrap();
///
/// assert_eq!(engine.distance(Algorithm::Dijkstra, 2).unwrap(), Distance::Finite(6));
/// assert_eq!(engine.path(Algorithm::BellmanFord, 3).unwrap(), ShortestPath::Unreachable);
///
/// engine.add_edge(0, 2, 1).unwrap();
/// assert_eq!(engine.distance(Algorithm::Dijkstra, 2).unwrap(), Distance::Finite(1));
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<G>
where
    G: WeightedAdjacency,
{
    graph: G,
    root: G::Vertex,
    dijkstra: CacheState<ShortestPathTree<G::Vertex, G::Weight>>,
    bellman_ford: CacheState<BellmanFordOutcome<G::Vertex, G::Weight>>,
}

impl<G> ShortestPathEngine<G>
where
    G: WeightedAdjacency,
{
    /// Takes ownership of `graph` and binds the engine to `root`. Nothing is computed yet.
    /// ** Fails if `root` is not in the graph **
    pub fn new(graph: G, root: G::Vertex) -> Result<Self> {
        graph.check_vertex(root)?;
        Ok(Self {
            graph,
            root,
            dijkstra: CacheState::Uninitialized,
            bellman_ford: CacheState::Uninitialized,
        })
    }

    /// Builds the graph from vertices and weighted edges and binds the engine to `root`.
    /// ** Fails if an edge has an unknown endpoint or `root` is not among `nodes` **
    pub fn from_parts(
        root: G::Vertex,
        nodes: impl IntoIterator<Item = G::Vertex>,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge<G::Vertex, G::Weight>>>,
    ) -> Result<Self>
    where
        G: GraphFromScratch,
    {
        Self::new(G::from_parts(nodes, edges)?, root)
    }

    /// Returns the root all distances are measured from
    pub fn root(&self) -> G::Vertex {
        self.root
    }

    /// Returns a reference to the owned graph
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Releases the owned graph and drops all cached results
    pub fn into_graph(self) -> G {
        self.graph
    }

    /// Drops all cached results; the next query recomputes
    pub fn invalidate(&mut self) {
        if self.is_computed(Algorithm::Dijkstra) || self.is_computed(Algorithm::BellmanFord) {
            tracing::trace!(root = ?self.root, "invalidating cached shortest paths");
        }
        self.dijkstra = CacheState::Uninitialized;
        self.bellman_ford = CacheState::Uninitialized;
    }

    /// Returns *true* if the result of `algorithm` is currently cached
    pub fn is_computed(&self, algorithm: Algorithm) -> bool {
        match algorithm {
            Algorithm::Dijkstra => self.dijkstra.get().is_some(),
            Algorithm::BellmanFord => self.bellman_ford.get().is_some(),
        }
    }

    /// Runs both algorithms unless their results are already cached
    pub fn compute_all(&mut self) -> Result<()> {
        self.dijkstra_tree()?;
        self.bellman_ford_outcome()?;
        Ok(())
    }

    /// Returns the total number of edge relaxations performed by the cached computations
    pub fn relaxations(&self) -> usize {
        self.dijkstra.get().map_or(0, |tree| tree.relaxations())
            + self
                .bellman_ford
                .get()
                .map_or(0, |outcome| outcome.tree().relaxations())
    }

    /// Returns the cached Dijkstra tree, computing it on first access
    pub fn dijkstra_tree(&mut self) -> Result<&ShortestPathTree<G::Vertex, G::Weight>> {
        let (graph, root) = (&self.graph, self.root);
        self.dijkstra
            .get_or_try_init(|| Dijkstra::new(graph, root).run())
    }

    /// Returns the cached Bellman-Ford outcome, computing it on first access
    pub fn bellman_ford_outcome(&mut self) -> Result<&BellmanFordOutcome<G::Vertex, G::Weight>> {
        let (graph, root) = (&self.graph, self.root);
        self.bellman_ford
            .get_or_try_init(|| BellmanFord::new(graph, root).run())
    }

    /// Returns the distance from the root to `v`.
    /// ** Fails if `v` is not in the graph **
    pub fn distance(&mut self, algorithm: Algorithm, v: G::Vertex) -> Result<Distance<G::Weight>> {
        self.graph.check_vertex(v)?;
        Ok(match algorithm {
            Algorithm::Dijkstra => self.dijkstra_tree()?.distance(v),
            Algorithm::BellmanFord => self.bellman_ford_outcome()?.distance(v),
        })
    }

    /// Returns a shortest path from the root to `v`.
    /// ** Fails if `v` is not in the graph **
    pub fn path(&mut self, algorithm: Algorithm, v: G::Vertex) -> Result<ShortestPath<G::Vertex>> {
        self.graph.check_vertex(v)?;
        Ok(match algorithm {
            Algorithm::Dijkstra => self.dijkstra_tree()?.path(v),
            Algorithm::BellmanFord => self.bellman_ford_outcome()?.path(v),
        })
    }

    /// Returns the edges `(parent, child)` of the shortest-path tree.
    /// If Bellman-Ford found a negative cycle, these are the predecessors recorded up to the
    /// detection.
    pub fn tree(&mut self, algorithm: Algorithm) -> Result<BTreeSet<Edge<G::Vertex>>> {
        Ok(match algorithm {
            Algorithm::Dijkstra => self.dijkstra_tree()?.edges(),
            Algorithm::BellmanFord => self.bellman_ford_outcome()?.tree().edges(),
        })
    }

    /// Returns a vertex that witnesses a negative cycle reachable from the root, if any.
    /// Runs Bellman-Ford if necessary.
    pub fn negative_cycle_witness(&mut self) -> Result<Option<G::Vertex>> {
        Ok(self.bellman_ford_outcome()?.negative_cycle_witness())
    }
}

impl<G> ShortestPathEngine<G>
where
    G: WeightedAdjacency + GraphEdgeEditing,
{
    /// Adds vertices to the owned graph and invalidates all cached results
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = G::Vertex>) {
        self.graph.add_nodes(nodes);
        self.invalidate();
    }

    /// Adds an edge to the owned graph and invalidates all cached results.
    /// ** Fails if `u` or `v` is not in the graph **
    pub fn add_edge(&mut self, u: G::Vertex, v: G::Vertex, w: G::Weight) -> Result<()> {
        let result = self.graph.add_edge(u, v, w);
        self.invalidate();
        result
    }

    /// Adds edges to the owned graph and invalidates all cached results.
    /// ** Fails on the first edge with an unknown endpoint; earlier edges remain inserted **
    pub fn add_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge<G::Vertex, G::Weight>>>,
    ) -> Result<()> {
        let result = self.graph.add_edges(edges);
        self.invalidate();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn reference_engine() -> ShortestPathEngine<TestGraph> {
        ShortestPathEngine::new(reference_graph(), 0).unwrap()
    }

    #[test]
    fn lazy_computation() {
        let mut engine = reference_engine();
        assert!(!engine.is_computed(Algorithm::Dijkstra));
        assert!(!engine.is_computed(Algorithm::BellmanFord));
        assert_eq!(engine.relaxations(), 0);

        engine.distance(Algorithm::Dijkstra, 4).unwrap();
        assert!(engine.is_computed(Algorithm::Dijkstra));
        assert!(!engine.is_computed(Algorithm::BellmanFord));

        engine.compute_all().unwrap();
        assert!(engine.is_computed(Algorithm::BellmanFord));
    }

    #[test]
    fn repeated_queries_do_not_recompute() {
        let mut engine = reference_engine();

        for algorithm in [Algorithm::Dijkstra, Algorithm::BellmanFord] {
            engine.distance(algorithm, 9).unwrap();
            let relaxations = engine.relaxations();
            assert!(relaxations > 0);

            for v in [0, 1, 2, 3, 4, 5, 9] {
                engine.distance(algorithm, v).unwrap();
                engine.path(algorithm, v).unwrap();
            }
            engine.tree(algorithm).unwrap();
            assert_eq!(engine.relaxations(), relaxations);
        }
    }

    #[test]
    fn both_algorithms_agree_on_reference() {
        let mut engine = reference_engine();
        let expected = [(0, 0), (1, 10), (2, 1), (3, 3), (4, 2), (5, 4), (9, 15)];

        for algorithm in [Algorithm::Dijkstra, Algorithm::BellmanFord] {
            for (v, d) in expected {
                assert_eq!(engine.distance(algorithm, v).unwrap(), Distance::Finite(d));
            }
            assert_eq!(
                engine.path(algorithm, 4).unwrap(),
                ShortestPath::Path(vec![0, 2, 4])
            );
        }

        assert_eq!(
            engine.tree(Algorithm::Dijkstra).unwrap(),
            engine.tree(Algorithm::BellmanFord).unwrap()
        );
        assert_eq!(engine.negative_cycle_witness().unwrap(), None);
    }

    #[test]
    fn mutation_invalidates_cache() {
        let mut engine = reference_engine();
        assert_eq!(
            engine.distance(Algorithm::Dijkstra, 9).unwrap(),
            Distance::Finite(15)
        );

        engine.add_edge(4, 9, 1).unwrap();
        assert!(!engine.is_computed(Algorithm::Dijkstra));
        assert_eq!(
            engine.distance(Algorithm::Dijkstra, 9).unwrap(),
            Distance::Finite(3)
        );
        assert_eq!(
            engine.path(Algorithm::BellmanFord, 9).unwrap(),
            ShortestPath::Path(vec![0, 2, 4, 9])
        );

        engine.add_nodes([7]);
        assert!(!engine.is_computed(Algorithm::Dijkstra));
        assert!(!engine.is_computed(Algorithm::BellmanFord));
        assert_eq!(
            engine.distance(Algorithm::Dijkstra, 7).unwrap(),
            Distance::Unreachable
        );

        engine.add_edges([(9, 7, 2), (7, 0, -20)]).unwrap();
        assert_eq!(
            engine.distance(Algorithm::BellmanFord, 7).unwrap(),
            Distance::NegativeCycle
        );
        assert!(engine.negative_cycle_witness().unwrap().is_some());
    }

    #[test]
    fn failed_mutation_keeps_earlier_edges() {
        let mut engine = reference_engine();
        engine.compute_all().unwrap();

        let result = engine.add_edges([(0, 5, 1), (0, 8, 1)]);
        assert!(matches!(result, Err(GraphError::UnknownVertex { .. })));
        assert!(!engine.is_computed(Algorithm::Dijkstra));
        assert_eq!(engine.graph().edge_cost(0, 5), Cost::Finite(1));
        assert_eq!(
            engine.distance(Algorithm::Dijkstra, 5).unwrap(),
            Distance::Finite(1)
        );
    }

    #[test]
    fn unknown_vertices() {
        assert!(ShortestPathEngine::new(reference_graph(), 6).is_err());

        let mut engine = reference_engine();
        assert!(engine.distance(Algorithm::Dijkstra, 6).is_err());
        assert!(engine.path(Algorithm::BellmanFord, 42).is_err());
        assert!(engine.add_edge(0, 6, 1).is_err());
    }

    #[test]
    fn unreachable_vertex() {
        let mut engine =
            ShortestPathEngine::<TestGraph>::from_parts(0, 0..3, [(0, 1, 4), (2, 0, 1)]).unwrap();
        assert_eq!(engine.root(), 0);

        for algorithm in [Algorithm::Dijkstra, Algorithm::BellmanFord] {
            assert_eq!(
                engine.distance(algorithm, 2).unwrap(),
                Distance::Unreachable
            );
            assert_eq!(engine.path(algorithm, 2).unwrap(), ShortestPath::Unreachable);
        }

        let graph = engine.into_graph();
        assert_eq!(graph.number_of_edges(), 2);
    }
}
