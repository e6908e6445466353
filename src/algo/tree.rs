/*!
Results of single-source shortest-path computations.

A [`ShortestPathTree`] stores, for every vertex reached so far, its tentative (and after the
algorithm finished: final) distance from the root together with its predecessor. Lookups of
vertices without an entry default to an infinite distance and no predecessor.

Queries are answered with tagged values instead of sentinel numbers:
- [`Distance`] is `Finite(cost)`, `Unreachable` or `NegativeCycle`,
- [`ShortestPath`] is `Path(vertices)`, `Unreachable` or `NegativeCycle`.
*/

use std::collections::BTreeSet;

use fxhash::FxHashMap;

use super::*;

/// Distance from the root to some vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance<W> {
    /// The cost of a cheapest path
    Finite(W),
    /// There is no path from the root to the vertex
    Unreachable,
    /// A negative cycle reachable from the root makes shortest paths undefined
    NegativeCycle,
}

impl<W: Weight> Distance<W> {
    /// Returns the numeric distance if there is one
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            _ => None,
        }
    }

    /// Returns *true* if the distance is a finite number
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

/// Shortest path from the root to some vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortestPath<V> {
    /// Vertex sequence starting at the root and ending at the target
    Path(Vec<V>),
    /// There is no path from the root to the vertex
    Unreachable,
    /// A negative cycle reachable from the root makes shortest paths undefined
    NegativeCycle,
}

impl<V: Vertex> ShortestPath<V> {
    /// Returns the vertex sequence if there is one
    pub fn into_vertices(self) -> Option<Vec<V>> {
        match self {
            ShortestPath::Path(path) => Some(path),
            _ => None,
        }
    }
}

/// Distances and predecessors of all vertices reached from a fixed root
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V, W>
where
    V: Vertex,
    W: Weight,
{
    root: V,
    dist: FxHashMap<V, Cost<W>>,
    prev: FxHashMap<V, V>,
    relaxations: usize,
}

impl<V: Vertex, W: Weight> ShortestPathTree<V, W> {
    /// Creates a tree in which only the root is reached (at distance zero)
    pub(crate) fn new(root: V) -> Self {
        let mut dist = FxHashMap::default();
        dist.insert(root, Cost::zero());
        Self {
            root,
            dist,
            prev: FxHashMap::default(),
            relaxations: 0,
        }
    }

    /// Returns the root of the tree
    pub fn root(&self) -> V {
        self.root
    }

    /// Returns the (tentative) distance of `v`, `Cost::Infinite` if `v` was not reached
    pub fn cost_of(&self, v: V) -> Cost<W> {
        self.dist.get(&v).copied().unwrap_or_default()
    }

    /// Returns the parent of `v` in the tree, `None` for the root and unreached vertices
    pub fn predecessor_of(&self, v: V) -> Option<V> {
        self.prev.get(&v).copied()
    }

    /// Returns an iterator over all vertices with finite distance
    pub fn reached(&self) -> impl Iterator<Item = V> + '_ {
        self.dist
            .iter()
            .filter_map(|(&v, cost)| cost.is_finite().then_some(v))
    }

    /// Returns the number of edge relaxations performed while computing the tree
    pub fn relaxations(&self) -> usize {
        self.relaxations
    }

    /// Returns the distance of `v` from the root
    pub fn distance(&self, v: V) -> Distance<W> {
        match self.cost_of(v) {
            Cost::Finite(w) => Distance::Finite(w),
            Cost::Infinite => Distance::Unreachable,
        }
    }

    /// Walks the predecessors from `v` back to the root and returns the path root -> v
    pub fn path(&self, v: V) -> ShortestPath<V> {
        if !self.cost_of(v).is_finite() {
            return ShortestPath::Unreachable;
        }

        let mut path = vec![v];
        let mut node = v;
        while node != self.root {
            let Some(parent) = self.predecessor_of(node) else {
                debug_assert!(false, "reached vertex {node:?} without predecessor");
                return ShortestPath::Unreachable;
            };

            // A simple path visits every reached vertex at most once; anything longer means
            // the predecessors form a cycle, which only a negative cycle can cause
            if path.len() > self.dist.len() {
                return ShortestPath::NegativeCycle;
            }

            path.push(parent);
            node = parent;
        }

        path.reverse();
        ShortestPath::Path(path)
    }

    /// Returns the edges `(parent, child)` of the tree in sorted order
    pub fn edges(&self) -> BTreeSet<Edge<V>> {
        self.prev
            .iter()
            .map(|(&child, &parent)| Edge(parent, child))
            .collect()
    }

    /// Sets distance and predecessor of `v`
    pub(crate) fn update(&mut self, v: V, cost: Cost<W>, parent: V) {
        self.dist.insert(v, cost);
        self.prev.insert(v, parent);
    }

    /// All recorded distances, used as the previous layer in Bellman-Ford
    pub(crate) fn distances(&self) -> &FxHashMap<V, Cost<W>> {
        &self.dist
    }

    pub(crate) fn count_relaxation(&mut self) {
        self.relaxations += 1;
    }
}
