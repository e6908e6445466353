/*!
# Weighted Directed Graph

[`WeightedDigraph`] stores

- one outgoing neighborhood per vertex (the key set doubles as the vertex set),
- one incoming neighborhood per vertex, kept in lockstep with the outgoing one,
- one weight per ordered vertex pair.

Parallel edges collapse: inserting `(u, v)` a second time keeps the **minimum** of both
weights. Since vertices are arbitrary identifiers rather than dense indices, all lookups go
through `FxHashMap`/`FxHashSet`.
*/

use std::fmt::{Debug, Display};

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use crate::prelude::*;

/// A directed graph with weighted edges storing **both outgoing and incoming neighborhoods**.
///
/// # Type parameters
/// - `V`: [`Vertex`] identifier type.
/// - `W`: [`Weight`] type of edge costs.
#[derive(Clone)]
pub struct WeightedDigraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    out_nbs: FxHashMap<V, FxHashSet<V>>,
    in_nbs: FxHashMap<V, FxHashSet<V>>,
    costs: FxHashMap<(V, V), W>,
}

impl<V: Vertex, W: Weight> Default for WeightedDigraph<V, W> {
    fn default() -> Self {
        Self {
            out_nbs: FxHashMap::default(),
            in_nbs: FxHashMap::default(),
            costs: FxHashMap::default(),
        }
    }
}

impl<V: Vertex, W: Weight> GraphType for WeightedDigraph<V, W> {
    type Vertex = V;
    type Weight = W;
}

impl<V: Vertex, W: Weight> GraphNodeOrder for WeightedDigraph<V, W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len()
    }

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.out_nbs.keys().copied()
    }

    fn has_vertex(&self, u: V) -> bool {
        self.out_nbs.contains_key(&u)
    }
}

impl<V: Vertex, W: Weight> GraphEdgeOrder for WeightedDigraph<V, W> {
    fn number_of_edges(&self) -> NumEdges {
        self.costs.len()
    }
}

impl<V: Vertex, W: Weight> AdjacencyList for WeightedDigraph<V, W> {
    fn out_neighbors_of(&self, u: V) -> Result<impl Iterator<Item = V> + '_> {
        self.out_nbs
            .get(&u)
            .map(|nbs| nbs.iter().copied())
            .ok_or_else(|| GraphError::unknown_vertex(u))
    }

    fn in_neighbors_of(&self, u: V) -> Result<impl Iterator<Item = V> + '_> {
        self.in_nbs
            .get(&u)
            .map(|nbs| nbs.iter().copied())
            .ok_or_else(|| GraphError::unknown_vertex(u))
    }

    fn out_degree_of(&self, u: V) -> Result<NumNodes> {
        self.out_nbs
            .get(&u)
            .map(|nbs| nbs.len())
            .ok_or_else(|| GraphError::unknown_vertex(u))
    }

    fn in_degree_of(&self, u: V) -> Result<NumNodes> {
        self.in_nbs
            .get(&u)
            .map(|nbs| nbs.len())
            .ok_or_else(|| GraphError::unknown_vertex(u))
    }
}

impl<V: Vertex, W: Weight> WeightedAdjacency for WeightedDigraph<V, W> {
    fn edge_cost(&self, u: V, v: V) -> Cost<W> {
        self.costs.get(&(u, v)).copied().into()
    }

    fn edges(&self) -> impl Iterator<Item = WeightedEdge<V, W>> + '_ {
        self.costs.iter().map(|(&(u, v), &w)| WeightedEdge(u, v, w))
    }
}

impl<V: Vertex, W: Weight> GraphNew for WeightedDigraph<V, W> {
    fn new() -> Self {
        Self::default()
    }
}

impl<V: Vertex, W: Weight> GraphNodeEditing for WeightedDigraph<V, W> {
    fn try_add_node(&mut self, u: V) -> bool {
        if self.has_vertex(u) {
            return false;
        }

        self.out_nbs.insert(u, FxHashSet::default());
        self.in_nbs.insert(u, FxHashSet::default());
        true
    }
}

impl<V: Vertex, W: Weight> GraphEdgeEditing for WeightedDigraph<V, W> {
    fn add_edge(&mut self, u: V, v: V, w: W) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        // Both lookups succeed as the vertices were checked above
        if let Some(nbs) = self.out_nbs.get_mut(&u) {
            nbs.insert(v);
        }
        if let Some(nbs) = self.in_nbs.get_mut(&v) {
            nbs.insert(u);
        }

        self.costs
            .entry((u, v))
            .and_modify(|old| {
                if w < *old {
                    *old = w;
                }
            })
            .or_insert(w);

        Ok(())
    }
}

impl<V: Vertex, W: Weight> WeightedDigraph<V, W> {
    /// Creates an empty graph with space reserved for `n` vertices
    pub fn with_capacity(n: NumNodes) -> Self {
        Self {
            out_nbs: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            in_nbs: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            costs: FxHashMap::default(),
        }
    }

    /// Returns all vertices in ascending order
    pub fn ordered_vertices(&self) -> Vec<V> {
        self.vertices().sorted().collect_vec()
    }
}

impl<V: Vertex, W: Weight> Display for WeightedDigraph<V, W> {
    /// Writes the outgoing adjacency as `{u: [v, w], ...}` ordered by vertex
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.ordered_vertices().into_iter().map(|u| {
            let nbs = self.out_nbs[&u].iter().sorted().map(|v| format!("{v:?}")).join(", ");
            format!("{u:?}: [{nbs}]")
        });
        write!(f, "{{{}}}", entries.format(", "))
    }
}

impl<V: Vertex, W: Weight> Debug for WeightedDigraph<V, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

// ---------- Testing ----------
