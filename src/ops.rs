/*!
# Graph Operations

Traits describing what a weighted directed graph offers to algorithms. Algorithms in
[`algo`](crate::algo) are written against these traits instead of a concrete representation.

Neighbor queries for a vertex that is not part of the graph fail with
[`GraphError::UnknownVertex`]. Edge-cost lookups never fail: a missing edge simply costs
[`Cost::Infinite`].
*/

use crate::prelude::*;

/// Associates vertex and weight types with a graph
pub trait GraphType {
    type Vertex: Vertex;
    type Weight: Weight;
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder: GraphType {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V in no particular order.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Returns *true* if `u` is a vertex of the graph
    fn has_vertex(&self, u: Self::Vertex) -> bool;

    /// Returns `Err(GraphError::UnknownVertex)` if `u` is not a vertex of the graph
    fn check_vertex(&self, u: Self::Vertex) -> Result<()> {
        if self.has_vertex(u) {
            Ok(())
        } else {
            Err(GraphError::unknown_vertex(u))
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (distinct) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the successors of a given vertex.
    /// ** Fails if `u` is not in the graph **
    fn out_neighbors_of(&self, u: Self::Vertex)
    -> Result<impl Iterator<Item = Self::Vertex> + '_>;

    /// Returns an iterator over the predecessors of a given vertex, ie. nodes `v` with edges `(v, u)`.
    /// ** Fails if `u` is not in the graph **
    fn in_neighbors_of(&self, u: Self::Vertex) -> Result<impl Iterator<Item = Self::Vertex> + '_>;

    /// Returns the number of outgoing neighbors of `u`
    /// ** Fails if `u` is not in the graph **
    fn out_degree_of(&self, u: Self::Vertex) -> Result<NumNodes> {
        Ok(self.out_neighbors_of(u)?.count())
    }

    /// Returns the number of incoming neighbors of `u`
    /// ** Fails if `u` is not in the graph **
    fn in_degree_of(&self, u: Self::Vertex) -> Result<NumNodes> {
        Ok(self.in_neighbors_of(u)?.count())
    }
}

/// Access to the weights of edges
pub trait WeightedAdjacency: AdjacencyList + GraphEdgeOrder {
    /// Returns the cost of the edge `(u, v)` or `Cost::Infinite` if there is no such edge.
    /// Never fails, not even for unknown vertices.
    fn edge_cost(&self, u: Self::Vertex, v: Self::Vertex) -> Cost<Self::Weight>;

    /// Returns *true* if the edge `(u, v)` exists in the graph.
    fn has_edge(&self, u: Self::Vertex, v: Self::Vertex) -> bool {
        self.edge_cost(u, v).is_finite()
    }

    /// Returns an iterator over all edges in the graph in no particular order.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge<Self::Vertex, Self::Weight>> + '_;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Fails if `u` is not in the graph **
    fn out_edges_of(
        &self,
        u: Self::Vertex,
    ) -> Result<impl Iterator<Item = WeightedEdge<Self::Vertex, Self::Weight>> + '_> {
        Ok(self
            .out_neighbors_of(u)?
            .filter_map(move |v| self.edge_cost(u, v).finite().map(|w| WeightedEdge(u, v, w))))
    }

    /// Returns an iterator over incoming edges of a given vertex.
    /// ** Fails if `u` is not in the graph **
    fn in_edges_of(
        &self,
        u: Self::Vertex,
    ) -> Result<impl Iterator<Item = WeightedEdge<Self::Vertex, Self::Weight>> + '_> {
        Ok(self
            .in_neighbors_of(u)?
            .filter_map(move |v| self.edge_cost(v, u).finite().map(|w| WeightedEdge(v, u, w))))
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph without nodes
    fn new() -> Self;
}

/// Provides functions to insert vertices
pub trait GraphNodeEditing: GraphType {
    /// Adds `u` to the graph.
    /// Returns *true* exactly if the vertex was not present previously.
    fn try_add_node(&mut self, u: Self::Vertex) -> bool;

    /// Adds all vertices in the collection. Vertices already present are left untouched.
    fn add_nodes(&mut self, nodes: impl IntoIterator<Item = Self::Vertex>) {
        for u in nodes {
            self.try_add_node(u);
        }
    }
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNodeEditing {
    /// Adds the edge `(u, v)` with weight `w` to the graph.
    /// If the edge already exists, its cost becomes the minimum of the old and the new weight.
    /// ** Fails if `u` or `v` is not in the graph **
    fn add_edge(&mut self, u: Self::Vertex, v: Self::Vertex, w: Self::Weight) -> Result<()>;

    /// Adds all edges in the collection in order.
    /// ** Fails on the first edge with an unknown endpoint; earlier edges remain inserted **
    fn add_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge<Self::Vertex, Self::Weight>>>,
    ) -> Result<()> {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of vertices and a set of edges
pub trait GraphFromScratch: Sized + GraphType {
    /// Create a graph from an iterator over vertices and an iterator over weighted edges
    fn from_parts(
        nodes: impl IntoIterator<Item = Self::Vertex>,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge<Self::Vertex, Self::Weight>>>,
    ) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_parts(
        nodes: impl IntoIterator<Item = Self::Vertex>,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge<Self::Vertex, Self::Weight>>>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        graph.add_nodes(nodes);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
