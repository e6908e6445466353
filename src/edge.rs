use std::fmt::{Debug, Display};

use crate::prelude::*;

/// A directed edge from the first to the second endpoint.
/// Used wherever the weight is irrelevant, e.g. in shortest-path trees.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V>(pub V, pub V);

/// A directed edge with a weight attached to it
#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub struct WeightedEdge<V, W>(pub V, pub V, pub W);

/// We do not limit the number of edges any further than the memory does
pub type NumEdges = usize;

impl<V: Debug> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<V: Debug, W: Debug> Display for WeightedEdge<V, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?};{:?})", self.0, self.1, self.2)
    }
}

impl<V: Debug, W: Debug> Debug for WeightedEdge<V, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<V: Vertex, W: Weight> WeightedEdge<V, W> {
    /// Drops the weight
    pub fn unweighted(&self) -> Edge<V> {
        Edge(self.0, self.1)
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> W {
        self.2
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Copy> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V, W> From<(V, V, W)> for WeightedEdge<V, W> {
    fn from(value: (V, V, W)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<V: Copy, W: Copy> From<&(V, V, W)> for WeightedEdge<V, W> {
    fn from(value: &(V, V, W)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<V: Copy, W: Copy> From<&WeightedEdge<V, W>> for WeightedEdge<V, W> {
    fn from(value: &WeightedEdge<V, W>) -> Self {
        *value
    }
}
