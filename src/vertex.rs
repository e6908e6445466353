/*!
# Vertex Representation

Vertices are opaque identifiers. Any small `Copy`-able, hashable and totally ordered value
(`u32`, `usize`, `char`, a newtype around an id, ...) can serve as a vertex; the graph attaches
no payload to it. The ordering is only used to produce deterministic output such as sorted
shortest-path trees.
*/

use std::{fmt::Debug, hash::Hash};

/// Identifier of a vertex in a [`WeightedDigraph`](crate::repr::WeightedDigraph)
pub trait Vertex: Copy + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Copy + Eq + Hash + Ord + Debug {}

/// Number of vertices in a graph
pub type NumNodes = usize;
