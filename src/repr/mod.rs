/*!
# Graph Representations

Storage backends implementing the traits of [`ops`](crate::ops).

Currently there is a single representation, [`WeightedDigraph`], which stores outgoing *and*
incoming neighborhoods in hash-based sets (so that Bellman-Ford can scan predecessors cheaply)
as well as one weight per ordered vertex pair.
*/

mod digraph;

pub use digraph::*;
