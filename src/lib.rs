/*!
`spgraphs` is a small library for **single-source shortest paths** on directed, weighted graphs.

# Representation

Vertices are opaque identifiers: any `Copy + Eq + Hash + Ord + Debug` type (see [`vertex`]).
Weights are any numeric type with a zero, addition and a partial order, i.e. all primitive
integers and floats (see [`weight`]). A missing edge costs [`Cost::Infinite`](crate::weight::Cost)
rather than some large sentinel value.

For **edges**, we use the tuple-structs `Edge(u, v)` and `WeightedEdge(u, v, w)`. Edges are
always directed. Inserting the same ordered pair twice keeps the cheaper weight.

The only storage backend is [`WeightedDigraph`](crate::repr::WeightedDigraph), which keeps out-
and in-neighborhoods in lockstep so that both algorithms can scan the direction they need.

# Design

Algorithms are provided as configurable structs that borrow a graph and are run explicitly
(`Dijkstra::new(&graph, root).run()`, `BellmanFord::new(&graph, root).with_early_exit(false).run()`).
The common calls are also available as methods on every graph via
[`ShortestPaths`](crate::algo::ShortestPaths).

For repeated queries against a fixed root, [`ShortestPathEngine`](crate::algo::ShortestPathEngine)
owns the graph, computes each algorithm at most once, and throws its caches away whenever the
graph is modified through it.

Query results are tagged: a distance is `Finite(d)`, `Unreachable` or `NegativeCycle`, and so is
a path. Only caller mistakes (referencing a vertex that is not in the graph) are errors.

# Usage

In most use-cases, `use spgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use spgraphs::{prelude::*, algo::*};

let graph = WeightedDigraph::<u32, i64>::from_parts(
    [0, 1, 2, 3],
    [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, -1)],
)
.unwrap();

let mut engine = graph.into_engine(0).unwrap();
assert_eq!(engine.distance(Algorithm::BellmanFord, 3).unwrap(), Distance::Finite(2));
assert_eq!(
    engine.path(Algorithm::BellmanFord, 3).unwrap(),
    ShortestPath::Path(vec![0, 2, 1, 3])
);
```

The library emits diagnostics through [`tracing`](https://docs.rs/tracing) but never installs a
subscriber itself.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod vertex;
pub mod weight;

/// `spgraphs::prelude` includes vertex, weight and edge definitions, the error type, all basic
/// graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*, weight::*};
}
