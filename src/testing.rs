//! Test tooling: a random weighted graph generator, brute-force oracles enumerating simple
//! paths/cycles, and a macro generating oracle comparisons for shortest-path algorithms.

/// Generates a test module checking a shortest-path algorithm against brute-force enumeration
/// of all simple paths on random graphs whose weights are drawn from `$weights`.
///
/// `$solve` maps `(&TestGraph, root)` to `Some(tree)` or to `None` if the algorithm refuses to
/// answer (e.g. because of a negative cycle); `None` is only accepted if the graph actually has a
/// negative cycle reachable from the root.
macro_rules! test_against_oracle {
    ($env:ident, $weights:expr, $solve:expr) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, prelude::*, testing::*};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            type Solver = fn(&TestGraph, u32) -> Option<ShortestPathTree<u32, i64>>;

            #[test]
            fn distances_match_brute_force() {
                let solve: Solver = $solve;
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                let mut answered = 0;
                for _ in 0..100 {
                    let n = rng.random_range(5..10);
                    let max_degree = rng.random_range(1..5);
                    let graph = random_graph(rng, n, max_degree, $weights);
                    let root = rng.random_range(0..n);

                    let Some(tree) = solve(&graph, root) else {
                        assert!(has_reachable_negative_cycle(&graph, root), "{graph}");
                        continue;
                    };
                    answered += 1;

                    for v in 0..n {
                        match brute_force_shortest_path(&graph, root, v) {
                            None => {
                                assert_eq!(tree.distance(v), Distance::Unreachable);
                                assert_eq!(tree.path(v), ShortestPath::Unreachable);
                            }
                            Some((_, cost)) => {
                                assert_eq!(tree.distance(v), Distance::Finite(cost), "{graph}");
                                assert_valid_path(&graph, &tree.path(v), root, v, cost);
                            }
                        }
                    }

                    for Edge(parent, child) in tree.edges() {
                        assert!(graph.has_edge(parent, child));
                    }
                }

                assert!(answered > 0);
            }
        }
    };
}

pub(crate) use test_against_oracle;

#[cfg(test)]
pub(crate) use helpers::*;
