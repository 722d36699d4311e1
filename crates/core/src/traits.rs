use std::fmt::Debug;
use std::hash::Hash;

use super::graph::GraphModel;
use super::solution::Solution;
use common::error::Error;

/// Trait for single-source best-path solvers over a [`GraphModel`].
pub trait PathSolver {
    /// Computes the best transformed distance from `source` to every node it can reach.
    ///
    /// `transform` maps a natural-domain edge weight to an additive distance.
    /// It must be non-negative over the graph's domain and must send the
    /// domain's identity weight to `0.0`. Greedy relaxation is only correct
    /// under that precondition, and it is not checked in release builds.
    ///
    /// Returns the solution on success, or `Err(Error::UnknownNode)` if
    /// `source` is not a node of `graph`.
    fn solve<'g, K, F>(
        &self,
        graph: &'g GraphModel<K>,
        source: &K,
        transform: F,
    ) -> Result<Solution<'g, K>, Error>
    where
        K: Eq + Hash + Clone + Debug,
        F: Fn(f64) -> f64;

    /// Solves with the graph domain's canonical transform
    /// (`-ln` for probabilities, identity for costs).
    fn solve_with_domain<'g, K>(
        &self,
        graph: &'g GraphModel<K>,
        source: &K,
    ) -> Result<Solution<'g, K>, Error>
    where
        K: Eq + Hash + Clone + Debug,
    {
        self.solve(graph, source, graph.domain().canonical_transform())
    }
}
