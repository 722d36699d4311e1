use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::graph::GraphModel;
use super::path;
use common::error::Error;
use common::types::WeightedPath;

/// Result of one single-source solve.
///
/// Holds the best transformed distance of every node reached from the source
/// and the predecessor edge it was reached through. Unreached nodes have no
/// entry: `distance` returns `None` for them and they never appear in
/// `reachable` or `distances`.
///
/// The solution borrows the graph it was computed on, so the graph cannot be
/// mutated while the solution is alive.
#[derive(Debug, Clone)]
pub struct Solution<'g, K> {
    graph: &'g GraphModel<K>,
    source: usize,
    distance: Vec<f64>,
    pred_edge_idx: Vec<Option<usize>>,
    finalized_order: Vec<usize>,
}

impl<'g, K> Solution<'g, K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub(crate) fn new(
        graph: &'g GraphModel<K>,
        source: usize,
        distance: Vec<f64>,
        pred_edge_idx: Vec<Option<usize>>,
        finalized_order: Vec<usize>,
    ) -> Self {
        Self {
            graph,
            source,
            distance,
            pred_edge_idx,
            finalized_order,
        }
    }

    pub fn graph(&self) -> &'g GraphModel<K> {
        self.graph
    }

    pub fn source(&self) -> &'g K {
        &self.graph.nodes()[self.source]
    }

    /// Best transformed distance to `key`, or `None` if it was not reached.
    pub fn distance(&self, key: &K) -> Option<f64> {
        self.graph
            .index_of(key)
            .and_then(|idx| self.distance_at(idx))
    }

    pub fn is_reachable(&self, key: &K) -> bool {
        self.distance(key).is_some()
    }

    /// Node `key` was reached from, or `None` for the source and unreached nodes.
    pub fn predecessor(&self, key: &K) -> Option<&'g K> {
        let idx = self.graph.index_of(key)?;
        let edge_idx = self.pred_edge_idx[idx]?;
        self.graph.key_of(self.graph.edge_source(edge_idx))
    }

    /// Reached nodes with their distances, in the order they were finalized.
    ///
    /// The source always comes first at distance `0.0`.
    pub fn reachable(&self) -> impl Iterator<Item = (&'g K, f64)> + '_ {
        let keys = self.graph.nodes();
        self.finalized_order
            .iter()
            .map(move |&idx| (&keys[idx], self.distance[idx]))
    }

    pub fn reachable_count(&self) -> usize {
        self.finalized_order.len()
    }

    pub fn distances(&self) -> HashMap<K, f64> {
        self.reachable()
            .map(|(key, dist)| (key.clone(), dist))
            .collect()
    }

    /// Predecessor of every reached node except the source.
    pub fn predecessors(&self) -> HashMap<K, K> {
        self.reachable()
            .filter_map(|(key, _)| self.predecessor(key).map(|p| (key.clone(), p.clone())))
            .collect()
    }

    /// Node keys from this solution's source to `target` inclusive.
    ///
    /// # Errors
    /// `Error::Unreachable` if `target` was not reached.
    pub fn reconstruct_path(&self, target: &K) -> Result<Vec<K>, Error> {
        path::reconstruct_path(self, self.source(), target)
    }

    /// Full best path from this solution's source to `target`, with hop weights.
    ///
    /// # Errors
    /// `Error::Unreachable` if `target` was not reached.
    pub fn path_to(&self, target: &K) -> Result<WeightedPath<K>, Error> {
        path::weighted_path(self, target)
    }

    pub(crate) fn source_index(&self) -> usize {
        self.source
    }

    pub(crate) fn distance_at(&self, idx: usize) -> Option<f64> {
        self.distance
            .get(idx)
            .copied()
            .filter(|dist| dist.is_finite())
    }

    pub(crate) fn pred_edge_at(&self, idx: usize) -> Option<usize> {
        self.pred_edge_idx.get(idx).copied().flatten()
    }
}
