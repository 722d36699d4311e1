use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use common::error::Error;
use common::types::{Edge, WeightDomain};

/// A single outgoing edge as seen through [`GraphModel::neighbors`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeView<'g, K> {
    /// Position of the edge in insertion order across the whole graph.
    pub index: usize,
    pub from: &'g K,
    pub to: &'g K,
    pub weight: f64,
}

/// Directed multigraph with natural-domain edge weights.
///
/// Node keys are interned into dense indices in first-seen order, and every
/// edge is stored in flat parallel arrays indexed by edge id:
/// - `edge_targets[i]` -> target node index of edge `i`
/// - `edge_weights[i]` -> natural weight of edge `i`
/// - `edge_source_by_index[i]` -> source node index of edge `i`
///
/// `adjacency[u]` lists the edge ids leaving `u` in insertion order, which is
/// the order the solver relaxes them in.
///
/// The model is append-only. Once built it is only read, so it can be shared
/// across independent solves (e.g. behind an `Arc`) without locking.
#[derive(Debug, Clone)]
pub struct GraphModel<K> {
    domain: WeightDomain,
    keys: Vec<K>,
    index_by_key: HashMap<K, usize>,
    adjacency: Vec<Vec<usize>>,
    edge_targets: Vec<usize>,
    edge_weights: Vec<f64>,
    edge_source_by_index: Vec<usize>,
}

impl<K> GraphModel<K>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Creates an empty graph whose edges are validated against `domain`.
    pub fn new(domain: WeightDomain) -> Self {
        Self::with_capacity(domain, 0, 0)
    }

    pub fn with_capacity(domain: WeightDomain, nodes: usize, edges: usize) -> Self {
        Self {
            domain,
            keys: Vec::with_capacity(nodes),
            index_by_key: HashMap::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_targets: Vec::with_capacity(edges),
            edge_weights: Vec::with_capacity(edges),
            edge_source_by_index: Vec::with_capacity(edges),
        }
    }

    /// Builds a graph from a list of edges `(from, to, weight)`, keeping their order.
    ///
    /// # Errors
    /// Returns `Error::InvalidWeight` for the first edge whose weight is outside
    /// the domain. No partially built graph is returned.
    pub fn from_edges<I>(domain: WeightDomain, edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Edge<K>>,
    {
        let edges = edges.into_iter();
        let mut graph = Self::with_capacity(domain, 0, edges.size_hint().0);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Registers `key` as a node even if no edge references it.
    ///
    /// Idempotent; returns the node's dense index.
    pub fn add_node(&mut self, key: K) -> usize {
        if let Some(&idx) = self.index_by_key.get(&key) {
            return idx;
        }

        let idx = self.keys.len();
        self.index_by_key.insert(key.clone(), idx);
        self.keys.push(key);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Appends the directed edge `from -> to`.
    ///
    /// Parallel edges and self-loops are kept as separate entries.
    ///
    /// # Errors
    /// Returns `Error::InvalidWeight` if `weight` is outside the graph's domain,
    /// in which case neither endpoint is registered.
    pub fn add_edge(&mut self, from: K, to: K, weight: f64) -> Result<(), Error> {
        self.domain.validate(weight)?;

        let u = self.add_node(from);
        let v = self.add_node(to);

        let edge_idx = self.edge_targets.len();
        self.edge_targets.push(v);
        self.edge_weights.push(weight);
        self.edge_source_by_index.push(u);
        self.adjacency[u].push(edge_idx);

        Ok(())
    }

    /// Outgoing edges of `key` in insertion order.
    ///
    /// Empty for nodes that only appear as edge targets, and for keys the
    /// graph has never seen.
    pub fn neighbors<'g>(
        &'g self,
        key: &K,
    ) -> impl Iterator<Item = EdgeView<'g, K>> + use<'g, K> {
        let edge_ids: &'g [usize] = match self.index_of(key) {
            Some(u) => &self.adjacency[u],
            None => &[],
        };
        edge_ids.iter().map(move |&i| self.edge_view(i))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index_by_key.contains_key(key)
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.index_by_key.get(key).copied()
    }

    pub fn key_of(&self, idx: usize) -> Option<&K> {
        self.keys.get(idx)
    }

    /// Node keys in the order they were first seen.
    pub fn nodes(&self) -> &[K] {
        &self.keys
    }

    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_targets.len()
    }

    pub fn domain(&self) -> WeightDomain {
        self.domain
    }

    /// Edge ids leaving the node at dense index `u`.
    pub(crate) fn out_edges(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    pub(crate) fn edge_target(&self, edge_idx: usize) -> usize {
        self.edge_targets[edge_idx]
    }

    pub(crate) fn edge_weight(&self, edge_idx: usize) -> f64 {
        self.edge_weights[edge_idx]
    }

    /// O(1) lookup for the source node of a given edge id.
    pub(crate) fn edge_source(&self, edge_idx: usize) -> usize {
        self.edge_source_by_index[edge_idx]
    }

    fn edge_view(&self, edge_idx: usize) -> EdgeView<'_, K> {
        EdgeView {
            index: edge_idx,
            from: &self.keys[self.edge_source_by_index[edge_idx]],
            to: &self.keys[self.edge_targets[edge_idx]],
            weight: self.edge_weights[edge_idx],
        }
    }
}
