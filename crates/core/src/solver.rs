use super::graph::GraphModel;
use super::solution::Solution;
use super::traits::PathSolver;
use common::error::Error;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

/// Frontier entry, ordered by tentative distance and then by push sequence.
///
/// The sequence number makes equal-distance entries pop in the order they were
/// pushed, so a fixed edge insertion order always yields the same solution.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    distance: f64,
    seq: u64,
    node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Scratch state owned by a single solve call.
struct SolverState {
    distance: Vec<f64>,
    pred_edge_idx: Vec<Option<usize>>,
    finalized: Vec<bool>,
    finalized_order: Vec<usize>,
    frontier: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl SolverState {
    fn new(num_nodes: usize, source: usize) -> Self {
        let mut state = Self {
            distance: vec![f64::INFINITY; num_nodes],
            pred_edge_idx: vec![None; num_nodes],
            finalized: vec![false; num_nodes],
            finalized_order: Vec::new(),
            frontier: BinaryHeap::with_capacity(num_nodes),
            next_seq: 0,
        };
        state.distance[source] = 0.0;
        state.push(source, 0.0);
        state
    }

    fn push(&mut self, node: usize, distance: f64) {
        self.frontier.push(Reverse(FrontierEntry {
            distance,
            seq: self.next_seq,
            node,
        }));
        self.next_seq += 1;
    }
}

/// Greedy frontier-expansion solver (Dijkstra) over transformed edge weights.
///
/// Each round pops the unfinalized node with the smallest tentative distance,
/// finalizes it, and relaxes its outgoing edges in insertion order. A neighbor
/// is updated and re-pushed only on a strictly smaller distance, so the first
/// predecessor found for an exactly tied distance is kept. Stale frontier
/// entries for already finalized nodes are skipped when popped.
///
/// Cost is O(E log V) with the binary-heap frontier.
pub struct DijkstraSolver;

impl PathSolver for DijkstraSolver {
    /// Runs the relaxation loop from `source`.
    ///
    /// # Parameters
    /// - `graph`: The graph to solve over. Borrowed for the lifetime of the solution.
    /// - `source`: Starting node key.
    /// - `transform`: Natural weight -> non-negative additive distance.
    ///
    /// # Returns
    /// - `Ok(solution)` → Distances and predecessors for every reachable node.
    /// - `Err(Error::UnknownNode)` → `source` is not in the graph.
    #[tracing::instrument(
        level = "debug",
        skip(self, graph, source, transform),
        fields(source = ?source, nodes = graph.node_count(), edges = graph.edge_count())
    )]
    fn solve<'g, K, F>(
        &self,
        graph: &'g GraphModel<K>,
        source: &K,
        transform: F,
    ) -> Result<Solution<'g, K>, Error>
    where
        K: Eq + Hash + Clone + Debug,
        F: Fn(f64) -> f64,
    {
        let source_idx = graph
            .index_of(source)
            .ok_or_else(|| Error::UnknownNode(format!("{:?}", source)))?;

        let mut state = SolverState::new(graph.node_count(), source_idx);
        let mut relaxations = 0usize;
        let mut stale_entries = 0usize;

        while let Some(Reverse(entry)) = state.frontier.pop() {
            let u = entry.node;
            if state.finalized[u] {
                stale_entries += 1;
                continue;
            }
            state.finalized[u] = true;
            state.finalized_order.push(u);

            let base = state.distance[u];

            // Traverse edges u -> v in insertion order
            for &edge_idx in graph.out_edges(u) {
                let v = graph.edge_target(edge_idx);
                let weight = transform(graph.edge_weight(edge_idx));
                debug_assert!(
                    weight >= 0.0,
                    "transform produced {} for edge weight {}; transformed weights must be non-negative",
                    weight,
                    graph.edge_weight(edge_idx)
                );

                let candidate = base + weight;
                if candidate < state.distance[v] {
                    state.distance[v] = candidate;
                    state.pred_edge_idx[v] = Some(edge_idx);
                    state.push(v, candidate);
                    relaxations += 1;
                }
            }
        }

        tracing::debug!(
            reached = state.finalized_order.len(),
            relaxations,
            stale_entries,
            "solve complete"
        );

        Ok(Solution::new(
            graph,
            source_idx,
            state.distance,
            state.pred_edge_idx,
            state.finalized_order,
        ))
    }
}
