// ----------------------------
// Benchmark graph generators
// ----------------------------

use common::error::Error;
use common::types::WeightDomain;
use safest_path_core::GraphModel;

pub const CHAIN_NODES: usize = 200_000;
pub const GRID_SIDE: usize = 400;
pub const HOP_PROBABILITY: f64 = 0.9999;

/// A single long chain `0 -> 1 -> ... -> n-1` with a shortcut every 10 nodes.
///
/// The shortcut skips 10 hops at a slightly worse probability than the hops it
/// replaces, so every node is relaxed more than once but the chain stays best.
pub fn generate_chain_graph(n: usize) -> Result<GraphModel<usize>, Error> {
    let mut graph = GraphModel::with_capacity(WeightDomain::Probability, n, n + n / 10);
    for i in 0..n.saturating_sub(1) {
        graph.add_edge(i, i + 1, HOP_PROBABILITY)?;
        if i + 10 < n && i % 10 == 0 {
            let shortcut = HOP_PROBABILITY.powi(10) * 0.999;
            graph.add_edge(i, i + 10, shortcut)?;
        }
    }
    Ok(graph)
}

/// A `side x side` grid where every node links right and down with the same
/// probability, so most nodes are reached by many equally good paths and the
/// frontier is dominated by ties.
pub fn generate_grid_graph(side: usize) -> Result<GraphModel<usize>, Error> {
    let n = side * side;
    let mut graph = GraphModel::with_capacity(WeightDomain::Probability, n, 2 * n);
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            if col + 1 < side {
                graph.add_edge(id, id + 1, HOP_PROBABILITY)?;
            }
            if row + 1 < side {
                graph.add_edge(id, id + side, HOP_PROBABILITY)?;
            }
        }
    }
    Ok(graph)
}
