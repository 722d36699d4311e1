use std::fmt::Debug;
use std::hash::Hash;

use super::solution::Solution;
use common::error::Error;
use common::types::WeightedPath;

/// Reconstructs the best path from `source` to `target` by walking predecessor
/// edges back from `target` and reversing.
///
/// `source` is normally the node the solution was computed from, but any node
/// on `target`'s predecessor chain is accepted: a sub-path of a best path is
/// itself a best path.
///
/// # Errors
/// - `Error::UnknownNode` if `source` is not a node of the solved graph.
/// - `Error::Unreachable` if `target` was not reached by the solve, or if
///   `source` does not lie on `target`'s predecessor chain.
pub fn reconstruct_path<K>(
    solution: &Solution<'_, K>,
    source: &K,
    target: &K,
) -> Result<Vec<K>, Error>
where
    K: Eq + Hash + Clone + Debug,
{
    let graph = solution.graph();
    let source_idx = graph
        .index_of(source)
        .ok_or_else(|| Error::UnknownNode(format!("{:?}", source)))?;
    let target_idx = reached_index(solution, target)?;

    let edge_indices = trace_edges(solution, target_idx, source_idx)
        .ok_or_else(|| Error::Unreachable(format!("{:?}", target)))?;

    let mut nodes = Vec::with_capacity(edge_indices.len() + 1);
    nodes.push(source.clone());
    for &edge_idx in &edge_indices {
        nodes.push(graph.nodes()[graph.edge_target(edge_idx)].clone());
    }
    Ok(nodes)
}

/// Builds the [`WeightedPath`] from the solution's source to `target`.
///
/// # Errors
/// Returns `Error::Unreachable` if `target` was not reached by the solve.
pub fn weighted_path<K>(
    solution: &Solution<'_, K>,
    target: &K,
) -> Result<WeightedPath<K>, Error>
where
    K: Eq + Hash + Clone + Debug,
{
    let graph = solution.graph();
    let target_idx = reached_index(solution, target)?;
    let source_idx = solution.source_index();

    let edge_indices = trace_edges(solution, target_idx, source_idx)
        .ok_or_else(|| Error::Unreachable(format!("{:?}", target)))?;

    let len = edge_indices.len();
    let mut nodes: Vec<K> = Vec::with_capacity(len + 1);
    let mut weights: Vec<f64> = Vec::with_capacity(len);

    nodes.push(solution.source().clone());
    for &edge_idx in &edge_indices {
        nodes.push(graph.nodes()[graph.edge_target(edge_idx)].clone());
        weights.push(graph.edge_weight(edge_idx));
    }

    Ok(WeightedPath {
        nodes,
        weights,
        transformed_distance: solution.distance_at(target_idx).unwrap_or(f64::INFINITY),
        domain: graph.domain(),
    })
}

fn reached_index<K>(solution: &Solution<'_, K>, target: &K) -> Result<usize, Error>
where
    K: Eq + Hash + Clone + Debug,
{
    solution
        .graph()
        .index_of(target)
        .filter(|&idx| solution.distance_at(idx).is_some())
        .ok_or_else(|| Error::Unreachable(format!("{:?}", target)))
}

/// Edge ids on the predecessor chain from `stop` to `target`, in forward order.
///
/// Returns `None` if the chain ends at the solve's source without meeting `stop`.
/// The walk is bounded by the node count, so a corrupted chain cannot loop.
fn trace_edges<K>(
    solution: &Solution<'_, K>,
    target: usize,
    stop: usize,
) -> Option<Vec<usize>>
where
    K: Eq + Hash + Clone + Debug,
{
    let graph = solution.graph();
    let mut edge_indices = Vec::new();
    let mut current = target;

    for _ in 0..=graph.node_count() {
        if current == stop {
            edge_indices.reverse();
            return Some(edge_indices);
        }
        let edge_idx = solution.pred_edge_at(current)?;
        edge_indices.push(edge_idx);
        current = graph.edge_source(edge_idx);
    }

    None
}
