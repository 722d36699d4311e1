use serde::Serialize;
use std::sync::Arc;

use super::{error::Error, types::SharedGraph};
use common::error::Error as PathError;
use common::types::WeightDomain;
use safest_path_core::{GraphModel, PathSolver};

/// One (source, target) line of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub source: String,
    pub target: String,
    pub reachable: bool,
    /// Sum of transformed hop weights.
    pub distance: Option<f64>,
    /// Path value in natural units (probability product or cost sum).
    pub natural: Option<f64>,
    pub hops: Option<usize>,
    pub path: String,
}

impl PathReport {
    fn unreachable(source: &str, target: &str) -> Self {
        PathReport {
            source: source.to_string(),
            target: target.to_string(),
            reachable: false,
            distance: None,
            natural: None,
            hops: None,
            path: String::new(),
        }
    }
}

/// Runs one independent solve per source over a shared, immutable graph.
///
/// Every solve owns its own scratch state, so they run in parallel on Tokio's
/// blocking pool without any locking on the graph.
pub struct PathRunner<S> {
    solver: Arc<S>,
    graph: SharedGraph,
}

impl<S> PathRunner<S>
where
    S: PathSolver + Send + Sync + 'static,
{
    pub fn new(graph: SharedGraph, solver: S) -> Self {
        PathRunner {
            graph,
            solver: Arc::new(solver),
        }
    }

    /// Solves from every source and collects report rows, ordered by source
    /// then by target.
    ///
    /// An empty `sources` list falls back to the first node of the graph.
    /// A source that is not in the graph is logged and skipped.
    pub async fn run(
        &self,
        sources: &[String],
        targets: &[String],
    ) -> Result<Vec<PathReport>, Error> {
        let sources = self.resolve_sources(sources);
        tracing::info!(sources = sources.len(), "Runner: starting solves");

        let mut handles = Vec::with_capacity(sources.len());
        for source in sources {
            let graph = Arc::clone(&self.graph);
            let solver = Arc::clone(&self.solver);
            let targets = targets.to_vec();
            let handle = tokio::task::spawn_blocking(move || {
                let rows = solve_source(solver.as_ref(), &graph, &source, &targets);
                (source, rows)
            });
            handles.push(handle);
        }

        let mut reports = Vec::new();
        for handle in handles {
            let (source, rows) = handle.await?;
            match rows {
                Ok(rows) => reports.extend(rows),
                Err(e) => {
                    tracing::error!(%source, error = %e, "Runner: solve failed. Continuing.");
                }
            }
        }

        Ok(reports)
    }

    fn resolve_sources(&self, sources: &[String]) -> Vec<String> {
        if !sources.is_empty() {
            return sources.to_vec();
        }

        match self.graph.nodes().first() {
            Some(first) => {
                tracing::warn!(source = %first, "Runner: no sources configured, using first node");
                vec![first.clone()]
            }
            None => {
                tracing::warn!("Runner: graph is empty, nothing to solve");
                Vec::new()
            }
        }
    }
}

/// Solves from `source` with the domain's canonical transform and builds one
/// report row per target (every reachable node when `targets` is empty).
pub fn solve_source<S: PathSolver>(
    solver: &S,
    graph: &GraphModel<String>,
    source: &str,
    targets: &[String],
) -> Result<Vec<PathReport>, PathError> {
    let source_key = source.to_string();
    let solution = solver.solve_with_domain(graph, &source_key)?;
    let domain = graph.domain();

    let targets: Vec<String> = if targets.is_empty() {
        solution
            .reachable()
            .map(|(key, _)| key.clone())
            .filter(|key| *key != source_key)
            .collect()
    } else {
        targets.to_vec()
    };

    let mut rows = Vec::with_capacity(targets.len());
    for target in &targets {
        match solution.path_to(target) {
            Ok(path) => {
                let natural = path.natural_value();
                if domain == WeightDomain::Probability {
                    tracing::info!(
                        %source,
                        %target,
                        probability = natural,
                        "Maximum safety probability"
                    );
                }
                rows.push(PathReport {
                    source: source.to_string(),
                    target: target.clone(),
                    reachable: true,
                    distance: Some(path.transformed_distance),
                    natural: Some(natural),
                    hops: Some(path.hops()),
                    path: path.nodes.join(" -> "),
                });
            }
            Err(PathError::Unreachable(_)) => {
                tracing::warn!(%source, %target, "No path from source to target");
                rows.push(PathReport::unreachable(source, target));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(rows)
}
