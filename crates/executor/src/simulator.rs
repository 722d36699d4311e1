use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::SimulatorConfig;
use super::error::Error;
use super::types::{EdgeSource, RawEdge};

/// Generates a random directed network for exercising the solver.
///
/// Nodes are named `n0..n{total_nodes-1}`. Every node gets `edges_per_node`
/// outgoing edges to uniformly chosen targets (self-loops and parallel edges
/// included), with weights drawn uniformly from `[min_weight, max_weight]`.
/// A configured seed makes the network reproducible.
pub struct SimulatorSource {
    config: SimulatorConfig,
}

impl SimulatorSource {
    pub fn new(config: SimulatorConfig) -> Self {
        SimulatorSource { config }
    }

    pub fn node_name(idx: usize) -> String {
        format!("n{}", idx)
    }

    fn generate(&self) -> Vec<RawEdge> {
        let mut rng: SmallRng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let total_nodes = self.config.total_nodes;
        if total_nodes == 0 {
            return Vec::new();
        }

        let (low, high) = if self.config.min_weight <= self.config.max_weight {
            (self.config.min_weight, self.config.max_weight)
        } else {
            (self.config.max_weight, self.config.min_weight)
        };

        let mut edges = Vec::with_capacity(total_nodes * self.config.edges_per_node);
        for from in 0..total_nodes {
            for _ in 0..self.config.edges_per_node {
                let to = rng.random_range(0..total_nodes);
                let weight = rng.random_range(low..=high);
                edges.push((Self::node_name(from), Self::node_name(to), weight));
            }
        }
        edges
    }
}

#[async_trait]
impl EdgeSource for SimulatorSource {
    async fn load_edges(self) -> Result<Vec<RawEdge>, Error> {
        let edges = self.generate();
        tracing::info!(
            nodes = self.config.total_nodes,
            edges = edges.len(),
            seed = ?self.config.seed,
            "SimulatorSource: network generated"
        );
        Ok(edges)
    }
}
