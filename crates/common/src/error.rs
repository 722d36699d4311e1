use thiserror::Error;

use crate::types::WeightDomain;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An edge weight fell outside the valid range of the graph's weight domain.
    #[error("Edge weight {weight} is not valid in the {domain} domain (expected {}).", .domain.valid_range())]
    InvalidWeight { weight: f64, domain: WeightDomain },

    /// A solve was requested from a node key the graph has never seen.
    #[error("Node {0} is not present in the graph.")]
    UnknownNode(String),

    /// Path reconstruction was requested for a node the solve never reached.
    #[error("Node {0} is not reachable from the source.")]
    Unreachable(String),
}
