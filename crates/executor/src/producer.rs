use super::{error::Error, types::EdgeSource};
use common::types::WeightDomain;
use safest_path_core::GraphModel;

/// Drives an [`EdgeSource`] and turns its edges into a validated graph.
pub struct Producer<S: EdgeSource> {
    source: S,
}

impl<S> Producer<S>
where
    S: EdgeSource,
{
    pub fn new(source: S) -> Self {
        Producer { source }
    }

    /// Loads every edge from the source and builds the graph in `domain`.
    ///
    /// # Errors
    /// Propagates source failures, and fails with the graph's
    /// `InvalidWeight` error on the first edge outside the domain.
    pub async fn build_graph(self, domain: WeightDomain) -> Result<GraphModel<String>, Error> {
        let edges = self.source.load_edges().await?;
        let graph = GraphModel::from_edges(domain, edges)?;

        tracing::info!(
            %domain,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Producer: graph built"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawEdge;
    use common::error::Error as PathError;

    struct FixedEdges(Vec<RawEdge>);

    #[async_trait::async_trait]
    impl EdgeSource for FixedEdges {
        async fn load_edges(self) -> Result<Vec<RawEdge>, Error> {
            Ok(self.0)
        }
    }

    fn edge(from: &str, to: &str, weight: f64) -> RawEdge {
        (from.to_string(), to.to_string(), weight)
    }

    #[tokio::test]
    async fn builds_graph_from_source() {
        let source = FixedEdges(vec![edge("KTM", "JA", 0.9), edge("JA", "PH", 0.95)]);

        let graph = Producer::new(source)
            .build_graph(WeightDomain::Probability)
            .await
            .unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[tokio::test]
    async fn invalid_weight_aborts_build() {
        let source = FixedEdges(vec![edge("KTM", "JA", 0.9), edge("JA", "PH", 0.0)]);

        let result = Producer::new(source)
            .build_graph(WeightDomain::Probability)
            .await;

        assert!(matches!(
            result,
            Err(Error::GraphError(PathError::InvalidWeight { .. }))
        ));
    }
}
