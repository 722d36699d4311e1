use std::sync::Arc;

use super::error::Error;
use common::types::Edge;
use safest_path_core::GraphModel;

/// Raw edge as read from an input source, keyed by node name.
pub type RawEdge = Edge<String>;

/// Graph shared read-only between concurrent solve tasks.
pub type SharedGraph = Arc<GraphModel<String>>;

/// A trait defining the contract for any source that supplies the edges of
/// the graph to be solved (e.g. a CSV file or a simulated network).
///
/// The trait bounds (`Send`, `Sync`, `'static`) let an implementation be
/// moved onto the Tokio runtime.
#[async_trait::async_trait]
pub trait EdgeSource: Send + Sync + 'static {
    async fn load_edges(self) -> Result<Vec<RawEdge>, Error>;
}
