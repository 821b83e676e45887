use crate::graph::Graph;
use wgraph_common::error::WGraphResult;
use wgraph_common::types::VertexKey;

/// A solver that answers one class of question about a graph snapshot.
///
/// Implementations hold only their parameters (source vertex, ordering,
/// coverage) and never keep a reference to the graph between runs.
pub trait GraphQuery<K: VertexKey> {
    type Output;

    fn name(&self) -> &str;

    fn run(&self, graph: &Graph<K>) -> WGraphResult<Self::Output>;
}
