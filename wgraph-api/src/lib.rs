pub mod graph;
pub mod query;
pub mod result;
pub mod sketch;

pub use graph::Graph;
pub use query::GraphQuery;
pub use result::{DistanceMap, PredecessorMap, ShortestPaths, SpanningTree, StableSet};
pub use wgraph_common::types::{Edge, VertexKey};
