//! The free functions below run each query with default options.

pub mod shortest_path;
pub mod spanning_tree;
pub mod stable_set;
pub mod union_find;

use wgraph_api::graph::Graph;
use wgraph_api::query::GraphQuery;
use wgraph_api::result::{DistanceMap, ShortestPaths, SpanningTree, StableSet};
use wgraph_common::error::WGraphResult;
use wgraph_common::types::VertexKey;

use shortest_path::{BellmanFord, Dijkstra};
use spanning_tree::{Kruskal, Prim};

pub fn new_graph<K: VertexKey>() -> Graph<K> {
    Graph::new()
}

/// Distances from `source`, tolerating negative weights. A negative cycle is
/// not reported; see [`bellman_ford_checked`].
///
/// Non-negative edges are relaxed both ways, but a negative edge `(u, v, w)`
/// only from `u` to `v`, so the order its endpoints were added in matters:
/// with `(B, A, -3)` as the only edge, `B` is unreachable from `A`.
pub fn bellman_ford<K: VertexKey>(graph: &Graph<K>, source: &K) -> WGraphResult<DistanceMap<K>> {
    BellmanFord::new(source.clone()).run(graph)
}

pub fn bellman_ford_checked<K: VertexKey>(
    graph: &Graph<K>,
    source: &K,
) -> WGraphResult<DistanceMap<K>> {
    BellmanFord::new(source.clone()).checked().run(graph)
}

/// Distances and predecessors from `source`. All weights must be
/// non-negative for the result to be correct.
pub fn dijkstra<K: VertexKey>(graph: &Graph<K>, source: &K) -> WGraphResult<ShortestPaths<K>> {
    Dijkstra::new(source.clone()).run(graph)
}

pub fn minimum_spanning_tree_kruskal<K: VertexKey>(
    graph: &Graph<K>,
) -> WGraphResult<SpanningTree<K>> {
    Kruskal::minimum().run(graph)
}

/// Spans only the component of the first vertex.
pub fn minimum_spanning_tree_prim<K: VertexKey>(
    graph: &Graph<K>,
) -> WGraphResult<SpanningTree<K>> {
    Prim::default().run(graph)
}

pub fn maximum_spanning_tree<K: VertexKey>(graph: &Graph<K>) -> WGraphResult<SpanningTree<K>> {
    Kruskal::maximum().run(graph)
}

/// Approximate: maximal, not maximum.
pub fn stable_set<K: VertexKey>(graph: &Graph<K>) -> StableSet<K> {
    stable_set::greedy_stable_set(graph)
}
