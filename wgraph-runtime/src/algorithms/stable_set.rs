use std::cmp::Reverse;

use tracing::debug;
use wgraph_api::graph::Graph;
use wgraph_api::query::GraphQuery;
use wgraph_api::result::StableSet;
use wgraph_common::error::WGraphResult;
use wgraph_common::types::VertexKey;

#[derive(Debug, Clone, Copy, Default)]
pub struct WelchPowell;

/// Greedy Welch-Powell order: vertices by descending degree, kept when no
/// neighbor is kept yet. Maximal, not maximum. Ties keep the vertex-set order.
pub fn greedy_stable_set<K: VertexKey>(graph: &Graph<K>) -> StableSet<K> {
    let adjacency = graph.adjacency();
    let degree = |v: &K| adjacency.get(v).map_or(0, Vec::len);

    let mut order: Vec<&K> = graph.vertices().collect();
    order.sort_by_key(|v| Reverse(degree(*v)));

    let mut stable = StableSet::new();
    for v in order {
        let independent = adjacency
            .get(v)
            .into_iter()
            .flatten()
            .all(|(n, _)| !stable.contains(n));
        if independent {
            stable.insert(v.clone());
        }
    }
    debug!(vertices = graph.vertex_count(), kept = stable.len(), "stable set done");
    stable
}

impl<K: VertexKey> GraphQuery<K> for WelchPowell {
    type Output = StableSet<K>;

    fn name(&self) -> &str {
        "welch_powell"
    }

    fn run(&self, graph: &Graph<K>) -> WGraphResult<StableSet<K>> {
        Ok(greedy_stable_set(graph))
    }
}
