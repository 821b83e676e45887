use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::str::FromStr;

use tracing::debug;
use wgraph_api::graph::{Adjacency, Graph};
use wgraph_api::query::GraphQuery;
use wgraph_api::result::SpanningTree;
use wgraph_common::error::{WGraphError, WGraphResult};
use wgraph_common::types::{Edge, VertexKey};

use super::union_find::DisjointSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightOrder {
    /// Minimum spanning tree.
    #[default]
    Ascending,
    /// Maximum spanning tree.
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanCoverage {
    /// Only the component of the start vertex.
    #[default]
    Component,
    /// Restart from every unvisited vertex until all components are spanned.
    Forest,
}

impl FromStr for SpanCoverage {
    type Err = WGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "component" => Ok(SpanCoverage::Component),
            "forest" => Ok(SpanCoverage::Forest),
            other => Err(WGraphError::InvalidArgument(format!(
                "unknown prim coverage {other:?}, expected component or forest"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal {
    pub order: WeightOrder,
}

impl Kruskal {
    pub fn minimum() -> Self {
        Self {
            order: WeightOrder::Ascending,
        }
    }

    pub fn maximum() -> Self {
        Self {
            order: WeightOrder::Descending,
        }
    }
}

impl<K: VertexKey> GraphQuery<K> for Kruskal {
    type Output = SpanningTree<K>;

    fn name(&self) -> &str {
        match self.order {
            WeightOrder::Ascending => "kruskal_min",
            WeightOrder::Descending => "kruskal_max",
        }
    }

    fn run(&self, graph: &Graph<K>) -> WGraphResult<SpanningTree<K>> {
        graph.validate_weights()?;

        let mut edges: Vec<&Edge<K>> = graph.edges().iter().collect();
        match self.order {
            WeightOrder::Ascending => edges.sort_by(|a, b| a.weight.total_cmp(&b.weight)),
            WeightOrder::Descending => edges.sort_by(|a, b| b.weight.total_cmp(&a.weight)),
        }

        let mut partitions = DisjointSet::new(graph.vertices());
        let mut tree = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
        for e in edges {
            let root_u = partitions.find(&e.u);
            let root_v = partitions.find(&e.v);
            if root_u != root_v {
                tree.push(e.clone());
                partitions.union(root_u, root_v);
            }
        }
        debug!(
            order = ?self.order,
            accepted = tree.len(),
            components = partitions.component_count(),
            "kruskal done"
        );

        Ok(SpanningTree::from(tree))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Prim {
    pub coverage: SpanCoverage,
}

impl Prim {
    pub fn new(coverage: SpanCoverage) -> Self {
        Self { coverage }
    }
}

/// Candidate edge on the frontier, ordered by weight then endpoints.
#[derive(Debug, Clone, PartialEq)]
struct Frontier<K> {
    weight: f64,
    from: K,
    to: K,
}

impl<K: Eq> Eq for Frontier<K> {}

impl<K: Ord> Ord for Frontier<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl<K: Ord> PartialOrd for Frontier<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn grow<K: VertexKey>(
    start: &K,
    adjacency: &Adjacency<K>,
    visited: &mut HashSet<K>,
    tree: &mut Vec<Edge<K>>,
) {
    let mut heap = BinaryHeap::new();
    visited.insert(start.clone());
    for (to, weight) in adjacency.get(start).into_iter().flatten() {
        heap.push(Reverse(Frontier {
            weight: *weight,
            from: start.clone(),
            to: to.clone(),
        }));
    }

    while let Some(Reverse(Frontier { weight, from, to })) = heap.pop() {
        if visited.contains(&to) {
            continue;
        }
        visited.insert(to.clone());
        for (next, w) in adjacency.get(&to).into_iter().flatten() {
            if !visited.contains(next) {
                heap.push(Reverse(Frontier {
                    weight: *w,
                    from: to.clone(),
                    to: next.clone(),
                }));
            }
        }
        tree.push(Edge::new(from, to, weight));
    }
}

impl<K: VertexKey> GraphQuery<K> for Prim {
    type Output = SpanningTree<K>;

    fn name(&self) -> &str {
        "prim"
    }

    fn run(&self, graph: &Graph<K>) -> WGraphResult<SpanningTree<K>> {
        graph.validate_weights()?;

        let adjacency = graph.adjacency();
        let mut visited = HashSet::with_capacity(graph.vertex_count());
        let mut tree = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
        let mut trees = 0usize;
        for start in graph.vertices() {
            if visited.contains(start) {
                continue;
            }
            grow(start, &adjacency, &mut visited, &mut tree);
            trees += 1;
            if self.coverage == SpanCoverage::Component {
                break;
            }
        }
        debug!(
            coverage = ?self.coverage,
            accepted = tree.len(),
            trees,
            "prim done"
        );

        Ok(SpanningTree::from(tree))
    }
}
