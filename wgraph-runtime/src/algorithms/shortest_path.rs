use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::str::FromStr;

use tracing::{debug, warn};
use wgraph_api::graph::Graph;
use wgraph_api::query::GraphQuery;
use wgraph_api::result::{DistanceMap, PredecessorMap, ShortestPaths};
use wgraph_common::error::{WGraphError, WGraphResult};
use wgraph_common::types::VertexKey;

/// Which directions Bellman-Ford relaxes a stored edge `(u, v, w)` in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relaxation {
    /// `u -> v` and `v -> u` for `w >= 0`; only `u -> v` for `w < 0`, since an
    /// undirected negative edge would be a negative two-cycle.
    #[default]
    Symmetric,
    /// Only `u -> v`, exactly as stored.
    Stored,
}

impl FromStr for Relaxation {
    type Err = WGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "symmetric" => Ok(Relaxation::Symmetric),
            "stored" => Ok(Relaxation::Stored),
            other => Err(WGraphError::InvalidArgument(format!(
                "unknown relaxation mode {other:?}, expected symmetric or stored"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BellmanFord<K> {
    pub source: K,
    pub relaxation: Relaxation,
    /// Run one more pass after |V| - 1 rounds and fail with
    /// [`WGraphError::NegativeCycle`] if anything still relaxes.
    pub detect_negative_cycles: bool,
}

impl<K: VertexKey> BellmanFord<K> {
    pub fn new(source: K) -> Self {
        Self {
            source,
            relaxation: Relaxation::default(),
            detect_negative_cycles: false,
        }
    }

    pub fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
        self.relaxation = relaxation;
        self
    }

    pub fn checked(mut self) -> Self {
        self.detect_negative_cycles = true;
        self
    }
}

fn relaxation_arcs<K: VertexKey>(
    graph: &Graph<K>,
    relaxation: Relaxation,
) -> Vec<(&K, &K, f64)> {
    let mut arcs = Vec::with_capacity(graph.edge_count() * 2);
    for e in graph.edges() {
        arcs.push((&e.u, &e.v, e.weight));
        if relaxation == Relaxation::Symmetric && e.weight >= 0.0 && !e.is_self_loop() {
            arcs.push((&e.v, &e.u, e.weight));
        }
    }
    arcs
}

/// One pass over every arc. Returns whether any distance improved.
fn relax<K: VertexKey>(arcs: &[(&K, &K, f64)], dist: &mut DistanceMap<K>) -> bool {
    let mut updated = false;
    for &(u, v, w) in arcs {
        let du = dist.get(u).copied().unwrap_or(f64::INFINITY);
        if du == f64::INFINITY {
            continue;
        }
        let candidate = du + w;
        if let Some(dv) = dist.get_mut(v) {
            if candidate < *dv {
                *dv = candidate;
                updated = true;
            }
        }
    }
    updated
}

impl<K: VertexKey> GraphQuery<K> for BellmanFord<K> {
    type Output = DistanceMap<K>;

    fn name(&self) -> &str {
        "bellman_ford"
    }

    fn run(&self, graph: &Graph<K>) -> WGraphResult<DistanceMap<K>> {
        graph.ensure_vertex(&self.source)?;
        graph.validate_weights()?;

        let mut dist: DistanceMap<K> = graph
            .vertices()
            .map(|v| (v.clone(), f64::INFINITY))
            .collect();
        dist.insert(self.source.clone(), 0.0);

        let arcs = relaxation_arcs(graph, self.relaxation);
        let rounds = graph.vertex_count().saturating_sub(1);
        let mut used = 0;
        let mut converged = false;
        while used < rounds {
            used += 1;
            if !relax(&arcs, &mut dist) {
                converged = true;
                break;
            }
        }
        debug!(
            source = ?self.source,
            rounds = used,
            arcs = arcs.len(),
            converged,
            "bellman-ford relaxation done"
        );

        if self.detect_negative_cycles && !converged && relax(&arcs, &mut dist.clone()) {
            return Err(WGraphError::NegativeCycle);
        }

        Ok(dist)
    }
}

#[derive(Debug, Clone)]
pub struct Dijkstra<K> {
    pub source: K,
}

impl<K: VertexKey> Dijkstra<K> {
    pub fn new(source: K) -> Self {
        Self { source }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct State<K> {
    cost: f64,
    vertex: K,
}

impl<K: Eq> Eq for State<K> {}

// Reversed so that BinaryHeap pops the smallest cost, then the smallest vertex.
impl<K: Ord> Ord for State<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<K: Ord> PartialOrd for State<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: VertexKey> GraphQuery<K> for Dijkstra<K> {
    type Output = ShortestPaths<K>;

    fn name(&self) -> &str {
        "dijkstra"
    }

    /// Negative weights are not rejected, but the distances are then only an
    /// upper bound of the true shortest distances.
    fn run(&self, graph: &Graph<K>) -> WGraphResult<ShortestPaths<K>> {
        graph.ensure_vertex(&self.source)?;
        graph.validate_weights()?;
        if graph.has_negative_weight() {
            warn!(
                source = ?self.source,
                "dijkstra called on a graph with negative weights; distances may be wrong"
            );
        }

        let adjacency = graph.adjacency();
        let mut dist: DistanceMap<K> = graph
            .vertices()
            .map(|v| (v.clone(), f64::INFINITY))
            .collect();
        let mut pred: PredecessorMap<K> = graph.vertices().map(|v| (v.clone(), None)).collect();
        let mut settled: HashSet<K> = HashSet::with_capacity(graph.vertex_count());
        let mut heap = BinaryHeap::new();

        dist.insert(self.source.clone(), 0.0);
        heap.push(State {
            cost: 0.0,
            vertex: self.source.clone(),
        });

        while let Some(State { cost, vertex }) = heap.pop() {
            if cost > dist[&vertex] || !settled.insert(vertex.clone()) {
                continue;
            }

            let Some(neighbors) = adjacency.get(&vertex) else {
                continue;
            };
            for (next, weight) in neighbors {
                if settled.contains(next) {
                    continue;
                }
                let next_cost = cost + weight;
                let Some(best) = dist.get_mut(next) else {
                    continue;
                };
                if next_cost < *best {
                    *best = next_cost;
                    pred.insert(next.clone(), Some(vertex.clone()));
                    heap.push(State {
                        cost: next_cost,
                        vertex: next.clone(),
                    });
                }
            }
        }
        debug!(source = ?self.source, settled = settled.len(), "dijkstra done");

        Ok(ShortestPaths {
            distances: dist,
            predecessors: pred,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("B", "C", 2.0);
        g.add_edge("A", "C", 4.0);
        g
    }

    #[test]
    fn test_relaxation_from_str() {
        assert_eq!("stored".parse::<Relaxation>().unwrap(), Relaxation::Stored);
        assert_eq!(
            " symmetric ".parse::<Relaxation>().unwrap(),
            Relaxation::Symmetric
        );
        assert!(matches!(
            "both".parse::<Relaxation>(),
            Err(WGraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bellman_ford_triangle() {
        let dist = BellmanFord::new("A").run(&triangle()).unwrap();
        assert_eq!(dist[&"A"], 0.0);
        assert_eq!(dist[&"B"], 1.0);
        assert_eq!(dist[&"C"], 3.0);
    }

    #[test]
    fn test_bellman_ford_stored_direction_only() {
        let mut g = Graph::new();
        g.add_edge("B", "A", 1.0);
        let symmetric = BellmanFord::new("A").run(&g).unwrap();
        assert_eq!(symmetric[&"B"], 1.0);

        let stored = BellmanFord::new("A")
            .with_relaxation(Relaxation::Stored)
            .run(&g)
            .unwrap();
        assert_eq!(stored[&"B"], f64::INFINITY);
    }

    #[test]
    fn test_bellman_ford_negative_edge_is_an_arc() {
        let mut g = Graph::new();
        g.add_edge("A", "B", -3.0);
        g.add_edge("B", "C", 2.0);
        let dist = BellmanFord::new("A").run(&g).unwrap();
        assert_eq!(dist[&"A"], 0.0);
        assert_eq!(dist[&"B"], -3.0);
        assert_eq!(dist[&"C"], -1.0);
    }

    #[test]
    fn test_bellman_ford_checked_detects_negative_cycle() {
        let mut g = Graph::new();
        g.add_edge(1, 2, 1.0);
        g.add_edge(2, 3, -1.0);
        g.add_edge(3, 1, -1.0);
        // the unchecked run still returns a map
        assert!(BellmanFord::new(1)
            .with_relaxation(Relaxation::Stored)
            .run(&g)
            .is_ok());
        let checked = BellmanFord::new(1)
            .with_relaxation(Relaxation::Stored)
            .checked()
            .run(&g);
        assert!(matches!(checked, Err(WGraphError::NegativeCycle)));
    }

    #[test]
    fn test_bellman_ford_checked_passes_without_cycle() {
        let dist = BellmanFord::new("A").checked().run(&triangle()).unwrap();
        assert_eq!(dist[&"C"], 3.0);
    }

    #[test]
    fn test_dijkstra_triangle() {
        let paths = Dijkstra::new("A").run(&triangle()).unwrap();
        assert_eq!(paths.distances[&"A"], 0.0);
        assert_eq!(paths.distances[&"B"], 1.0);
        assert_eq!(paths.distances[&"C"], 3.0);
        assert_eq!(paths.predecessors[&"A"], None);
        assert_eq!(paths.predecessors[&"B"], Some("A"));
        assert_eq!(paths.predecessors[&"C"], Some("B"));
        assert_eq!(paths.path_to(&"C"), Some(vec!["A", "B", "C"]));
    }

    #[test]
    fn test_dijkstra_terminates_on_negative_edge() {
        let mut g = Graph::new();
        g.add_edge("A", "B", -1.0);
        let paths = Dijkstra::new("A").run(&g).unwrap();
        assert_eq!(paths.distances[&"B"], -1.0);
    }

    #[test]
    fn test_unknown_source() {
        let g = triangle();
        assert!(matches!(
            BellmanFord::new("Z").run(&g),
            Err(WGraphError::UnknownVertex(_))
        ));
        assert!(matches!(
            Dijkstra::new("Z").run(&g),
            Err(WGraphError::UnknownVertex(_))
        ));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let mut g = triangle();
        g.add_edge("C", "D", f64::NAN);
        assert!(matches!(
            Dijkstra::new("A").run(&g),
            Err(WGraphError::InvalidWeight(_))
        ));
    }
}
