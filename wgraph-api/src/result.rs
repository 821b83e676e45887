use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use wgraph_common::types::{Edge, VertexKey};

/// Vertex to distance from the query source. Unreached vertices hold
/// `f64::INFINITY`.
pub type DistanceMap<K> = BTreeMap<K, f64>;

/// Vertex to the vertex it was last improved from. `None` for the source and
/// for unreached vertices.
pub type PredecessorMap<K> = BTreeMap<K, Option<K>>;

/// Vertices of an independent set.
pub type StableSet<K> = BTreeSet<K>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths<K: Ord> {
    pub distances: DistanceMap<K>,
    pub predecessors: PredecessorMap<K>,
}

impl<K: VertexKey> ShortestPaths<K> {
    pub fn distance(&self, vertex: &K) -> Option<f64> {
        self.distances.get(vertex).copied()
    }

    /// Vertices on the recorded shortest path from the source to `target`,
    /// both ends included. `None` if `target` is unknown or unreached.
    pub fn path_to(&self, target: &K) -> Option<Vec<K>> {
        if !self.distance(target)?.is_finite() {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(Some(prev)) = self.predecessors.get(current) {
            // a predecessor chain longer than the vertex count is a cycle
            if path.len() > self.predecessors.len() {
                return None;
            }
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Edges accepted by a spanning-tree solver, in acceptance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree<K> {
    pub edges: Vec<Edge<K>>,
}

impl<K> Default for SpanningTree<K> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<K> SpanningTree<K> {
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<K> From<Vec<Edge<K>>> for SpanningTree<K> {
    fn from(edges: Vec<Edge<K>>) -> Self {
        Self { edges }
    }
}

impl<K> IntoIterator for SpanningTree<K> {
    type Item = Edge<K>;
    type IntoIter = std::vec::IntoIter<Edge<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}
