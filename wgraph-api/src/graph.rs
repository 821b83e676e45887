use std::collections::{BTreeSet, HashMap};

use wgraph_common::error::{WGraphError, WGraphResult};
use wgraph_common::types::{Edge, VertexKey};

/// Precomputed neighbor lists, one entry per vertex.
pub type Adjacency<K> = HashMap<K, Vec<(K, f64)>>;

/// Undirected weighted graph snapshot.
///
/// Every endpoint of a stored edge is also a member of the vertex set.
/// Parallel edges and self-loops are kept as inserted.
#[derive(Debug, Clone)]
pub struct Graph<K> {
    vertices: BTreeSet<K>,
    edges: Vec<Edge<K>>,
}

impl<K: VertexKey> Default for Graph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey> Graph<K> {
    pub fn new() -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: Vec::new(),
        }
    }

    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<K>>,
    {
        let mut graph = Self::new();
        for e in edges {
            let e = e.into();
            graph.add_edge(e.u, e.v, e.weight);
        }
        graph
    }

    /// Registers both endpoints and appends the edge.
    pub fn add_edge(&mut self, u: K, v: K, weight: f64) {
        self.vertices.insert(u.clone());
        self.vertices.insert(v.clone());
        self.edges.push(Edge::new(u, v, weight));
    }

    /// Registers a vertex that may have no edges.
    pub fn add_vertex(&mut self, vertex: K) {
        self.vertices.insert(vertex);
    }

    pub fn contains_vertex(&self, vertex: &K) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.iter()
    }

    pub fn edges(&self) -> &[Edge<K>] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Other endpoint and weight of every edge touching `vertex`, in edge
    /// insertion order. A self-loop yields `(vertex, weight)` once.
    ///
    /// This scans the whole edge list; use [`Graph::adjacency`] when many
    /// lookups are needed.
    pub fn neighbors(&self, vertex: &K) -> Vec<(K, f64)> {
        self.edges
            .iter()
            .filter_map(|e| e.other(vertex).map(|o| (o.clone(), e.weight)))
            .collect()
    }

    pub fn degree(&self, vertex: &K) -> usize {
        self.edges.iter().filter(|e| e.other(vertex).is_some()).count()
    }

    /// Neighbor lists for all vertices in one pass. Each list has the same
    /// order as [`Graph::neighbors`] would return; isolated vertices map to an
    /// empty list.
    pub fn adjacency(&self) -> Adjacency<K> {
        let mut adjacency: Adjacency<K> = self
            .vertices
            .iter()
            .map(|v| (v.clone(), Vec::new()))
            .collect();
        for e in &self.edges {
            adjacency
                .entry(e.u.clone())
                .or_default()
                .push((e.v.clone(), e.weight));
            if !e.is_self_loop() {
                adjacency
                    .entry(e.v.clone())
                    .or_default()
                    .push((e.u.clone(), e.weight));
            }
        }
        adjacency
    }

    pub fn has_negative_weight(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0.0)
    }

    pub fn ensure_vertex(&self, vertex: &K) -> WGraphResult<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(WGraphError::unknown_vertex(vertex))
        }
    }

    /// Rejects NaN weights. Infinite weights are accepted.
    pub fn validate_weights(&self) -> WGraphResult<()> {
        match self.edges.iter().find(|e| e.weight.is_nan()) {
            Some(e) => Err(WGraphError::InvalidWeight(format!(
                "edge ({:?}, {:?}) has a NaN weight",
                e.u, e.v
            ))),
            None => Ok(()),
        }
    }
}
