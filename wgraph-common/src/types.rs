use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Bounds every vertex identifier must satisfy.
///
/// `Ord` keeps vertex iteration and heap tie-breaking deterministic.
pub trait VertexKey: Clone + Eq + Hash + Ord + Debug {}
impl<T> VertexKey for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Undirected weighted edge. `u` and `v` keep the order they were added in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge<K> {
    pub u: K,
    pub v: K,
    pub weight: f64,
}

impl<K> Edge<K> {
    pub fn new(u: K, v: K, weight: f64) -> Self {
        Self { u, v, weight }
    }

    pub fn is_self_loop(&self) -> bool
    where
        K: PartialEq,
    {
        self.u == self.v
    }

    /// Endpoint opposite to `vertex`, or `None` if the edge does not touch it.
    pub fn other(&self, vertex: &K) -> Option<&K>
    where
        K: PartialEq,
    {
        if &self.u == vertex {
            Some(&self.v)
        } else if &self.v == vertex {
            Some(&self.u)
        } else {
            None
        }
    }
}

impl<K> From<(K, K, f64)> for Edge<K> {
    fn from((u, v, weight): (K, K, f64)) -> Self {
        Edge::new(u, v, weight)
    }
}
