//! Point-and-click side of the engine boundary.
//!
//! A front end places nodes at positions and links them; [`Sketch::snapshot`]
//! turns the drawing into a [`Graph`] keyed by [`NodeHandle`], with each edge
//! weighted by the Euclidean distance between its endpoints. The graph never
//! sees positions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::graph::Graph;
use wgraph_common::error::{WGraphError, WGraphResult};

/// Identifier a front end hands out for a placed node. Numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct NodeHandle(pub u32);

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sketch {
    nodes: BTreeMap<NodeHandle, Position>,
    links: Vec<(NodeHandle, NodeHandle)>,
    last_handle: u32,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, x: f64, y: f64) -> NodeHandle {
        self.last_handle += 1;
        let handle = NodeHandle(self.last_handle);
        self.nodes.insert(handle, Position { x, y });
        handle
    }

    /// Links two placed nodes. `a == b` draws a self-loop.
    pub fn connect(&mut self, a: NodeHandle, b: NodeHandle) -> WGraphResult<()> {
        for h in [a, b] {
            if !self.nodes.contains_key(&h) {
                return Err(WGraphError::UnknownVertex(h.to_string()));
            }
        }
        self.links.push((a, b));
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Frozen graph of the current drawing.
    pub fn snapshot(&self) -> Graph<NodeHandle> {
        let mut graph = Graph::new();
        for handle in self.nodes.keys() {
            graph.add_vertex(*handle);
        }
        for &(a, b) in &self.links {
            let weight = self.nodes[&a].distance(&self.nodes[&b]);
            graph.add_edge(a, b, weight);
        }
        graph
    }
}
