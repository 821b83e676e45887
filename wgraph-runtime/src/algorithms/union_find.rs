use std::collections::HashMap;

use wgraph_common::types::VertexKey;

#[derive(Debug, Clone)]
pub struct DisjointSet<K> {
    /// parent[v] == v for roots.
    parent: HashMap<K, K>,
}

impl<K: VertexKey> DisjointSet<K> {
    /// One singleton partition per vertex.
    pub fn new<'a, I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        Self {
            parent: vertices.into_iter().map(|v| (v.clone(), v.clone())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the partition holding `vertex`. A vertex the set has not seen
    /// becomes its own singleton partition.
    pub fn find(&mut self, vertex: &K) -> K {
        let mut root = vertex.clone();
        loop {
            match self.parent.get(&root) {
                Some(parent) if *parent != root => root = parent.clone(),
                Some(_) => break,
                None => {
                    self.parent.insert(root.clone(), root.clone());
                    return root;
                }
            }
        }

        let mut node = vertex.clone();
        while node != root {
            match self.parent.insert(node, root.clone()) {
                Some(next) => node = next,
                None => break,
            }
        }

        root
    }

    /// Makes `root_v` the parent of `root_u`. Both must be roots returned by
    /// [`DisjointSet::find`].
    pub fn union(&mut self, root_u: K, root_v: K) {
        self.parent.insert(root_u, root_v);
    }

    pub fn component_count(&self) -> usize {
        self.parent.iter().filter(|(v, p)| v == p).count()
    }
}
