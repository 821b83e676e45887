pub mod algorithms;
pub mod env;
pub mod io;
pub mod observability;

pub use algorithms::{
    bellman_ford, bellman_ford_checked, dijkstra, maximum_spanning_tree,
    minimum_spanning_tree_kruskal, minimum_spanning_tree_prim, new_graph, stable_set,
};
pub use wgraph_api::graph::Graph;
