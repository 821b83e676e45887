use std::time::Instant;

use tracing::{debug, info_span, warn};
use wgraph_api::graph::Graph;
use wgraph_api::query::GraphQuery;
use wgraph_common::config::{keys, Configuration};
use wgraph_common::error::WGraphResult;
use wgraph_common::types::VertexKey;

use crate::algorithms::shortest_path::{BellmanFord, Relaxation};
use crate::algorithms::spanning_tree::{Prim, SpanCoverage};

/// Solver options read from a [`Configuration`].
#[derive(Debug, Clone, Default)]
pub struct QueryEnvironment {
    pub config: Configuration,
}

impl QueryEnvironment {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    pub fn relaxation(&self) -> WGraphResult<Relaxation> {
        self.config
            .get_string(keys::BELLMAN_FORD_RELAXATION, "symmetric")
            .parse()
    }

    pub fn prim_coverage(&self) -> WGraphResult<SpanCoverage> {
        self.config
            .get_string(keys::PRIM_COVERAGE, "component")
            .parse()
    }

    pub fn bellman_ford<K: VertexKey>(&self, source: K) -> WGraphResult<BellmanFord<K>> {
        Ok(BellmanFord::new(source).with_relaxation(self.relaxation()?))
    }

    pub fn prim(&self) -> WGraphResult<Prim> {
        Ok(Prim::new(self.prim_coverage()?))
    }

    /// Runs `query` inside a `query` span and logs how long it took.
    pub fn run<K, Q>(&self, query: &Q, graph: &Graph<K>) -> WGraphResult<Q::Output>
    where
        K: VertexKey,
        Q: GraphQuery<K>,
    {
        let span = info_span!(
            "query",
            query = query.name(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count()
        );
        let _guard = span.enter();

        let started = Instant::now();
        let result = query.run(graph);
        match &result {
            Ok(_) => debug!(
                elapsed_us = started.elapsed().as_micros() as u64,
                "query finished"
            ),
            Err(e) => warn!(error = %e, "query failed"),
        }
        result
    }
}
