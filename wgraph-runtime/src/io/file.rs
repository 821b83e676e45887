use std::path::Path;

use wgraph_api::graph::Graph;
use wgraph_common::error::{WGraphError, WGraphResult};
use wgraph_common::types::Edge;

/// Reads `u,v,weight` rows; a missing weight defaults to `1.0`.
pub fn read_edges(path: impl AsRef<Path>) -> WGraphResult<Vec<Edge<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)
        .map_err(|e| WGraphError::Io(e.into()))?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| WGraphError::Internal(format!("csv read: {e}")))?;
        let line = rec.position().map_or(0, |p| p.line());
        let u = rec
            .get(0)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| WGraphError::InvalidArgument(format!("line {line}: edge u missing")))?;
        let v = rec
            .get(1)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| WGraphError::InvalidArgument(format!("line {line}: edge v missing")))?;
        let weight: f64 = rec
            .get(2)
            .map(str::parse)
            .transpose()
            .map_err(|e| WGraphError::InvalidArgument(format!("line {line}: weight parse: {e}")))?
            .unwrap_or(1.0);
        if weight.is_nan() {
            return Err(WGraphError::InvalidWeight(format!("line {line}: NaN weight")));
        }
        out.push(Edge::new(u.to_string(), v.to_string(), weight));
    }
    Ok(out)
}

/// Graph of every edge in `path` plus `isolated` vertices.
pub fn load_graph(
    path: impl AsRef<Path>,
    isolated: impl IntoIterator<Item = String>,
) -> WGraphResult<Graph<String>> {
    let mut graph = Graph::from_edges(read_edges(path)?);
    for v in isolated {
        graph.add_vertex(v);
    }
    Ok(graph)
}
