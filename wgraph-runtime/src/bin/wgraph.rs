use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use wgraph_common::config::{keys, Configuration};
use wgraph_common::error::WGraphError;
use wgraph_runtime::algorithms::shortest_path::Dijkstra;
use wgraph_runtime::algorithms::spanning_tree::Kruskal;
use wgraph_runtime::algorithms::stable_set::WelchPowell;
use wgraph_runtime::env::QueryEnvironment;
use wgraph_runtime::io::file::load_graph;
use wgraph_runtime::observability::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "wgraph", about = "Query a weighted undirected graph")]
struct Args {
    /// CSV edge list, one `u,v,weight` row per edge.
    #[arg(long)]
    edges: PathBuf,

    /// Extra vertex with no edges. Repeatable.
    #[arg(long = "vertex")]
    vertices: Vec<String>,

    /// Engine option as `key=value`. Repeatable.
    #[arg(long = "set", value_parser = parse_key_value)]
    settings: Vec<(String, String)>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    BellmanFord {
        #[arg(long)]
        source: String,
        /// Fail when a negative cycle is still relaxable.
        #[arg(long)]
        checked: bool,
    },
    Dijkstra {
        #[arg(long)]
        source: String,
        /// Print only the path to this vertex.
        #[arg(long)]
        target: Option<String>,
    },
    Kruskal,
    Prim {
        /// Span every component instead of only the first one.
        #[arg(long)]
        forest: bool,
    },
    MaxSpanningTree,
    StableSet,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {s:?}"))?;
    Ok((k.trim().to_string(), v.trim().to_string()))
}

fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = Configuration::new();
    for (k, v) in args.settings {
        config.put(k, v);
    }
    if let Command::Prim { forest: true } = args.cmd {
        config.put(keys::PRIM_COVERAGE, "forest");
    }
    let env = QueryEnvironment::new(config);

    let graph = load_graph(&args.edges, args.vertices)?;
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    match args.cmd {
        Command::BellmanFord { source, checked } => {
            let mut query = env.bellman_ford(source)?;
            query.detect_negative_cycles = checked;
            print(&env.run(&query, &graph)?)
        }
        Command::Dijkstra { source, target } => {
            let paths = env.run(&Dijkstra::new(source), &graph)?;
            match target {
                Some(target) => {
                    let distance = paths
                        .distance(&target)
                        .ok_or_else(|| WGraphError::unknown_vertex(&target))?;
                    print(&json!({
                        "target": target,
                        "distance": distance,
                        "path": paths.path_to(&target),
                    }))
                }
                None => print(&paths),
            }
        }
        Command::Kruskal => print(&env.run(&Kruskal::minimum(), &graph)?),
        Command::Prim { .. } => print(&env.run(&env.prim()?, &graph)?),
        Command::MaxSpanningTree => print(&env.run(&Kruskal::maximum(), &graph)?),
        Command::StableSet => print(&env.run(&WelchPowell, &graph)?),
    }
}
