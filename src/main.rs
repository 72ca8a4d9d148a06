//! # routeplan
//!
//! Loads a road map and prints the shortest route between two nodes.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use routeplan::{load_graph, Graph, PathOutcome, ShortestPathFinder};


/// Shortest route between two nodes of a road map.
///
/// Map files hold one node per line: `Name(x,y), neighbor1, neighbor2, ...`
#[derive(Parser, Debug)]
#[command(name = "routeplan", version, about)]
struct Cli {
    /// Map file to load
    map: PathBuf,

    /// Start node
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// End node
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// List nodes and the bounding box of the map
    #[arg(long)]
    list: bool,

    /// Print the order nodes were visited in
    #[arg(long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let report = load_graph(&cli.map)
        .with_context(|| format!("cannot load map {}", cli.map.display()))?;
    let mut graph = report.graph;

    if graph.is_empty() {
        bail!("map {} contains no valid nodes", cli.map.display());
    }
    if !report.diagnostics.is_empty() {
        eprintln!("{} line(s) skipped while loading", report.diagnostics.len());
    }

    if cli.list {
        print_nodes(&graph);
    }

    if let (Some(start), Some(end)) = (cli.from.as_deref(), cli.to.as_deref()) {
        let result = ShortestPathFinder::new().compute_shortest_path(&mut graph, start, end);

        if cli.trace {
            println!("Visited:");
            for name in result.visited_names(&graph) {
                println!("  {name}");
            }
        }

        match result.outcome {
            PathOutcome::SameNode => println!("Start and end are identical: {start}"),
            PathOutcome::StartNotFound => println!("Start node {start} not found"),
            PathOutcome::NoPath => println!("No route found from {start} to {end}"),
            PathOutcome::Found { distance } => {
                println!("Route: {}", result.optimal_path.join(" -> "));
                println!("Distance: {distance:.2}");
            }
        }
    }

    Ok(())
}

fn print_nodes(graph: &Graph) {
    for node in graph.nodes() {
        println!("{}({},{}) -> {} neighbor(s)", node.name(), node.x(), node.y(), node.neighbors().len());
    }
    if let Some(bounds) = graph.bounds() {
        println!(
            "Bounds: x {}..{}, y {}..{} ({} x {})",
            bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y,
            bounds.width(), bounds.height()
        );
    }
}
