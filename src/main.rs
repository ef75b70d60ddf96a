//! Command-line driver for the Arbora engine.
//!
//! Loads an edge list (or generates a random graph), then sweeps worker
//! counts from 1 up to the requested maximum, timing each run:
//!
//! ```text
//! arbora 8 100000 1000000 --iters 3
//! arbora 4 0 0 --file data/bio-DM-LC.edges
//! ```

use anyhow::Context;
use arbora::core::generators::random_graph;
use arbora::core::io::read_edge_list;
use arbora::core::types::Graph;
use arbora::engine::BoruvkaEngine;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "arbora", version, about = "Parallel Borůvka minimum spanning tree engine")]
struct Cli {
    /// Maximum worker count; runs are repeated for every count in 1..=WORKERS
    workers: usize,

    /// Vertex count for the synthetic generator (ignored with --file)
    vertices: u32,

    /// Undirected edge count for the synthetic generator (ignored with --file)
    edges: usize,

    /// Load this edge-list file instead of generating a graph
    #[arg(long)]
    file: Option<PathBuf>,

    /// Number of timed repetitions per worker count
    #[arg(long, default_value_t = 1)]
    iters: usize,

    /// Seed for the synthetic generator
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let started = Instant::now();
    let graph: Graph = match &cli.file {
        Some(path) => read_edge_list(path)
            .with_context(|| format!("failed to load edge list from {}", path.display()))?,
        None => random_graph(cli.vertices, cli.edges, cli.seed)
            .context("failed to generate random graph")?,
    };
    println!("read time: {} usec", started.elapsed().as_micros());
    println!(
        "graph: {} vertices, {} undirected edges",
        graph.vertex_count(),
        graph.edge_count() / 2
    );

    for workers in 1..=cli.workers {
        let engine = BoruvkaEngine::new(workers)?;
        for _ in 0..cli.iters {
            let started = Instant::now();
            let forest = engine.run(graph.clone())?;
            println!(
                "workers={}; iters={}; time={} usec",
                workers,
                forest.rounds(),
                started.elapsed().as_micros()
            );
            println!(
                "mst weight: {:.3}; components: {}",
                forest.total_weight(),
                forest.component_count()
            );
        }
    }

    Ok(())
}
