//! Command line entry: build a random sparse graph and search it.

use bee_path::graph::{Graph, RandomGraphParams};
use bee_path::utils::{format_duration, print_result, RunReport, SearchStatistics};
use bee_path::{BeeAlgorithm, Config};
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Find a short route through a random sparse graph with a bee colony search.
#[derive(Parser, Debug)]
#[command(name = "bee-path", version, about)]
struct Cli {
    /// Number of nodes in the generated graph
    #[arg(short, long, default_value_t = 300)]
    nodes: usize,

    /// Start node
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// End node (defaults to the last node)
    #[arg(long)]
    end: Option<usize>,

    /// Scout routes per iteration
    #[arg(long, default_value_t = 10)]
    colony_size: usize,

    /// Mutation attempts per scout route
    #[arg(long, default_value_t = 45)]
    forage_intensity: usize,

    /// Stop after this many iterations without improvement
    #[arg(long, default_value_t = 100)]
    stagnation_threshold: u32,

    /// Hard cap on iterations
    #[arg(long)]
    max_iterations: Option<u32>,

    /// Time limit in seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// Seed for the search
    #[arg(long)]
    seed: Option<u64>,

    /// Seed for the generated graph
    #[arg(long)]
    graph_seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let graph_seed = cli.graph_seed.unwrap_or_else(rand::random);
    let mut graph_rng = ChaCha8Rng::seed_from_u64(graph_seed);
    let graph = Graph::random(cli.nodes, &RandomGraphParams::default(), &mut graph_rng)?;
    info!(
        "Generated graph with {} nodes and {} edges (graph seed {})",
        graph.node_count(),
        graph.edge_count(),
        graph_seed
    );

    let mut config = Config::new()
        .with_colony_size(cli.colony_size)
        .with_forage_intensity(cli.forage_intensity)
        .with_stagnation_threshold(cli.stagnation_threshold);
    if let Some(max) = cli.max_iterations {
        config = config.with_max_iterations(max);
    }
    if let Some(secs) = cli.time_limit {
        config = config.with_time_limit(Duration::from_secs(secs));
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let start = cli.start;
    let end = cli.end.unwrap_or_else(|| cli.nodes.saturating_sub(1));

    let mut algorithm = BeeAlgorithm::new(graph, config);
    algorithm.run(start, end)?;
    info!("Search completed in {}", format_duration(algorithm.run_time));

    if cli.json {
        let report = RunReport::new(&algorithm, start, end);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_result(&algorithm.best);
        println!("{}", SearchStatistics::from_algorithm(&algorithm).format());
    }

    Ok(())
}
