pub mod adjacency_reader;
pub mod cli;
pub mod config;
pub mod csv_reader;
pub mod error;
pub mod report;
pub mod searcher;
pub mod types;

use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use adjacency_reader::AdjacencyReader;
use cli::Cli;
use common::types::{NO_CYCLE, WeightedCycle};
use csv_reader::CsvEdgeReader;
use error::Error;
use searcher::CycleSearcher;
use shortest_cycle_core::{CycleFinder, DenseDijkstra};
use types::{EdgeSource, InputFormat, SharedGraph};

/// What the search produced, ready for printing.
#[derive(Debug)]
pub struct Outcome {
    /// Cycle length, or 0 when the graph has no cycle.
    pub length: f64,
    /// Only filled in when the path was requested and a cycle exists.
    pub cycle: Option<WeightedCycle>,
}

#[tokio::main]
async fn main() {
    let start_time = Instant::now();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli, start_time).await {
        tracing::error!(error = %e, "Shortest cycle search failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, start_time: Instant) -> Result<(), Error> {
    let mut config = config::load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);

    let outcome = execute(&config, &cli.input, cli.input_format()).await?;

    println!("{}", report::summary_line(outcome.length));
    if let Some(cycle) = &outcome.cycle {
        println!("{}", report::path_line(cycle));
    }
    if config.output.show_elapsed {
        println!("{}", report::elapsed_line(start_time.elapsed()));
    }

    Ok(())
}

/// Reads the input, builds the graph and searches it.
pub async fn execute(
    config: &config::Config,
    input: &Path,
    format: InputFormat,
) -> Result<Outcome, Error> {
    let parsed = edge_source(input, format).read_graph()?;
    parsed.check_limit(config.input.max_vertices)?;

    let graph: SharedGraph = Arc::new(parsed.into_graph());
    tracing::info!(
        vertices = graph.num_nodes(),
        edges = graph.edge_count(),
        "Graph built"
    );

    let searcher = CycleSearcher::new(
        DenseDijkstra,
        config.searcher.worker_count(),
        config.searcher.deadline(),
    );
    let best = searcher.search(graph.clone()).await?;

    let cycle = match best {
        Some(candidate) if config.output.show_path => {
            Some(CycleFinder::new(DenseDijkstra).reconstruct(&graph, &candidate)?)
        }
        _ => None,
    };

    Ok(Outcome {
        length: best.map_or(NO_CYCLE, |candidate| candidate.length),
        cycle,
    })
}

fn edge_source(path: &Path, format: InputFormat) -> Box<dyn EdgeSource> {
    match format {
        InputFormat::Adjacency => Box::new(AdjacencyReader::new(path)),
        InputFormat::Csv => Box::new(CsvEdgeReader::new(path)),
    }
}

/// Command-line flags win over the configuration file and environment.
fn apply_overrides(config: &mut config::Config, cli: &Cli) {
    if let Some(workers) = cli.workers {
        config.searcher.workers = workers;
    }
    if let Some(deadline_ms) = cli.deadline_ms {
        config.searcher.deadline_ms = deadline_ms;
    }
    if cli.show_path {
        config.output.show_path = true;
    }
}

/// Logs go to stderr so stdout carries only the result.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging disabled: {}", e);
    }
}
