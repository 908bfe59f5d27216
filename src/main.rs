use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use graphpath::api::{self, graph_file, PathAlgorithm};
use graphpath::config::{Config, OutputConfig, OutputFormat};
use graphpath::utils::logging;
use graphpath::{SingleSourceAlgorithm, WeightedGraph};

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphPath Contributors")]
struct Cli {
    /// Configuration file, defaults are used when it does not exist
    #[clap(short, long, global = true, default_value = "config.toml")]
    config: String,
    /// Output format, overrides the configured one
    #[clap(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Single-source shortest paths, non-negative weights only
    Dijkstra {
        #[clap(short, long)]
        graph: PathBuf,
        #[clap(short, long, default_value_t = 0)]
        source: usize,
    },
    /// Single-source shortest paths with negative cycle detection
    BellmanFord {
        #[clap(short, long)]
        graph: PathBuf,
        #[clap(short, long, default_value_t = 0)]
        source: usize,
    },
    /// All-pairs shortest paths
    FloydWarshall {
        #[clap(short, long)]
        graph: PathBuf,
    },
    /// Shortest path between two vertices
    Path {
        #[clap(short, long)]
        graph: PathBuf,
        #[clap(short, long)]
        source: usize,
        #[clap(short, long)]
        target: usize,
        #[clap(short, long, value_enum, default_value = "bellman-ford")]
        algorithm: PathAlgorithm,
    },
    /// Run the algorithms on the built-in sample graphs
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from '{}'", cli.config))?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    logging::init(&config.log).context("Failed to initialize logger")?;

    let result = rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_worker_threads())
        .build_global()
        .context("Failed to build worker thread pool")
        .and_then(|_| run(&cli.command, &config.output));

    // flush异步日志后再退出
    logging::shutdown();

    print!("{}", result?);
    Ok(())
}

fn run(command: &Command, output: &OutputConfig) -> Result<String> {
    match command {
        Command::Dijkstra { graph, source } => api::run_single_source(
            &load(graph)?,
            *source,
            SingleSourceAlgorithm::Dijkstra,
            output,
        ),
        Command::BellmanFord { graph, source } => api::run_single_source(
            &load(graph)?,
            *source,
            SingleSourceAlgorithm::BellmanFord,
            output,
        ),
        Command::FloydWarshall { graph } => api::run_all_pairs(&load(graph)?, output),
        Command::Path {
            graph,
            source,
            target,
            algorithm,
        } => api::run_path(&load(graph)?, *source, *target, *algorithm, output),
        Command::Demo => api::demo::render(output),
    }
}

fn load(path: &Path) -> Result<WeightedGraph> {
    graph_file::load_graph(path)
        .with_context(|| format!("Failed to load graph from '{}'", path.display()))
}
