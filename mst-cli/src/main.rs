use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use mst::config::GraphConfig;
use mst::Algorithm;

mod output;

/// Minimum spanning tree CLI — Kruskal's and Prim's algorithms on the
/// built-in 8-vertex reference graph (vertices A..H)
#[derive(Parser)]
#[command(name = "mst", version)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Suppress progress output on stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log algorithm steps (repeat for more detail; RUST_LOG overrides)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the vertices and edges of the graph
    Edges,
    /// Compute a minimum spanning tree
    Compute {
        /// Algorithms to run, in order (comma-separated: kruskal, prim)
        #[arg(short, long, value_delimiter = ',', default_values = ["kruskal", "prim"])]
        algorithm: Vec<String>,
        /// Start vertex for Prim (label or index). Defaults to the first vertex.
        /// Ignored when Prim is not selected
        #[arg(short, long)]
        start: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Resolve a start vertex given as a label, falling back to a numeric index.
fn resolve_start(config: &GraphConfig, start: &str) -> Result<usize> {
    if let Ok(index) = config.index_of(start) {
        return Ok(index);
    }
    start
        .parse::<usize>()
        .ok()
        .with_context(|| format!("unknown start vertex: {start}"))
}

/// Parse algorithm names and bind Prim's start vertex.
///
/// The start vertex is only resolved when Prim is among the algorithms.
fn plan(
    config: &GraphConfig,
    names: &[String],
    start: Option<&str>,
) -> Result<Vec<Algorithm>> {
    let parsed = names
        .iter()
        .map(|name| name.parse::<Algorithm>())
        .collect::<Result<Vec<_>, _>>()?;

    let needs_start = parsed.iter().any(|a| matches!(a, Algorithm::Prim { .. }));
    let start = match start {
        Some(s) if needs_start => resolve_start(config, s)?,
        _ => 0,
    };

    Ok(parsed
        .into_iter()
        .map(|a| match a {
            Algorithm::Prim { .. } => Algorithm::Prim { start },
            other => other,
        })
        .collect())
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GraphConfig::reference();
    let graph = config.build().context("building graph")?;
    info!(
        "loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    match cli.command {
        Command::Edges => {
            let listing = output::output_graph(&config);
            match cli.format {
                Format::Text => print!("{}", output::graph_text(&listing)),
                Format::Json => print_json(&listing, cli.pretty)?,
            }
        }
        Command::Compute { algorithm, start } => {
            let algorithms = plan(&config, &algorithm, start.as_deref())?;

            let mut trees = Vec::with_capacity(algorithms.len());
            for algorithm in algorithms {
                if !cli.quiet {
                    eprintln!(
                        "computing {} on {} vertices",
                        algorithm,
                        graph.vertex_count()
                    );
                }
                let result = algorithm
                    .run(&graph)
                    .with_context(|| format!("running {}", algorithm.name()))?;
                trees.push(output::output_tree(&config, algorithm, &result));
            }

            match cli.format {
                Format::Text => {
                    let text: Vec<String> = trees.iter().map(output::tree_text).collect();
                    print!("{}", text.join("\n"));
                }
                Format::Json => print_json(&trees, cli.pretty)?,
            }
        }
    }

    Ok(())
}
