//! # warehouse-route CLI
//!
//! Plans a nearest-neighbor picking route from a JSON request file (or the
//! built-in six-point warehouse sample) and prints it as text, JSON or
//! Graphviz DOT.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, error, info};
use warehouse_route::constructive::nearest_neighbor;
use warehouse_route::plan::{RoutePlan, RouteRequest};
use warehouse_route::render::{render_dot, render_text};

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Route and total distance, one per line
    Text,
    /// The full plan as JSON
    Json,
    /// Graphviz drawing with the route highlighted
    Dot,
}

/// Command-line interface for warehouse-route
#[derive(Parser)]
#[command(name = "warehouse-route")]
#[command(about = "Nearest-neighbor picking routes over a warehouse distance matrix")]
#[command(long_about = "Plans a round trip through every picking location:
  warehouse-route                          # Built-in A-F sample, start at A
  warehouse-route --input layout.json      # Request file: locations, distances, start
  warehouse-route --start D --format dot   # Graphviz output starting from D")]
#[command(version)]
struct Cli {
    /// JSON request file with `locations`, `distances` and `start`
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Start location, overriding the request's `start`
    #[arg(short, long)]
    start: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reject matrices that are not symmetric within this tolerance
    #[arg(long)]
    symmetry_tolerance: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn load_request(cli: &Cli) -> Result<RouteRequest> {
    let mut request = match &cli.input {
        Some(path) => {
            info!("reading request from {}", path.display());
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => {
            info!("no input given, using the built-in warehouse sample");
            RouteRequest::warehouse_sample()
        }
    };
    if let Some(start) = &cli.start {
        request.start = start.clone();
    }
    if cli.symmetry_tolerance.is_some() {
        request.symmetry_tolerance = cli.symmetry_tolerance;
    }
    Ok(request)
}

fn run(cli: Cli) -> Result<()> {
    let request = load_request(&cli)?;
    let graph = request.build_graph().context("invalid distance data")?;
    debug!("built graph with {} locations", graph.len());

    let tour = nearest_neighbor(&graph, &request.start).context("route construction failed")?;
    let plan = RoutePlan::from_tour(&graph, &tour)?;
    info!(
        "tour of {} stops from {}, total distance {:.2}",
        tour.len(),
        tour.start(),
        plan.total_distance
    );

    let output = match cli.format {
        OutputFormat::Text => render_text(&plan),
        OutputFormat::Json => serde_json::to_string_pretty(&plan)? + "\n",
        OutputFormat::Dot => render_dot(&graph, &plan),
    };
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "warehouse-route",
            "--start",
            "D",
            "--symmetry-tolerance",
            "0.001",
            "--format",
            "dot",
        ]);
        assert_eq!(cli.format, OutputFormat::Dot);
        let req = load_request(&cli).expect("sample request");
        assert_eq!(req.start, "D");
        assert_eq!(req.symmetry_tolerance, Some(0.001));
    }

    #[test]
    fn test_missing_input_file() {
        let cli = Cli::parse_from(["warehouse-route", "--input", "/nonexistent/layout.json"]);
        let err = load_request(&cli).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
