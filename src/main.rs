use anyhow::{Context, Result, bail};
use clap::Parser;
use kcluster::{
    ClusterAggregate, Outcome, Point, Solver, SolverConfig, StrategyKind, blob_points,
    parse_points, parse_seeds, uniform_points,
};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Converge k-means clusters from a seed file over a fixed point set
#[derive(Parser, Debug)]
#[command(name = "kcluster", version, about)]
struct Cli {
    /// JSON object mapping cluster id to initial centroid
    #[arg(long)]
    seeds: PathBuf,

    /// JSON array of points; generated from --seed when absent
    #[arg(long)]
    points: Option<PathBuf>,

    /// Number of points to generate
    #[arg(long, default_value_t = 100_000)]
    count: usize,

    /// Random stream seed for point generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Lower bound of the uniform sampling box
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    low: f64,

    /// Upper bound of the uniform sampling box
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    high: f64,

    /// Scatter points around the seed centroids within this radius instead
    #[arg(long)]
    radius: Option<f64>,

    /// JSON solver configuration
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// Number of point chunks for the chunked strategies
    #[arg(long)]
    mappers: Option<usize>,

    #[arg(long)]
    max_iterations: Option<usize>,

    /// Worker threads for the chunked strategies
    #[arg(long)]
    threads: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RunReport<'a> {
    strategy: &'a str,
    mappers: usize,
    points: usize,
    elapsed_ms: f64,
    outcome: &'a Outcome,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let seeds_json = fs::read_to_string(&cli.seeds)
        .with_context(|| format!("Failed to read seed file {}", cli.seeds.display()))?;
    let seeds = parse_seeds(&seeds_json).context("Failed to parse seed file")?;

    let points = load_points(&cli, &seeds)?;

    let solver = Solver::new(config.clone()).context("Failed to build solver")?;
    let point_count = points.len();

    let start = Instant::now();
    let outcome = solver.run(seeds, points).context("Clustering failed")?;
    let elapsed = start.elapsed();

    if cli.json {
        let report = RunReport {
            strategy: solver.strategy_name(),
            mappers: config.mappers,
            points: point_count,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            outcome: &outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== kcluster ===\n");
    println!("Strategy:             {}", solver.strategy_name());
    println!("Mappers:              {}", config.mappers);
    println!("Points:               {}", point_count);
    println!(
        "Result:               {} after {} iterations",
        if outcome.converged() { "converged" } else { "gave up" },
        outcome.iterations
    );
    println!("Clusters:             {}", outcome.clusters.len());
    println!("Elapsed:              {:.3}s\n", elapsed.as_secs_f64());

    for cluster in &outcome.clusters {
        println!(
            "  Cluster {}: {} points, centroid {:?}",
            cluster.id,
            cluster.count,
            cluster.centroid.coords()
        );
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<SolverConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            SolverConfig::from_json_str(&json).context("Failed to parse config")?
        }
        None => SolverConfig::default(),
    };

    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(mappers) = cli.mappers {
        config.mappers = mappers;
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(threads) = cli.threads {
        config.threads = Some(threads);
    }

    config.validate().context("Invalid solver configuration")?;
    Ok(config)
}

fn load_points(cli: &Cli, seeds: &[ClusterAggregate]) -> Result<Vec<Point>> {
    if let Some(path) = &cli.points {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read point file {}", path.display()))?;
        return parse_points(&json).context("Failed to parse point file");
    }

    let Some(first) = seeds.first() else {
        bail!("Seed file contains no clusters");
    };

    let points = match cli.radius {
        Some(radius) => {
            let centers: Vec<Point> = seeds.iter().map(|s| s.centroid.clone()).collect();
            let per_center = cli.count.div_ceil(centers.len());
            blob_points(cli.seed, &centers, per_center, radius)?
        }
        None => uniform_points(cli.seed, cli.count, first.centroid.dims(), cli.low, cli.high)?,
    };
    Ok(points)
}
