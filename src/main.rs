use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use road_network::{
    config::{Config, RoadTable},
    network::{
        table, DistanceScope, NetworkAnalyzer, NetworkBuilder, ReportRequest, RoadGraph,
        SelectionStrategy, ShortestPathEngine,
    },
    reports::{ReportFormat, ReportGenerator},
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "road-network")]
#[command(about = "Road network analysis: degrees, DFS/BFS orders and shortest distances")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// YAML road table to use instead of the built-in network
    #[arg(short, long, global = true)]
    roads: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    format: Option<ReportFormat>,

    /// Output file path (defaults to stdout)
    #[arg(short, long, global = true)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List nodes, roads and degrees
    Describe,

    /// Depth-first and breadth-first traversal orders
    Traverse {
        /// Source city (defaults to the configured source)
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Shortest distances from one city, or from every city
    ShortestPaths {
        /// Source city (defaults to the configured source)
        #[arg(short, long)]
        source: Option<String>,

        /// Compute distances from every city
        #[arg(long)]
        all: bool,

        /// Minimum-selection strategy
        #[arg(long, value_enum)]
        strategy: Option<SelectionStrategy>,
    },

    /// Full report: description, traversals and shortest distances
    Report {
        /// Source city (defaults to the configured source)
        #[arg(short, long)]
        source: Option<String>,

        /// Compute distances from every city
        #[arg(long)]
        all: bool,

        /// Minimum-selection strategy
        #[arg(long, value_enum)]
        strategy: Option<SelectionStrategy>,
    },

    /// Initialize configuration file
    Init {
        /// Configuration file path
        #[arg(default_value = "road-network.yml")]
        config_file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(&cli.log_level)?;

    info!("Starting road network analysis");

    if let Commands::Init { config_file, force } = &cli.command {
        return init_config(config_file, *force);
    }

    // Load configuration
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(roads) = &cli.roads {
        config.network.roads_file = Some(roads.clone());
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }

    let request = match &cli.command {
        Commands::Describe => ReportRequest::default(),
        Commands::Traverse { source } => {
            apply_source(&mut config, source.as_deref());
            ReportRequest {
                traversal_source: Some(config.network.source.clone()),
                distances: DistanceScope::Omit,
            }
        }
        Commands::ShortestPaths {
            source,
            all,
            strategy,
        } => {
            apply_source(&mut config, source.as_deref());
            apply_strategy(&mut config, *strategy);
            ReportRequest {
                traversal_source: None,
                distances: distance_scope(&config, *all),
            }
        }
        Commands::Report {
            source,
            all,
            strategy,
        } => {
            apply_source(&mut config, source.as_deref());
            apply_strategy(&mut config, *strategy);
            ReportRequest {
                traversal_source: Some(config.network.source.clone()),
                distances: distance_scope(&config, *all),
            }
        }
        Commands::Init { .. } => return Ok(()),
    };

    config.validate().context("Invalid configuration")?;

    let graph = load_network(&config)?;
    if !graph.contains(&config.network.source) {
        warn!(
            "Source {} is not part of the network; traversals will be empty and distances unreachable",
            config.network.source
        );
    }

    let analyzer = NetworkAnalyzer::new(
        graph,
        ShortestPathEngine::new(config.shortest_path.strategy),
    );
    let report = analyzer.report(&request);

    let content = ReportGenerator::new().generate(&report, config.report.format)?;
    output_report(&content, cli.output_file.as_deref())?;

    info!("Road network analysis completed");
    Ok(())
}

/// Initialize tracing with the specified log level
fn init_tracing(log_level: &str) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(log_level))
        .context("Failed to create env filter")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(env_filter)
        .init();

    Ok(())
}

/// Layer configuration: defaults, then the config file, then environment
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let mut config = Config::default();

    if let Some(path) = config_path {
        if path.exists() {
            info!("Loading configuration from: {:?}", path);
            config.merge_with(Config::load_from_file(path)?);
        } else {
            warn!("Configuration file not found: {:?}. Using defaults.", path);
        }
    }

    config.merge_with(Config::load_from_env()?);
    Ok(config)
}

/// Build the network from the configured roads file or the built-in table
fn load_network(config: &Config) -> Result<RoadGraph> {
    match &config.network.roads_file {
        Some(path) => {
            info!("Loading road table from: {:?}", path);
            let road_table = RoadTable::load_from_file(path)?;
            NetworkBuilder::from_roads(road_table.roads)
                .with_context(|| format!("Invalid road table: {:?}", path))
        }
        None => table::ukraine().context("Built-in road table is invalid"),
    }
}

fn apply_source(config: &mut Config, source: Option<&str>) {
    if let Some(source) = source {
        config.network.source = source.to_string();
    }
}

fn apply_strategy(config: &mut Config, strategy: Option<SelectionStrategy>) {
    if let Some(strategy) = strategy {
        config.shortest_path.strategy = strategy;
    }
}

fn distance_scope(config: &Config, all: bool) -> DistanceScope {
    if all || config.report.all_sources {
        DistanceScope::AllSources
    } else {
        DistanceScope::From(config.network.source.clone())
    }
}

/// Initialize configuration file
fn init_config(config_file: &Path, force: bool) -> Result<()> {
    info!("Initializing configuration file: {:?}", config_file);

    if config_file.exists() && !force {
        warn!("Configuration file already exists: {:?}", config_file);
        return Err(anyhow::anyhow!(
            "{:?} already exists; pass --force to overwrite it",
            config_file
        ));
    }

    Config::default().save_to_file(config_file)?;

    info!("Configuration file created successfully: {:?}", config_file);
    println!("Configuration file created: {:?}", config_file);
    println!("Edit this file to customize the analysis.");

    Ok(())
}

/// Write the rendered report to a file or stdout
fn output_report(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(file_path) = output_file {
        std::fs::write(file_path, content)
            .with_context(|| format!("Failed to write output to: {:?}", file_path))?;
        info!("Report written to: {:?}", file_path);
    } else {
        println!("{}", content);
    }

    Ok(())
}
