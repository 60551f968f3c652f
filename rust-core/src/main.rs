use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn, Level};
use std::fs;
use std::path::PathBuf;

use quasi_tiler::tiling::{LogReporter, NullReporter};
use quasi_tiler::{build_many, AxisPair, LatticeSpace, QuasiTiling, ScanOrder, TilingConfig, ViewExtent};

#[derive(Parser)]
#[command(name = "quasi-tiler")]
#[command(about = "Quasiperiodic rhombus tilings from projected integer lattices")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(clap::Args)]
struct TilingArgs {
    /// JSON tiling configuration; overrides the flags below
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ambient lattice dimension D
    #[arg(short, long, default_value = "5")]
    dimension: usize,

    /// Symmetry order of the generator star (default: D for odd D, 2D for even D)
    #[arg(short, long)]
    order: Option<usize>,

    /// Side length of the square view, in tiling-plane units
    #[arg(short, long, default_value = "10.0")]
    extent: f64,

    /// Acceptance-window offset, one comma-separated value per axis
    #[arg(long, value_delimiter = ',')]
    offset: Option<Vec<f64>>,

    /// Sweep every axis from high to low
    #[arg(long)]
    descending: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one tiling and print its summary
    Generate {
        #[command(flatten)]
        tiling: TilingArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Print every tile record as JSON lines
        #[arg(long)]
        tiles: bool,

        /// Log every accepted lattice point
        #[arg(long)]
        trace_points: bool,
    },
    /// List the tile families of a lattice without building it
    Families {
        #[command(flatten)]
        tiling: TilingArgs,
    },
    /// Build symmetric tilings for several orders
    Batch {
        /// Symmetry orders; D is the order for odd orders and half of it for even ones
        #[arg(short, long, value_delimiter = ',', default_value = "5,7,8,12")]
        orders: Vec<usize>,

        /// Side length of the square view
        #[arg(short, long, default_value = "10.0")]
        extent: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    info!("Starting quasi-tiler v{}", quasi_tiler::VERSION);

    match cli.command {
        Commands::Generate {
            tiling,
            json,
            tiles,
            trace_points,
        } => generate(&tiling, json, tiles, trace_points),
        Commands::Families { tiling } => families(&tiling),
        Commands::Batch { orders, extent } => batch(&orders, extent),
    }
}

fn load_config(args: &TilingArgs) -> Result<TilingConfig> {
    if let Some(path) = &args.config {
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        return serde_json::from_str(&text).with_context(|| format!("Invalid configuration in {}", path.display()));
    }

    let mut builder = quasi_tiler::TilingBuilder::new()
        .with_dimension(args.dimension)
        .with_extent(args.extent, args.extent);
    if let Some(order) = args.order {
        builder = builder.with_symmetry(order);
    }
    if let Some(offset) = &args.offset {
        builder = builder.with_offset(offset.clone());
    }
    if args.descending {
        builder = builder.with_scan_order(ScanOrder::Descending);
    }
    Ok(builder.config())
}

fn generate(args: &TilingArgs, json: bool, tiles: bool, trace_points: bool) -> Result<()> {
    let config = load_config(args)?;
    info!(
        "Generating D = {} tiling over {} x {}",
        config.dimension, config.enumeration.extent.width, config.enumeration.extent.height
    );

    let tiling = if trace_points {
        QuasiTiling::build(config, &mut LogReporter::new(Level::Info))
    } else {
        QuasiTiling::build(config, &mut NullReporter)
    }
    .context("Tiling build failed")?;

    if tiles {
        for record in tiling.tile_records()? {
            println!("{}", serde_json::to_string(&record)?);
        }
        return Ok(());
    }

    let summary = tiling.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("dimension:  {}", summary.dimension);
    println!("vertices:   {}", summary.vertex_count);
    println!("tiles:      {} in {} families", summary.tile_count, summary.family_count);
    if let Some([min_x, min_y, max_x, max_y]) = summary.bounds {
        println!("bounds:     [{:.3}, {:.3}] x [{:.3}, {:.3}]", min_x, max_x, min_y, max_y);
    }
    for family in &summary.families {
        println!(
            "  family {:>3}  axes ({}, {})  angle {:>7.3}°  tiles {}",
            family.rank, family.axes[0], family.axes[1], family.angle_degrees, family.tiles
        );
    }
    Ok(())
}

fn families(args: &TilingArgs) -> Result<()> {
    let config = load_config(args)?;
    let space = LatticeSpace::new(config.dimension, &config.generators, &config.resolved_offset())
        .context("Invalid lattice configuration")?;

    let pairs: Vec<AxisPair> = space.admissible_pairs();
    println!("{} tile families for D = {}", pairs.len(), space.dimension());
    for pair in pairs {
        println!(
            "  family {:>3}  axes ({}, {})  angle {:>7.3}°",
            pair.rank(space.dimension()),
            pair.low(),
            pair.high(),
            space.rhombus_angle(pair).to_degrees()
        );
    }
    Ok(())
}

fn batch(orders: &[usize], extent: f64) -> Result<()> {
    let configs: Vec<TilingConfig> = orders
        .iter()
        .map(|&order| {
            let dimension = if order % 2 == 0 { order / 2 } else { order };
            TilingConfig::symmetric(dimension, order, ViewExtent::square(extent))
        })
        .collect();

    for (order, result) in orders.iter().zip(build_many(&configs)) {
        match result {
            Ok(tiling) => {
                let summary = tiling.summary();
                println!(
                    "order {:>3}  D = {:>2}  vertices {:>7}  tiles {:>7}  families {:>3}",
                    order, summary.dimension, summary.vertex_count, summary.tile_count, summary.family_count
                );
            }
            Err(error) => warn!("order {} rejected: {}", order, error),
        }
    }
    Ok(())
}
