//! Master control program for automated melon order fulfillment.
//!
//! Reads an order log (`<type>:<quantity>` per line) and runs every order
//! through the factory robots.

use clap::Parser;
use log::{error, warn};
use melon_factory::{FactoryConfig, FactoryReport, LogObserver, OrderLog, ShippingProcedure};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shipping_procedure")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Processes orders from an order log and controls the robots used to fulfill them")]
struct Cli {
    /// Order log to process
    logfile: PathBuf,

    /// JSON factory configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the factory RNG for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Pick attempts allowed per order before it fails
    #[arg(long)]
    limit: Option<u32>,

    /// Melons per box
    #[arg(long)]
    box_capacity: Option<usize>,

    /// Paint winter squash green before inspection
    #[arg(long)]
    repaint_squash: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn build_config(cli: &Cli) -> Result<FactoryConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => FactoryConfig::from_json_file(path)?,
        None => FactoryConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(limit) = cli.limit {
        config = config.with_melon_limit(limit);
    }
    if let Some(capacity) = cli.box_capacity {
        config = config.with_box_capacity(capacity);
    }
    if cli.repaint_squash {
        config = config.with_squash_repaint(true);
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<FactoryReport, Box<dyn std::error::Error>> {
    let config = build_config(cli)?;
    let mut procedure = ShippingProcedure::new(config)?;
    procedure.add_observer(Box::new(LogObserver));

    let mut report = FactoryReport::default();
    for entry in OrderLog::open(&cli.logfile)? {
        match entry {
            Ok(order) => {
                let outcome = procedure.fulfill(&order);
                report.record(&outcome);
            }
            Err(e) => warn!("Skipping order: {}", e),
        }
    }
    Ok(report)
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to encode report: {}", e);
                std::process::exit(1);
            }
        }
    }

    if report.failed > 0 {
        std::process::exit(2);
    }
}
