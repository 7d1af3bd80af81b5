//! Lotkeeper command-line interface
//!
//! Runs allocation scripts against a lot described by a configuration file.
//!
//! # Examples
//!
//! ```bash
//! # Show the initial status of a lot
//! lotkeeper status --config lot.toml
//!
//! # Run a script of park/leave/status commands
//! lotkeeper run --config lot.toml --script day.txt
//!
//! # Read commands from stdin and print metrics at the end
//! echo "park V1 van" | lotkeeper run --config lot.toml --metrics
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use lotkeeper::metrics::{export_metrics, init_metrics};
use lotkeeper::script::Command;
use lotkeeper::{LotConfig, ParkingLot};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Lotkeeper - typed slot allocation for parking facilities
#[derive(Parser, Debug)]
#[command(name = "lotkeeper")]
#[command(version = lotkeeper::VERSION)]
#[command(about = "Typed slot allocation for parking facilities", long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Log directory path
    #[arg(long, global = true, default_value = "logs", env = "LOTKEEPER_LOG_DIR")]
    log_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the status of a freshly built lot
    Status(LotArgs),

    /// Execute a command script
    Run(RunArgs),

    /// Show version
    Version,
}

/// Lot selection arguments
#[derive(Args, Debug)]
struct LotArgs {
    /// Lot configuration file (TOML, JSON, YAML)
    #[arg(short, long, env = "LOTKEEPER_CONFIG")]
    config: PathBuf,
}

/// Script execution arguments
#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    lot: LotArgs,

    /// Script file; reads stdin when omitted
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Print Prometheus metrics after the script
    #[arg(long)]
    metrics: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(&cli)?;

    match cli.command {
        Commands::Status(args) => status_command(args),
        Commands::Run(args) => run_command(args),
        Commands::Version => {
            println!("lotkeeper {}", lotkeeper::VERSION);
            Ok(())
        }
    }
}

/// Setup logging with rolling files and stderr output
///
/// stdout carries the JSON results, so console logs go to stderr.
fn setup_logging(cli: &Cli) -> anyhow::Result<()> {
    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("creating log directory {}", cli.log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &cli.log_dir, "lotkeeper.log");

    let log_level = cli
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(!cli.no_color),
        )
        .with(fmt::layer().with_writer(file_appender).with_ansi(false))
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();

    Ok(())
}

fn open_lot(args: &LotArgs) -> anyhow::Result<ParkingLot> {
    let config = LotConfig::load(&args.config)?;
    Ok(ParkingLot::from_config(&config))
}

/// Status command - print the initial occupancy summary
fn status_command(args: LotArgs) -> anyhow::Result<()> {
    let lot = open_lot(&args)?;
    println!("{}", serde_json::to_string_pretty(&lot.status())?);
    Ok(())
}

/// Run command - execute script lines and print one JSON result per line
fn run_command(args: RunArgs) -> anyhow::Result<()> {
    init_metrics();
    let lot = open_lot(&args.lot)?;

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(io::BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut executed = 0usize;
    for (number, line) in reader.lines().enumerate() {
        let line = line.context("reading script")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                error!(line = number + 1, "Skipping malformed command: {}", e);
                continue;
            }
        };

        let result = command.execute(&lot)?;
        println!("{}", serde_json::to_string(&result)?);
        executed += 1;
    }

    info!(commands = executed, parked = lot.parked_count(), "Script complete");

    if args.metrics {
        print!("{}", export_metrics());
    }

    Ok(())
}
