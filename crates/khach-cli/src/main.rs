//! CLI application for customer listing extraction.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{Settings, config, export, parse, store};

/// Turn customer listing notes into sorted, searchable records
#[derive(Parser)]
#[command(name = "khach")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for saved input text (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse listing lines and print the records
    Parse(parse::ParseArgs),

    /// Export records as a numbered CSV sheet
    Export(export::ExportArgs),

    /// Manage the saved input text
    Store(store::StoreArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity; stdout is reserved for records
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Parse(args) => parse::run(args, &Settings::load(config_path, cli.data_dir)?),
        Commands::Export(args) => export::run(args, &Settings::load(config_path, cli.data_dir)?),
        Commands::Store(args) => store::run(args, &Settings::load(config_path, cli.data_dir)?),
        Commands::Config(args) => config::run(args, config_path),
    }
}
