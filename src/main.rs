//! CoreBoard - core vocabulary board generator
//!
//! Builds AAC core boards for a topic and writes them as Open Board Format
//! JSON. Logs go to stderr; command output goes to stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coreboard::cli::{
    AllocateArgs, CategoriesArgs, CliResult, ConfigArgs, GenerateArgs, SuggestArgs,
};

/// CoreBoard - core vocabulary board generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a core board for a topic
    Generate(GenerateArgs),
    /// Show the slot allocation for a button count
    Allocate(AllocateArgs),
    /// List the core board categories
    Categories(CategoriesArgs),
    /// Suggest words and pictograms for a topic
    Suggest(SuggestArgs),
    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Generate(args) => args.execute(config),
        Commands::Allocate(args) => args.execute(),
        Commands::Categories(args) => args.execute(),
        Commands::Suggest(args) => args.execute(config),
        Commands::Config(args) => args.execute(config),
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
