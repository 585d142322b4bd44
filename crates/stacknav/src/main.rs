//! stacknav CLI - documentation section navigation.
//!
//! Provides commands for:
//! - `resolve`: Print the active section for one or more paths
//! - `chips`: Show the full navigation state for a path
//! - `sections`: List the configured sections
//! - `check`: Audit the section table for ambiguous or misplaced paths

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ChipsArgs, ResolveArgs, SectionsArgs};
use output::Output;

/// stacknav - documentation section navigation.
#[derive(Parser)]
#[command(name = "stacknav", version, about)]
struct Cli {
    /// Enable verbose output (config discovery and audit logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the active section for each path.
    Resolve(ResolveArgs),
    /// Show navbar, chips and sidebar state for a path.
    Chips(ChipsArgs),
    /// List configured sections.
    Sections(SectionsArgs),
    /// Audit the section table.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Resolve(args) => args.execute(),
        Commands::Chips(args) => args.execute(),
        Commands::Sections(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
