//! Navswing CLI - Command Line Operations for Swing Pricing
//!
//! This is the presentation layer of the swing pricing stack: it collects and
//! range-validates numeric inputs, invokes the `swing_core` kernel, and renders
//! the returned result record.
//!
//! # Commands
//!
//! - `navswing price` - Compute the swung NAV for one valuation
//! - `navswing demo` - Run the canonical illustrative scenarios

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Swing pricing CLI
#[derive(Parser)]
#[command(name = "navswing")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the swung NAV for one valuation
    Price(commands::price::PriceArgs),

    /// Run the canonical illustrative scenarios
    Demo,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price(args) => commands::price::run(&args),
        Commands::Demo => commands::demo::run(),
    }
}
